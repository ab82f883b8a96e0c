use crate::model::cell::Cell;
use crate::model::grid::Grid;
use crate::model::position::Position;
use std::cmp::{max, min};

/// Returns the positions adjacent to `position`, diagonals included, that lie
/// inside a `rows` x `columns` grid. The 3x3 block around the position is
/// clipped to the grid, so corners get 3 neighbours, edges 5 and the interior 8.
/// Nothing wraps around.
pub fn neighbourhood(
    rows: usize,
    columns: usize,
    position: Position,
) -> impl Iterator<Item = Position> {
    let (rows, columns) = (rows as i32, columns as i32);
    let first_row = max(0, position.row - 1);
    let last_row = min(rows - 1, position.row + 1);
    let first_column = max(0, position.column - 1);
    let last_column = min(columns - 1, position.column + 1);
    (first_row..=last_row)
        .flat_map(move |row| (first_column..=last_column).map(move |column| (row, column)))
        .map(Position::from)
        .filter(move |neighbour| *neighbour != position)
}

pub fn alive_neighbours(grid: &Grid<Cell>, position: Position) -> u8 {
    neighbourhood(grid.rows(), grid.columns(), position)
        .filter(|neighbour| grid[neighbour].is_alive())
        .count() as u8
}

/// The number of alive neighbours of every cell
pub fn neighbour_counts(grid: &Grid<Cell>) -> Grid<u8> {
    grid.map(|position, _| alive_neighbours(grid, position))
}

/// Conway's rule: birth on 3, survival on 2 or 3, death otherwise
pub fn next_state(cell: Cell, alive_neighbours: u8) -> Cell {
    match (cell.is_alive(), alive_neighbours) {
        (_, 3) => Cell::ALIVE,
        (true, 2) => Cell::ALIVE,
        _ => Cell::DEAD,
    }
}

/// Computes the next generation.
///
/// Every cell is decided from the same frozen snapshot, the input, and the result
/// is written into a freshly allocated grid. The input is never modified.
pub fn step(grid: &Grid<Cell>) -> Grid<Cell> {
    let counts = neighbour_counts(grid);
    grid.map(|position, &cell| next_state(cell, counts[&position]))
}

#[cfg(test)]
mod tests {
    use crate::model::cell::Cell;
    use crate::model::engine::{
        alive_neighbours, neighbour_counts, neighbourhood, next_state, step,
    };
    use crate::model::grid::Grid;
    use crate::model::position::Position;
    use indoc::indoc;

    fn grid(string: &str) -> Grid<Cell> {
        Grid::from_string(string).unwrap()
    }

    mod neighbourhood {
        use super::*;
        use proptest::proptest;

        #[test]
        fn corners_edges_and_interior() {
            let count = |row, column| neighbourhood(4, 5, Position::new(row, column)).count();
            assert_eq!(count(0, 0), 3);
            assert_eq!(count(0, 4), 3);
            assert_eq!(count(3, 0), 3);
            assert_eq!(count(3, 4), 3);
            assert_eq!(count(0, 2), 5);
            assert_eq!(count(3, 1), 5);
            assert_eq!(count(2, 0), 5);
            assert_eq!(count(1, 4), 5);
            assert_eq!(count(1, 1), 8);
            assert_eq!(count(2, 3), 8);
        }

        #[test]
        fn top_left_corner_has_no_wrapped_neighbours() {
            let neighbours: Vec<Position> = neighbourhood(8, 8, Position::new(0, 0)).collect();
            assert_eq!(
                neighbours,
                vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
            );
        }

        #[test]
        fn single_cell_and_single_row() {
            assert_eq!(neighbourhood(1, 1, Position::new(0, 0)).count(), 0);
            assert_eq!(neighbourhood(1, 5, Position::new(0, 0)).count(), 1);
            assert_eq!(neighbourhood(1, 5, Position::new(0, 2)).count(), 2);
        }

        proptest! {
            #[test]
            fn counts_depend_only_on_boundary_contact(
                rows in 2usize..40,
                columns in 2usize..40,
                r in 0usize..40,
                c in 0usize..40,
            ) {
                let (r, c) = (r % rows, c % columns);
                let on_vertical_edge = r == 0 || r == rows - 1;
                let on_horizontal_edge = c == 0 || c == columns - 1;
                let expected = match (on_vertical_edge, on_horizontal_edge) {
                    (true, true) => 3,
                    (true, false) | (false, true) => 5,
                    (false, false) => 8,
                };
                let neighbours: Vec<Position> =
                    neighbourhood(rows, columns, Position::from((r, c))).collect();
                assert_eq!(neighbours.len(), expected);
                for neighbour in neighbours {
                    assert!((neighbour.row - r as i32).abs() <= 1);
                    assert!((neighbour.column - c as i32).abs() <= 1);
                    assert_ne!(neighbour, Position::from((r, c)));
                }
            }
        }
    }

    mod rule {
        use super::*;

        #[test]
        fn exhaustive_rule_table() {
            for count in 0..=8u8 {
                assert_eq!(next_state(Cell::DEAD, count).is_alive(), count == 3);
                assert_eq!(
                    next_state(Cell::ALIVE, count).is_alive(),
                    count == 2 || count == 3
                );
            }
        }
    }

    mod counting {
        use super::*;

        #[test]
        fn counts_exclude_the_cell_itself() {
            let grid = grid(indoc! {"
                ▉▉▉
                ▉▉▉
                ▉▉▉"
            });
            assert_eq!(alive_neighbours(&grid, Position::new(1, 1)), 8);
            assert_eq!(alive_neighbours(&grid, Position::new(0, 0)), 3);
            assert_eq!(alive_neighbours(&grid, Position::new(0, 1)), 5);
        }

        #[test]
        fn counts_over_a_glider() {
            let grid = grid(indoc! {"
                ·▉··
                ··▉·
                ▉▉▉·"
            });
            let counts = neighbour_counts(&grid);
            let expected = Grid::from_rows(vec![
                vec![1, 1, 2, 1],
                vec![3, 5, 3, 2],
                vec![1, 3, 2, 2],
            ])
            .unwrap();
            assert_eq!(counts, expected);
        }
    }

    mod step {
        use super::*;
        use crate::model::store::generate_random;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        #[test]
        fn block_is_a_still_life() {
            let block = grid(indoc! {"
                ······
                ······
                ··▉▉··
                ··▉▉··
                ······
                ······"
            });
            assert_eq!(step(&block), block);
        }

        #[test]
        fn blinker_oscillates() {
            let horizontal = grid(indoc! {"
                ·····
                ·····
                ·▉▉▉·
                ·····
                ·····"
            });
            let vertical = grid(indoc! {"
                ·····
                ··▉··
                ··▉··
                ··▉··
                ·····"
            });
            let next = step(&horizontal);
            assert_eq!(next, vertical, "Expected:\n{vertical}\nActual:\n{next}");
            assert_eq!(step(&next), horizontal);
        }

        #[test]
        fn glider_moves_down_and_right() {
            let start = grid(indoc! {"
                ·▉····
                ··▉···
                ▉▉▉···
                ······
                ······
                ······"
            });
            let expected = grid(indoc! {"
                ······
                ··▉···
                ···▉··
                ·▉▉▉··
                ······
                ······"
            });
            let actual = (0..4).fold(start, |grid, _| step(&grid));
            assert_eq!(actual, expected, "Expected:\n{expected}\nActual:\n{actual}");
        }

        #[test]
        fn boundary_does_not_wrap() {
            // on a torus (1, 2) would see the left column and be born too
            let edge = grid(indoc! {"
                ▉··
                ▉··
                ▉··"
            });
            let expected = grid(indoc! {"
                ···
                ▉▉·
                ···"
            });
            assert_eq!(step(&edge), expected);
        }

        #[test]
        fn corner_block_survives() {
            let corner = grid(indoc! {"
                ▉▉·
                ▉▉·
                ···"
            });
            assert_eq!(step(&corner), corner);
        }

        #[test]
        fn empty_grid_is_a_fixed_point() {
            for (rows, columns) in [(0, 0), (0, 5), (5, 0), (1, 1), (7, 3), (100, 100)] {
                let empty = Grid::new(rows, columns, Cell::DEAD);
                let next = step(&empty);
                assert_eq!(next, empty);
                assert_eq!(next.rows(), rows);
                assert_eq!(next.columns(), columns);
            }
        }

        #[test]
        fn step_does_not_mutate_its_input() {
            let mut rng = StdRng::seed_from_u64(7);
            let grid = generate_random(30, 40, &mut rng);
            let before = grid.clone();
            let next = step(&grid);
            assert_eq!(grid, before);
            assert_ne!(next, grid);
        }
    }
}
