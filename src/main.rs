#[cfg(not(target_arch = "wasm32"))]
fn main() -> lifegrid::Result<()> {
    use lifegrid::session::Session;
    use lifegrid::LifeConfig;
    use std::thread::sleep;

    env_logger::init();

    let config = LifeConfig {
        rows: 24,
        columns: 64,
        ..LifeConfig::default()
    };
    let mut session = Session::new(&config);
    session.start()?;
    for _ in 0..40 {
        println!("{}", session.snapshot());
        println!();
        sleep(config.tick_interval());
    }
    session.stop();

    let view = session.view();
    println!(
        "Stopped at generation {} with {} cells alive",
        view.generation, view.population
    );
    Ok(())
}

// The browser build drives everything through `lifegrid::wasm::Life`
#[cfg(target_arch = "wasm32")]
fn main() {}
