//! Zap Command entry point
//!
//! Headless runner: plays one match with the demo autopilot in real time and
//! prints the HUD line each second.
//!
//! Usage: `zap-command [CONFIG.json] [--fast] [--json]`
//! - `--fast`: don't sleep between ticks
//! - `--json`: print the final snapshot as JSON

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Zap Command (headless) starting...");

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web
}

#[cfg(not(target_arch = "wasm32"))]
fn run(args: Vec<String>) -> Result<(), zap_command::ConfigError> {
    use std::time::{Duration, Instant};

    use zap_command::autopilot::Autopilot;
    use zap_command::game::Frame;
    use zap_command::sim::{Banner, GameEvent};
    use zap_command::{Game, GameConfig};

    let fast = args.iter().any(|a| a == "--fast");
    let json = args.iter().any(|a| a == "--json");
    let config = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut game = Game::new(config)?;
    let mut pilot = Autopilot::default();

    println!("{}", Banner::Begin.text());
    game.begin();
    println!("{}", game.snapshot().hud);

    let tick = Duration::from_millis(game.config().tick_interval_ms as u64);
    let mut last = Instant::now();
    let mut kills = 0u32;
    let mut landings = 0u32;

    loop {
        if let Some(target) = pilot.act(game.state(), game.config()) {
            game.queue_fire(target.x, target.y);
        }

        let frames = if fast {
            game.step().into_iter().collect::<Vec<_>>()
        } else {
            std::thread::sleep(Duration::from_millis(game.time_to_next_tick() as u64).min(tick));
            let now = Instant::now();
            let elapsed = now.duration_since(last).as_millis() as u32;
            last = now;
            game.update(elapsed)
        };

        for frame in &frames {
            for event in frame.events() {
                match event {
                    GameEvent::MissileDestroyed { .. } => kills += 1,
                    GameEvent::MissileLanded { .. } => landings += 1,
                    GameEvent::SecondElapsed { .. } => println!("{}", frame.snapshot().hud),
                    _ => {}
                }
            }
            if let Frame::GameOver { snapshot, .. } = frame {
                println!("{}", snapshot.hud);
                println!("{}", Banner::GameOver.text());
                log::info!("{} missiles destroyed, {} landed", kills, landings);
                if json {
                    match serde_json::to_string_pretty(snapshot) {
                        Ok(s) => println!("{s}"),
                        Err(e) => log::warn!("Failed to serialize snapshot: {e}"),
                    }
                }
            }
        }

        if game.is_over() {
            break;
        }
    }

    Ok(())
}
