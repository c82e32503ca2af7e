mod config;

use anyhow::Context;
use config::AppConfig;
use log::LevelFilter;
use pinchvol_engine::{Engine, validate_config};
use pinchvol_messages::Command;
use std::io::Write;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "{:<5} - {} | {}",
                record.level(),
                record.module_path().unwrap_or(""),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .filter_module("pinchvol_engine", LevelFilter::Info)
        .filter_module("pinchvol_ui", LevelFilter::Debug)
        .filter_module("eframe", LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Optional JSON config path as the only CLI argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    // Bad thresholds are fatal before anything starts
    validate_config(&config.control).context("Invalid control configuration")?;
    let devices = config.build_devices()?;
    let run_state = config.initial_run_state();
    let mirror = config.mirror;
    let control = config.control;

    // Commands are rare; events are bounded so the engine waits for the UI
    let (cmd_tx, cmd_rx) = flume::unbounded();
    let (event_tx, event_rx) = flume::bounded(1);

    // Spawn engine thread
    let engine_handle = std::thread::spawn(move || -> anyhow::Result<()> {
        let engine = Engine::new(cmd_rx, event_tx, control, devices)?
            .with_run_state(run_state)
            .with_mirror(mirror);
        engine.run()
    });

    // Run UI on main thread (blocking)
    pinchvol_ui::run(event_rx, cmd_tx.clone())?;

    // UI has exited - send stop command to engine
    let _ = cmd_tx.send(Command::Stop);

    // Wait for engine thread to finish
    engine_handle
        .join()
        .map_err(|_| anyhow::anyhow!("Engine thread panicked"))??;

    Ok(())
}
