pub mod commands;
pub mod config;
pub mod console;
pub mod render;

use draw_core::{Capabilities, Lottery, RngSource, Session};

use config::{AppConfig, SettingsManager};
use console::Console;

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}

/// Read settings from `.env` and the environment.
pub fn init_config() -> Result<AppConfig, anyhow::Error> {
    load_dotenv();
    let sm = SettingsManager::from_env();
    let config = AppConfig::load(&sm)?;
    tracing::info!(
        min = config.range.min(),
        max = config.range.max(),
        history_limit = ?config.history_limit,
        global_limit = ?config.global_limit.map(|l| l.get()),
        prizes = config.prizes.len(),
        "Settings loaded"
    );
    Ok(config)
}

/// Build the lottery described by `config`, seeding prizes in listed order.
pub fn build_lottery(config: &AppConfig, caps: Capabilities) -> Result<Lottery, anyhow::Error> {
    let session = Session::new(config.session_config()).apply_global_limit(config.global_limit);
    let mut lottery = Lottery::new(session, caps);
    // Added prizes go to the front, so seed in reverse to keep the listed order.
    for (name, capacity) in config.prizes.iter().rev() {
        lottery.add_prize(name, *capacity)?;
    }
    Ok(lottery)
}

pub fn system_capabilities(seed: Option<u64>) -> Capabilities {
    match seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded random source");
            Capabilities::system().with_random(RngSource::seeded(seed))
        }
        None => Capabilities::system(),
    }
}

/// Every recognised setting with its default and meaning.
pub fn settings_help() -> String {
    config::defaults::setting_keys()
        .filter_map(|key| config::defaults::DEFAULT_SETTINGS.get(key))
        .map(|def| {
            let default = format!("{:?}", def.default);
            format!("{:<34} default {default:<6} {}", def.key, def.description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the console over stdin/stdout until EOF or `quit`.
pub fn run() -> Result<(), anyhow::Error> {
    let config = init_config()?;
    let lottery = build_lottery(&config, system_capabilities(config.seed))?;
    let mut console = Console::new(lottery, config.timezone_offset_minutes);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console.run(stdin.lock(), stdout.lock())?;

    tracing::info!(
        draws = console.lottery().session().history().len(),
        "Session finished"
    );
    Ok(())
}
