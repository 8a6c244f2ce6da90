//! Interactive prize draw console.
//!
//! Reads one command per line from stdin. Logs go to stderr and are
//! controlled with `RUST_LOG`.

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if std::env::args().any(|a| a == "--settings") {
        println!("{}", lottery_desk_lib::settings_help());
        return Ok(());
    }

    tracing::info!("Starting lottery desk");
    lottery_desk_lib::run()
}
