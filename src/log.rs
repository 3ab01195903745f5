// src/log.rs
//
// Console logging. Lines are stamped with time since start, e.g.
//   1.204s  INFO Downloaded 'Icon_Emoji_Paimon's_Paintings_1_Amber_1.png'

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

/// Default level for a given number of `-v` flags. `RUST_LOG` wins when set.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
}
