use env_logger::{Builder, Env};

use crate::constants::LOG_LEVEL;

/// Loads `.env` and installs `env_logger` as the `log` backend.
///
/// `RUST_LOG` wins over `LOG_LEVEL` when both are set. Calling this more than
/// once is harmless; later calls report that a logger is already installed.
pub fn init_logger() -> Result<(), log::SetLoggerError> {
    dotenv::dotenv().ok();

    let env = Env::default().default_filter_or((*LOG_LEVEL).as_str());
    Builder::from_env(env).format_timestamp_millis().try_init()
}
