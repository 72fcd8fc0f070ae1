use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::storage::SqliteStorage;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut storage = SqliteStorage::open(&cfg.database)?;
        LogLogic::print_log(storage.pool())?;
    }

    Ok(())
}
