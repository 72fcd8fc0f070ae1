use super::{open_session, print_punch_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::has_odd_punch_count;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::Palette;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date } = cmd {
        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let session = open_session(cfg)?;
        let palette = Palette::for_theme(session.theme());
        let entries = session.entries_on(d);

        let title = if cfg.show_weekday {
            d.format("Punches for %d/%m/%Y (%A)").to_string()
        } else {
            d.format("Punches for %d/%m/%Y").to_string()
        };
        header(title);

        if entries.is_empty() {
            info("No punches for this date.");
            return Ok(());
        }

        if has_odd_punch_count(&entries) {
            warning(format!(
                "Odd punch count for this day ({}). Check whether an entry or exit punch is missing.",
                entries.len()
            ));
        }

        print_punch_table(&palette, &entries, false);
    }

    Ok(())
}
