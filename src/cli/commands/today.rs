use super::{open_session, print_punch_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::core::status::describe;
use crate::core::summary::format_duration;
use crate::errors::AppResult;
use crate::storage::Storage;
use crate::ui::messages::header;
use crate::utils::colors::Palette;
use crate::utils::formatting::{pad_right, separator};
use chrono::{DateTime, Local};
use std::thread;
use std::time::Duration;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { watch, ticks } = cmd {
        let session = open_session(cfg)?;

        if !*watch {
            render(&session, cfg, Local::now());
            return Ok(());
        }

        // One render per second; an open day grows with the clock.
        let mut rendered = 0u64;
        loop {
            print!("{CLEAR_SCREEN}");
            render(&session, cfg, Local::now());
            rendered += 1;

            if ticks.is_some_and(|max| rendered >= max) {
                break;
            }
            thread::sleep(Duration::from_secs(1));
        }
    }

    Ok(())
}

pub fn render<S: Storage>(session: &Session<S>, cfg: &Config, now: DateTime<Local>) {
    let palette = Palette::for_theme(session.theme());
    let summary = session.today_summary(now);
    let entries = session.today_entries(now);

    let title = if cfg.show_weekday {
        now.format("Workday summary %Y-%m-%d (%A) %H:%M:%S").to_string()
    } else {
        now.format("Workday summary %Y-%m-%d %H:%M:%S").to_string()
    };
    header(title);

    println!("Status        : {}", describe(session.current_status()));
    for (label, ms) in [
        ("Worked", summary.worked_ms),
        ("Total break", summary.break_ms),
        ("Client time", summary.client_ms),
    ] {
        println!(
            "{}: {}",
            pad_right(label, 14),
            palette.duration(&format_duration(ms))
        );
    }

    if summary.show_warning {
        println!();
        println!(
            "{}",
            palette.paint(
                palette.warn,
                "⚠️  Attention: the total break was shorter than the legal minimum of 1 hour."
            )
        );
    }

    println!();
    println!("{}", separator(&cfg.separator_char, 40));

    if entries.is_empty() {
        println!("{}", palette.paint(palette.muted, "No punches today."));
        return;
    }

    print_punch_table(&palette, &entries, true);
}
