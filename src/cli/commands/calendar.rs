use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{CalendarIndex, month_grid};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{Palette, RESET, REVERSE, UNDERLINE};
use crate::utils::date::{month_name, today};
use chrono::{Datelike, NaiveDate};

const WEEK_HEADER: &str = "Su Mo Tu We Th Fr Sa";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { year } = cmd {
        let session = open_session(cfg)?;
        let palette = Palette::for_theme(session.theme());
        let index = session.calendar();
        let today = today();
        let year = year.unwrap_or(today.year());

        header(year);

        for month in 1..=12 {
            println!("{}", palette.paint(palette.accent, month_name(month)));
            println!("{}", palette.paint(palette.muted, WEEK_HEADER));
            for week in render_month(&index, &palette, year, month, today) {
                println!("{week}");
            }
            println!();
        }

        let punched = index.days_in_year(year);
        if punched == 0 {
            info(format!("No punches recorded in {}.", year));
        } else {
            info(format!("{} day(s) with punches in {}.", punched, year));
        }

        for day in index.odd_days().into_iter().filter(|d| d.year() == year) {
            warning(format!(
                "Odd punch count on {} ({} punches): a punch may be missing.",
                day,
                index.day(day).len()
            ));
        }
    }

    Ok(())
}

/// Week lines of one month. Punched days are highlighted, days with an odd
/// punch count use the warning color, today is underlined.
fn render_month(
    index: &CalendarIndex,
    palette: &Palette,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Vec<String> {
    let cells = month_grid(year, month);

    cells
        .chunks(7)
        .map(|week| {
            week.iter()
                .map(|cell| match cell {
                    None => "  ".to_string(),
                    Some(day) => {
                        let text = format!("{:>2}", day);
                        let Some(date) = NaiveDate::from_ymd_opt(year, month, *day) else {
                            return text;
                        };

                        let mut styled = if index.is_odd(date) {
                            palette.paint(&format!("{REVERSE}{}", palette.warn), &text)
                        } else if index.has_entries(date) {
                            palette.paint(&format!("{REVERSE}{}", palette.accent), &text)
                        } else {
                            text
                        };

                        if date == today {
                            styled = format!("{UNDERLINE}{styled}{RESET}");
                        }
                        styled
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
