use super::open_session;
use crate::config::Config;
use crate::core::status::{available_actions, describe};
use crate::errors::AppResult;
use crate::utils::colors::Palette;
use chrono::Local;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_session(cfg)?;
    let palette = Palette::for_theme(session.theme());
    let now = Local::now();
    let status = session.current_status();

    println!("{}", palette.paint(palette.accent, &now.format("%H:%M:%S").to_string()));
    println!("{}", now.format("%A, %d %B %Y"));
    println!();

    let since = match session.log().entries().last() {
        Some(last) if status.is_some() => format!(" (since {})", last.time_str()),
        _ => String::new(),
    };
    println!("Status : {}{}", describe(status), since);

    let actions: Vec<String> = available_actions(status)
        .into_iter()
        .map(|k| palette.paint(palette.for_kind(k), k.code()))
        .collect();
    println!("Punch  : {}", actions.join("  "));

    Ok(())
}
