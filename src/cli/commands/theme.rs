use super::{audit, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Theme;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme { mode } = cmd {
        let mut session = open_session(cfg)?;

        let Some(mode) = mode else {
            info(format!("Current theme: {}", session.theme().as_str()));
            return Ok(());
        };

        let theme = if mode.trim().eq_ignore_ascii_case("toggle") {
            session.toggle_theme()
        } else {
            let theme = Theme::parse(mode)?;
            session.set_theme(theme);
            theme
        };

        let msg = format!("Theme set to {}", theme.as_str());
        success(&msg);
        audit(&session, "theme", theme.as_str(), &msg);
    }

    Ok(())
}
