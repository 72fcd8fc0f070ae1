/// ANSI color helper utilities for terminal output.
use crate::models::{LogKind, Theme};

pub const RESET: &str = "\x1b[0m";
pub const REVERSE: &str = "\x1b[7m";
pub const UNDERLINE: &str = "\x1b[4m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

pub const BRIGHT_RED: &str = "\x1b[91m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
pub const BRIGHT_BLUE: &str = "\x1b[94m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";

/// Colors for one theme. Dark terminals get the bright variants.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: &'static str,
    pub day_start: &'static str,
    pub day_end: &'static str,
    pub leave: &'static str,
    pub back: &'static str,
    pub warn: &'static str,
    pub muted: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            Self {
                accent: BRIGHT_BLUE,
                day_start: BRIGHT_GREEN,
                day_end: BRIGHT_RED,
                leave: BRIGHT_YELLOW,
                back: BRIGHT_CYAN,
                warn: BRIGHT_YELLOW,
                muted: GREY,
            }
        } else {
            Self {
                accent: BLUE,
                day_start: GREEN,
                day_end: RED,
                leave: YELLOW,
                back: CYAN,
                warn: YELLOW,
                muted: GREY,
            }
        }
    }

    /// Workday punches are green/red, leaving is amber, returning is sky.
    pub fn for_kind(&self, kind: LogKind) -> &'static str {
        match kind {
            LogKind::WorkStart => self.day_start,
            LogKind::WorkEnd => self.day_end,
            LogKind::BreakStart | LogKind::ClientStart => self.leave,
            LogKind::BreakEnd | LogKind::ClientEnd => self.back,
        }
    }

    pub fn paint(&self, color: &str, value: &str) -> String {
        format!("{color}{value}{RESET}")
    }

    /// Zero durations are greyed out.
    pub fn duration(&self, value: &str) -> String {
        if value == "00:00:00" {
            self.paint(self.muted, value)
        } else {
            self.paint(self.accent, value)
        }
    }
}
