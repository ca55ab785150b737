use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the guide's console UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✅";
    pub const ROCKET: &str = "🚀";
    pub const TRUCK: &str = "🚚";
    pub const STAR: &str = "🌟";
    pub const LIST: &str = "📋";
    pub const TARGET: &str = "🎯";
    pub const STEP: &str = "📍";
    pub const GLOBE: &str = "🌐";
    pub const WAIT: &str = "⏳";
    pub const LINK: &str = "🔗";
    pub const PARTY: &str = "🎉";
    pub const TEST: &str = "🧪";
    pub const DOCUMENT: &str = "📄";
    pub const HELP: &str = "🆘";
    pub const BULLET: &str = "•";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ROCKET: &str = ">>";
    pub const TRUCK: &str = "[CARGODHAM]";
    pub const STAR: &str = "*";
    pub const LIST: &str = "[LIST]";
    pub const TARGET: &str = "[GUIDE]";
    pub const STEP: &str = "[STEP]";
    pub const GLOBE: &str = "[WEB]";
    pub const WAIT: &str = "[..]";
    pub const LINK: &str = "[LINK]";
    pub const PARTY: &str = "[DONE]";
    pub const TEST: &str = "[TEST]";
    pub const DOCUMENT: &str = "[FILE]";
    pub const HELP: &str = "[HELP]";
    pub const BULLET: &str = "*";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
    pub const RULE_HEAVY: &str = "═";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
    pub const RULE_HEAVY: &str = "=";
}

// ----------------------------------------------------------------------------
// GuideTheme - dialoguer theme for prompts
// ----------------------------------------------------------------------------

/// Custom theme for dialoguer prompts using the guide's design tokens.
///
/// Wraps `ColorfulTheme` when color is enabled and `SimpleTheme` otherwise.
/// Prompt text already carries its own icon, so only the input prompt
/// formatting is overridden.
pub struct GuideTheme {
    color: bool,
    colorful: dialoguer::theme::ColorfulTheme,
}

impl GuideTheme {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            colorful: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    pub fn color(&self) -> bool {
        self.color
    }
}

impl Theme for GuideTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        if self.color {
            self.colorful.format_prompt(f, prompt)
        } else {
            dialoguer::theme::SimpleTheme.format_prompt(f, prompt)
        }
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        if self.color {
            self.colorful.format_error(f, err)
        } else {
            dialoguer::theme::SimpleTheme.format_error(f, err)
        }
    }

    // Plain `prompt ` keeps the operator's answer on the same line as the
    // question, with no default hint (defaults are resolved by the guide).
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{} ", prompt)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{} {}", prompt, sel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_prompt_has_no_default_hint() {
        let theme = GuideTheme::new(false);
        let mut out = String::new();
        theme
            .format_input_prompt(&mut out, "Enter URL:", Some("ignored"))
            .unwrap();
        assert_eq!(out, "Enter URL: ");
    }

    #[test]
    fn input_selection_echoes_answer() {
        let theme = GuideTheme::new(true);
        let mut out = String::new();
        theme
            .format_input_prompt_selection(&mut out, "(y/N):", "y")
            .unwrap();
        assert_eq!(out, "(y/N): y");
    }
}
