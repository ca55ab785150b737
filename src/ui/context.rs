use crate::presentation::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Rendering decisions for one run, resolved from flags and the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(cli_color, detect_capabilities())
    }

    pub fn from_caps(cli_color: Option<ColorWhen>, caps: TerminalCapabilities) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            caps,
            color,
            unicode: caps.supports_unicode,
        }
    }

    /// Plain ASCII output with no styling.
    pub fn plain() -> Self {
        Self {
            caps: TerminalCapabilities {
                stdout_tty: false,
                stdin_tty: false,
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
            },
            color: false,
            unicode: false,
        }
    }

    /// Whether prompts can use the interactive line editor.
    pub fn interactive_input(&self) -> bool {
        self.caps.stdin_tty && self.caps.stdout_tty
    }
}
