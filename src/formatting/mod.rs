use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    /// Use box-drawing characters and `…`; ASCII otherwise
    pub unicode: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, unicode: bool) -> Self {
        Self { color, unicode }
    }

    /// Start from `base` and apply the color conventions of the environment.
    pub fn from_env(base: ColorMode) -> Self {
        let mut config = Self {
            color: base,
            ..Self::default()
        };

        // NO_COLOR per no-color.org
        if env::var_os("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// ASCII-only output without colors
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            unicode: false,
        }
    }
}

/// Styling applied to terminal list output.
pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn current_page(&self, page: usize) -> String;
    fn page(&self, page: usize) -> String;
    fn ellipsis(&self) -> String;
    fn dim(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn unicode(&self) -> bool;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn styled(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        self.styled(text, |t| t.blue().bold())
    }

    fn current_page(&self, page: usize) -> String {
        self.styled(&format!("[{}]", page), |t| t.cyan().bold())
    }

    fn page(&self, page: usize) -> String {
        page.to_string()
    }

    fn ellipsis(&self) -> String {
        let glyph = if self.config.unicode { "…" } else { "..." };
        self.styled(glyph, |t| t.dimmed())
    }

    fn dim(&self, text: &str) -> String {
        self.styled(text, |t| t.dimmed())
    }

    fn warning(&self, text: &str) -> String {
        self.styled(text, |t| t.yellow())
    }

    fn unicode(&self) -> bool {
        self.config.unicode
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn current_page(&self, page: usize) -> String {
        format!("[{}]", page)
    }

    fn page(&self, page: usize) -> String {
        page.to_string()
    }

    fn ellipsis(&self) -> String {
        "...".to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn unicode(&self) -> bool {
        false
    }
}

/// Formatter matching `config`.
pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config.color == ColorMode::Never && !config.unicode {
        Box::new(PlainFormatter)
    } else {
        Box::new(ColoredFormatter::new(config))
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
