use std::fmt;
use std::str::FromStr;

/// Display language for node names, input labels and selection messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    Zh,
    #[default]
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Zh, Locale::En];

    /// Resolve a locale tag such as `zh_CN.UTF-8` or `en-US`.
    ///
    /// Anything that does not start with `zh` is English.
    pub fn from_tag(tag: &str) -> Locale {
        if tag.trim().starts_with("zh") { Locale::Zh } else { Locale::En }
    }

    /// Short language code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Locale::from_tag(s))
    }
}
