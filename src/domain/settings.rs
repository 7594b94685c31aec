use serde::Deserialize;

use crate::domain::AppError;
use crate::domain::locale::Locale;

/// Contents of an `angle-prompts.toml` settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub locale: LocaleSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleSettings {
    /// Locale tag, e.g. `zh_CN` or `en`.
    pub lang: Option<String>,
}

impl Settings {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// Locale pinned by the settings file, if any.
    pub fn locale(&self) -> Option<Locale> {
        self.locale.lang.as_deref().map(Locale::from_tag)
    }
}
