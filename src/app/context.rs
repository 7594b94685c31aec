use crate::domain::{Locale, Settings};
use crate::ports::LocaleSource;

/// Application context holding dependencies for command execution.
pub struct AppContext<L: LocaleSource> {
    locale_source: L,
    settings: Settings,
}

impl<L: LocaleSource> AppContext<L> {
    /// Create a new application context.
    pub fn new(locale_source: L, settings: Settings) -> Self {
        Self { locale_source, settings }
    }

    /// Resolve the active locale: explicit override, then settings, then the locale source.
    pub fn locale(&self, override_tag: Option<&str>) -> Locale {
        if let Some(tag) = override_tag {
            return Locale::from_tag(tag);
        }
        if let Some(locale) = self.settings.locale() {
            return locale;
        }
        self.locale_source.locale_tag().map(|tag| Locale::from_tag(&tag)).unwrap_or_default()
    }
}
