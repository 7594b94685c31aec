use crate::ports::LocaleSource;

/// Environment variables consulted for the locale, highest priority first.
pub const LOCALE_ENV_VARS: [&str; 4] = ["LC_ALL", "LC_CTYPE", "LANG", "LANGUAGE"];

/// Reads the locale from POSIX locale environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLocaleSource;

impl EnvLocaleSource {
    pub fn new() -> Self {
        Self
    }
}

impl LocaleSource for EnvLocaleSource {
    fn locale_tag(&self) -> Option<String> {
        first_locale_tag(|name| std::env::var(name).ok())
    }
}

/// First non-empty value among [`LOCALE_ENV_VARS`]. `LANGUAGE` may hold a
/// colon-separated priority list; only its first entry counts.
fn first_locale_tag(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    LOCALE_ENV_VARS.iter().find_map(|name| {
        let value = lookup(name)?;
        let tag = value.split(':').next().unwrap_or_default().trim();
        if tag.is_empty() { None } else { Some(tag.to_string()) }
    })
}
