use crate::ports::LocaleSource;

/// Locale source returning a fixed tag.
#[derive(Debug, Clone, Default)]
pub struct FixedLocaleSource {
    tag: Option<String>,
}

impl FixedLocaleSource {
    pub fn new(tag: &str) -> Self {
        Self { tag: Some(tag.to_string()) }
    }

    pub fn unset() -> Self {
        Self::default()
    }
}

impl LocaleSource for FixedLocaleSource {
    fn locale_tag(&self) -> Option<String> {
        self.tag.clone()
    }
}
