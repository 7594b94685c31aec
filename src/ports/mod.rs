mod locale_source;

pub use locale_source::LocaleSource;
