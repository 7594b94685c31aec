pub mod env_locale;
pub mod settings_file;
