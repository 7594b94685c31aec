/// Port for discovering the process locale.
pub trait LocaleSource {
    /// Raw locale tag such as `zh_CN.UTF-8`, or `None` when nothing is configured.
    fn locale_tag(&self) -> Option<String>;
}
