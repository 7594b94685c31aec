use crate::domain::locale::Locale;

/// One-line summary of a selection, as the selector widget shows it.
pub fn selection_summary(locale: Locale, count: usize) -> String {
    match (locale, count) {
        (Locale::Zh, 0) => "未选择任何角度 (点击球面上的点进行选择)".to_string(),
        (Locale::En, 0) => "No angles selected (click points on sphere)".to_string(),
        (Locale::Zh, n) => format!("已选择: {n} 个角度"),
        (Locale::En, n) => format!("Selected: {n} angles"),
    }
}
