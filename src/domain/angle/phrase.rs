use super::axis::Axis;

/// Trigger token every generated prompt starts with.
pub const PROMPT_TRIGGER: &str = "<sks>";

/// Phrase for `code` on `axis`, or the axis default when the code has no entry.
pub fn phrase_for(axis: Axis, code: i64) -> &'static str {
    match axis {
        Axis::Azimuth => azimuth_phrase(code),
        Axis::Elevation => elevation_phrase(code),
        Axis::Distance => distance_phrase(code),
    }
}

/// Phrase returned for codes outside the table.
pub fn default_phrase(axis: Axis) -> &'static str {
    match axis {
        Axis::Azimuth => "front view",
        Axis::Elevation => "eye-level shot",
        Axis::Distance => "medium shot",
    }
}

fn azimuth_phrase(code: i64) -> &'static str {
    match code {
        0 => "front view",
        45 => "front-right quarter view",
        90 => "right side view",
        135 => "back-right quarter view",
        180 => "back view",
        225 => "back-left quarter view",
        270 => "left side view",
        315 => "front-left quarter view",
        _ => default_phrase(Axis::Azimuth),
    }
}

fn elevation_phrase(code: i64) -> &'static str {
    match code {
        -30 => "low-angle shot",
        0 => "eye-level shot",
        30 => "elevated shot",
        60 => "high-angle shot",
        _ => default_phrase(Axis::Elevation),
    }
}

fn distance_phrase(code: i64) -> &'static str {
    match code {
        0 => "close-up",
        1 => "medium shot",
        2 => "wide shot",
        _ => default_phrase(Axis::Distance),
    }
}

/// Build `<sks> {azimuth} {elevation} {distance}` from raw codes.
pub fn format_prompt(azimuth: i64, elevation: i64, distance: i64) -> String {
    format!(
        "{} {} {} {}",
        PROMPT_TRIGGER,
        phrase_for(Axis::Azimuth, azimuth),
        phrase_for(Axis::Elevation, elevation),
        phrase_for(Axis::Distance, distance)
    )
}
