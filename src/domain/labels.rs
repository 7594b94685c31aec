//! Localized input names and label sequences for the single-angle selector.
//!
//! Labels correspond positionally to [`Axis::codes`].

use crate::domain::angle::Axis;
use crate::domain::locale::Locale;

/// Input names and dropdown labels for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSet {
    pub locale: Locale,
    azimuth_name: &'static str,
    elevation_name: &'static str,
    distance_name: &'static str,
    azimuth: &'static [&'static str],
    elevation: &'static [&'static str],
    distance: &'static [&'static str],
}

static ZH: LabelSet = LabelSet {
    locale: Locale::Zh,
    azimuth_name: "方位角",
    elevation_name: "仰角",
    distance_name: "距离",
    azimuth: &["前", "右前", "右", "右后", "后", "左后", "左", "左前"],
    elevation: &["低角度", "平视", "高角度", "俯视"],
    distance: &["近景", "中景", "远景"],
};

static EN: LabelSet = LabelSet {
    locale: Locale::En,
    azimuth_name: "Azimuth",
    elevation_name: "Elevation",
    distance_name: "Distance",
    azimuth: &[
        "Front",
        "Front-Right",
        "Right",
        "Back-Right",
        "Back",
        "Back-Left",
        "Left",
        "Front-Left",
    ],
    elevation: &["Low Angle", "Eye Level", "Elevated", "High Angle"],
    distance: &["Close-up", "Medium", "Wide"],
};

impl LabelSet {
    /// Label set for `locale`.
    pub fn for_locale(locale: Locale) -> &'static LabelSet {
        match locale {
            Locale::Zh => &ZH,
            Locale::En => &EN,
        }
    }

    /// Input name shown for `axis`.
    pub fn input_name(&self, axis: Axis) -> &'static str {
        match axis {
            Axis::Azimuth => self.azimuth_name,
            Axis::Elevation => self.elevation_name,
            Axis::Distance => self.distance_name,
        }
    }

    /// Labels for `axis`, in code order.
    pub fn labels(&self, axis: Axis) -> &'static [&'static str] {
        match axis {
            Axis::Azimuth => self.azimuth,
            Axis::Elevation => self.elevation,
            Axis::Distance => self.distance,
        }
    }

    /// Label preselected in the host's dropdown.
    pub fn default_label(&self, axis: Axis) -> &'static str {
        self.labels(axis)[axis.default_position()]
    }

    /// Position of `label` within the axis labels, if it is one of them.
    pub fn position(&self, axis: Axis, label: &str) -> Option<usize> {
        self.labels(axis).iter().position(|candidate| *candidate == label)
    }

    /// Label shown for `code`, if the code is selectable.
    pub fn label_for_code(&self, axis: Axis, code: i64) -> Option<&'static str> {
        let position = axis.codes().iter().position(|c| *c == code)?;
        self.labels(axis).get(position).copied()
    }
}
