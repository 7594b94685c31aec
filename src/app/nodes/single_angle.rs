//! Single-angle selector: three localized dropdown labels in, one prompt out.

use crate::domain::angle::{Axis, format_prompt};
use crate::domain::labels::LabelSet;
use crate::domain::locale::Locale;
use crate::domain::node::{
    InputSpec, NODE_CATEGORY, NODE_FUNCTION, NodeDefinition, PROMPT_NAME, PROMPT_TYPE,
};

/// Labels chosen for each axis, in the translator's locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AngleLabels {
    pub azimuth: String,
    pub elevation: String,
    pub distance: String,
}

impl AngleLabels {
    pub fn new(
        azimuth: impl Into<String>,
        elevation: impl Into<String>,
        distance: impl Into<String>,
    ) -> Self {
        Self { azimuth: azimuth.into(), elevation: elevation.into(), distance: distance.into() }
    }

    /// The labels the host preselects for `locale`.
    pub fn defaults(locale: Locale) -> Self {
        let set = LabelSet::for_locale(locale);
        Self::new(
            set.default_label(Axis::Azimuth),
            set.default_label(Axis::Elevation),
            set.default_label(Axis::Distance),
        )
    }

    pub fn get(&self, axis: Axis) -> &str {
        match axis {
            Axis::Azimuth => &self.azimuth,
            Axis::Elevation => &self.elevation,
            Axis::Distance => &self.distance,
        }
    }
}

/// Translates localized labels into a single prompt.
#[derive(Debug, Clone, Copy)]
pub struct SingleAngleTranslator {
    labels: &'static LabelSet,
}

impl SingleAngleTranslator {
    pub const CLASS_NAME: &'static str = "SimpleAnglesSelector";

    pub fn new(locale: Locale) -> Self {
        Self { labels: LabelSet::for_locale(locale) }
    }

    pub fn locale(&self) -> Locale {
        self.labels.locale
    }

    pub fn display_name(locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => "简易角度选择器",
            Locale::En => "Simple Angles Selector",
        }
    }

    /// Node metadata with one dropdown per axis, named and labelled for `locale`.
    pub fn definition(locale: Locale) -> NodeDefinition {
        let set = LabelSet::for_locale(locale);
        let required = Axis::ALL
            .iter()
            .map(|axis| {
                let spec = InputSpec::Combo {
                    options: set.labels(*axis).iter().map(|label| label.to_string()).collect(),
                    default: set.default_label(*axis).to_string(),
                };
                (set.input_name(*axis).to_string(), spec)
            })
            .collect();

        NodeDefinition {
            class_name: Self::CLASS_NAME,
            display_name: Self::display_name(locale),
            required,
            return_types: vec![PROMPT_TYPE],
            return_names: vec![PROMPT_NAME],
            output_is_list: vec![false],
            function: NODE_FUNCTION,
            category: NODE_CATEGORY,
        }
    }

    /// Code selected by `label` on `axis`; unknown labels select the axis default.
    pub fn resolve(&self, axis: Axis, label: &str) -> i64 {
        let position = self.labels.position(axis, label).unwrap_or_else(|| {
            log::debug!("unknown {axis} label '{label}' for locale {}", self.labels.locale);
            axis.default_position()
        });
        axis.code_at(position)
    }

    pub fn generate_prompt(&self, labels: &AngleLabels) -> String {
        format_prompt(
            self.resolve(Axis::Azimuth, labels.get(Axis::Azimuth)),
            self.resolve(Axis::Elevation, labels.get(Axis::Elevation)),
            self.resolve(Axis::Distance, labels.get(Axis::Distance)),
        )
    }
}
