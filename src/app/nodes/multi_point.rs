//! Multi-point selector: one prompt per selected viewpoint.

use crate::domain::locale::Locale;
use crate::domain::node::{
    InputSpec, NODE_CATEGORY, NODE_FUNCTION, NodeDefinition, PROMPT_NAME, PROMPT_TYPE,
};
use crate::domain::selection::{AngleRecord, parse_selected_points};

/// Translates a `selected_points` JSON array into a list of prompts.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiPointAngleTranslator;

impl MultiPointAngleTranslator {
    pub const CLASS_NAME: &'static str = "AnglesSelector3D";
    pub const INPUT_NAME: &'static str = "selected_points";
    pub const DEFAULT_INPUT: &'static str = "[]";

    pub fn new() -> Self {
        Self
    }

    pub fn display_name(locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => "3D角度选择器",
            Locale::En => "3D Angles Selector",
        }
    }

    pub fn definition(locale: Locale) -> NodeDefinition {
        NodeDefinition {
            class_name: Self::CLASS_NAME,
            display_name: Self::display_name(locale),
            required: vec![(
                Self::INPUT_NAME.to_string(),
                InputSpec::String { default: Self::DEFAULT_INPUT.to_string(), multiline: false },
            )],
            return_types: vec![PROMPT_TYPE],
            return_names: vec![PROMPT_NAME],
            output_is_list: vec![true],
            function: NODE_FUNCTION,
            category: NODE_CATEGORY,
        }
    }

    /// One prompt per record, in input order.
    ///
    /// Input that is not a JSON array yields no prompts.
    pub fn generate_prompt(&self, selected_points: &str) -> Vec<String> {
        let records = parse_selected_points(selected_points).unwrap_or_else(|err| {
            log::warn!("{err}; treating selection as empty");
            Vec::new()
        });
        records.iter().map(AngleRecord::prompt).collect()
    }
}
