//! angle-prompts: translate discretized camera angles into `<sks>` viewpoint prompts.
//!
//! Two stateless node components share one set of phrase tables:
//! [`MultiPointAngleTranslator`] turns a `selected_points` JSON array into one
//! prompt per point, and [`SingleAngleTranslator`] turns three localized
//! dropdown labels into a single prompt.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    build_selection, create_context, node_definitions, node_definitions_json, parse_point,
    translate_labels, translate_points,
};
pub use app::nodes::{AngleLabels, MultiPointAngleTranslator, SingleAngleTranslator, node_registry};
pub use domain::{
    AngleRecord, AppError, Axis, DistanceLayer, InputSpec, LabelSet, Locale, NodeDefinition,
    Selection, SelectionParseError, Settings, format_prompt, phrase_for,
};
pub use domain::selection::parse_selected_points;
