//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and node execution.

use std::path::Path;

use crate::adapters::env_locale::EnvLocaleSource;
use crate::adapters::settings_file::load_settings;
use crate::app::AppContext;
use crate::app::nodes::{self, MultiPointAngleTranslator, SingleAngleTranslator};

pub use crate::app::nodes::AngleLabels;
pub use crate::domain::{
    AngleRecord, AppError, DistanceLayer, Locale, NodeDefinition, Selection, Settings,
};

/// Create an `AppContext` reading settings from `config` or the working directory.
pub fn create_context(config: Option<&Path>) -> Result<AppContext<EnvLocaleSource>, AppError> {
    let settings = load_settings(config, &std::env::current_dir()?)?;
    Ok(AppContext::new(EnvLocaleSource::new(), settings))
}

/// Prompts for every record of a `selected_points` document.
pub fn translate_points(selected_points: &str) -> Vec<String> {
    MultiPointAngleTranslator::new().generate_prompt(selected_points)
}

/// Prompt for one set of localized labels.
pub fn translate_labels(locale: Locale, labels: &AngleLabels) -> String {
    SingleAngleTranslator::new(locale).generate_prompt(labels)
}

/// Node metadata for every registered node.
pub fn node_definitions(locale: Locale) -> Vec<NodeDefinition> {
    nodes::node_registry(locale)
}

/// Node metadata rendered as a pretty JSON array.
pub fn node_definitions_json(locale: Locale) -> Result<String, AppError> {
    let nodes: Vec<_> = node_definitions(locale).iter().map(NodeDefinition::to_json).collect();
    Ok(serde_json::to_string_pretty(&nodes)?)
}

/// Parse an `AZIMUTH,ELEVATION,DISTANCE` triple.
pub fn parse_point(text: &str) -> Result<AngleRecord, AppError> {
    let codes = text
        .split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| AppError::InvalidPoint(text.to_string()))?;

    match codes.as_slice() {
        [azimuth, elevation, distance] => Ok(AngleRecord::new(*azimuth, *elevation, *distance)),
        _ => Err(AppError::InvalidPoint(text.to_string())),
    }
}

/// Build a selection from whole layers followed by individual point toggles.
pub fn build_selection(layers: &[DistanceLayer], points: &[AngleRecord]) -> Selection {
    let mut selection = Selection::new();
    for layer in layers {
        selection.select_layer(*layer);
    }
    for point in points {
        selection.toggle(*point);
    }
    selection
}
