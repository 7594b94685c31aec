//! The node components exposed to the host.

mod multi_point;
mod single_angle;

pub use multi_point::MultiPointAngleTranslator;
pub use single_angle::{AngleLabels, SingleAngleTranslator};

use crate::domain::locale::Locale;
use crate::domain::node::NodeDefinition;

/// Every node definition in registration order, localized for `locale`.
pub fn node_registry(locale: Locale) -> Vec<NodeDefinition> {
    vec![MultiPointAngleTranslator::definition(locale), SingleAngleTranslator::definition(locale)]
}
