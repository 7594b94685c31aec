pub mod angle;
pub mod error;
pub mod labels;
pub mod locale;
pub mod messages;
pub mod node;
pub mod selection;
pub mod settings;

pub use angle::{Axis, format_prompt, phrase_for};
pub use error::AppError;
pub use labels::LabelSet;
pub use locale::Locale;
pub use node::{InputSpec, NodeDefinition};
pub use selection::{AngleRecord, DistanceLayer, Selection, SelectionParseError};
pub use settings::Settings;
