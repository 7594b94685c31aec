//! Host-facing node metadata.

mod definition;

pub use definition::{InputSpec, NodeDefinition};

/// Category both nodes are filed under.
pub const NODE_CATEGORY: &str = "utils";
/// Entry function name the host calls.
pub const NODE_FUNCTION: &str = "generate_prompt";
/// Output socket type.
pub const PROMPT_TYPE: &str = "STRING";
/// Output socket name.
pub const PROMPT_NAME: &str = "prompt";
