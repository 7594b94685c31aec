use serde_json::{Map, Value, json};

/// Widget type and default for one node input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    /// Free text field.
    String { default: String, multiline: bool },
    /// Dropdown over a fixed list of options.
    Combo { options: Vec<String>, default: String },
}

impl InputSpec {
    pub fn default_value(&self) -> &str {
        match self {
            InputSpec::String { default, .. } | InputSpec::Combo { default, .. } => default,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            InputSpec::String { default, multiline } => {
                json!(["STRING", { "default": default, "multiline": multiline }])
            }
            InputSpec::Combo { options, default } => json!([options, { "default": default }]),
        }
    }
}

/// Metadata a host needs to place and wire one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDefinition {
    pub class_name: &'static str,
    pub display_name: &'static str,
    /// Required inputs in declaration order.
    pub required: Vec<(String, InputSpec)>,
    pub return_types: Vec<&'static str>,
    pub return_names: Vec<&'static str>,
    pub output_is_list: Vec<bool>,
    pub function: &'static str,
    pub category: &'static str,
}

impl NodeDefinition {
    pub fn input(&self, name: &str) -> Option<&InputSpec> {
        self.required.iter().find(|(input, _)| input == name).map(|(_, spec)| spec)
    }

    /// Render in the host's node-info shape.
    pub fn to_json(&self) -> Value {
        let mut required = Map::new();
        for (name, spec) in &self.required {
            required.insert(name.clone(), spec.to_json());
        }

        json!({
            "class_name": self.class_name,
            "display_name": self.display_name,
            "INPUT_TYPES": { "required": required },
            "RETURN_TYPES": self.return_types,
            "RETURN_NAMES": self.return_names,
            "OUTPUT_IS_LIST": self.output_is_list,
            "FUNCTION": self.function,
            "CATEGORY": self.category,
        })
    }
}
