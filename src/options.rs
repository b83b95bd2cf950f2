use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelOptions {
    /// Module the runtime model primitives are imported from.
    pub runtime_module: String,
    /// Prefix of the local alias each imported primitive is bound to.
    pub helper_prefix: String,
}

impl Default for ModelOptions {
    fn default() -> Self {
        ModelOptions {
            runtime_module: "vue".to_string(),
            helper_prefix: "_".to_string(),
        }
    }
}

impl ModelOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
