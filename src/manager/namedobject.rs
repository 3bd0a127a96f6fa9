use serde::{
    Deserialize,
    Serialize
};

/// The `name` key every preset in a configuration file carries.
#[derive(Clone, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
