//! Response envelope and identity helpers shared by every resource.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Standard backend response wrapper.
///
/// Some endpoints report success as `status` instead of `success`; both are
/// accepted. Only `data` is required to decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(default, alias = "status")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// Envelope for endpoints that return no payload (e.g. delete).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default, alias = "status")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// A backend record with a server-assigned identifier.
pub trait Entity {
    fn id(&self) -> &str;
}

/// A related record that the backend may send either as a bare id or populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Id(String),
    Populated(PopulatedRef),
}

/// Populated form of a [`Reference`]; unknown fields are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulatedRef {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Reference {
    pub fn id(&self) -> &str {
        match self {
            Reference::Id(id) => id,
            Reference::Populated(populated) => &populated.id,
        }
    }

    /// Best human-readable label of a populated reference.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Reference::Id(_) => None,
            Reference::Populated(populated) => ["fullName", "name", "username", "title"]
                .iter()
                .find_map(|key| populated.fields.get(*key).and_then(Value::as_str)),
        }
    }

    pub fn is(&self, id: &str) -> bool {
        self.id() == id
    }
}

impl From<&str> for Reference {
    fn from(id: &str) -> Self {
        Reference::Id(id.to_string())
    }
}
