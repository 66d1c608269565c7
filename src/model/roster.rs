use super::lenient;
use serde::{Deserialize, Serialize};

/// The floor roster document: which floors exist and in which order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloorRoster {
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub data: Vec<FloorDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorDescriptor {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(rename = "floor", default, deserialize_with = "lenient::text")]
    pub floor_name: String,
}

impl FloorDescriptor {
    #[must_use]
    pub fn new(id: impl Into<String>, floor_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            floor_name: floor_name.into(),
        }
    }
}
