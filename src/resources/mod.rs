//! Resource entities served by the API.
//!
//! Both shapes are fixed in-memory values; nothing in this system creates,
//! mutates, or persists them.

use serde::{Deserialize, Serialize};

/// A single resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
}

impl Resource {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The record returned for every id lookup.
    pub fn fixture() -> Self {
        Self::new("42", "User")
    }
}

/// Ordered collection of resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceList {
    pub resources: Vec<Resource>,
}

impl ResourceList {
    /// The fixed listing served by `GET /resources`.
    pub fn fixture() -> Self {
        Self {
            resources: vec![Resource::new("42", "User"), Resource::new("3.14", "Project")],
        }
    }
}
