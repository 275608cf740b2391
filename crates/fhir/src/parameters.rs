//! Named-parameter envelope wire model.
//!
//! Responsibilities:
//! - Define the envelope wire struct holding ordered (name, resource) entries
//! - Provide lookup by entry name and order-preserving append
//!
//! Notes:
//! - Entry order is significant and preserved through serialisation
//! - Consumers extend an envelope by cloning and appending; entries are
//!   never rewritten in place

use crate::Resource;
use serde::{Deserialize, Serialize};

/// An ordered container of named resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    /// Entries in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameter: Vec<Parameter>,
}

/// A single named entry in a [`Parameters`] envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Label identifying this entry within the envelope.
    pub name: String,

    /// The carried resource.
    pub resource: Resource,
}

impl Parameters {
    /// Build an envelope with exactly one entry.
    pub fn single(name: impl Into<String>, resource: Resource) -> Self {
        Parameters {
            parameter: vec![Parameter {
                name: name.into(),
                resource,
            }],
        }
    }

    /// Append an entry, keeping existing entries in place.
    pub fn push(&mut self, name: impl Into<String>, resource: Resource) {
        self.parameter.push(Parameter {
            name: name.into(),
            resource,
        });
    }

    /// Look up the first entry with the given name.
    pub fn parameter(&self, name: &str) -> Option<&Resource> {
        self.parameter
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.resource)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.parameter.len()
    }

    /// Whether the envelope has no entries.
    pub fn is_empty(&self) -> bool {
        self.parameter.is_empty()
    }
}
