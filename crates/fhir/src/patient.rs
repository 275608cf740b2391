//! Patient demographics wire model.
//!
//! Responsibilities:
//! - Define the patient wire struct with FHIR JSON field naming
//! - Provide a fixture-friendly constructor for the common
//!   "patient with one official name" shape

use serde::{Deserialize, Serialize};

/// Patient demographics and identification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Logical identifier for this patient record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Names associated with the patient, primary name first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<HumanName>,

    /// Date of birth (ISO 8601 date: YYYY-MM-DD).
    #[serde(rename = "birthDate", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

/// A human name, split into family and given parts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanName {
    /// Family name (surname).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    /// Given names (first name, middle names).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<String>,
}

impl Patient {
    /// Build a patient carrying a single name.
    pub fn with_name(given: impl Into<String>, family: impl Into<String>) -> Self {
        Patient {
            id: None,
            name: vec![HumanName {
                family: Some(family.into()),
                given: vec![given.into()],
            }],
            birth_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_name_populates_single_name() {
        let patient = Patient::with_name("John", "Doe");

        assert_eq!(patient.name.len(), 1);
        assert_eq!(patient.name[0].family.as_deref(), Some("Doe"));
        assert_eq!(patient.name[0].given, vec!["John"]);
        assert!(patient.birth_date.is_none());
    }

    #[test]
    fn serialises_birth_date_with_fhir_name() {
        let patient = Patient {
            birth_date: Some("1992-03-20".to_string()),
            ..Patient::default()
        };

        let json = serde_json::to_string(&patient).expect("serialise patient");
        assert!(json.contains(r#""birthDate":"1992-03-20""#));
    }

    #[test]
    fn omits_empty_optional_fields() {
        let json = serde_json::to_string(&Patient::default()).expect("serialise patient");

        assert!(!json.contains("id"));
        assert!(!json.contains("name"));
        assert!(!json.contains("birthDate"));
    }
}
