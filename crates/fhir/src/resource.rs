//! The closed resource union and its JSON wire helpers.
//!
//! Responsibilities:
//! - Define [`Resource`], the tagged union of every variant a workflow step
//!   can produce
//! - Provide variant accessors used by downstream consumers
//! - Provide strict JSON parse/render helpers
//!
//! The wire shape follows FHIR JSON: the variant is carried in a top-level
//! `resourceType` discriminator and field names use FHIR's camelCase.

use crate::{Appointment, FhirError, FhirResult, OperationOutcome, Parameters, Patient};
use serde::{Deserialize, Serialize};

/// A structured health-record resource.
///
/// This is a closed union: the operation-chaining layer treats any variant
/// other than [`OperationOutcome`] as plain data and never inspects it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    /// Patient demographics.
    Patient(Patient),
    /// A scheduled appointment.
    Appointment(Appointment),
    /// An ordered named-parameter envelope.
    Parameters(Parameters),
    /// A diagnostic outcome carrying zero or more issues.
    OperationOutcome(OperationOutcome),
}

impl Resource {
    /// The FHIR `resourceType` string for this variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Resource::Patient(_) => "Patient",
            Resource::Appointment(_) => "Appointment",
            Resource::Parameters(_) => "Parameters",
            Resource::OperationOutcome(_) => "OperationOutcome",
        }
    }

    /// Borrow the diagnostic outcome payload, if this is the outcome variant.
    pub fn as_operation_outcome(&self) -> Option<&OperationOutcome> {
        match self {
            Resource::OperationOutcome(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Borrow the envelope payload, if this is the parameters variant.
    pub fn as_parameters(&self) -> Option<&Parameters> {
        match self {
            Resource::Parameters(parameters) => Some(parameters),
            _ => None,
        }
    }

    /// Parse a resource from FHIR JSON text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort "path" (e.g.
    /// `name.0.family`) to the failing field when the JSON does not match the
    /// wire schema.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError`] if:
    /// - the JSON is malformed,
    /// - `resourceType` is missing or names an unsupported variant,
    /// - any field has an unexpected type.
    pub fn parse(json_text: &str) -> FhirResult<Resource> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);

        match serde_path_to_error::deserialize::<_, Resource>(&mut deserializer) {
            Ok(parsed) => Ok(parsed),
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() {
                    "<root>"
                } else {
                    path.as_str()
                };
                Err(FhirError::Translation(format!(
                    "Resource schema mismatch at {path}: {source}"
                )))
            }
        }
    }

    /// Render a resource as FHIR JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError`] if serialisation fails.
    pub fn render(&self) -> FhirResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
