//! FHIR resource model for clinical operation chains.
//!
//! This crate provides the **resource model** consumed by the `operation-result`
//! combinator: a closed union of the resource variants a clinical workflow step
//! can produce, together with JSON wire parse/render helpers.
//!
//! This crate focuses on:
//! - FHIR semantic alignment (without FHIR REST transport)
//! - serialisation/deserialisation of the supported resource variants
//! - the ordered named-parameter envelope used to accumulate step outputs
//!
//! Supported variants: [`Patient`], [`Appointment`], [`Parameters`] and
//! [`OperationOutcome`]. The model is a value model: every type is an owned,
//! clonable value with no interior mutability.

pub mod appointment;
pub mod operation_outcome;
pub mod parameters;
pub mod patient;
pub mod resource;

// Re-export the resource union and its variant payloads
pub use appointment::{Appointment, AppointmentStatus, Participant, Reference};
pub use operation_outcome::{Issue, IssueSeverity, IssueType, OperationOutcome};
pub use parameters::{Parameter, Parameters};
pub use patient::{HumanName, Patient};
pub use resource::Resource;

/// Errors returned by the `fhir` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum FhirError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`FhirError`].
pub type FhirResult<T> = Result<T, FhirError>;
