//! Fluent result chaining for clinical workflows.
//!
//! A clinical workflow is a sequence of fallible steps, each producing a
//! [`fhir::Resource`]. Steps do not fail by returning `Err`: failure is
//! in-band, reported as an `OperationOutcome` resource carrying error- or
//! fatal-severity issues. [`OperationResult`] threads a resource through such
//! a chain and guarantees that once a step produces a failure-grade outcome,
//! every later step is skipped and the failure is the chain's final output.
//!
//! Two composition styles are offered:
//! - *replace* operators (`operate`, `operate_resource`, `operate_parameters`)
//!   make the step's product the new current resource;
//! - *combined* operators accumulate successive products into an ordered
//!   `Parameters` envelope, so a chain can hand back a multi-part report.
//!
//! ```
//! use fhir::{Appointment, Patient, Resource};
//! use operation_result::OperationResult;
//!
//! let result = OperationResult::of(Resource::Patient(Patient::with_name("John", "Doe")))
//!     .operate_resource(|patient| {
//!         Resource::Appointment(Appointment::booked(patient.type_name()))
//!     });
//!
//! assert!(!result.is_error());
//! assert_eq!(result.resource().type_name(), "Appointment");
//! ```

pub mod classification;
pub mod result;

pub use classification::{classify, Classification};
pub use result::OperationResult;
