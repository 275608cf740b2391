//! The chain wrapper and its operator family.
//!
//! [`OperationResult`] holds the chain's current resource and nothing else;
//! its error state is derived on demand from the classification predicate,
//! never stored. Every operator consumes the wrapper and returns a fresh one,
//! so a chain reads as a left-to-right pipeline of owned values.
//!
//! Operator variants differ along two axes:
//! - what the step sees: nothing (`operate`), the current resource
//!   (`operate_resource`), or the current resource viewed as a `Parameters`
//!   envelope (`operate_parameters`);
//! - what happens to the product: it replaces the current resource, or is
//!   accumulated onto an envelope (`*_combined`).
//!
//! All variants share the absorbing-error rule: once the current resource
//! classifies as a failure, every operator returns the wrapper unchanged and
//! the step is never invoked.

use crate::classification::{classify, Classification};
use fhir::{Parameters, Resource};

/// Deterministic label for an envelope entry appended without a caller name.
///
/// `index` is the entry's zero-based position in the envelope at append time,
/// which keeps labels unique when a chain accumulates several resources of
/// the same variant.
fn positional_name(index: usize) -> String {
    format!("resource-{index}")
}

/// The current state of an operation chain: one resource, threaded through
/// successive steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationResult {
    resource: Resource,
}

impl OperationResult {
    /// Start a chain from a resource.
    ///
    /// The resource is held unchanged; if it already classifies as a failure
    /// the chain starts in the absorbing error state and no step will run.
    pub fn of(resource: Resource) -> Self {
        OperationResult { resource }
    }

    /// Start a chain from a resource seeded into a single-entry envelope.
    ///
    /// Later `operate_parameters*` steps can then look the resource up under
    /// `name` instead of taking it positionally.
    pub fn of_named(resource: Resource, name: impl Into<String>) -> Self {
        OperationResult {
            resource: Resource::Parameters(Parameters::single(name, resource)),
        }
    }

    /// The chain's current resource.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Surrender the chain's final resource to the caller.
    pub fn into_resource(self) -> Resource {
        self.resource
    }

    /// Whether the chain is in the absorbing error state.
    pub fn is_error(&self) -> bool {
        classify(&self.resource) == Classification::Failure
    }

    /// Run a step and replace the current resource with its product.
    pub fn operate(self, step: impl FnOnce() -> Resource) -> Self {
        if self.short_circuits() {
            return self;
        }
        let produced = step();
        self.replace(produced)
    }

    /// Run a step and replace the current resource with its product, wrapped
    /// in a single-entry envelope under `name`.
    ///
    /// A failure-grade product is never wrapped: wrapping would hide it from
    /// classification, so it replaces the resource directly and the chain
    /// enters the error state.
    pub fn operate_named(self, name: impl Into<String>, step: impl FnOnce() -> Resource) -> Self {
        if self.short_circuits() {
            return self;
        }
        let produced = step();
        if classify(&produced) == Classification::Failure {
            return self.replace(produced);
        }
        self.replace(Resource::Parameters(Parameters::single(name, produced)))
    }

    /// Run a step against the current resource and replace it with the
    /// product, so later stages can depend on earlier output.
    pub fn operate_resource(self, step: impl FnOnce(&Resource) -> Resource) -> Self {
        if self.short_circuits() {
            return self;
        }
        let produced = step(&self.resource);
        self.replace(produced)
    }

    /// Run a step against the current resource viewed as an envelope and
    /// replace the current resource with the product.
    ///
    /// Chains normally arrange the envelope via [`OperationResult::of_named`];
    /// a current resource that is not yet an envelope is presented as a
    /// single-entry envelope view.
    pub fn operate_parameters(self, step: impl FnOnce(&Parameters) -> Resource) -> Self {
        if self.short_circuits() {
            return self;
        }
        let produced = step(&self.envelope_view());
        self.replace(produced)
    }

    /// Run a step and accumulate its product onto the chain's envelope.
    ///
    /// A success product is appended as a new trailing entry (the current
    /// resource becomes the first entry if it was not an envelope yet). A
    /// failure product replaces the envelope wholesale, so downstream
    /// consumers see only the failure, never a mixture of partial successes
    /// and an error.
    pub fn operate_combined(self, step: impl FnOnce() -> Resource) -> Self {
        if self.short_circuits() {
            return self;
        }
        let produced = step();
        self.accumulate(produced)
    }

    /// Accumulating variant of [`OperationResult::operate_resource`].
    pub fn operate_resource_combined(self, step: impl FnOnce(&Resource) -> Resource) -> Self {
        if self.short_circuits() {
            return self;
        }
        let produced = step(&self.resource);
        self.accumulate(produced)
    }

    /// Accumulating variant of [`OperationResult::operate_parameters`].
    pub fn operate_parameters_combined(self, step: impl FnOnce(&Parameters) -> Resource) -> Self {
        if self.short_circuits() {
            return self;
        }
        let produced = step(&self.envelope_view());
        self.accumulate(produced)
    }

    /// Absorbing-error check shared by every operator.
    fn short_circuits(&self) -> bool {
        let error = self.is_error();
        if error {
            tracing::trace!("chain in error state; skipping step");
        }
        error
    }

    /// The current resource as an envelope: a clone when it already is one,
    /// otherwise a single-entry view of it.
    fn envelope_view(&self) -> Parameters {
        match &self.resource {
            Resource::Parameters(parameters) => parameters.clone(),
            other => Parameters::single(positional_name(0), other.clone()),
        }
    }

    fn replace(self, produced: Resource) -> Self {
        if classify(&produced) == Classification::Failure {
            tracing::trace!(
                "step produced failing {}; chain entering error state",
                produced.type_name()
            );
        }
        OperationResult { resource: produced }
    }

    fn accumulate(self, produced: Resource) -> Self {
        if classify(&produced) == Classification::Failure {
            // The failure replaces everything accumulated so far.
            return self.replace(produced);
        }
        let mut envelope = match self.resource {
            Resource::Parameters(parameters) => parameters,
            other => Parameters::single(positional_name(0), other),
        };
        let index = envelope.len();
        envelope.push(positional_name(index), produced);
        OperationResult {
            resource: Resource::Parameters(envelope),
        }
    }
}
