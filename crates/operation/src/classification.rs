//! Success/failure classification of resources.
//!
//! This is the single place that decides whether a resource signals failure;
//! every chain operator consults it before running a step and again on the
//! step's product.

use fhir::{IssueSeverity, OperationOutcome, Resource};

/// The two-way classification of a produced resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// The resource is ordinary data, or a diagnostic outcome whose worst
    /// issue is below error severity.
    Success,
    /// The resource is a diagnostic outcome carrying at least one error- or
    /// fatal-severity issue.
    Failure,
}

/// Classify a resource.
///
/// Only the `OperationOutcome` variant can classify as [`Classification::Failure`],
/// and only when its worst issue severity is `error` or `fatal`. An outcome
/// with no issues, or with only informational/warning issues, is a success,
/// the same as any non-diagnostic resource.
pub fn classify(resource: &Resource) -> Classification {
    match resource
        .as_operation_outcome()
        .and_then(OperationOutcome::max_severity)
    {
        Some(severity) if severity >= IssueSeverity::Error => Classification::Failure,
        _ => Classification::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhir::{Issue, IssueType, Patient};

    #[test]
    fn non_diagnostic_resource_is_success() {
        let resource = Resource::Patient(Patient::with_name("John", "Doe"));
        assert_eq!(classify(&resource), Classification::Success);
    }

    #[test]
    fn outcome_without_issues_is_success() {
        let resource = Resource::OperationOutcome(OperationOutcome::default());
        assert_eq!(classify(&resource), Classification::Success);
    }

    #[test]
    fn sub_error_severities_are_success() {
        for severity in [IssueSeverity::Information, IssueSeverity::Warning] {
            let resource = Resource::OperationOutcome(OperationOutcome::from_severity(severity));
            assert_eq!(classify(&resource), Classification::Success);
        }
    }

    #[test]
    fn error_and_fatal_are_failure() {
        for severity in [IssueSeverity::Error, IssueSeverity::Fatal] {
            let resource = Resource::OperationOutcome(OperationOutcome::from_severity(severity));
            assert_eq!(classify(&resource), Classification::Failure);
        }
    }

    #[test]
    fn worst_issue_decides_mixed_outcomes() {
        let outcome = OperationOutcome {
            issue: vec![
                Issue::new(IssueSeverity::Information, IssueType::Informational),
                Issue::new(IssueSeverity::Fatal, IssueType::Exception),
            ],
        };

        assert_eq!(
            classify(&Resource::OperationOutcome(outcome)),
            Classification::Failure
        );
    }
}
