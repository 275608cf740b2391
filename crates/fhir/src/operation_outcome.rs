//! Diagnostic outcome wire model.
//!
//! Responsibilities:
//! - Define the outcome wire struct carrying a list of issues
//! - Define the ordered issue severity code set
//! - Expose the worst-severity lookup consumed by the operation-chaining layer
//!
//! Notes:
//! - An outcome with no issues, or with only sub-error severities, reports
//!   success to consumers; the outcome variant alone does not signal failure.

use serde::{Deserialize, Serialize};

/// A collection of issues describing the outcome of an operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome {
    /// Issues raised by the operation, in the order they were recorded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issue: Vec<Issue>,
}

/// A single issue raised by an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// How serious the issue is.
    pub severity: IssueSeverity,

    /// Categorisation of the issue.
    pub code: IssueType,

    /// Additional human-readable detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<String>,
}

/// Issue severity code set.
///
/// Variants are declared in ascending order of severity so the derived
/// ordering matches clinical escalation: information < warning < error < fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Informational note; the operation succeeded.
    Information,
    /// Something unexpected happened but the operation succeeded.
    Warning,
    /// The operation failed.
    Error,
    /// The operation failed and further processing is unsafe.
    Fatal,
}

/// Issue category code set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    /// Informational message with no processing consequence.
    Informational,
    /// Processing failure.
    Processing,
    /// Content invalid against rules.
    Invalid,
    /// Unexpected internal failure.
    Exception,
    /// Referenced content not found.
    NotFound,
}

impl Issue {
    /// Build an issue with no diagnostics text.
    pub fn new(severity: IssueSeverity, code: IssueType) -> Self {
        Issue {
            severity,
            code,
            diagnostics: None,
        }
    }
}

impl OperationOutcome {
    /// Build an outcome carrying a single issue of the given severity.
    ///
    /// Sub-error severities are categorised as informational, failure-grade
    /// ones as processing failures.
    pub fn from_severity(severity: IssueSeverity) -> Self {
        let code = if severity >= IssueSeverity::Error {
            IssueType::Processing
        } else {
            IssueType::Informational
        };
        OperationOutcome {
            issue: vec![Issue::new(severity, code)],
        }
    }

    /// The worst severity among this outcome's issues, if it has any.
    pub fn max_severity(&self) -> Option<IssueSeverity> {
        self.issue.iter().map(|issue| issue.severity).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_order_by_escalation() {
        assert!(IssueSeverity::Information < IssueSeverity::Warning);
        assert!(IssueSeverity::Warning < IssueSeverity::Error);
        assert!(IssueSeverity::Error < IssueSeverity::Fatal);
    }

    #[test]
    fn max_severity_of_empty_outcome_is_none() {
        assert_eq!(OperationOutcome::default().max_severity(), None);
    }

    #[test]
    fn max_severity_picks_worst_issue() {
        let outcome = OperationOutcome {
            issue: vec![
                Issue::new(IssueSeverity::Information, IssueType::Informational),
                Issue::new(IssueSeverity::Fatal, IssueType::Exception),
                Issue::new(IssueSeverity::Warning, IssueType::Informational),
            ],
        };

        assert_eq!(outcome.max_severity(), Some(IssueSeverity::Fatal));
    }

    #[test]
    fn serialises_severity_with_fhir_codes() {
        let json = serde_json::to_string(&IssueSeverity::Information).expect("serialise severity");
        assert_eq!(json, r#""information""#);

        let json = serde_json::to_string(&IssueSeverity::Fatal).expect("serialise severity");
        assert_eq!(json, r#""fatal""#);
    }

    #[test]
    fn from_severity_categorises_by_grade() {
        let info = OperationOutcome::from_severity(IssueSeverity::Warning);
        assert_eq!(info.issue[0].code, IssueType::Informational);

        let error = OperationOutcome::from_severity(IssueSeverity::Error);
        assert_eq!(error.issue[0].code, IssueType::Processing);
    }
}
