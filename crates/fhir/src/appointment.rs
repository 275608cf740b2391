//! Appointment wire model.
//!
//! Responsibilities:
//! - Define the appointment wire struct with FHIR JSON field naming
//! - Define the appointment status code set
//! - Provide a fixture-friendly constructor for booked appointments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A booking of a healthcare event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Current state of the appointment.
    pub status: AppointmentStatus,

    /// Free-text summary shown in schedules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Start instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    /// End instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,

    /// Parties taking part in the appointment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participant: Vec<Participant>,
}

/// Appointment status code set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    /// Requested but not yet confirmed.
    Proposed,
    /// Awaiting participant confirmation.
    Pending,
    /// Confirmed by all participants.
    Booked,
    /// Did not take place.
    Cancelled,
    /// Recorded in error.
    EnteredInError,
}

/// A party taking part in an appointment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// The person or resource taking part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Reference>,
}

/// A reference to another resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Literal reference (relative URL or logical id).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Text alternative for the referenced resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Appointment {
    /// Build a booked appointment with a single participant display text.
    pub fn booked(participant_display: impl Into<String>) -> Self {
        Appointment {
            status: AppointmentStatus::Booked,
            description: None,
            start: None,
            end: None,
            participant: vec![Participant {
                actor: Some(Reference {
                    reference: None,
                    display: Some(participant_display.into()),
                }),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booked_sets_status_and_participant() {
        let appointment = Appointment::booked("Patient");

        assert_eq!(appointment.status, AppointmentStatus::Booked);
        assert_eq!(appointment.participant.len(), 1);
        let actor = appointment.participant[0].actor.as_ref().expect("actor");
        assert_eq!(actor.display.as_deref(), Some("Patient"));
    }

    #[test]
    fn serialises_status_with_fhir_codes() {
        let json =
            serde_json::to_string(&AppointmentStatus::EnteredInError).expect("serialise status");
        assert_eq!(json, r#""entered-in-error""#);

        let json = serde_json::to_string(&AppointmentStatus::Booked).expect("serialise status");
        assert_eq!(json, r#""booked""#);
    }

    #[test]
    fn round_trips_timed_appointment() {
        let start = "2026-03-20T09:00:00Z"
            .parse::<DateTime<Utc>>()
            .expect("valid datetime");

        let appointment = Appointment {
            status: AppointmentStatus::Booked,
            description: Some("Annual review".to_string()),
            start: Some(start),
            end: None,
            participant: vec![],
        };

        let json = serde_json::to_string(&appointment).expect("serialise appointment");
        let reparsed: Appointment = serde_json::from_str(&json).expect("deserialise appointment");
        assert_eq!(appointment, reparsed);
    }
}
