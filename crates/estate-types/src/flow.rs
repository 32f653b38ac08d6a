//! Booking-creation flow.
//!
//! The visit-booking popup drives this small state machine: validate the
//! visit date, issue the create call, and surface the outcome. Keeping
//! the transitions here (rather than inline in the component) makes the
//! no-date and failure paths testable without a browser.

/// States of the booking-creation flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Message shown when the visit date is missing.
pub const MISSING_VISIT_DATE: &str = "Please select a visit date.";

/// Fallback message when the API rejects a booking without a message.
pub const GENERIC_BOOKING_FAILURE: &str = "Failed to send booking request.";

/// Drives a single booking submission.
///
/// Every retry is a fresh user-initiated submit; there is no automatic
/// retry. A submit attempt while a request is already in flight is
/// ignored, so rapid double-clicks cannot issue duplicate bookings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingFlow {
    state: FlowState,
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFlow {
    pub fn new() -> Self {
        Self {
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Begin a submit attempt with the entered visit date.
    ///
    /// Returns `true` when validation passed and the create call should
    /// be issued. An empty date fails validation and moves the flow to
    /// [`FlowState::Failed`] with [`MISSING_VISIT_DATE`]; the entered
    /// form state is left untouched for retry.
    pub fn begin_submit(&mut self, visit_date: &str) -> bool {
        if self.state == FlowState::Submitting {
            return false;
        }
        self.state = FlowState::Validating;
        if visit_date.trim().is_empty() {
            self.state = FlowState::Failed(MISSING_VISIT_DATE.to_string());
            return false;
        }
        self.state = FlowState::Submitting;
        true
    }

    /// The create call succeeded.
    pub fn resolve_success(&mut self) {
        if self.state == FlowState::Submitting {
            self.state = FlowState::Succeeded;
        }
    }

    /// The create call failed; keep the payload message when present.
    pub fn resolve_failure(&mut self, message: Option<String>) {
        if self.state == FlowState::Submitting {
            let message = message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_BOOKING_FAILURE.to_string());
            self.state = FlowState::Failed(message);
        }
    }

    /// Return to [`FlowState::Idle`], e.g. when the popup is reopened.
    pub fn reset(&mut self) {
        self.state = FlowState::Idle;
    }

    /// The message to display, if the flow has one.
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            FlowState::Failed(message) => Some(message),
            FlowState::Succeeded => Some("Booking request sent successfully!"),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FlowState::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_date_fails_without_network_call() {
        let mut flow = BookingFlow::new();

        let should_submit = flow.begin_submit("");

        assert!(!should_submit);
        assert_eq!(
            flow.state(),
            &FlowState::Failed(MISSING_VISIT_DATE.to_string())
        );
        assert_eq!(flow.message(), Some(MISSING_VISIT_DATE));
    }

    #[test]
    fn test_whitespace_date_counts_as_missing() {
        let mut flow = BookingFlow::new();
        assert!(!flow.begin_submit("   "));
    }

    #[test]
    fn test_valid_date_moves_to_submitting() {
        let mut flow = BookingFlow::new();

        assert!(flow.begin_submit("2026-09-01"));
        assert!(flow.is_submitting());
        assert_eq!(flow.message(), None);
    }

    #[test]
    fn test_success_path() {
        let mut flow = BookingFlow::new();
        flow.begin_submit("2026-09-01");

        flow.resolve_success();

        assert_eq!(flow.state(), &FlowState::Succeeded);
    }

    #[test]
    fn test_failure_uses_payload_message() {
        let mut flow = BookingFlow::new();
        flow.begin_submit("2026-09-01");

        flow.resolve_failure(Some("Property already booked".to_string()));

        assert_eq!(
            flow.state(),
            &FlowState::Failed("Property already booked".to_string())
        );
    }

    #[test]
    fn test_failure_falls_back_to_generic_message() {
        let mut flow = BookingFlow::new();
        flow.begin_submit("2026-09-01");

        flow.resolve_failure(None);

        assert_eq!(flow.message(), Some(GENERIC_BOOKING_FAILURE));
    }

    #[test]
    fn test_retry_after_failure_is_allowed() {
        let mut flow = BookingFlow::new();
        flow.begin_submit("");
        assert!(matches!(flow.state(), FlowState::Failed(_)));

        assert!(flow.begin_submit("2026-09-01"));
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_double_submit_while_in_flight_is_ignored() {
        let mut flow = BookingFlow::new();
        assert!(flow.begin_submit("2026-09-01"));

        assert!(!flow.begin_submit("2026-09-01"));
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut flow = BookingFlow::new();
        flow.begin_submit("");
        flow.reset();

        assert_eq!(flow.state(), &FlowState::Idle);
    }
}
