// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::SubmissionError;
use wedding_site_shared::rsvp::RsvpResponse;

pub const SUBMIT_LABEL: &str = "Submit RSVP";
pub const SUBMITTING_LABEL: &str = "Submitting...";

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";
pub const GENERIC_ERROR_MESSAGE: &str = "There was an error submitting your RSVP. Please try again.";

/// Where the RSVP submission flow currently stands. The form is interactive in
/// [`SubmissionPhase::Idle`]; the submit control is locked while
/// [`SubmissionPhase::Submitting`], which keeps at most one request in flight.
/// Dismissing a failure returns the flow to `Idle`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionPhase {
	Idle,
	Submitting,
	Succeeded,
	Failed(String),
}

impl SubmissionPhase {
	pub fn submit_in_flight(&self) -> bool {
		*self == Self::Submitting
	}

	pub fn submit_label(&self) -> &'static str {
		if self.submit_in_flight() {
			SUBMITTING_LABEL
		} else {
			SUBMIT_LABEL
		}
	}

	pub fn error_message(&self) -> Option<&str> {
		match self {
			Self::Failed(message) => Some(message),
			_ => None,
		}
	}
}

/// Maps the outcome of the submission request onto the flow's next phase.
/// Application rejections surface the server's message when it sent one;
/// transport faults get a fixed network-error message and are logged.
pub fn phase_after_submission(result: &Result<RsvpResponse, SubmissionError>) -> SubmissionPhase {
	match result {
		Ok(response) if response.success => SubmissionPhase::Succeeded,
		Ok(response) => {
			let message = response
				.message
				.clone()
				.unwrap_or_else(|| String::from(GENERIC_ERROR_MESSAGE));
			SubmissionPhase::Failed(message)
		}
		Err(error) => {
			log::error!("RSVP submission failed: {}", error);
			SubmissionPhase::Failed(String::from(NETWORK_ERROR_MESSAGE))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn successful_response_completes_the_flow() {
		let result = Ok(RsvpResponse {
			success: true,
			message: Some(String::from("RSVP submitted successfully!")),
		});
		assert_eq!(phase_after_submission(&result), SubmissionPhase::Succeeded);
	}

	#[test]
	fn rejection_surfaces_the_server_message() {
		let result = Ok(RsvpResponse {
			success: false,
			message: Some(String::from("The guest list is full.")),
		});
		assert_eq!(
			phase_after_submission(&result),
			SubmissionPhase::Failed(String::from("The guest list is full."))
		);
	}

	#[test]
	fn rejection_without_message_uses_generic_wording() {
		let result = Ok(RsvpResponse {
			success: false,
			message: None,
		});
		assert_eq!(
			phase_after_submission(&result),
			SubmissionPhase::Failed(String::from(GENERIC_ERROR_MESSAGE))
		);
	}

	#[test]
	fn transport_fault_uses_network_wording() {
		let result = Err(SubmissionError::Status(500));
		assert_eq!(
			phase_after_submission(&result),
			SubmissionPhase::Failed(String::from(NETWORK_ERROR_MESSAGE))
		);
	}

	#[test]
	fn submit_control_state_follows_the_phase() {
		assert!(!SubmissionPhase::Idle.submit_in_flight());
		assert!(SubmissionPhase::Submitting.submit_in_flight());
		assert_eq!(SubmissionPhase::Idle.submit_label(), SUBMIT_LABEL);
		assert_eq!(SubmissionPhase::Submitting.submit_label(), SUBMITTING_LABEL);
		assert_eq!(
			SubmissionPhase::Failed(String::from("nope")).submit_label(),
			SUBMIT_LABEL
		);
	}
}
