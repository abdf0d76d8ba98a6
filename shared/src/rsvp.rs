// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Whether a guest plans to be present for one of the wedding events.
///
/// Each event toggle in the form maps to one of these; a toggle the guest
/// left unset submits as [`AttendanceChoice::NotAttending`] so the backend
/// always receives a value for every event.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum AttendanceChoice {
	Attending,
	NotAttending,
}

impl AttendanceChoice {
	pub fn form_value(&self) -> &'static str {
		match self {
			Self::Attending => "attending",
			Self::NotAttending => "not_attending",
		}
	}
}

impl From<bool> for AttendanceChoice {
	fn from(checked: bool) -> Self {
		if checked {
			Self::Attending
		} else {
			Self::NotAttending
		}
	}
}

/// Whether the party requests lodging arranged by the couple.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum AccommodationChoice {
	Requested,
	Declined,
}

impl AccommodationChoice {
	pub fn form_value(&self) -> &'static str {
		match self {
			Self::Requested => "yes",
			Self::Declined => "no",
		}
	}
}

impl From<bool> for AccommodationChoice {
	fn from(checked: bool) -> Self {
		if checked {
			Self::Requested
		} else {
			Self::Declined
		}
	}
}

/// A complete RSVP as submitted to the backend.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RsvpSubmission {
	pub name: String,
	pub email: String,
	pub guest_count: u32,
	pub wedding_attendance: AttendanceChoice,
	pub welcome_lunch: AttendanceChoice,
	pub farewell_lunch: AttendanceChoice,
	pub accommodation: AccommodationChoice,
	pub dietary_restrictions: String,
	pub message: String,
	pub guest_names: Vec<String>,
}

impl RsvpSubmission {
	/// Produces the form-encoded field pairs for the submission request. The
	/// repeated `guest_names[]` field carries the full roster, primary contact
	/// first.
	pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = vec![
			("name", self.name.clone()),
			("email", self.email.clone()),
			("guest_count", self.guest_count.to_string()),
			("wedding_attendance", self.wedding_attendance.form_value().to_string()),
			("welcome_lunch", self.welcome_lunch.form_value().to_string()),
			("farewell_lunch", self.farewell_lunch.form_value().to_string()),
			("accommodation", self.accommodation.form_value().to_string()),
			("dietary_restrictions", self.dietary_restrictions.clone()),
			("message", self.message.clone()),
		];
		for guest_name in self.guest_names.iter() {
			pairs.push(("guest_names[]", guest_name.clone()));
		}
		pairs
	}
}

/// Builds the guest roster submitted with an RSVP. The primary contact always
/// leads the roster; additional names follow in entry order. Blank entries are
/// dropped, and surviving names are trimmed.
pub fn merge_guest_names(primary_name: &str, additional_names: &[String]) -> Vec<String> {
	let mut all_names = vec![primary_name.to_string()];
	all_names.extend(additional_names.iter().cloned());
	all_names
		.iter()
		.filter(|name| !name.trim().is_empty())
		.map(|name| name.trim().to_string())
		.collect()
}

/// Response envelope from the RSVP endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RsvpResponse {
	pub success: bool,
	#[serde(default)]
	pub message: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn submission_with_defaults() -> RsvpSubmission {
		RsvpSubmission {
			name: String::from("Avery Quinn"),
			email: String::from("avery@example.com"),
			guest_count: 1,
			wedding_attendance: AttendanceChoice::from(false),
			welcome_lunch: AttendanceChoice::from(false),
			farewell_lunch: AttendanceChoice::from(false),
			accommodation: AccommodationChoice::from(false),
			dietary_restrictions: String::new(),
			message: String::new(),
			guest_names: vec![String::from("Avery Quinn")],
		}
	}

	fn pair_value<'a>(pairs: &'a [(&'static str, String)], field: &str) -> Option<&'a str> {
		pairs
			.iter()
			.find(|(name, _)| *name == field)
			.map(|(_, value)| value.as_str())
	}

	#[test]
	fn unset_toggles_submit_explicit_defaults() {
		let pairs = submission_with_defaults().form_pairs();
		assert_eq!(pair_value(&pairs, "wedding_attendance"), Some("not_attending"));
		assert_eq!(pair_value(&pairs, "welcome_lunch"), Some("not_attending"));
		assert_eq!(pair_value(&pairs, "farewell_lunch"), Some("not_attending"));
		assert_eq!(pair_value(&pairs, "accommodation"), Some("no"));
	}

	#[test]
	fn set_toggles_submit_affirmative_values() {
		let mut submission = submission_with_defaults();
		submission.wedding_attendance = AttendanceChoice::from(true);
		submission.accommodation = AccommodationChoice::from(true);
		let pairs = submission.form_pairs();
		assert_eq!(pair_value(&pairs, "wedding_attendance"), Some("attending"));
		assert_eq!(pair_value(&pairs, "accommodation"), Some("yes"));
	}

	#[test]
	fn roster_repeats_guest_names_field() {
		let mut submission = submission_with_defaults();
		submission.guest_names = vec![String::from("Avery Quinn"), String::from("Jordan Quinn")];
		let pairs = submission.form_pairs();
		let roster: Vec<&str> = pairs
			.iter()
			.filter(|(name, _)| *name == "guest_names[]")
			.map(|(_, value)| value.as_str())
			.collect();
		assert_eq!(roster, vec!["Avery Quinn", "Jordan Quinn"]);
	}

	#[test]
	fn merge_puts_primary_contact_first() {
		let additional = vec![String::from("Jordan Quinn"), String::from("Riley Quinn")];
		let names = merge_guest_names("Avery Quinn", &additional);
		assert_eq!(names, vec!["Avery Quinn", "Jordan Quinn", "Riley Quinn"]);
	}

	#[test]
	fn merge_drops_blank_names_and_trims() {
		let additional = vec![
			String::from("   "),
			String::from(" Jordan Quinn "),
			String::new(),
		];
		let names = merge_guest_names("Avery Quinn", &additional);
		assert_eq!(names, vec!["Avery Quinn", "Jordan Quinn"]);
	}

	#[test]
	fn response_decodes_success_without_message() {
		let response: RsvpResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
		assert!(response.success);
		assert!(response.message.is_none());
	}

	#[test]
	fn response_decodes_failure_message() {
		let response: RsvpResponse =
			serde_json::from_str(r#"{"success": false, "message": "The guest list is full."}"#).unwrap();
		assert!(!response.success);
		assert_eq!(response.message.as_deref(), Some("The guest list is full."));
	}
}
