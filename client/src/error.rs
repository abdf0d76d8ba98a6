// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Errors that can occur delivering an RSVP to the backend
pub enum SubmissionError {
	Request(gloo_net::Error),
	Status(u16),
	InvalidResponse(serde_json::Error),
}

impl fmt::Display for SubmissionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Request(error) => write!(f, "Failed to send the submission request: {}", error),
			Self::Status(status) => write!(f, "The submission endpoint responded with status {}", status),
			Self::InvalidResponse(error) => write!(f, "An invalid response was received: {}", error),
		}
	}
}

impl From<gloo_net::Error> for SubmissionError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Request(error)
	}
}

impl From<serde_json::Error> for SubmissionError {
	fn from(error: serde_json::Error) -> Self {
		Self::InvalidResponse(error)
	}
}
