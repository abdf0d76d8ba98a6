// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::SubmissionError;
use gloo_net::http::Request;
use web_sys::{Url, UrlSearchParams};
use wedding_site_shared::rsvp::{RsvpResponse, RsvpSubmission};
use wedding_site_shared::SUBMIT_RSVP_PATH;

/// Gets the URL of the RSVP submission endpoint in a way that adapts to any URL structure at which the site could be
/// hosted.
///
/// # Panics
///
/// This function panics when the browser context (window, location, URL, etc.) is inaccessible.
pub fn submit_endpoint() -> String {
	let js_location = web_sys::window()
		.expect("Failed to get browser window context")
		.location();
	let web_endpoint = js_location.href().expect("Failed to get current address");
	let url = Url::new(&web_endpoint).expect("Failed to generate URL instance");
	url.set_search(""); // Query string is unnecessary and should be cleared
	let url_path = url.pathname();
	let submit_path = if let Some(path) = url_path.strip_suffix('/') {
		format!("{}/{}", path, SUBMIT_RSVP_PATH)
	} else {
		format!("{}/{}", url_path, SUBMIT_RSVP_PATH)
	};
	url.set_pathname(&submit_path);
	url.to_string().into()
}

/// Delivers a completed RSVP to the backend as a form-encoded POST and decodes
/// the response envelope.
///
/// # Errors
///
/// Errors occur when the request can't be sent, when the endpoint responds
/// with a non-success status, and when the response body isn't the expected
/// JSON envelope.
///
/// # Panics
///
/// This function panics when the browser's form parameter builder is inaccessible.
pub async fn send_rsvp(submission: &RsvpSubmission) -> Result<RsvpResponse, SubmissionError> {
	let form_params = UrlSearchParams::new().expect("Failed to create form parameter builder");
	for (field, value) in submission.form_pairs() {
		form_params.append(field, &value);
	}

	let request = Request::post(&submit_endpoint()).body(form_params)?;
	let response = request.send().await?;
	if !response.ok() {
		return Err(SubmissionError::Status(response.status()));
	}

	let body = response.text().await?;
	Ok(serde_json::from_str(&body)?)
}
