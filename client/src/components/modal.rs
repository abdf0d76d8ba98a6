// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::effects;
use crate::submission::SubmissionPhase;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

pub const SUCCESS_MODAL_ID: &str = "success-modal";
pub const ERROR_MODAL_ID: &str = "error-modal";

fn modal_is_mounted(modal_id: &str) -> bool {
	web_sys::window()
		.and_then(|window| window.document())
		.map(|document| document.get_element_by_id(modal_id).is_some())
		.unwrap_or(false)
}

/// Surfaces a successful submission. The success modal takes it when mounted;
/// otherwise the flow settles back to idle and the inline confirmation is the
/// only acknowledgment.
pub fn surface_submission_success(phase: &Signal<SubmissionPhase>) {
	if modal_is_mounted(SUCCESS_MODAL_ID) {
		phase.set(SubmissionPhase::Succeeded);
	} else {
		phase.set(SubmissionPhase::Idle);
	}
}

/// Surfaces a failed submission. The error modal takes it when mounted;
/// otherwise the message becomes a blocking alert and the flow settles back to
/// idle so the guest can resubmit.
pub fn surface_submission_error(phase: &Signal<SubmissionPhase>, message: String) {
	if modal_is_mounted(ERROR_MODAL_ID) {
		phase.set(SubmissionPhase::Failed(message));
	} else {
		effects::blocking_alert(&message);
		phase.set(SubmissionPhase::Idle);
	}
}

#[component]
pub fn SuccessModal<G: Html>(ctx: Scope<'_>) -> View<G> {
	let phase: &Signal<SubmissionPhase> = use_context(ctx);

	// Dismissal restores the submit control through the phase change.
	let close_handler = |_event: WebEvent| {
		phase.set(SubmissionPhase::Idle);
	};
	let surface_click_handler = |event: WebEvent| {
		event.stop_propagation();
	};

	view! {
		ctx,
		div(
			id=SUCCESS_MODAL_ID,
			class="modal",
			style=(if *phase.get() == SubmissionPhase::Succeeded { "display: flex" } else { "display: none" }),
			on:click=close_handler
		) {
			div(class="modal-content", on:click=surface_click_handler) {
				span(class="modal-close", on:click=close_handler) { "×" }
				h2 { "Thank You!" }
				p { "Your RSVP has been received. We can't wait to celebrate with you." }
				button(class="modal-button", on:click=close_handler) { "Close" }
			}
		}
	}
}

#[component]
pub fn ErrorModal<G: Html>(ctx: Scope<'_>) -> View<G> {
	let phase: &Signal<SubmissionPhase> = use_context(ctx);
	let error_message = create_memo(ctx, || {
		phase.get().error_message().unwrap_or_default().to_string()
	});

	let close_handler = |_event: WebEvent| {
		phase.set(SubmissionPhase::Idle);
	};
	let surface_click_handler = |event: WebEvent| {
		event.stop_propagation();
	};

	view! {
		ctx,
		div(
			id=ERROR_MODAL_ID,
			class="modal",
			style=(if phase.get().error_message().is_some() { "display: flex" } else { "display: none" }),
			on:click=close_handler
		) {
			div(class="modal-content", on:click=surface_click_handler) {
				span(class="modal-close", on:click=close_handler) { "×" }
				h2 { "Something Went Wrong" }
				p(id="error-message") { (error_message.get()) }
				button(class="modal-button", on:click=close_handler) { "Try Again" }
			}
		}
	}
}
