// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::flash::{FlashKind, FlashSignals};
use crate::components::modal;
use crate::effects;
use crate::form_steps::StepSequence;
use crate::http;
use crate::submission::{self, SubmissionPhase};
use crate::validation;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, HtmlInputElement, HtmlSelectElement};
use wedding_site_shared::rsvp::{merge_guest_names, AccommodationChoice, AttendanceChoice, RsvpSubmission};

const STEP_COUNT: usize = 3;
const LARGE_GROUP_THRESHOLD: u32 = 5;

const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
const DEFAULT_SUCCESS_NOTICE: &str = "RSVP submitted successfully!";

const BUTTON_COLOR: &str = "#1A2E35";
const BUTTON_HOVER_COLOR: &str = "#2B4A5A";
const BUTTON_BUSY_COLOR: &str = "#666";

/// Selector values arrive as strings; anything unparseable falls back to a
/// single guest. The primary contact fills the first roster slot, so this is
/// the number of extra name fields to generate.
fn additional_field_count(selected_value: &str) -> usize {
	let guest_count: usize = selected_value.parse().unwrap_or(1);
	guest_count.max(1) - 1
}

fn guest_field_placeholder(field_number: usize) -> String {
	format!("Additional guest {} name", field_number)
}

fn selected_guest_count(selected_value: &str) -> u32 {
	let guest_count: u32 = selected_value.parse().unwrap_or(1);
	guest_count.max(1)
}

fn large_group_note_is_visible(selected_value: &str) -> bool {
	selected_guest_count(selected_value) >= LARGE_GROUP_THRESHOLD
}

#[component]
pub fn RsvpSection<G: Html>(ctx: Scope<'_>) -> View<G> {
	let phase: &Signal<SubmissionPhase> = use_context(ctx);

	let step = create_signal(ctx, StepSequence::new(STEP_COUNT));

	let primary_name = create_signal(ctx, String::new());
	let email = create_signal(ctx, String::new());
	let dietary_restrictions = create_signal(ctx, String::new());
	let message_text = create_signal(ctx, String::new());

	let wedding_attendance = create_signal(ctx, false);
	let welcome_lunch = create_signal(ctx, false);
	let farewell_lunch = create_signal(ctx, false);
	// The accommodation toggle starts checked; unchecking it submits "no".
	let accommodation = create_signal(ctx, true);

	let guest_count_value = create_signal(ctx, String::from("1"));
	let additional_fields = create_signal(ctx, Vec::<(usize, String)>::new());
	let additional_names = create_rc_signal(Vec::<String>::new());

	let show_required_errors = create_signal(ctx, false);
	// None until the guest blurs a non-empty email field.
	let email_marker = create_signal(ctx, None::<bool>);
	let rsvp_submitted = create_signal(ctx, false);

	let next_hovered = create_signal(ctx, false);
	let submit_hovered = create_signal(ctx, false);

	let name_class = create_memo(ctx, || {
		if *show_required_errors.get() && validation::is_blank(&primary_name.get()) {
			"error"
		} else {
			""
		}
	});
	let email_class = create_memo(ctx, || {
		if *show_required_errors.get() && validation::is_blank(&email.get()) {
			return "error";
		}
		match *email_marker.get() {
			Some(true) => "valid",
			Some(false) => "error",
			None => "",
		}
	});

	let advance_step_handler = |_event: WebEvent| {
		let mut next_position = *step.get();
		next_position.advance();
		step.set(next_position);
	};
	let retreat_step_handler = |_event: WebEvent| {
		let mut next_position = *step.get();
		next_position.retreat();
		step.set(next_position);
	};

	let email_blur_handler = |_event: WebEvent| {
		let address = email.get();
		if address.is_empty() {
			email_marker.set(None);
		} else {
			email_marker.set(Some(validation::email_format_is_valid(&address)));
		}
	};

	// Changing the count regenerates the whole extra-field set; previously
	// entered additional names do not survive the change.
	let guest_count_change_handler = {
		let additional_names = additional_names.clone();
		move |change_event: WebEvent| {
			let event_target = change_event.target().unwrap();
			let selector: &HtmlSelectElement = event_target.dyn_ref().unwrap();
			let selected_value = selector.value();

			let extra_field_count = additional_field_count(&selected_value);
			additional_names.set(vec![String::new(); extra_field_count]);
			additional_fields.set(
				(1..=extra_field_count)
					.map(|field_number| (field_number - 1, guest_field_placeholder(field_number)))
					.collect(),
			);
			guest_count_value.set(selected_value);
		}
	};

	let form_submission_handler = {
		let additional_names = additional_names.clone();
		move |submit_event: WebEvent| {
			submit_event.prevent_default();

			if phase.get().submit_in_flight() {
				return;
			}

			let mut required_values = vec![(*primary_name.get()).clone(), (*email.get()).clone()];
			required_values.extend(additional_names.get().iter().cloned());
			let any_required_blank = required_values.iter().any(|value| validation::is_blank(value));
			show_required_errors.set(any_required_blank);
			if any_required_blank {
				effects::blocking_alert(REQUIRED_FIELDS_MESSAGE);
				return;
			}

			let submission = RsvpSubmission {
				name: primary_name.get().trim().to_string(),
				email: email.get().trim().to_string(),
				guest_count: selected_guest_count(&guest_count_value.get()),
				wedding_attendance: AttendanceChoice::from(*wedding_attendance.get()),
				welcome_lunch: AttendanceChoice::from(*welcome_lunch.get()),
				farewell_lunch: AttendanceChoice::from(*farewell_lunch.get()),
				accommodation: AccommodationChoice::from(*accommodation.get()),
				dietary_restrictions: (*dietary_restrictions.get()).clone(),
				message: (*message_text.get()).clone(),
				guest_names: merge_guest_names(&primary_name.get(), &additional_names.get()),
			};

			phase.set(SubmissionPhase::Submitting);
			spawn_local_scoped(ctx, async move {
				let result = http::send_rsvp(&submission).await;
				match submission::phase_after_submission(&result) {
					SubmissionPhase::Succeeded => {
						rsvp_submitted.set(true);
						let notice = result
							.ok()
							.and_then(|response| response.message)
							.unwrap_or_else(|| String::from(DEFAULT_SUCCESS_NOTICE));
						let flash: &FlashSignals = use_context(ctx);
						flash.add(FlashKind::Success, notice);
						modal::surface_submission_success(phase);
					}
					SubmissionPhase::Failed(message) => modal::surface_submission_error(phase, message),
					next_phase => phase.set(next_phase),
				}
			});
		}
	};

	view! {
		ctx,
		section(id="rsvp", class="rsvp-section") {
			div(class="rsvp-container") {
				h2(class="section-title") { "RSVP" }
				p(class="rsvp-deadline") { "Kindly respond by April 1, 2026." }

				div(
					id="confirmation",
					class="rsvp-confirmation",
					style=(if *rsvp_submitted.get() { "display: block" } else { "display: none" })
				) {
					h3 { "Thank you!" }
					p { "Your RSVP has been received." }
				}

				form(
					id="rsvp-form",
					style=(if *rsvp_submitted.get() { "display: none" } else { "" }),
					on:submit=form_submission_handler
				) {
					div(
						class="form-step",
						style=(if step.get().panel_is_visible(0) { "display: block" } else { "display: none" })
					) {
						h3(class="form-step-title") { "Who are you?" }
						div(class="form-field") {
							label(for="rsvp-name") { "Full name" }
							input(id="rsvp-name", type="text", class=*name_class.get(), bind:value=primary_name)
						}
						div(class="form-field") {
							label(for="rsvp-email") { "Email address" }
							input(
								id="rsvp-email",
								type="email",
								class=*email_class.get(),
								bind:value=email,
								on:blur=email_blur_handler
							)
						}
					}

					div(
						class="form-step",
						style=(if step.get().panel_is_visible(1) { "display: block" } else { "display: none" })
					) {
						h3(class="form-step-title") { "Will you join us?" }
						label(class="toggle-field") {
							input(type="checkbox", bind:checked=wedding_attendance)
							span { "Wedding ceremony & reception" }
						}
						label(class="toggle-field") {
							input(type="checkbox", bind:checked=welcome_lunch)
							span { "Welcome lunch" }
						}
						label(class="toggle-field") {
							input(type="checkbox", bind:checked=farewell_lunch)
							span { "Farewell lunch" }
						}
						label(class="toggle-field") {
							input(id="accommodation-toggle", type="checkbox", bind:checked=accommodation)
							span { "Please arrange accommodation for us" }
						}
						div(class="form-field") {
							label(for="guest-count") { "How many of you are coming?" }
							select(id="guest-count", on:change=guest_count_change_handler) {
								option(value="1") { "1" }
								option(value="2") { "2" }
								option(value="3") { "3" }
								option(value="4") { "4" }
								option(value="5") { "5" }
								option(value="6") { "6" }
							}
						}
						p(
							id="large-group-note",
							class="large-group-note",
							style=(if large_group_note_is_visible(&guest_count_value.get()) {
								"display: block"
							} else {
								"display: none"
							})
						) {
							"That's quite the party! Please also reach out to us directly so we can plan seating."
						}
						div(id="name-fields") {
							p(class="name-fields-note") {
								"Primary contact name will be automatically included. Add additional guests below."
							}
							Indexed(
								iterable=additional_fields,
								view={
									let additional_names = additional_names.clone();
									move |ctx, (field_index, placeholder)| {
										let field_input_handler = {
											let additional_names = additional_names.clone();
											move |input_event: WebEvent| {
												let event_target = input_event.target().unwrap();
												let field: &HtmlInputElement = event_target.dyn_ref().unwrap();
												let mut names = additional_names.modify();
												if let Some(slot) = names.get_mut(field_index) {
													*slot = field.value();
												}
											}
										};
										let field_class = create_memo(ctx, {
											let additional_names = additional_names.clone();
											move || {
												let names = additional_names.get();
												let field_is_blank = names
													.get(field_index)
													.map(|name| validation::is_blank(name))
													.unwrap_or(false);
												if *show_required_errors.get() && field_is_blank {
													"error"
												} else {
													""
												}
											}
										});
										view! {
											ctx,
											input(
												type="text",
												class=*field_class.get(),
												placeholder=placeholder,
												on:input=field_input_handler
											)
										}
									}
								}
							)
						}
					}

					div(
						class="form-step",
						style=(if step.get().panel_is_visible(2) { "display: block" } else { "display: none" })
					) {
						h3(class="form-step-title") { "Anything else?" }
						div(class="form-field") {
							label(for="dietary-restrictions") { "Dietary restrictions" }
							input(id="dietary-restrictions", type="text", bind:value=dietary_restrictions)
						}
						div(class="form-field") {
							label(for="rsvp-message") { "A note for the couple" }
							textarea(id="rsvp-message", bind:value=message_text) {}
						}
					}

					div(class="form-navigation") {
						button(
							id="prev-btn",
							type="button",
							style=(if step.get().controls().show_previous {
								"display: inline-block"
							} else {
								"display: none"
							}),
							on:click=retreat_step_handler
						) { "Previous" }
						button(
							id="next-btn",
							type="button",
							style=format!(
								"display: {}; background: {}",
								if step.get().controls().show_next { "inline-block" } else { "none" },
								if *next_hovered.get() { BUTTON_HOVER_COLOR } else { BUTTON_COLOR }
							),
							on:click=advance_step_handler,
							on:mouseover=|_event: WebEvent| next_hovered.set(true),
							on:mouseout=|_event: WebEvent| next_hovered.set(false)
						) { "Next" }
						button(
							id="submit-btn",
							type="submit",
							disabled=phase.get().submit_in_flight(),
							style=format!(
								"display: {}; background: {}",
								if step.get().controls().show_submit { "inline-block" } else { "none" },
								if phase.get().submit_in_flight() {
									BUTTON_BUSY_COLOR
								} else if *submit_hovered.get() {
									BUTTON_HOVER_COLOR
								} else {
									BUTTON_COLOR
								}
							),
							on:mouseover=|_event: WebEvent| submit_hovered.set(true),
							on:mouseout=|_event: WebEvent| submit_hovered.set(false)
						) { (phase.get().submit_label()) }
					}
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn extra_field_count_excludes_the_primary_contact() {
		assert_eq!(additional_field_count("1"), 0);
		assert_eq!(additional_field_count("2"), 1);
		assert_eq!(additional_field_count("6"), 5);
	}

	#[test]
	fn unparseable_count_defaults_to_a_single_guest() {
		assert_eq!(additional_field_count(""), 0);
		assert_eq!(additional_field_count("soon"), 0);
		assert_eq!(additional_field_count("0"), 0);
		assert_eq!(selected_guest_count(""), 1);
		assert_eq!(selected_guest_count("0"), 1);
	}

	#[test]
	fn generated_fields_are_numbered_from_one() {
		let placeholders: Vec<String> = (1..=3).map(guest_field_placeholder).collect();
		assert_eq!(
			placeholders,
			vec![
				"Additional guest 1 name",
				"Additional guest 2 name",
				"Additional guest 3 name",
			]
		);
	}

	#[test]
	fn roster_size_matches_the_selected_count() {
		let extra_field_count = additional_field_count("4");
		assert_eq!(extra_field_count, 3);
		let additional: Vec<String> = (1..=extra_field_count)
			.map(|field_number| format!("Guest {}", field_number))
			.collect();
		let roster = merge_guest_names("Avery Quinn", &additional);
		assert_eq!(roster.len(), 4);
		assert_eq!(roster[0], "Avery Quinn");
	}

	#[test]
	fn large_group_note_appears_at_the_threshold() {
		assert!(!large_group_note_is_visible("4"));
		assert!(large_group_note_is_visible("5"));
		assert!(large_group_note_is_visible("6"));
	}
}
