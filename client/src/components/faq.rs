// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct FaqEntry {
	question: &'static str,
	answer: &'static str,
}

const FAQ_ENTRIES: [FaqEntry; 5] = [
	FaqEntry {
		question: "When should we arrive?",
		answer: "The ceremony begins at 2 PM on May 12, 2026. Please plan to be seated by 1:45 PM.",
	},
	FaqEntry {
		question: "What should I wear?",
		answer: "Garden formal. The ceremony is outdoors on grass, so choose footwear accordingly.",
	},
	FaqEntry {
		question: "Can I bring my children?",
		answer: "We love your little ones, but the ceremony and reception are adults-only. The welcome lunch is family-friendly.",
	},
	FaqEntry {
		question: "Is there parking at the venue?",
		answer: "Yes, free parking is available on site. A shuttle also runs from the recommended hotels.",
	},
	FaqEntry {
		question: "What if I have dietary restrictions?",
		answer: "Let us know in the RSVP form and the caterers will take care of you.",
	},
];

#[component]
pub fn FaqSection<G: Html>(ctx: Scope<'_>) -> View<G> {
	// At most one answer is open; opening another closes the current one.
	let open_question = create_signal(ctx, None::<usize>);
	let entries = create_signal(
		ctx,
		FAQ_ENTRIES.iter().copied().enumerate().collect::<Vec<(usize, FaqEntry)>>(),
	);

	view! {
		ctx,
		section(id="faq", class="faq-section") {
			div(class="faq-container") {
				h2(class="section-title") { "Questions & Answers" }
				Indexed(
					iterable=entries,
					view=move |ctx, (entry_index, entry)| {
						let question_handler = move |_event: WebEvent| {
							if *open_question.get() == Some(entry_index) {
								open_question.set(None);
							} else {
								open_question.set(Some(entry_index));
							}
						};
						view! {
							ctx,
							div(class="faq-item") {
								div(class="faq-question", on:click=question_handler) {
									span { (entry.question) }
									i(
										class="faq-icon",
										style=(if *open_question.get() == Some(entry_index) {
											"transform: rotate(180deg)"
										} else {
											"transform: rotate(0deg)"
										})
									) {}
								}
								div(
									class=(if *open_question.get() == Some(entry_index) {
										"faq-answer active"
									} else {
										"faq-answer"
									})
								) {
									p { (entry.answer) }
								}
							}
						}
					}
				)
			}
		}
	}
}
