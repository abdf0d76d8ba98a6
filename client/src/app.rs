// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::faq::FaqSection;
use crate::components::flash::{FlashMessageList, FlashSignals};
use crate::components::hero::HeroSection;
use crate::components::modal::{ErrorModal, SuccessModal};
use crate::components::nav_bar::NavBar;
use crate::components::rsvp_form::RsvpSection;
use crate::effects;
use crate::submission::SubmissionPhase;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	let submission_phase = create_signal(ctx, SubmissionPhase::Idle);
	provide_context_ref(ctx, submission_phase);
	provide_context(ctx, FlashSignals::new());

	// The reveal observer needs the section markup in the document, so it
	// attaches once the initial render has run.
	spawn_local_scoped(ctx, async {
		effects::observe_reveal_targets();
	});

	view! {
		ctx,
		NavBar()
		FlashMessageList()
		HeroSection()
		RsvpSection()
		FaqSection()
		SuccessModal()
		ErrorModal()
	}
}
