// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::countdown::Countdown;
use crate::effects;
use sycamore::prelude::*;

#[component]
pub fn HeroSection<G: Html>(ctx: Scope<'_>) -> View<G> {
	let parallax_offset = create_rc_signal(0.0f64);
	effects::attach_parallax(parallax_offset.clone());

	view! {
		ctx,
		section(id="home", class="hero-section", style=format!("transform: translateY({}px)", parallax_offset.get())) {
			div(class="hero-content") {
				p(class="hero-intro") { "Together with their families" }
				h1(class="hero-title") { "Crystal & Yang" }
				p(class="hero-subtitle") { "invite you to celebrate their wedding" }
				p(class="hero-date") { "May 12, 2026 at 2 PM" }
				Countdown()
			}
		}
	}
}
