// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::effects;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn NavBar<G: Html>(ctx: Scope<'_>) -> View<G> {
	let menu_is_open = create_signal(ctx, false);
	let hamburger_class = create_memo(ctx, || {
		if *menu_is_open.get() {
			"hamburger active"
		} else {
			"hamburger"
		}
	});
	let menu_class = create_memo(ctx, || {
		if *menu_is_open.get() {
			"nav-menu active"
		} else {
			"nav-menu"
		}
	});

	let toggle_menu_handler = |_event: WebEvent| {
		menu_is_open.set(!*menu_is_open.get());
	};

	// Links scroll in-page instead of navigating, and choosing one closes the
	// mobile menu.
	let nav_link_handler = |section_id: &'static str| {
		move |event: WebEvent| {
			event.prevent_default();
			menu_is_open.set(false);
			effects::scroll_to_section(section_id);
		}
	};

	view! {
		ctx,
		nav(class="navbar") {
			div(class="nav-brand") { "Crystal & Yang" }
			div(class=*hamburger_class.get(), on:click=toggle_menu_handler) {
				span(class="hamburger-bar") {}
				span(class="hamburger-bar") {}
				span(class="hamburger-bar") {}
			}
			ul(class=*menu_class.get()) {
				li(class="nav-item") {
					a(class="nav-link", href="#home", on:click=nav_link_handler("home")) { "Home" }
				}
				li(class="nav-item") {
					a(class="nav-link", href="#rsvp", on:click=nav_link_handler("rsvp")) { "RSVP" }
				}
				li(class="nav-item") {
					a(class="nav-link", href="#faq", on:click=nav_link_handler("faq")) { "Q&A" }
				}
			}
		}
	}
}
