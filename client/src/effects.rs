// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
	Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
	ScrollToOptions,
};

/// Height of the fixed navigation bar; anchor scrolling stops short by this much.
const FIXED_HEADER_OFFSET: f64 = 70.0;

/// Regions that fade in the first time they enter the viewport.
const REVEAL_TARGET_SELECTOR: &str = ".hero-content, .rsvp-container, .faq-container";
const REVEAL_CLASS: &str = "fade-in-up";

const PARALLAX_RATE: f64 = -0.5;

/// Scrolls smoothly to a page section, leaving room for the fixed header.
/// Unknown section IDs scroll nowhere.
pub fn scroll_to_section(section_id: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};
	let Some(element) = document.get_element_by_id(section_id) else {
		return;
	};
	let html_element: HtmlElement = element.unchecked_into();
	let offset_top = f64::from(html_element.offset_top()) - FIXED_HEADER_OFFSET;

	let mut scroll_options = ScrollToOptions::new();
	scroll_options.top(offset_top);
	scroll_options.behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&scroll_options);
}

/// Watches the page's designated regions and applies the reveal class as each
/// one first intersects the viewport. The observer callback stays alive for
/// the rest of the page session.
pub fn observe_reveal_targets() {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};

	let callback = Closure::wrap(Box::new(
		move |entries: js_sys::Array, _observer: IntersectionObserver| {
			for entry in entries.iter() {
				let entry: IntersectionObserverEntry = entry.unchecked_into();
				if entry.is_intersecting() {
					let _ = entry.target().class_list().add_1(REVEAL_CLASS);
				}
			}
		},
	) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

	let mut observer_options = IntersectionObserverInit::new();
	observer_options.threshold(&JsValue::from(0.1));
	observer_options.root_margin("0px 0px -50px 0px");

	let Ok(observer) =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &observer_options)
	else {
		return;
	};
	let Ok(targets) = document.query_selector_all(REVEAL_TARGET_SELECTOR) else {
		return;
	};
	for target_index in 0..targets.length() {
		if let Some(node) = targets.get(target_index) {
			let element: Element = node.unchecked_into();
			observer.observe(&element);
		}
	}
	callback.forget();
}

/// Feeds the scroll position into the hero section's vertical offset. The
/// listener stays attached for the rest of the page session.
pub fn attach_parallax(offset: RcSignal<f64>) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let listener_window = window.clone();
	let callback = Closure::wrap(Box::new(move || {
		let scrolled = listener_window.page_y_offset().unwrap_or(0.0);
		offset.set(scrolled * PARALLAX_RATE);
	}) as Box<dyn FnMut()>);
	if window
		.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
		.is_ok()
	{
		callback.forget();
	}
}

/// Blocking alert used where a failure must interrupt the guest.
pub fn blocking_alert(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}
