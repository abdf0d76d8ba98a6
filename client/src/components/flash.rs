// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use sycamore::futures::spawn_local;
use sycamore::prelude::*;

const FLASH_VISIBLE_MILLIS: u32 = 5_000;
const FLASH_FADE_MILLIS: u32 = 300;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlashKind {
	Success,
	Error,
	Info,
}

impl FlashKind {
	fn banner_class(&self) -> &'static str {
		match self {
			Self::Success => "flash-message flash-success",
			Self::Error => "flash-message flash-error",
			Self::Info => "flash-message flash-info",
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlashMessage {
	id: u32,
	kind: FlashKind,
	text: String,
	fading: bool,
}

/// Page-wide store of transient banners. Any component can post one; each
/// banner fades after a fixed interval and is removed shortly after.
#[derive(Clone)]
pub struct FlashSignals {
	messages: RcSignal<Vec<FlashMessage>>,
	next_id: Rc<AtomicU32>,
}

impl FlashSignals {
	pub fn new() -> Self {
		Self {
			messages: create_rc_signal(Vec::new()),
			next_id: Rc::new(AtomicU32::new(0)),
		}
	}

	pub fn add(&self, kind: FlashKind, text: String) {
		let id = self.next_id.fetch_add(1, Ordering::AcqRel);
		self.messages.modify().push(FlashMessage {
			id,
			kind,
			text,
			fading: false,
		});

		let messages = self.messages.clone();
		spawn_local(async move {
			TimeoutFuture::new(FLASH_VISIBLE_MILLIS).await;
			{
				let mut messages = messages.modify();
				if let Some(message) = messages.iter_mut().find(|message| message.id == id) {
					message.fading = true;
				}
			}
			TimeoutFuture::new(FLASH_FADE_MILLIS).await;
			messages.modify().retain(|message| message.id != id);
		});
	}
}

#[component]
pub fn FlashMessageList<G: Html>(ctx: Scope<'_>) -> View<G> {
	let flash: &FlashSignals = use_context(ctx);
	let messages = create_memo(ctx, {
		let messages = flash.messages.clone();
		move || (*messages.get()).clone()
	});

	view! {
		ctx,
		div(class="flash-messages") {
			Keyed(
				iterable=messages,
				key=|message| message.id,
				view=|ctx, message| {
					let banner_class = if message.fading {
						format!("{} fading", message.kind.banner_class())
					} else {
						message.kind.banner_class().to_string()
					};
					view! {
						ctx,
						div(class=banner_class) { (message.text) }
					}
				}
			)
		}
	}
}
