// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{Local, NaiveDate, NaiveDateTime};
use gloo_timers::callback::Interval;
use sycamore::prelude::*;

const UNTIL_LABEL: &str = "Counting down to our special day";
const ARRIVED_LABEL: &str = "Today is our special day!";
const SINCE_LABEL: &str = "Days since our special day";

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// The moment the ceremony begins, in the site visitor's local time.
///
/// # Panics
///
/// Panics if the configured wedding date isn't a valid calendar date, which
/// would be a programming error in this module.
fn wedding_datetime() -> NaiveDateTime {
	NaiveDate::from_ymd_opt(2026, 5, 12)
		.and_then(|date| date.and_hms_opt(14, 0, 0))
		.expect("Wedding date is a valid calendar date")
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CountdownPhase {
	/// The wedding is still ahead.
	Until,
	/// The wedding is today.
	Arrived,
	/// The wedding is more than a day in the past.
	Since,
}

/// One second's rendering of the countdown. All components are non-negative;
/// once the target passes, they measure time elapsed since it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CountdownParts {
	pub phase: CountdownPhase,
	pub days: i64,
	pub hours: i64,
	pub minutes: i64,
	pub seconds: i64,
}

impl CountdownParts {
	pub fn label(&self) -> &'static str {
		match self.phase {
			CountdownPhase::Until => UNTIL_LABEL,
			CountdownPhase::Arrived => ARRIVED_LABEL,
			CountdownPhase::Since => SINCE_LABEL,
		}
	}

	/// Two-digit rendering for the hour/minute/second slots.
	pub fn padded(value: i64) -> String {
		format!("{:02}", value)
	}
}

/// Splits the signed distance from `now` to `target` into display units.
pub fn countdown_parts(target: NaiveDateTime, now: NaiveDateTime) -> CountdownParts {
	let distance = target.signed_duration_since(now);
	let until_target = distance > chrono::Duration::zero();

	let total_seconds = distance.num_seconds().abs();
	let days = total_seconds / SECONDS_PER_DAY;
	let hours = (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
	let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
	let seconds = total_seconds % SECONDS_PER_MINUTE;

	let phase = if until_target {
		CountdownPhase::Until
	} else if days == 0 {
		CountdownPhase::Arrived
	} else {
		CountdownPhase::Since
	};

	CountdownParts {
		phase,
		days,
		hours,
		minutes,
		seconds,
	}
}

#[component]
pub fn Countdown<G: Html>(ctx: Scope<'_>) -> View<G> {
	let parts = create_rc_signal(countdown_parts(wedding_datetime(), Local::now().naive_local()));

	let tick_interval = Interval::new(1_000, {
		let parts = parts.clone();
		move || {
			parts.set(countdown_parts(wedding_datetime(), Local::now().naive_local()));
		}
	});
	tick_interval.forget();

	let label = create_memo(ctx, {
		let parts = parts.clone();
		move || parts.get().label()
	});
	let days = create_memo(ctx, {
		let parts = parts.clone();
		move || parts.get().days.to_string()
	});
	let hours = create_memo(ctx, {
		let parts = parts.clone();
		move || CountdownParts::padded(parts.get().hours)
	});
	let minutes = create_memo(ctx, {
		let parts = parts.clone();
		move || CountdownParts::padded(parts.get().minutes)
	});
	let seconds = create_memo(ctx, {
		let parts = parts.clone();
		move || CountdownParts::padded(parts.get().seconds)
	});

	view! {
		ctx,
		div(class="countdown") {
			p(class="countdown-label") { (label.get()) }
			div(class="countdown-timer") {
				div(class="countdown-unit") {
					span(id="days", class="countdown-value") { (days.get()) }
					span(class="countdown-unit-label") { "Days" }
				}
				div(class="countdown-unit") {
					span(id="hours", class="countdown-value") { (hours.get()) }
					span(class="countdown-unit-label") { "Hours" }
				}
				div(class="countdown-unit") {
					span(id="minutes", class="countdown-value") { (minutes.get()) }
					span(class="countdown-unit-label") { "Minutes" }
				}
				div(class="countdown-unit") {
					span(id="seconds", class="countdown-value") { (seconds.get()) }
					span(class="countdown-unit-label") { "Seconds" }
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
		NaiveDate::from_ymd_opt(year, month, day)
			.unwrap()
			.and_hms_opt(hour, minute, second)
			.unwrap()
	}

	#[test]
	fn future_target_counts_down() {
		let target = datetime(2026, 5, 12, 14, 0, 0);
		let now = datetime(2026, 5, 10, 12, 30, 15);
		let parts = countdown_parts(target, now);
		assert_eq!(parts.phase, CountdownPhase::Until);
		assert_eq!(parts.days, 2);
		assert_eq!(parts.hours, 1);
		assert_eq!(parts.minutes, 29);
		assert_eq!(parts.seconds, 45);
	}

	#[test]
	fn reaching_the_target_switches_to_arrived_with_zeroes() {
		let target = datetime(2026, 5, 12, 14, 0, 0);
		let parts = countdown_parts(target, target);
		assert_eq!(parts.phase, CountdownPhase::Arrived);
		assert_eq!((parts.days, parts.hours, parts.minutes, parts.seconds), (0, 0, 0, 0));
	}

	#[test]
	fn the_wedding_day_itself_reads_as_arrived() {
		let target = datetime(2026, 5, 12, 14, 0, 0);
		let now = datetime(2026, 5, 13, 1, 15, 0);
		let parts = countdown_parts(target, now);
		assert_eq!(parts.phase, CountdownPhase::Arrived);
		assert_eq!(parts.days, 0);
		assert_eq!(parts.hours, 11);
	}

	#[test]
	fn a_past_target_counts_elapsed_time() {
		let target = datetime(2026, 5, 12, 14, 0, 0);
		let now = datetime(2026, 5, 20, 15, 1, 2);
		let parts = countdown_parts(target, now);
		assert_eq!(parts.phase, CountdownPhase::Since);
		assert_eq!(parts.days, 8);
		assert_eq!(parts.hours, 1);
		assert_eq!(parts.minutes, 1);
		assert_eq!(parts.seconds, 2);
		assert!(parts.days >= 0 && parts.hours >= 0 && parts.minutes >= 0 && parts.seconds >= 0);
	}

	#[test]
	fn one_second_before_the_target_still_counts_down() {
		let target = datetime(2026, 5, 12, 14, 0, 0);
		let now = datetime(2026, 5, 12, 13, 59, 59);
		let parts = countdown_parts(target, now);
		assert_eq!(parts.phase, CountdownPhase::Until);
		assert_eq!((parts.days, parts.hours, parts.minutes, parts.seconds), (0, 0, 0, 1));
	}

	#[test]
	fn labels_follow_the_phase() {
		let target = datetime(2026, 5, 12, 14, 0, 0);
		assert_eq!(
			countdown_parts(target, datetime(2026, 5, 1, 0, 0, 0)).label(),
			UNTIL_LABEL
		);
		assert_eq!(countdown_parts(target, target).label(), ARRIVED_LABEL);
		assert_eq!(
			countdown_parts(target, datetime(2026, 6, 1, 0, 0, 0)).label(),
			SINCE_LABEL
		);
	}

	#[test]
	fn slot_rendering_is_zero_padded() {
		assert_eq!(CountdownParts::padded(0), "00");
		assert_eq!(CountdownParts::padded(7), "07");
		assert_eq!(CountdownParts::padded(59), "59");
	}
}
