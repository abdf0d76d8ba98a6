// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Tracks which panel of a multi-panel form is active. Exactly one panel is
/// visible at a time, and movement past either end of the sequence is a no-op.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StepSequence {
	current_step: usize,
	step_count: usize,
}

/// Which of the form's navigation controls are shown for the active step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StepControls {
	pub show_previous: bool,
	pub show_next: bool,
	pub show_submit: bool,
}

impl StepSequence {
	pub fn new(step_count: usize) -> Self {
		Self {
			current_step: 0,
			step_count,
		}
	}

	pub fn current_step(&self) -> usize {
		self.current_step
	}

	pub fn is_first(&self) -> bool {
		self.current_step == 0
	}

	pub fn is_last(&self) -> bool {
		self.current_step + 1 >= self.step_count
	}

	pub fn advance(&mut self) {
		if !self.is_last() {
			self.current_step += 1;
		}
	}

	pub fn retreat(&mut self) {
		if !self.is_first() {
			self.current_step -= 1;
		}
	}

	pub fn panel_is_visible(&self, panel_index: usize) -> bool {
		panel_index == self.current_step
	}

	pub fn controls(&self) -> StepControls {
		StepControls {
			show_previous: !self.is_first(),
			show_next: !self.is_last(),
			show_submit: self.is_last(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exactly_one_panel_is_visible_at_every_step() {
		let mut steps = StepSequence::new(3);
		loop {
			let visible_count = (0..3).filter(|panel| steps.panel_is_visible(*panel)).count();
			assert_eq!(visible_count, 1);
			assert!(steps.panel_is_visible(steps.current_step()));
			if steps.is_last() {
				break;
			}
			steps.advance();
		}
	}

	#[test]
	fn advance_stops_at_the_last_step() {
		let mut steps = StepSequence::new(3);
		steps.advance();
		steps.advance();
		assert!(steps.is_last());
		steps.advance();
		assert_eq!(steps.current_step(), 2);
	}

	#[test]
	fn retreat_stops_at_the_first_step() {
		let mut steps = StepSequence::new(3);
		assert!(steps.is_first());
		steps.retreat();
		assert_eq!(steps.current_step(), 0);
		steps.advance();
		steps.retreat();
		assert_eq!(steps.current_step(), 0);
	}

	#[test]
	fn controls_follow_the_step_position() {
		let mut steps = StepSequence::new(3);
		assert_eq!(
			steps.controls(),
			StepControls {
				show_previous: false,
				show_next: true,
				show_submit: false,
			}
		);
		steps.advance();
		assert_eq!(
			steps.controls(),
			StepControls {
				show_previous: true,
				show_next: true,
				show_submit: false,
			}
		);
		steps.advance();
		assert_eq!(
			steps.controls(),
			StepControls {
				show_previous: true,
				show_next: false,
				show_submit: true,
			}
		);
	}
}
