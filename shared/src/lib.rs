// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod rsvp;

/// Path of the RSVP submission endpoint, relative to wherever the site is hosted.
pub const SUBMIT_RSVP_PATH: &str = "submit_rsvp";
