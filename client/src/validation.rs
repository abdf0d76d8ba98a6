// © 2026 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Whether a required field fails its presence check.
pub fn is_blank(value: &str) -> bool {
	value.trim().is_empty()
}

/// Checks an email address against the `local@domain.tld` shape: no
/// whitespace, a single `@`, and a dot inside the domain with at least one
/// character on each side. Deliverability is the backend's concern.
pub fn email_format_is_valid(value: &str) -> bool {
	if value.contains(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = value.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.is_empty() || domain.contains('@') {
		return false;
	}
	domain
		.char_indices()
		.any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_detection_trims_whitespace() {
		assert!(is_blank(""));
		assert!(is_blank("   "));
		assert!(is_blank("\t\n"));
		assert!(!is_blank(" a "));
	}

	#[test]
	fn email_requires_a_dotted_domain() {
		assert!(!email_format_is_valid("a@b"));
		assert!(email_format_is_valid("a@b.com"));
	}

	#[test]
	fn email_rejects_malformed_addresses() {
		assert!(!email_format_is_valid(""));
		assert!(!email_format_is_valid("plainaddress"));
		assert!(!email_format_is_valid("@example.com"));
		assert!(!email_format_is_valid("a@"));
		assert!(!email_format_is_valid("a@.com"));
		assert!(!email_format_is_valid("a@example."));
		assert!(!email_format_is_valid("a b@example.com"));
		assert!(!email_format_is_valid("a@exa mple.com"));
		assert!(!email_format_is_valid("a@b@c.com"));
	}

	#[test]
	fn email_accepts_subdomains_and_plus_tags() {
		assert!(email_format_is_valid("guest+one@mail.example.com"));
		assert!(email_format_is_valid("avery.quinn@example.co"));
	}
}
