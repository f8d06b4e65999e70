// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_SCORE: u8 = 4;

/// Characters that count as symbols for strength purposes
pub const SYMBOLS: &[char] = &[
	'!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|', '<', '>',
];

/// A single property a password can have that makes it stronger
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StrengthRule {
	Length,
	Digit,
	Symbol,
	MixedCase,
}

impl StrengthRule {
	pub const ALL: [StrengthRule; 4] = [Self::Length, Self::Digit, Self::Symbol, Self::MixedCase];

	pub fn is_met_by(&self, password: &str) -> bool {
		match self {
			Self::Length => password.chars().count() >= MIN_PASSWORD_LENGTH,
			Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
			Self::Symbol => password.chars().any(|c| SYMBOLS.contains(&c)),
			// Both halves are required; either case alone earns nothing.
			Self::MixedCase => {
				password.chars().any(|c| c.is_ascii_lowercase()) && password.chars().any(|c| c.is_ascii_uppercase())
			}
		}
	}

	/// Short hint shown to the user while this rule isn't met
	pub fn hint(&self) -> &'static str {
		match self {
			Self::Length => "At least 8 characters",
			Self::Digit => "A number",
			Self::Symbol => "A symbol",
			Self::MixedCase => "Upper and lower case letters",
		}
	}
}

/// How the strength of a password is presented to the user
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StrengthTone {
	None,
	Weak,
	Moderate,
	Strong,
	VeryStrong,
}

impl StrengthTone {
	pub fn label(&self) -> &'static str {
		match self {
			Self::None | Self::Weak => "Weak",
			Self::Moderate => "Moderate",
			Self::Strong => "Strong",
			Self::VeryStrong => "Very Strong",
		}
	}

	pub fn class_name(&self) -> &'static str {
		match self {
			Self::None => "password_strength_none",
			Self::Weak => "password_strength_weak",
			Self::Moderate => "password_strength_moderate",
			Self::Strong => "password_strength_strong",
			Self::VeryStrong => "password_strength_very_strong",
		}
	}
}

/// Score from 0 to 4 counting how many [StrengthRule]s a password satisfies
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct PasswordStrength(u8);

impl PasswordStrength {
	pub fn evaluate(password: &str) -> Self {
		let score = StrengthRule::ALL
			.iter()
			.filter(|rule| rule.is_met_by(password))
			.count();
		Self(score as u8)
	}

	pub fn score(&self) -> u8 {
		self.0
	}

	pub fn tone(&self) -> StrengthTone {
		match self.0 {
			0 => StrengthTone::None,
			1 => StrengthTone::Weak,
			2 => StrengthTone::Moderate,
			3 => StrengthTone::Strong,
			_ => StrengthTone::VeryStrong,
		}
	}

	pub fn label(&self) -> &'static str {
		self.tone().label()
	}

	/// How full the strength meter should be drawn
	pub fn percent(&self) -> u8 {
		self.0 * (100 / MAX_SCORE)
	}
}

impl fmt::Display for PasswordStrength {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

/// Rules the password doesn't meet yet, in display order
pub fn unmet_rules(password: &str) -> Vec<StrengthRule> {
	StrengthRule::ALL
		.into_iter()
		.filter(|rule| !rule.is_met_by(password))
		.collect()
}
