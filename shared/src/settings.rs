// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::num::ParseIntError;
use std::time::Duration;

pub const DEFAULT_SUBMIT_URL: &str = "/register";
pub const DEFAULT_LOGIN_URL: &str = "/login";
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to login...";

/// Where the registration form sends its data and what happens after success
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrationSettings {
	pub submit_url: String,
	pub login_url: String,
	pub redirect_delay: Duration,
	pub success_message: String,
}

impl Default for RegistrationSettings {
	fn default() -> Self {
		Self {
			submit_url: String::from(DEFAULT_SUBMIT_URL),
			login_url: String::from(DEFAULT_LOGIN_URL),
			redirect_delay: DEFAULT_REDIRECT_DELAY,
			success_message: String::from(DEFAULT_SUCCESS_MESSAGE),
		}
	}
}

/// Raw setting values provided by the page hosting the form
#[derive(Debug, Default)]
pub struct SettingsOverrides {
	pub submit_url: Option<String>,
	pub login_url: Option<String>,
	pub redirect_delay_ms: Option<String>,
}

#[derive(Debug)]
pub struct InvalidRedirectDelay {
	pub value: String,
	pub error: ParseIntError,
}

impl fmt::Display for InvalidRedirectDelay {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "invalid redirect delay {:?}: {}", self.value, self.error)
	}
}

impl std::error::Error for InvalidRedirectDelay {}

impl RegistrationSettings {
	/// Applies the overrides that were provided. Blank values are ignored.
	///
	/// An unreadable redirect delay leaves the current delay in place; the other overrides are still applied.
	pub fn apply_overrides(&mut self, overrides: SettingsOverrides) -> Result<(), InvalidRedirectDelay> {
		if let Some(url) = non_blank(overrides.submit_url) {
			self.submit_url = url;
		}
		if let Some(url) = non_blank(overrides.login_url) {
			self.login_url = url;
		}
		if let Some(delay) = non_blank(overrides.redirect_delay_ms) {
			match delay.parse::<u64>() {
				Ok(delay_ms) => self.redirect_delay = Duration::from_millis(delay_ms),
				Err(error) => return Err(InvalidRedirectDelay { value: delay, error }),
			}
		}
		Ok(())
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	let value = value?;
	let trimmed = value.trim();
	if trimmed.is_empty() {
		None
	} else {
		Some(trimmed.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_overrides_keeps_defaults() {
		let mut settings = RegistrationSettings::default();
		settings.apply_overrides(SettingsOverrides::default()).unwrap();
		assert_eq!(settings, RegistrationSettings::default());
		assert_eq!(settings.redirect_delay, Duration::from_millis(2000));
	}

	#[test]
	fn overrides_replace_urls_and_delay() {
		let mut settings = RegistrationSettings::default();
		settings
			.apply_overrides(SettingsOverrides {
				submit_url: Some(String::from("/accounts/register")),
				login_url: Some(String::from("https://accounts.example.com/login")),
				redirect_delay_ms: Some(String::from(" 3500 ")),
			})
			.unwrap();

		assert_eq!(settings.submit_url, "/accounts/register");
		assert_eq!(settings.login_url, "https://accounts.example.com/login");
		assert_eq!(settings.redirect_delay, Duration::from_millis(3500));
		assert_eq!(settings.success_message, DEFAULT_SUCCESS_MESSAGE);
	}

	#[test]
	fn blank_values_are_ignored() {
		let mut settings = RegistrationSettings::default();
		settings
			.apply_overrides(SettingsOverrides {
				submit_url: Some(String::new()),
				login_url: Some(String::from("   ")),
				redirect_delay_ms: Some(String::from("")),
			})
			.unwrap();
		assert_eq!(settings, RegistrationSettings::default());
	}

	#[test]
	fn invalid_delay_keeps_default_but_applies_urls() {
		let mut settings = RegistrationSettings::default();
		let error = settings
			.apply_overrides(SettingsOverrides {
				submit_url: None,
				login_url: Some(String::from("/signin")),
				redirect_delay_ms: Some(String::from("2s")),
			})
			.unwrap_err();

		assert_eq!(error.value, "2s");
		assert_eq!(settings.login_url, "/signin");
		assert_eq!(settings.redirect_delay, DEFAULT_REDIRECT_DELAY);

		let negative = settings.apply_overrides(SettingsOverrides {
			redirect_delay_ms: Some(String::from("-5")),
			..SettingsOverrides::default()
		});
		assert!(negative.is_err());
		assert_eq!(settings.redirect_delay, DEFAULT_REDIRECT_DELAY);
	}
}
