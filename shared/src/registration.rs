// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form::{FormField, FormState, ValidationErrors};
use crate::messages::user_register::UserRegistration;
use crate::password_strength::PasswordStrength;
use crate::settings::RegistrationSettings;
use std::fmt;
use std::time::Duration;

/// How a submission round trip ended, as reported by the request layer
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionOutcome {
	Accepted,
	Rejected(ValidationErrors),
	/// The server couldn't be reached or answered in a way we don't understand
	Unavailable(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionFailure {
	Rejected(ValidationErrors),
	Unavailable(String),
}

/// Where the form is in the submission process
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum SubmissionPhase {
	#[default]
	Idle,
	InFlight,
	Succeeded(String),
	Failed(SubmissionFailure),
}

#[derive(Debug, Eq, PartialEq)]
pub enum SubmitError {
	AlreadyInFlight,
	NotInFlight,
}

impl fmt::Display for SubmitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::AlreadyInFlight => write!(f, "a registration request is already in progress"),
			Self::NotInFlight => write!(f, "no registration request is in progress"),
		}
	}
}

impl std::error::Error for SubmitError {}

/// Longest delay browsers honor for a timer; anything larger fires immediately
pub const MAX_TIMER_DELAY_MS: u32 = i32::MAX as u32;

/// A navigation waiting for its delay to pass
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingRedirect {
	pub destination: String,
	pub remaining: Duration,
}

impl PendingRedirect {
	/// The remaining delay in milliseconds, capped to what a browser timer accepts
	pub fn timer_delay_ms(&self) -> u32 {
		u32::try_from(self.remaining.as_millis())
			.unwrap_or(MAX_TIMER_DELAY_MS)
			.min(MAX_TIMER_DELAY_MS)
	}
}

/// State and transitions of the registration form.
///
/// The type is independent of any UI runtime: the front end feeds it input changes, request outcomes and elapsed
/// time, and performs the requests and navigations it asks for.
#[derive(Clone, Debug)]
pub struct RegistrationForm {
	settings: RegistrationSettings,
	fields: FormState,
	phase: SubmissionPhase,
	overlay_visible: bool,
	redirect: Option<PendingRedirect>,
}

impl RegistrationForm {
	pub fn new(settings: RegistrationSettings) -> Self {
		Self {
			settings,
			fields: FormState::default(),
			phase: SubmissionPhase::Idle,
			overlay_visible: false,
			redirect: None,
		}
	}

	pub fn settings(&self) -> &RegistrationSettings {
		&self.settings
	}

	pub fn fields(&self) -> &FormState {
		&self.fields
	}

	pub fn phase(&self) -> &SubmissionPhase {
		&self.phase
	}

	pub fn is_in_flight(&self) -> bool {
		matches!(self.phase, SubmissionPhase::InFlight)
	}

	pub fn set_field(&mut self, field: FormField, value: String) {
		self.fields.set(field, value);
	}

	pub fn password_strength(&self) -> PasswordStrength {
		PasswordStrength::evaluate(&self.fields.password)
	}

	/// Starts a submission, returning the data to send.
	///
	/// Only one submission may be in flight at a time. Submitting again after a success abandons that success's
	/// pending redirect.
	pub fn begin_submission(&mut self) -> Result<UserRegistration, SubmitError> {
		if self.is_in_flight() {
			return Err(SubmitError::AlreadyInFlight);
		}
		self.redirect = None;
		self.overlay_visible = false;
		self.phase = SubmissionPhase::InFlight;
		Ok(UserRegistration::from(&self.fields))
	}

	/// Applies the result of the in-flight submission. Returns the redirect that was scheduled, if any.
	///
	/// Passwords are cleared whatever the outcome.
	pub fn complete_submission(&mut self, outcome: SubmissionOutcome) -> Result<Option<&PendingRedirect>, SubmitError> {
		if !self.is_in_flight() {
			return Err(SubmitError::NotInFlight);
		}
		self.fields.clear_secrets();

		self.phase = match outcome {
			SubmissionOutcome::Accepted => {
				self.overlay_visible = true;
				self.redirect = Some(PendingRedirect {
					destination: self.settings.login_url.clone(),
					remaining: self.settings.redirect_delay,
				});
				SubmissionPhase::Succeeded(self.settings.success_message.clone())
			}
			SubmissionOutcome::Rejected(errors) => SubmissionPhase::Failed(SubmissionFailure::Rejected(errors)),
			SubmissionOutcome::Unavailable(reason) => SubmissionPhase::Failed(SubmissionFailure::Unavailable(reason)),
		};
		Ok(self.redirect.as_ref())
	}

	/// The server's message for a field from the last rejected submission
	pub fn field_error(&self, field: FormField) -> Option<&str> {
		match &self.phase {
			SubmissionPhase::Failed(SubmissionFailure::Rejected(errors)) => errors.get(field),
			_ => None,
		}
	}

	/// Messages about the last submission that don't belong to any one field
	pub fn form_errors(&self) -> Vec<&str> {
		match &self.phase {
			SubmissionPhase::Failed(SubmissionFailure::Rejected(errors)) => {
				errors.general().iter().map(String::as_str).collect()
			}
			SubmissionPhase::Failed(SubmissionFailure::Unavailable(reason)) => vec![reason.as_str()],
			_ => Vec::new(),
		}
	}

	pub fn success_message(&self) -> Option<&str> {
		match &self.phase {
			SubmissionPhase::Succeeded(message) => Some(message),
			_ => None,
		}
	}

	pub fn overlay_visible(&self) -> bool {
		self.overlay_visible
	}

	/// Hides the confirmation overlay. The redirect stays scheduled.
	pub fn close_overlay(&mut self) {
		self.overlay_visible = false;
	}

	pub fn pending_redirect(&self) -> Option<&PendingRedirect> {
		self.redirect.as_ref()
	}

	/// Counts down the pending redirect, returning its destination once the full delay has passed.
	///
	/// A redirect is handed out at most once.
	pub fn advance_redirect(&mut self, elapsed: Duration) -> Option<String> {
		let redirect = self.redirect.as_mut()?;
		redirect.remaining = redirect.remaining.saturating_sub(elapsed);
		if !redirect.remaining.is_zero() {
			return None;
		}
		self.redirect.take().map(|redirect| redirect.destination)
	}

	/// Drops the pending redirect. Returns whether there was one.
	pub fn cancel_redirect(&mut self) -> bool {
		self.redirect.take().is_some()
	}
}

impl Default for RegistrationForm {
	fn default() -> Self {
		Self::new(RegistrationSettings::default())
	}
}
