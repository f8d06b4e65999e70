// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One of the inputs on the registration form
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
	Name,
	Email,
	Password,
	PasswordConfirmation,
}

impl FormField {
	pub const ALL: [FormField; 4] = [Self::Name, Self::Email, Self::Password, Self::PasswordConfirmation];

	/// The key used for this field in requests and in server error responses
	pub fn key(&self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Email => "email",
			Self::Password => "password",
			Self::PasswordConfirmation => "password_confirmation",
		}
	}

	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|field| field.key() == key)
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Name => "Name",
			Self::Email => "Email",
			Self::Password => "Password",
			Self::PasswordConfirmation => "Confirm Password",
		}
	}

	/// Whether the value of this field is sensitive and must not outlive a submission attempt
	pub fn is_secret(&self) -> bool {
		matches!(self, Self::Password | Self::PasswordConfirmation)
	}
}

impl fmt::Display for FormField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.key())
	}
}

/// The live values of all of the inputs on the form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormState {
	pub name: String,
	pub email: String,
	pub password: String,
	pub password_confirmation: String,
}

impl FormState {
	pub fn get(&self, field: FormField) -> &str {
		match field {
			FormField::Name => &self.name,
			FormField::Email => &self.email,
			FormField::Password => &self.password,
			FormField::PasswordConfirmation => &self.password_confirmation,
		}
	}

	pub fn set(&mut self, field: FormField, value: String) {
		let slot = match field {
			FormField::Name => &mut self.name,
			FormField::Email => &mut self.email,
			FormField::Password => &mut self.password,
			FormField::PasswordConfirmation => &mut self.password_confirmation,
		};
		*slot = value;
	}

	/// Empties the password and password confirmation fields.
	pub fn clear_secrets(&mut self) {
		for field in FormField::ALL.into_iter().filter(FormField::is_secret) {
			self.set(field, String::new());
		}
	}
}

/// Server-reported reasons the most recent submission was rejected
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationErrors {
	fields: BTreeMap<FormField, String>,
	general: Vec<String>,
}

impl ValidationErrors {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a message for a field. Only the first message for each field is kept.
	pub fn add(&mut self, field: FormField, message: String) {
		self.fields.entry(field).or_insert(message);
	}

	/// Records a message that isn't attached to any field on the form.
	pub fn add_general(&mut self, message: String) {
		self.general.push(message);
	}

	pub fn get(&self, field: FormField) -> Option<&str> {
		self.fields.get(&field).map(String::as_str)
	}

	pub fn fields(&self) -> impl Iterator<Item = (FormField, &str)> {
		self.fields.iter().map(|(field, message)| (*field, message.as_str()))
	}

	pub fn general(&self) -> &[String] {
		&self.general
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty() && self.general.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_match_request_field_names() {
		for field in FormField::ALL {
			assert_eq!(FormField::from_key(field.key()), Some(field));
			assert_eq!(serde_json::to_string(&field).unwrap(), format!("\"{}\"", field.key()));
		}
		assert_eq!(FormField::from_key("remember"), None);
	}

	#[test]
	fn clearing_secrets_keeps_identity_fields() {
		let mut state = FormState::default();
		state.set(FormField::Name, String::from("Ada"));
		state.set(FormField::Email, String::from("ada@example.com"));
		state.set(FormField::Password, String::from("Ab3!defg"));
		state.set(FormField::PasswordConfirmation, String::from("Ab3!defg"));

		state.clear_secrets();

		assert_eq!(state.get(FormField::Name), "Ada");
		assert_eq!(state.get(FormField::Email), "ada@example.com");
		assert_eq!(state.password, "");
		assert_eq!(state.password_confirmation, "");
	}

	#[test]
	fn first_message_per_field_wins() {
		let mut errors = ValidationErrors::new();
		errors.add(FormField::Email, String::from("The email has already been taken."));
		errors.add(FormField::Email, String::from("The email must be valid."));

		assert_eq!(errors.get(FormField::Email), Some("The email has already been taken."));
		assert_eq!(errors.get(FormField::Name), None);
		assert_eq!(errors.fields().count(), 1);
	}
}
