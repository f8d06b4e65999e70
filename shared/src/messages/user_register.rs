use crate::form::{FormField, FormState, ValidationErrors};
use crate::registration::SubmissionOutcome;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// HTTP status the server uses when it rejects the submitted data
pub const VALIDATION_FAILED_STATUS: u16 = 422;

/// Data from the client when trying to register an account
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UserRegistration {
	pub name: String,
	pub email: String,
	pub password: String,
	pub password_confirmation: String,
}

impl From<&FormState> for UserRegistration {
	fn from(state: &FormState) -> Self {
		Self {
			name: state.name.clone(),
			email: state.email.clone(),
			password: state.password.clone(),
			password_confirmation: state.password_confirmation.clone(),
		}
	}
}

/// Messages for one key of a rejection; servers send either a single message or a list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RejectionMessages {
	One(String),
	Many(Vec<String>),
}

impl RejectionMessages {
	fn into_first(self) -> Option<String> {
		match self {
			Self::One(message) => Some(message),
			Self::Many(messages) => messages.into_iter().next(),
		}
	}
}

/// Response data from the server when a registration attempt is rejected
#[derive(Debug, Deserialize)]
pub struct RegistrationRejection {
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub errors: Option<BTreeMap<String, RejectionMessages>>,
}

impl From<RegistrationRejection> for ValidationErrors {
	fn from(rejection: RegistrationRejection) -> Self {
		let mut errors = ValidationErrors::new();
		for (key, messages) in rejection.errors.unwrap_or_default() {
			let Some(message) = messages.into_first() else {
				continue;
			};
			match FormField::from_key(&key) {
				Some(field) => errors.add(field, message),
				None => errors.add_general(message),
			}
		}
		// The summary message only matters when there's nothing more specific to show
		if errors.is_empty() {
			if let Some(message) = rejection.message {
				errors.add_general(message);
			}
		}
		errors
	}
}

/// Ways a server response can fail to describe a registration outcome
#[derive(Debug)]
pub enum ResponseError {
	UnexpectedStatus(u16, String),
	MalformedRejection(serde_json::Error),
}

impl fmt::Display for ResponseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnexpectedStatus(status, status_text) => write!(f, "The server responded with {} {}", status, status_text),
			Self::MalformedRejection(error) => write!(f, "The server sent a response that couldn't be read: {}", error),
		}
	}
}

impl std::error::Error for ResponseError {}

impl From<serde_json::Error> for ResponseError {
	fn from(error: serde_json::Error) -> Self {
		Self::MalformedRejection(error)
	}
}

/// Interprets the server's answer to a registration request.
///
/// Any success status accepts the registration and the body is ignored. A validation failure status carries the
/// reasons in the body. Every other status is an error.
pub fn outcome_from_response(status: u16, status_text: &str, body: &str) -> Result<SubmissionOutcome, ResponseError> {
	if (200..300).contains(&status) {
		return Ok(SubmissionOutcome::Accepted);
	}
	if status != VALIDATION_FAILED_STATUS {
		return Err(ResponseError::UnexpectedStatus(status, status_text.to_string()));
	}
	let rejection: RegistrationRejection = serde_json::from_str(body)?;
	Ok(SubmissionOutcome::Rejected(ValidationErrors::from(rejection)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn registration_uses_field_keys() {
		let state = FormState {
			name: String::from("Ada"),
			email: String::from("ada@example.com"),
			password: String::from("Ab3!defg"),
			password_confirmation: String::from("Ab3!defg"),
		};
		let json = serde_json::to_value(UserRegistration::from(&state)).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"name": "Ada",
				"email": "ada@example.com",
				"password": "Ab3!defg",
				"password_confirmation": "Ab3!defg",
			})
		);
	}

	#[test]
	fn rejection_with_message_lists() {
		let body = r#"{
			"message": "The email has already been taken. (and 1 more error)",
			"errors": {
				"email": ["The email has already been taken."],
				"password": ["The password field confirmation does not match.", "The password must be at least 8 characters."]
			}
		}"#;
		let rejection: RegistrationRejection = serde_json::from_str(body).unwrap();
		let errors = ValidationErrors::from(rejection);

		assert_eq!(errors.get(FormField::Email), Some("The email has already been taken."));
		assert_eq!(
			errors.get(FormField::Password),
			Some("The password field confirmation does not match.")
		);
		assert_eq!(errors.get(FormField::Name), None);
		assert!(errors.general().is_empty());
	}

	#[test]
	fn rejection_with_single_messages_and_unknown_keys() {
		let body = r#"{"errors": {"name": "The name field is required.", "terms": "You must accept the terms."}}"#;
		let rejection: RegistrationRejection = serde_json::from_str(body).unwrap();
		let errors = ValidationErrors::from(rejection);

		assert_eq!(errors.get(FormField::Name), Some("The name field is required."));
		assert_eq!(errors.general(), ["You must accept the terms."]);
	}

	#[test]
	fn summary_message_used_without_field_errors() {
		let body = r#"{"message": "Too many attempts.", "errors": {"email": []}}"#;
		let rejection: RegistrationRejection = serde_json::from_str(body).unwrap();
		let errors = ValidationErrors::from(rejection);

		assert_eq!(errors.get(FormField::Email), None);
		assert_eq!(errors.general(), ["Too many attempts."]);
	}

	#[test]
	fn null_errors_fall_back_to_summary_message() {
		let body = r#"{"message": "The given data was invalid.", "errors": null}"#;
		let rejection: RegistrationRejection = serde_json::from_str(body).unwrap();
		let errors = ValidationErrors::from(rejection);

		assert_eq!(errors.fields().count(), 0);
		assert_eq!(errors.general(), ["The given data was invalid."]);
	}

	#[test]
	fn success_statuses_accept_without_reading_body() {
		assert_eq!(outcome_from_response(200, "OK", "").unwrap(), SubmissionOutcome::Accepted);
		assert_eq!(outcome_from_response(201, "Created", "{}").unwrap(), SubmissionOutcome::Accepted);
		assert_eq!(
			outcome_from_response(204, "No Content", "not json").unwrap(),
			SubmissionOutcome::Accepted
		);
	}

	#[test]
	fn validation_status_decodes_field_errors() {
		let body = r#"{"errors": {"email": ["The email has already been taken."]}}"#;
		let outcome = outcome_from_response(422, "Unprocessable Content", body).unwrap();

		let SubmissionOutcome::Rejected(errors) = outcome else {
			panic!("expected a rejection, got {outcome:?}");
		};
		assert_eq!(errors.get(FormField::Email), Some("The email has already been taken."));
	}

	#[test]
	fn validation_status_with_unreadable_body_is_an_error() {
		let result = outcome_from_response(422, "Unprocessable Content", "<html>Oops</html>");
		assert!(matches!(result, Err(ResponseError::MalformedRejection(_))));
	}

	#[test]
	fn other_statuses_are_errors() {
		for (status, status_text) in [(419, "Page Expired"), (500, "Internal Server Error"), (302, "Found")] {
			match outcome_from_response(status, status_text, "{}") {
				Err(ResponseError::UnexpectedStatus(reported, text)) => {
					assert_eq!(reported, status);
					assert_eq!(text, status_text);
				}
				other => panic!("{status} gave {other:?}"),
			}
		}
		let error = outcome_from_response(500, "Internal Server Error", "").unwrap_err();
		assert_eq!(error.to_string(), "The server responded with 500 Internal Server Error");
	}
}
