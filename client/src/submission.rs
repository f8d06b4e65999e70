// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_net::http::Request;
use signup_shared::messages::user_register::{outcome_from_response, ResponseError, UserRegistration};
use signup_shared::registration::SubmissionOutcome;
use std::fmt;

/// Errors that can occur while sending a registration to the server
pub enum SubmissionTransportError {
	Request(gloo_net::Error),
	Response(ResponseError),
}

impl fmt::Display for SubmissionTransportError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Request(error) => write!(f, "Unable to reach the server: {}", error),
			Self::Response(error) => write!(f, "{}", error),
		}
	}
}

impl From<gloo_net::Error> for SubmissionTransportError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Request(error)
	}
}

impl From<ResponseError> for SubmissionTransportError {
	fn from(error: ResponseError) -> Self {
		Self::Response(error)
	}
}

/// Sends a registration and reports how the server handled it. Failures to talk to the server are reported as
/// [SubmissionOutcome::Unavailable] rather than returned.
pub async fn submit_registration(url: &str, registration: &UserRegistration) -> SubmissionOutcome {
	match post_registration(url, registration).await {
		Ok(outcome) => outcome,
		Err(error) => {
			log::warn!("Registration request to {} failed: {}", url, error);
			SubmissionOutcome::Unavailable(error.to_string())
		}
	}
}

async fn post_registration(
	url: &str,
	registration: &UserRegistration,
) -> Result<SubmissionOutcome, SubmissionTransportError> {
	let response = Request::post(url)
		.header("Accept", "application/json")
		.json(registration)?
		.send()
		.await?;

	let body = response.text().await?;
	let outcome = outcome_from_response(response.status(), &response.status_text(), &body)?;
	if let SubmissionOutcome::Rejected(errors) = &outcome {
		if errors.is_empty() {
			log::warn!("The server rejected a registration without saying why");
		}
	}
	Ok(outcome)
}
