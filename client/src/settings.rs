// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use signup_shared::settings::{RegistrationSettings, SettingsOverrides};
use web_sys::{window, Url};

const SUBMIT_URL_ATTRIBUTE: &str = "data-register-url";
const LOGIN_URL_ATTRIBUTE: &str = "data-login-url";
const REDIRECT_DELAY_ATTRIBUTE: &str = "data-redirect-delay-ms";

/// Builds the registration settings for this page.
///
/// The server can override any default by setting the matching `data-*` attribute on the page's `<body>`. Paths are
/// resolved against the current address so the client works wherever the application is hosted.
pub fn load_settings() -> RegistrationSettings {
	let mut settings = RegistrationSettings::default();

	let body = window()
		.and_then(|window| window.document())
		.and_then(|document| document.body());
	if let Some(body) = body {
		let overrides = SettingsOverrides {
			submit_url: body.get_attribute(SUBMIT_URL_ATTRIBUTE),
			login_url: body.get_attribute(LOGIN_URL_ATTRIBUTE),
			redirect_delay_ms: body.get_attribute(REDIRECT_DELAY_ATTRIBUTE),
		};
		if let Err(error) = settings.apply_overrides(overrides) {
			log::warn!("Ignoring {}: {}", REDIRECT_DELAY_ATTRIBUTE, error);
		}
	}

	settings.submit_url = resolve_url(&settings.submit_url);
	settings.login_url = resolve_url(&settings.login_url);
	settings
}

/// Resolves a possibly relative URL against the current page address. The input is returned as-is if the browser
/// context can't resolve it.
fn resolve_url(path: &str) -> String {
	let Some(window) = window() else {
		return path.to_string();
	};
	let Ok(current_address) = window.location().href() else {
		return path.to_string();
	};
	match Url::new_with_base(path, &current_address) {
		Ok(url) => url.href(),
		Err(_) => {
			log::warn!("Unable to resolve {:?} against {}", path, current_address);
			path.to_string()
		}
	}
}
