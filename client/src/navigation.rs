// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::window;

/// Performs a full page visit. Destinations like the login page are served by the server application rather than
/// this client's router.
pub fn visit(destination: &str) {
	log::debug!("Visiting {}", destination);
	let Some(window) = window() else {
		return;
	};
	if let Err(error) = window.location().assign(destination) {
		log::warn!("Failed to navigate to {}: {:?}", destination, error);
	}
}

/// Where the page was scrolled to, so it can be put back after the page content changes
pub struct ScrollPosition {
	x: f64,
	y: f64,
}

impl ScrollPosition {
	pub fn capture() -> Option<Self> {
		let window = window()?;
		let x = window.scroll_x().ok()?;
		let y = window.scroll_y().ok()?;
		Some(Self { x, y })
	}

	pub fn restore(&self) {
		if let Some(window) = window() {
			window.scroll_to_with_x_and_y(self.x, self.y);
		}
	}
}
