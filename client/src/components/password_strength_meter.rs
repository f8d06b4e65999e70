// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use signup_shared::password_strength::{unmet_rules, PasswordStrength};
use sycamore::prelude::*;

#[derive(Prop)]
pub struct PasswordStrengthMeterProps<'a> {
	password: &'a ReadSignal<String>,
}

#[component]
pub fn PasswordStrengthMeter<'a, G: Html>(ctx: Scope<'a>, props: PasswordStrengthMeterProps<'a>) -> View<G> {
	let strength = create_memo(ctx, move || PasswordStrength::evaluate(&props.password.get()));
	let hints = create_memo(ctx, move || {
		let password = props.password.get();
		if password.is_empty() {
			Vec::new()
		} else {
			unmet_rules(&password)
		}
	});

	view! {
		ctx,
		div(id="password_strength") {
			div(class="password_strength_bar") {
				div(
					class=format!("password_strength_fill {}", strength.get().tone().class_name()),
					style=format!("width: {}%", strength.get().percent())
				)
			}
			span(class=format!("password_strength_label {}", strength.get().tone().class_name())) {
				"Strength: "
				(strength.get().label())
			}
			ul(class="password_strength_hints") {
				Indexed(
					iterable=hints,
					view=|ctx, rule| view! { ctx, li { (rule.hint()) } }
				)
			}
		}
	}
}
