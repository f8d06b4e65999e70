// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::input_error::InputError;
use signup_shared::form::FormField;
use sycamore::prelude::*;

pub fn field_input_id(field: FormField) -> String {
	format!("register_{}", field.key())
}

/// A labelled input with the server's error for that input beneath it
#[derive(Prop)]
pub struct FormFieldRowProps<'a> {
	field: FormField,
	value: &'a Signal<String>,
	error: &'a ReadSignal<Option<String>>,
	input_type: &'static str,
	autocomplete: &'static str,
}

#[component]
pub fn FormFieldRow<'a, G: Html>(ctx: Scope<'a>, props: FormFieldRowProps<'a>) -> View<G> {
	let input_id = field_input_id(props.field);
	let label_for = input_id.clone();
	let error_id = format!("{}_error", input_id);
	let error_class = create_memo(ctx, move || if props.error.get().is_some() { "error" } else { "" });

	view! {
		ctx,
		div(class="input_with_message") {
			label(for=label_for) { (props.field.label()) }
			input(
				id=input_id,
				type=props.input_type,
				name=props.field.key(),
				autocomplete=props.autocomplete,
				class=*error_class.get(),
				required=true,
				bind:value=props.value
			)
			InputError(message=props.error, id=error_id)
		}
	}
}
