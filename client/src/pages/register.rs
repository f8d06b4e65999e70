use crate::components::form_field_row::{field_input_id, FormFieldRow};
use crate::components::password_strength_meter::PasswordStrengthMeter;
use crate::components::success_overlay::SuccessOverlay;
use crate::navigation::{visit, ScrollPosition};
use crate::page_utils::{focus_element, set_page_title};
use crate::submission::submit_registration;
use gloo_timers::callback::Timeout;
use signup_shared::form::FormField;
use signup_shared::registration::{PendingRedirect, RegistrationForm};
use signup_shared::settings::RegistrationSettings;
use std::cell::RefCell;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// The input signals bound to each field on the page
#[derive(Clone, Copy)]
struct FieldSignals<'a> {
	name: &'a Signal<String>,
	email: &'a Signal<String>,
	password: &'a Signal<String>,
	password_confirmation: &'a Signal<String>,
}

impl<'a> FieldSignals<'a> {
	fn new(ctx: Scope<'a>) -> Self {
		Self {
			name: create_signal(ctx, String::new()),
			email: create_signal(ctx, String::new()),
			password: create_signal(ctx, String::new()),
			password_confirmation: create_signal(ctx, String::new()),
		}
	}

	fn get(&self, field: FormField) -> &'a Signal<String> {
		match field {
			FormField::Name => self.name,
			FormField::Email => self.email,
			FormField::Password => self.password,
			FormField::PasswordConfirmation => self.password_confirmation,
		}
	}
}

/// Starts the countdown for a redirect the form scheduled. The returned timer cancels the redirect when dropped.
fn start_redirect_timer(form: RcSignal<RegistrationForm>, redirect: &PendingRedirect) -> Timeout {
	let delay = redirect.remaining;
	Timeout::new(redirect.timer_delay_ms(), move || {
		if let Some(destination) = form.modify().advance_redirect(delay) {
			visit(&destination);
		}
	})
}

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	set_page_title("Register");

	let settings: &RegistrationSettings = use_context(ctx);
	let form = create_ref(ctx, create_rc_signal(RegistrationForm::new(settings.clone())));
	let redirect_timer: &RefCell<Option<Timeout>> = create_ref(ctx, RefCell::new(None));
	let fields = FieldSignals::new(ctx);

	// Inputs are the source of truth for field values; mirror them into the form as they change
	for field in FormField::ALL {
		let value_signal = fields.get(field);
		create_effect(ctx, move || {
			let value = (*value_signal.get()).clone();
			form.modify().set_field(field, value);
		});
	}

	on_cleanup(ctx, move || {
		if let Some(timer) = redirect_timer.borrow_mut().take() {
			log::debug!("Cancelling pending registration redirect as the page is closing");
			drop(timer);
		}
	});

	spawn_local_scoped(ctx, async move {
		focus_element(&field_input_id(FormField::Name));
	});

	let field_error = move |field: FormField| create_memo(ctx, move || form.get().field_error(field).map(String::from));
	let name_error = field_error(FormField::Name);
	let email_error = field_error(FormField::Email);
	let password_error = field_error(FormField::Password);
	let password_confirmation_error = field_error(FormField::PasswordConfirmation);

	let form_errors = create_memo(ctx, move || {
		form.get()
			.form_errors()
			.into_iter()
			.map(String::from)
			.collect::<Vec<String>>()
	});
	let in_flight = create_memo(ctx, move || form.get().is_in_flight());
	let overlay_visible = create_memo(ctx, move || form.get().overlay_visible());
	let success_message = create_memo(ctx, move || form.get().success_message().map(String::from));
	let login_url = settings.login_url.clone();

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let registration = match form.modify().begin_submission() {
			Ok(registration) => registration,
			Err(error) => {
				log::debug!("Ignoring registration submission: {}", error);
				return;
			}
		};
		// A redirect from an earlier success was abandoned by this submission
		if let Some(timer) = redirect_timer.borrow_mut().take() {
			drop(timer);
		}

		let scroll_position = ScrollPosition::capture();
		let submit_url = form.get().settings().submit_url.clone();
		log::debug!("Submitting registration to {}", submit_url);

		spawn_local_scoped(ctx, async move {
			let outcome = submit_registration(&submit_url, &registration).await;

			let scheduled_redirect = match form.modify().complete_submission(outcome) {
				Ok(redirect) => redirect.cloned(),
				Err(error) => {
					log::warn!("Received a registration response with nothing to complete: {}", error);
					return;
				}
			};

			// Push the cleared secrets back out to the inputs
			let current_fields = form.get();
			for field in FormField::ALL.into_iter().filter(FormField::is_secret) {
				fields.get(field).set(current_fields.fields().get(field).to_string());
			}

			if let Some(redirect) = scheduled_redirect {
				log::debug!(
					"Registration succeeded; redirecting to {} in {}ms",
					redirect.destination,
					redirect.remaining.as_millis()
				);
				let timer = start_redirect_timer((*form).clone(), &redirect);
				*redirect_timer.borrow_mut() = Some(timer);
			}

			if let Some(scroll_position) = scroll_position {
				scroll_position.restore();
			}
		});
	};

	view! {
		ctx,
		h1 { "Register" }
		form(id="register_user", on:submit=form_submission_handler) {
			FormFieldRow(
				field=FormField::Name,
				value=fields.name,
				error=name_error,
				input_type="text",
				autocomplete="name"
			)
			FormFieldRow(
				field=FormField::Email,
				value=fields.email,
				error=email_error,
				input_type="email",
				autocomplete="username"
			)
			FormFieldRow(
				field=FormField::Password,
				value=fields.password,
				error=password_error,
				input_type="password",
				autocomplete="new-password"
			)
			PasswordStrengthMeter(password=fields.password)
			FormFieldRow(
				field=FormField::PasswordConfirmation,
				value=fields.password_confirmation,
				error=password_confirmation_error,
				input_type="password",
				autocomplete="new-password"
			)
			ul(id="register_form_errors") {
				Indexed(
					iterable=form_errors,
					view=|ctx, message| view! { ctx, li(class="input_error") { (message) } }
				)
			}
			div(id="register_actions") {
				a(href=login_url, rel="external", class="register_login_link") {
					"Already registered?"
				}
				button(type="submit", disabled=*in_flight.get()) {
					"Register"
				}
			}
		}
		SuccessOverlay(visible=overlay_visible, message=success_message)
	}
}
