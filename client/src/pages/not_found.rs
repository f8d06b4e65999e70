use crate::page_utils::set_page_title;
use signup_shared::settings::RegistrationSettings;
use sycamore::prelude::*;

#[component]
pub fn NotFoundView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating fallback page for unknown location");
	set_page_title("Not Found");

	let settings: &RegistrationSettings = use_context(ctx);
	let login_url = settings.login_url.clone();

	view! {
		ctx,
		h1 { "Not found!" }
		p { "There's nothing at this address." }
		p {
			a(href="/register") { "Create an account" }
			" or "
			a(href=login_url, rel="external") { "log in" }
		}
	}
}
