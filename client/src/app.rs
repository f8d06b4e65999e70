use crate::pages::not_found::NotFoundView;
use crate::pages::register::RegistrationView;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Route)]
enum AppRoutes {
	#[to("/register")]
	Register,
	#[not_found]
	NotFound,
}

#[component]
pub fn App<G: Html>(ctx: Scope) -> View<G> {
	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoutes>| {
				view! {
					ctx,
					div(id="app") {
						(match route.get().as_ref() {
							AppRoutes::Register => view! { ctx, RegistrationView },
							AppRoutes::NotFound => view! { ctx, NotFoundView },
						})
					}
				}
			}
		)
	}
}
