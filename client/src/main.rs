use sycamore::prelude::*;

mod app;
mod components;
mod navigation;
mod page_utils;
mod pages;
mod settings;
mod submission;
use app::App;
use settings::load_settings;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let settings = load_settings();
	log::debug!("Loaded registration settings: {:?}", settings);

	sycamore::render(|ctx| {
		provide_context(ctx, settings);
		view! { ctx, App }
	});
}
