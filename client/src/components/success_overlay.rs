use sycamore::prelude::*;

#[derive(Prop)]
pub struct SuccessOverlayProps<'a> {
	visible: &'a ReadSignal<bool>,
	message: &'a ReadSignal<Option<String>>,
}

#[component]
pub fn SuccessOverlay<'a, G: Html>(ctx: Scope<'a>, props: SuccessOverlayProps<'a>) -> View<G> {
	view! {
		ctx,
		(if *props.visible.get() {
			let message = props.message.get().as_ref().clone().unwrap_or_default();
			view! {
				ctx,
				div(id="register_success_overlay", class="overlay") {
					div(class="overlay_dialog") {
						h3(class="overlay_success_message") { (message) }
					}
				}
			}
		} else {
			view! { ctx, }
		})
	}
}
