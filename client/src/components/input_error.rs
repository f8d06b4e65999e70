use sycamore::prelude::*;

#[derive(Prop)]
pub struct InputErrorProps<'a> {
	message: &'a ReadSignal<Option<String>>,
	id: String,
}

#[component]
pub fn InputError<'a, G: Html>(ctx: Scope<'a>, props: InputErrorProps<'a>) -> View<G> {
	let id = props.id;
	view! {
		ctx,
		(if let Some(message) = props.message.get().as_ref().clone() {
			let id = id.clone();
			view! {
				ctx,
				span(id=id, class="input_error") { (message) }
			}
		} else {
			view! { ctx, }
		})
	}
}
