use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

pub fn set_page_title(new_title: &str) {
	if let Some(window) = window() {
		if let Some(document) = window.document() {
			document.set_title(new_title);
		}
	}
}

pub fn focus_element(element_id: &str) {
	if let Some(window) = window() {
		if let Some(document) = window.document() {
			if let Some(element) = document.get_element_by_id(element_id) {
				let html_element: HtmlElement = element.unchecked_into();
				let _ = html_element.focus();
			}
		}
	}
}
