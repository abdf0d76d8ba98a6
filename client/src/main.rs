use sycamore::prelude::*;

mod app;
mod components;
mod effects;
mod error;
mod form_steps;
mod http;
mod submission;
mod validation;

use app::App;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	sycamore::render(|ctx| {
		view! { ctx, App() }
	});
}
