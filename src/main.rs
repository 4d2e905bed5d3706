//! Binary entry point for the AdMatchHub frontend, a fully client-side
//! rendered Leptos application. The module tree compiles on every target so
//! the pure-logic unit tests run on the host; browser APIs are only touched
//! at runtime in the browser.

mod app;
#[path = "lib/mod.rs"]
mod app_lib;
mod components;
mod features;
mod routes;

use crate::app::App;
use leptos::prelude::mount_to_body;

pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    mount_to_body(App);
}
