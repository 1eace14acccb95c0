//! Menu Board Entry Point

mod app;
mod components;
mod context;
mod models;
mod session;
mod storage;
mod store;
mod view_mode;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
