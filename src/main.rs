mod app;
mod browser;
mod components;
mod config;
mod utils;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    utils::logging::init_logging();

    let root = utils::dom::mount_point(config::MOUNT_ID).expect("Failed to find #app element");

    mount_to(root, App).forget();
}
