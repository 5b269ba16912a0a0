//! Client entry point. Mounts the root [`App`] component onto the document
//! body.

use svm_playground::app::App;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("svm-playground starting");
    }
    leptos::mount::mount_to_body(App);
}
