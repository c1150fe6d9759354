//! Club Schema Wizard Demo Entry Point

mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    club_schema_ui::logging::init();
    mount_to_body(App);
}
