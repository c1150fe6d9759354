//! Browser logging: `tracing` events go to the devtools console.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the panic hook and the console subscriber. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    });
}
