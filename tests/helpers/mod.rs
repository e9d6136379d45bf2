pub mod data;
pub mod random;

use std::sync::Once;

use streamsql_types::debugger::{DebugLevel, set_debug_level};

#[allow(dead_code)]
static INIT: Once = Once::new();

/// Turns on crate logging when `RUST_LOG` is set.
#[allow(dead_code)]
pub fn init_debug_for_tests() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| DebugLevel::parse(&s))
        .unwrap_or(DebugLevel::Off);

    INIT.call_once(|| {
        set_debug_level(level);
    });
}
