pub mod data;
pub mod harness;

use std::sync::Once;

use bptree::debugger::{DebugLevel, set_debug_level};

#[allow(dead_code)]
static INIT: Once = Once::new();

#[allow(dead_code)]
pub fn init_debug_for_tests() {
    let level = DebugLevel::from_env()
        .or_else(|| {
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|s| DebugLevel::parse(&s))
        })
        .unwrap_or(DebugLevel::Warn);

    INIT.call_once(|| {
        set_debug_level(level);
    });
}
