pub mod debugger;

pub use debugger::{
    DebugLevel, LOG_ENV_VAR, color, get_debug_level, set_debug_level, should_log,
};
