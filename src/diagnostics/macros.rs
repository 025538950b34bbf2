// src/diagnostics/macros.rs

#[macro_export]
macro_rules! bpt_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debugger::should_log($level) {
            use $crate::debugger::color::*;
            let level_str = match $level {
                $crate::debugger::DebugLevel::Error => format!("{}ERROR{}", RED, RESET),
                $crate::debugger::DebugLevel::Warn => format!("{}WARN{}", YELLOW, RESET),
                $crate::debugger::DebugLevel::Info => format!("{}INFO{}", GREEN, RESET),
                $crate::debugger::DebugLevel::Debug => format!("{}DEBUG{}", BLUE, RESET),
                $crate::debugger::DebugLevel::Trace => format!("{}TRACE{}", GRAY, RESET),
                _ => "".to_string(),
            };
            eprintln!("{} [{}] {}", level_str, $component, format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! bpt_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::bpt_log!($crate::debugger::DebugLevel::Error, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! bpt_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::bpt_log!($crate::debugger::DebugLevel::Warn, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! bpt_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::bpt_log!($crate::debugger::DebugLevel::Info, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! bpt_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::bpt_log!($crate::debugger::DebugLevel::Debug, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! bpt_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::bpt_log!($crate::debugger::DebugLevel::Trace, $component, $($arg)*)
    };
}
