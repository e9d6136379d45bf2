#[macro_export]
macro_rules! schema_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debugger::debugger::should_log($level) {
            let indent = $crate::debugger::debugger::format_indent();
            let level_str = $crate::debugger::debugger::level_tag($level);
            eprintln!("{}{} [{}] {}", indent, level_str, $component, format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! schema_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::schema_log!($crate::debugger::DebugLevel::Error, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! schema_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::schema_log!($crate::debugger::DebugLevel::Warn, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! schema_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::schema_log!($crate::debugger::DebugLevel::Info, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! schema_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::schema_log!($crate::debugger::DebugLevel::Debug, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! schema_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::schema_log!($crate::debugger::DebugLevel::Trace, $component, $($arg)*)
    };
}

/// Logs `begin <name>` and `end <name> (<elapsed>)` around `$body`, indenting
/// whatever `$body` logs in between. Evaluates to the value of `$body`.
#[macro_export]
macro_rules! schema_scope {
    ($level:expr, $component:expr, $name:expr, $body:block) => {{
        let started = $crate::debugger::debugger::should_log($level)
            .then(|| {
                $crate::schema_log!($level, $component, "begin {}", $name);
                $crate::debugger::debugger::indent();
                ::std::time::Instant::now()
            });

        let result = $body;

        if let Some(started) = started {
            $crate::debugger::debugger::dedent();
            $crate::schema_log!($level, $component, "end {} ({:.2?})", $name, started.elapsed());
        }

        result
    }};
}
