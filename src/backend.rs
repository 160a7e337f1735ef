//! Console facilities the shim can forward to.

use std::sync::Arc;

use crate::console::{ConsoleCall, ConsoleMethod};

/// A console-like facility: reports which methods it carries and receives
/// forwarded calls for those methods.
pub trait ConsoleBackend: Send + Sync {
    /// Structural capability check for one method name.
    fn supports(&self, method: ConsoleMethod) -> bool;

    /// Forward one invocation. Only reached for methods `supports` reported.
    fn call(&self, method: ConsoleMethod, call: &ConsoleCall<'_>);
}

/// Capability probe: a facility is usable when its primary logging method is
/// callable. Probe failure is recovered by the ensurer, never surfaced.
pub fn probe(backend: &dyn ConsoleBackend) -> bool {
    backend.supports(ConsoleMethod::Log)
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use log::{Level, Record};

    use super::*;
    use crate::format;

    /// Routes console methods onto the process `log` facade, one record per
    /// call, stamped with the attributed call site.
    pub struct LogFacadeBackend;

    impl LogFacadeBackend {
        pub fn new() -> LogFacadeBackend {
            LogFacadeBackend
        }
    }

    fn level_for(method: ConsoleMethod) -> Level {
        match method {
            ConsoleMethod::Assert | ConsoleMethod::Error | ConsoleMethod::Exception => {
                Level::Error
            }
            ConsoleMethod::Warn => Level::Warn,
            ConsoleMethod::Debug => Level::Debug,
            ConsoleMethod::Trace => Level::Trace,
            _ => Level::Info,
        }
    }

    impl ConsoleBackend for LogFacadeBackend {
        fn supports(&self, _method: ConsoleMethod) -> bool {
            true
        }

        fn call(&self, method: ConsoleMethod, call: &ConsoleCall<'_>) {
            let line = format::render_args(call.args);
            log::logger().log(
                &Record::builder()
                    .args(format_args!("{line}"))
                    .level(level_for(method))
                    .target(method.name())
                    .file(call.caller.map(|site| site.file()))
                    .line(call.caller.map(|site| site.line()))
                    .build(),
            );
        }
    }

    /// The platform facility, if any.
    pub fn detect() -> Option<Arc<dyn ConsoleBackend>> {
        Some(Arc::new(LogFacadeBackend::new()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use web_sys::console;
    use web_sys::wasm_bindgen::JsValue;

    use super::*;
    use crate::format;

    /// Routes leveled console methods onto the browser console. Methods with
    /// no leveled counterpart stay unbound and the ensurer fills them with
    /// no-ops.
    pub struct WebConsoleBackend;

    impl WebConsoleBackend {
        pub fn new() -> WebConsoleBackend {
            WebConsoleBackend
        }
    }

    impl ConsoleBackend for WebConsoleBackend {
        fn supports(&self, method: ConsoleMethod) -> bool {
            matches!(
                method,
                ConsoleMethod::Log
                    | ConsoleMethod::Debug
                    | ConsoleMethod::Info
                    | ConsoleMethod::Warn
                    | ConsoleMethod::Error
                    | ConsoleMethod::Exception
                    | ConsoleMethod::Trace
            )
        }

        fn call(&self, method: ConsoleMethod, call: &ConsoleCall<'_>) {
            let line = JsValue::from(format::render_args(call.args));
            match method {
                ConsoleMethod::Debug => console::debug_1(&line),
                ConsoleMethod::Info => console::info_1(&line),
                ConsoleMethod::Warn => console::warn_1(&line),
                ConsoleMethod::Error | ConsoleMethod::Exception => console::error_1(&line),
                ConsoleMethod::Trace => console::trace_1(&line),
                _ => console::log_1(&line),
            }
        }
    }

    /// The platform facility, if any.
    pub fn detect() -> Option<Arc<dyn ConsoleBackend>> {
        Some(Arc::new(WebConsoleBackend::new()))
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
