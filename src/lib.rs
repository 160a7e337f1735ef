pub mod backend;
pub mod console;
pub mod format;
pub mod history;
pub mod logger;

#[doc(hidden)]
pub mod __private {
    pub use serde_json::json;
}

/// Install the process console against the platform facility. Run once at
/// startup, before the first `log!` call.
pub fn init() {
    console::ensure();
}

/// Install the process console against a caller-supplied facility. `None`
/// selects the no-op fallback console.
pub fn init_with(backend: Option<std::sync::Arc<dyn backend::ConsoleBackend>>) {
    console::ensure_with(backend);
}
