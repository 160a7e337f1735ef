//! The process-wide console object and the ensurer that installs it.
//!
//! After [`ensure`] has run, every name in [`ConsoleMethod::ALL`] resolves to
//! a callable on the installed [`Console`]: either a binding into the adopted
//! backend or a no-op fallback. Calling code never fails because a method is
//! missing.

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::backend::{self, ConsoleBackend};

/// The fixed set of method names guaranteed on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleMethod {
    Assert,
    Count,
    Debug,
    Dir,
    Dirxml,
    Error,
    Exception,
    Group,
    GroupCollapsed,
    GroupEnd,
    Info,
    Log,
    TimeStamp,
    Profile,
    ProfileEnd,
    Time,
    TimeEnd,
    Trace,
    Warn,
}

impl ConsoleMethod {
    pub const ALL: [ConsoleMethod; 19] = [
        ConsoleMethod::Assert,
        ConsoleMethod::Count,
        ConsoleMethod::Debug,
        ConsoleMethod::Dir,
        ConsoleMethod::Dirxml,
        ConsoleMethod::Error,
        ConsoleMethod::Exception,
        ConsoleMethod::Group,
        ConsoleMethod::GroupCollapsed,
        ConsoleMethod::GroupEnd,
        ConsoleMethod::Info,
        ConsoleMethod::Log,
        ConsoleMethod::TimeStamp,
        ConsoleMethod::Profile,
        ConsoleMethod::ProfileEnd,
        ConsoleMethod::Time,
        ConsoleMethod::TimeEnd,
        ConsoleMethod::Trace,
        ConsoleMethod::Warn,
    ];

    /// Wire name, spelled the way console hosts spell it.
    pub fn name(self) -> &'static str {
        match self {
            ConsoleMethod::Assert => "assert",
            ConsoleMethod::Count => "count",
            ConsoleMethod::Debug => "debug",
            ConsoleMethod::Dir => "dir",
            ConsoleMethod::Dirxml => "dirxml",
            ConsoleMethod::Error => "error",
            ConsoleMethod::Exception => "exception",
            ConsoleMethod::Group => "group",
            ConsoleMethod::GroupCollapsed => "groupCollapsed",
            ConsoleMethod::GroupEnd => "groupEnd",
            ConsoleMethod::Info => "info",
            ConsoleMethod::Log => "log",
            ConsoleMethod::TimeStamp => "timeStamp",
            ConsoleMethod::Profile => "profile",
            ConsoleMethod::ProfileEnd => "profileEnd",
            ConsoleMethod::Time => "time",
            ConsoleMethod::TimeEnd => "timeEnd",
            ConsoleMethod::Trace => "trace",
            ConsoleMethod::Warn => "warn",
        }
    }

    pub fn from_name(name: &str) -> Option<ConsoleMethod> {
        ConsoleMethod::ALL.iter().copied().find(|m| m.name() == name)
    }
}

impl std::fmt::Display for ConsoleMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One console invocation: the argument list plus the call site the
/// invocation is attributed to.
pub struct ConsoleCall<'a> {
    pub args: &'a [Value],
    pub caller: Option<&'static Location<'static>>,
}

type MethodFn = Arc<dyn Fn(&ConsoleCall<'_>) + Send + Sync>;

fn bind(backend: Arc<dyn ConsoleBackend>, method: ConsoleMethod) -> MethodFn {
    Arc::new(move |call| backend.call(method, call))
}

fn noop() -> MethodFn {
    Arc::new(|_| {})
}

/// Console-like object: a table from method name to callable.
pub struct Console {
    methods: HashMap<ConsoleMethod, MethodFn>,
}

impl Console {
    /// Empty console, the fallback when no usable facility exists.
    pub fn empty() -> Console {
        Console {
            methods: HashMap::new(),
        }
    }

    /// Adopt a probed facility: every method the backend reports is bound
    /// through to it, the rest stay unbound until [`Console::fill_missing`].
    pub fn adopt(backend: Arc<dyn ConsoleBackend>) -> Console {
        let mut methods = HashMap::new();
        for method in ConsoleMethod::ALL {
            if backend.supports(method) {
                methods.insert(method, bind(Arc::clone(&backend), method));
            }
        }
        Console { methods }
    }

    /// Bind a no-op to every name not already bound. Existing bindings are
    /// never overwritten, so a second run leaves the method set unchanged.
    pub fn fill_missing(&mut self) {
        for method in ConsoleMethod::ALL {
            self.methods.entry(method).or_insert_with(noop);
        }
    }

    /// Invoke `method`, attributing the call to the immediate caller.
    #[track_caller]
    pub fn call(&self, method: ConsoleMethod, args: &[Value]) {
        let call = ConsoleCall {
            args,
            caller: Some(Location::caller()),
        };
        self.call_with(method, &call);
    }

    /// Invoke `method` with an explicit call context. A panic inside the
    /// bound callable is not caught here.
    pub fn call_with(&self, method: ConsoleMethod, call: &ConsoleCall<'_>) {
        if let Some(callable) = self.methods.get(&method) {
            callable(call);
        }
    }
}

static CONSOLE: OnceCell<Console> = OnceCell::new();

/// The installed console, if the ensurer has run.
pub fn installed() -> Option<&'static Console> {
    CONSOLE.get()
}

/// Run the ensurer against the platform facility.
pub fn ensure() {
    ensure_with(backend::detect());
}

/// Run the ensurer against a caller-supplied facility. A backend that fails
/// the capability probe (or `None`) selects the empty fallback console, which
/// then gets no-ops for the whole method set. Installation is set-once; a
/// later run never replaces an installed console.
pub fn ensure_with(backend: Option<Arc<dyn ConsoleBackend>>) {
    let mut console = match backend {
        Some(facility) if backend::probe(facility.as_ref()) => Console::adopt(facility),
        _ => Console::empty(),
    };
    console.fill_missing();

    if CONSOLE.set(console).is_ok() {
        log::debug!(
            "console facility installed ({} methods bound)",
            ConsoleMethod::ALL.len()
        );
    }
}
