//! Forwarding to a capturing facility.

use std::sync::Arc;

use logshim::backend::ConsoleBackend;
use logshim::console::{self, ConsoleCall, ConsoleMethod};
use logshim::history;
use parking_lot::Mutex;
use serde_json::{Value, json};

struct Observed {
    method: ConsoleMethod,
    args: Vec<Value>,
    caller_file: Option<String>,
}

#[derive(Default)]
struct Capture {
    calls: Mutex<Vec<Observed>>,
}

struct StubBackend(Arc<Capture>);

impl ConsoleBackend for StubBackend {
    fn supports(&self, method: ConsoleMethod) -> bool {
        method == ConsoleMethod::Log
    }

    fn call(&self, method: ConsoleMethod, call: &ConsoleCall<'_>) {
        self.0.calls.lock().push(Observed {
            method,
            args: call.args.to_vec(),
            caller_file: call.caller.map(|site| site.file().to_string()),
        });
    }
}

#[test]
fn records_then_forwards_with_caller_attribution() {
    let capture = Arc::new(Capture::default());
    logshim::init_with(Some(Arc::new(StubBackend(Arc::clone(&capture)))));

    logshim::log!(1, "a", json!({ "x": 2 }));

    let expected = vec![json!(1), json!("a"), json!({ "x": 2 })];
    let last = history::last().expect("history record");
    assert_eq!(last.args(), expected.as_slice());

    {
        let calls = capture.calls.lock();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, ConsoleMethod::Log);
        assert_eq!(calls[0].args, expected);

        // Attribution points at this test, not at the logger internals.
        let file = calls[0].caller_file.as_deref().expect("caller site");
        assert!(file.ends_with("forwarding.rs"), "attributed to {file}");
    }

    // Methods the stub does not report were filled with no-ops; invoking
    // them reaches nothing.
    console::installed()
        .expect("console installed")
        .call(ConsoleMethod::Profile, &[json!("ignored")]);
    assert_eq!(capture.calls.lock().len(), 1);
}
