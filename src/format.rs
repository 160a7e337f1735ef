//! Rendering of argument lists for display.

use serde_json::Value;

/// Space-joined rendering of one argument list. Strings render bare, every
/// other value as compact JSON.
pub fn render_args(args: &[Value]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match arg {
            Value::String(s) => out.push_str(s),
            other => out.push_str(&other.to_string()),
        }
    }
    out
}
