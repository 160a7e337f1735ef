//! Entry-point behavior when no console has been installed.
//!
//! Console state is process-wide and set-once, so this scenario gets its own
//! test binary and deliberately never calls `init`.

use logshim::history;
use serde_json::json;

#[test]
fn records_every_call_without_a_console() {
    assert!(history::is_empty());

    logshim::log!("boot");
    logshim::log!(1, "a", json!({ "x": 2 }));
    logshim::log!();

    let records = history::snapshot();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].args(), &[json!("boot")]);
    assert_eq!(
        records[1].args(),
        &[json!(1), json!("a"), json!({ "x": 2 })]
    );
    assert!(records[2].args().is_empty());

    assert_eq!(
        history::export_json().unwrap(),
        r#"[["boot"],[1,"a",{"x":2}],[]]"#
    );
}
