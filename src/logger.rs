//! The global `log` entry point.

use std::panic::Location;

use serde_json::Value;

use crate::console::{self, ConsoleCall, ConsoleMethod};
use crate::history::{self, CallRecord};

/// Record `args` in the history, then forward them to the console's `log`
/// method when a console is installed. Recording happens first and happens
/// on every call; forwarding is skipped silently while no console exists.
/// The forwarded call is attributed to this function's caller.
#[track_caller]
pub fn log(args: Vec<Value>) {
    let caller = Location::caller();
    history::append(CallRecord::new(args.clone()));

    if let Some(console) = console::installed() {
        let call = ConsoleCall {
            args: &args,
            caller: Some(caller),
        };
        console.call_with(ConsoleMethod::Log, &call);
    }
}

/// Variadic logging: every argument is converted to a JSON value, recorded
/// in the history, and forwarded to the console.
#[macro_export]
macro_rules! log {
    ($($arg:expr),* $(,)?) => {
        $crate::logger::log(::std::vec![$($crate::__private::json!($arg)),*])
    };
}
