// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Hello entrypoint wiring process I/O to the greeter library
//! INTENT: Print one greeting line and exit 0
//! DEPS: greeter (logic), env_logger (stderr diagnostics via RUST_LOG)
//! TESTS: tests/process.rs runs the binary end to end

fn main() {
    env_logger::init();
    if let Err(err) = greeter::run() {
        log::debug!("hello: aborting: {err:?}");
        eprintln!("hello: exited with error: {err}");
        std::process::exit(1);
    }
}
