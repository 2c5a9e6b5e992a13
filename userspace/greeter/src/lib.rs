// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Greeting logic shared with the hello entry point
//! OWNERS: @runtime
//! STATUS: Functional
//! API_STABILITY: Stable
//! TEST_COVERAGE: 17 unit tests, 4 integration tests
//!
//! PUBLIC API:
//!   - execute(args, config, provider) -> Result<String>: line that would be printed
//!   - greet(out, config, provider) -> Result<()>: write one greeting line to a sink
//!   - run() -> Result<()>: process entry, prints to stdout
//!   - GreeterConfig: variant selection loaded from GREETER_CONFIG
//!
//! DEPENDENCIES:
//!   - subject::SubjectProvider: source of the greeted subject
//!   - toml/serde: configuration parsing
//!   - log: diagnostics on stderr via the binary's logger

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod error;
mod fixture;
mod template;

use std::io::{self, Write};

use subject::{BazelTest, SubjectProvider};

pub use config::{GreeterConfig, CONFIG_ENV};
pub use error::{ConfigError, GreeterError, Result};
pub use fixture::leaked_fixture_bytes;
pub use template::Template;

/// Writes the greeting line for `provider` to `out` and flushes it.
///
/// Exactly one line is written. The leak fixture, when configured, runs after
/// the line is flushed.
pub fn greet<W, P>(out: &mut W, config: &GreeterConfig, provider: P) -> Result<()>
where
    W: Write + ?Sized,
    P: SubjectProvider,
{
    let template = Template::for_config(config);
    log::debug!("greeter: using {template:?} template");
    let line = template.render(provider.some_string());
    out.write_all(line.as_bytes())?;
    out.flush()?;
    if config.leak_fixture {
        fixture::leak_one_byte();
    }
    Ok(())
}

/// Returns the line [`greet`] would print without writing it or running the
/// leak fixture. Arguments are accepted and ignored.
pub fn execute<P: SubjectProvider>(
    args: &[&str],
    config: &GreeterConfig,
    provider: P,
) -> Result<String> {
    log::trace!("greeter: ignoring {} argument(s)", args.len());
    Ok(Template::for_config(config).render(provider.some_string()))
}

/// Entry point used by the hello binary.
pub fn run() -> Result<()> {
    let owned: Vec<String> = std::env::args().skip(1).collect();
    log::trace!("greeter: ignoring {} argument(s)", owned.len());
    let config = GreeterConfig::from_env()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    greet(&mut out, &config, BazelTest)
}
