// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: String provider consumed by the greeter
//! OWNERS: @runtime
//! STATUS: Functional
//! API_STABILITY: Stable
//! TEST_COVERAGE: 2 unit tests
//!
//! PUBLIC API:
//!   - SubjectProvider: zero-argument source of an immutable subject string
//!   - BazelTest: provider returning the fixed identifier "BazelTest"

#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Supplies the subject substituted into a greeting.
///
/// Implementations are total: the returned string is never validated or
/// interpreted by callers.
pub trait SubjectProvider {
    /// Returns the subject string.
    fn some_string(&self) -> &'static str;
}

impl<T: SubjectProvider + ?Sized> SubjectProvider for &T {
    fn some_string(&self) -> &'static str {
        (**self).some_string()
    }
}

/// Provider for the fixed `BazelTest` identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BazelTest;

impl BazelTest {
    const SUBJECT: &'static str = "BazelTest";

    /// Returns `"BazelTest"`.
    pub const fn some_string() -> &'static str {
        Self::SUBJECT
    }
}

impl SubjectProvider for BazelTest {
    fn some_string(&self) -> &'static str {
        BazelTest::some_string()
    }
}
