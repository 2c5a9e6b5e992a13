// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Deliberate one-byte heap leak, enabled only through `leak_fixture`.
//!
//! The storage is acquired and never written, read or released. It exists so
//! leak detectors have a known positive to report.

use core::mem::MaybeUninit;
use core::sync::atomic::{AtomicUsize, Ordering};

static LEAKED_BYTES: AtomicUsize = AtomicUsize::new(0);

/// Leaks one uninitialised byte for the lifetime of the process.
pub(crate) fn leak_one_byte() {
    // Kept observable so optimized builds do not elide the allocation.
    std::hint::black_box(Box::leak(Box::new(MaybeUninit::<u8>::uninit())));
    LEAKED_BYTES.fetch_add(1, Ordering::Relaxed);
    log::warn!("greeter: leak fixture enabled, 1 byte intentionally leaked");
}

/// Number of bytes leaked by the fixture in this process.
pub fn leaked_fixture_bytes() -> usize {
    LEAKED_BYTES.load(Ordering::Relaxed)
}
