// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Folio integration tests.
//!
//! Provides mock adapters and test harness infrastructure for fast,
//! deterministic, CI-runnable tests without external services.
//!
//! # Components
//!
//! - [`MemoryStore`] - In-memory contact store with a switchable failure mode
//! - [`MockNotifier`] - Scripted notification sink that records every call
//! - [`TestHarness`] - Full HTTP stack over a temp SQLite database

pub mod harness;
pub mod memory_store;
pub mod mock_notifier;

pub use harness::{TestHarness, TestHarnessBuilder, valid_submission};
pub use memory_store::MemoryStore;
pub use mock_notifier::{MockNotifier, NotifyCall};
