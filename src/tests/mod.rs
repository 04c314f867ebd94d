// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0

//! Crate-level behavior tests against a recording backend.

mod harness;
mod layout_tests;
