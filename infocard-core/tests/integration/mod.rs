// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration Tests for InfoCard Core
//!
//! These tests verify complete workflows from signing in through loading,
//! sharing and editing a card.
//!
//! Run with: cargo test --test integration

#[allow(dead_code)]
#[path = "../common/mod.rs"]
mod common;

mod card_workflow_test;
mod edit_workflow_test;
