// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for UI components.

pub mod container;
