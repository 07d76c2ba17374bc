// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the survey workflow.

pub mod canvas;
pub mod help;
pub mod measurement;
pub mod properties;
pub mod sidebar;
pub mod summary;
pub mod toolbar;
pub mod upload;
