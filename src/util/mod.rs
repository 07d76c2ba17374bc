// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shared helpers.

pub mod geometry;
pub mod style;
pub mod time;
