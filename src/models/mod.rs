// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: pole markers, projects and cost estimates.

pub mod annotation;
pub mod cost;
pub mod project;
