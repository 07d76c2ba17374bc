// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for sketches, the project store and exports.

pub mod export;
pub mod media;
pub mod serialization;
pub mod storage;
