// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O: catalog loading and external media URL resolution.

pub mod media;
pub mod serialization;
