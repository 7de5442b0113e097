// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shared utilities: grid layout policy and color parsing.

pub mod color;
pub mod layout;
