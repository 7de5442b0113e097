// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the folio application.

pub mod detail;
pub mod footer;
pub mod home;
pub mod nav;
pub mod playground;
pub mod widgets;
pub mod works;
