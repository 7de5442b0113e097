// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media gallery data structures.
//!
//! This module defines the media references attached to a project:
//! images and embeddable videos stored on an external host and
//! addressed by opaque identifiers.

use serde::{Deserialize, Serialize};

/// Kind of gallery media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// One image or video reference within a project's gallery.
///
/// The `reference_id` is an opaque identifier on the external media host;
/// it is interpolated into a fixed URL template at render time and never
/// checked for existence here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(rename = "id")]
    pub reference_id: String,
}

impl MediaItem {
    /// Create a media reference of the given kind.
    pub fn new(kind: MediaKind, reference_id: impl Into<String>) -> Self {
        Self {
            kind,
            reference_id: reference_id.into(),
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}
