// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! External media URL resolution.
//!
//! Gallery items carry opaque identifiers on an external media host.
//! This module interpolates them into the host's fixed URL templates:
//! one for direct images, one for the embeddable video player. Whether
//! the asset actually exists is the host's concern, not ours.

use crate::models::media::{MediaItem, MediaKind};

/// Direct display URL for an image identifier.
pub fn image_url(reference_id: &str) -> String {
    format!("https://lh3.googleusercontent.com/d/{reference_id}")
}

/// Embeddable player URL for a video identifier.
pub fn video_embed_url(reference_id: &str) -> String {
    format!("https://drive.google.com/file/d/{reference_id}/preview")
}

/// Display URL for a gallery item, picked by its kind.
pub fn display_url(item: &MediaItem) -> String {
    match item.kind {
        MediaKind::Image => image_url(&item.reference_id),
        MediaKind::Video => video_embed_url(&item.reference_id),
    }
}
