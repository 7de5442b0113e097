// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media grid layout policy.
//!
//! This module assigns each gallery item an aspect ratio and span from
//! its kind and position alone, producing a varied masonry-like grid
//! without any layout-engine computation.

use crate::models::media::MediaKind;

/// Aspect and span class for one cell of the media grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutClass {
    /// 9:16 portrait cell spanning two grid rows. All videos.
    Tall,
    /// 16:9 cell spanning two grid columns. Every fifth image.
    Wide,
    /// 1:1 cell. The default for images.
    Square,
}

impl LayoutClass {
    /// Width-to-height ratio of the cell.
    pub fn aspect_ratio(self) -> f32 {
        match self {
            LayoutClass::Tall => 9.0 / 16.0,
            LayoutClass::Wide => 16.0 / 9.0,
            LayoutClass::Square => 1.0,
        }
    }

    /// Columns this cell occupies in a grid of `columns` total.
    pub fn column_span(self, columns: usize) -> usize {
        match self {
            LayoutClass::Wide => 2.min(columns),
            LayoutClass::Tall | LayoutClass::Square => 1,
        }
    }
}

/// Layout class for the gallery item at `index`.
///
/// Pure in `(kind, index)`, so repeated renders of the same gallery
/// always produce the same grid.
pub fn layout_hint(kind: MediaKind, index: usize) -> LayoutClass {
    match kind {
        MediaKind::Video => LayoutClass::Tall,
        MediaKind::Image if index % 5 == 0 => LayoutClass::Wide,
        MediaKind::Image => LayoutClass::Square,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn videos_are_tall_at_any_position() {
        for index in 0..12 {
            assert_eq!(layout_hint(MediaKind::Video, index), LayoutClass::Tall);
        }
    }

    #[test]
    fn every_fifth_image_goes_wide() {
        assert_eq!(layout_hint(MediaKind::Image, 0), LayoutClass::Wide);
        assert_eq!(layout_hint(MediaKind::Image, 5), LayoutClass::Wide);
        assert_eq!(layout_hint(MediaKind::Image, 10), LayoutClass::Wide);
        assert_eq!(layout_hint(MediaKind::Image, 1), LayoutClass::Square);
        assert_eq!(layout_hint(MediaKind::Image, 4), LayoutClass::Square);
    }

    #[test]
    fn six_image_gallery_layout() {
        let classes: Vec<LayoutClass> = (0..6)
            .map(|i| layout_hint(MediaKind::Image, i))
            .collect();
        assert_eq!(
            classes,
            [
                LayoutClass::Wide,
                LayoutClass::Square,
                LayoutClass::Square,
                LayoutClass::Square,
                LayoutClass::Square,
                LayoutClass::Wide,
            ]
        );
    }

    #[test]
    fn hint_is_stable_across_calls() {
        for index in 0..20 {
            for kind in [MediaKind::Image, MediaKind::Video] {
                assert_eq!(layout_hint(kind, index), layout_hint(kind, index));
            }
        }
    }

    #[test]
    fn wide_span_clamps_to_narrow_grids() {
        assert_eq!(LayoutClass::Wide.column_span(3), 2);
        assert_eq!(LayoutClass::Wide.column_span(1), 1);
        assert_eq!(LayoutClass::Tall.column_span(3), 1);
    }
}
