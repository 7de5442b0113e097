// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project (case study) data structures.
//!
//! This module defines a single portfolio entry: identity, display
//! metadata, optional theming, and the ordered media gallery.

use super::media::{MediaItem, MediaKind};
use serde::{Deserialize, Serialize};

/// Placeholder shown when a project has no description yet.
pub const DESCRIPTION_PLACEHOLDER: &str = "Project description coming soon. \
    We are currently updating our portfolio with the latest works and case studies.";

/// Per-project color theme. Colors are hex strings such as `#fafafa`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSpec {
    #[serde(rename = "bg")]
    pub background: String,
    pub accent: String,
    pub text: String,
}

impl Default for ThemeSpec {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            accent: "#141414".to_string(),
            text: "#141414".to_string(),
        }
    }
}

/// What the detail view shows as its large top media element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hero<'a> {
    /// An embeddable video from the gallery.
    Video(&'a MediaItem),
    /// The cover image URL.
    Cover(&'a str),
}

/// One portfolio case study, uniquely identified by its slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// URL-safe slug, the stable external identity of this entry.
    pub id: String,
    pub title: String,
    pub category: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Direct URL used as the listing thumbnail and as the hero fallback.
    pub cover_image: String,
    /// Prefer a gallery video as the detail hero when one exists.
    #[serde(default)]
    pub video_hero: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeSpec>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

impl Project {
    /// Description text, substituting the placeholder when absent.
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(DESCRIPTION_PLACEHOLDER)
    }

    /// Theme, substituting the default triple when absent.
    pub fn theme_or_default(&self) -> ThemeSpec {
        self.theme.clone().unwrap_or_default()
    }

    /// Resolve the detail hero.
    ///
    /// Renders the first gallery video when `video_hero` is set and the
    /// gallery actually contains one; otherwise falls back to the cover
    /// image. A `video_hero` flag without any video is not an error.
    pub fn hero(&self) -> Hero<'_> {
        if self.video_hero {
            if let Some(video) = self.media.iter().find(|m| m.kind == MediaKind::Video) {
                return Hero::Video(video);
            }
        }
        Hero::Cover(&self.cover_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(video_hero: bool, media: Vec<MediaItem>) -> Project {
        Project {
            id: "sample".to_string(),
            title: "SAMPLE".to_string(),
            category: "Testing".to_string(),
            year: "2025".to_string(),
            description: None,
            cover_image: "https://example.com/cover.jpg".to_string(),
            video_hero,
            theme: None,
            media,
        }
    }

    #[test]
    fn hero_prefers_first_gallery_video() {
        let p = project(
            true,
            vec![
                MediaItem::new(MediaKind::Image, "img-1"),
                MediaItem::new(MediaKind::Video, "vid-1"),
                MediaItem::new(MediaKind::Video, "vid-2"),
            ],
        );

        match p.hero() {
            Hero::Video(item) => assert_eq!(item.reference_id, "vid-1"),
            Hero::Cover(_) => panic!("expected video hero"),
        }
    }

    #[test]
    fn hero_falls_back_to_cover_without_videos() {
        // video_hero set but the gallery has no video entry
        let p = project(true, vec![MediaItem::new(MediaKind::Image, "img-1")]);
        assert_eq!(p.hero(), Hero::Cover("https://example.com/cover.jpg"));
    }

    #[test]
    fn hero_ignores_videos_when_flag_unset() {
        let p = project(false, vec![MediaItem::new(MediaKind::Video, "vid-1")]);
        assert_eq!(p.hero(), Hero::Cover("https://example.com/cover.jpg"));
    }

    #[test]
    fn missing_description_uses_placeholder() {
        let p = project(false, Vec::new());
        assert_eq!(p.description_or_default(), DESCRIPTION_PLACEHOLDER);
    }

    #[test]
    fn missing_theme_uses_default_triple() {
        let p = project(false, Vec::new());
        let theme = p.theme_or_default();
        assert_eq!(theme.background, "#ffffff");
        assert_eq!(theme.accent, "#141414");
        assert_eq!(theme.text, "#141414");
    }
}
