// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Route resolution.
//!
//! This module maps URL-style paths onto the four views of the
//! application. The path form doubles as the stable deep link for a
//! project, so parsing and formatting must stay inverse to each other.

/// One of the four views, carrying exactly the data it needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Works,
    /// Detail view for the project with this slug. The slug is carried
    /// verbatim; resolution against the catalog happens at render time.
    Detail(String),
    Playground,
}

impl Route {
    /// Parse a path into a route.
    ///
    /// Recognizes `/`, `/work`, `/work/{id}` and `/playground`, with a
    /// tolerated trailing slash. Anything else is `None`; default
    /// handling for unmatched paths belongs to the caller.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        match trimmed {
            "/" | "" => Some(Route::Home),
            "/work" => Some(Route::Works),
            "/playground" => Some(Route::Playground),
            _ => {
                let id = trimmed.strip_prefix("/work/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Some(Route::Detail(id.to_string()))
            }
        }
    }

    /// The canonical path form of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Works => "/work".to_string(),
            Route::Detail(id) => format!("/work/{id}"),
            Route::Playground => "/playground".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_four_path_shapes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/work"), Some(Route::Works));
        assert_eq!(
            Route::parse("/work/colabs"),
            Some(Route::Detail("colabs".to_string()))
        );
        assert_eq!(Route::parse("/playground"), Some(Route::Playground));
    }

    #[test]
    fn tolerates_trailing_slash() {
        assert_eq!(Route::parse("/work/"), Some(Route::Works));
        assert_eq!(Route::parse("/playground/"), Some(Route::Playground));
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse("/about"), None);
        assert_eq!(Route::parse("/work/a/b"), None);
        assert_eq!(Route::parse("work"), None);
    }

    #[test]
    fn unknown_slug_still_resolves_to_detail() {
        // A stale bookmark parses fine; the miss surfaces at catalog
        // lookup, where the detail view shows its placeholder.
        assert_eq!(
            Route::parse("/work/unknown-slug"),
            Some(Route::Detail("unknown-slug".to_string()))
        );
    }

    #[test]
    fn path_and_parse_are_inverse() {
        for route in [
            Route::Home,
            Route::Works,
            Route::Detail("beechtree".to_string()),
            Route::Playground,
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }
}
