// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The project catalog.
//!
//! An ordered, immutable collection of projects. It is constructed once
//! at startup and handed by reference to every view; nothing mutates it
//! afterwards, so lookups and ordering are stable for the process
//! lifetime.

use super::project::Project;

/// The fixed ordered collection of portfolio projects.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Wrap an ordered list of projects. Order is preserved as given.
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Iterate projects in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    /// Look up a project by its slug.
    ///
    /// Exact, case-sensitive match; a miss is an expected outcome (stale
    /// bookmarks, typed URLs) and is reported as `None`, never an error.
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The project following `current` in catalog order, wrapping from
    /// the last entry back to the first.
    ///
    /// `current` must have been obtained from this catalog; membership is
    /// resolved by slug, not by value equality.
    pub fn next_after(&self, current: &Project) -> &Project {
        debug_assert!(self.find(&current.id).is_some(), "project not in catalog");
        let position = self
            .projects
            .iter()
            .position(|p| p.id == current.id)
            .unwrap_or(0);
        &self.projects[(position + 1) % self.projects.len()]
    }

    /// First slug that appears more than once, if any.
    ///
    /// Slugs double as route parameters, so a duplicate would make one of
    /// the entries unreachable.
    pub fn duplicate_id(&self) -> Option<&str> {
        for (i, project) in self.projects.iter().enumerate() {
            if self.projects[..i].iter().any(|p| p.id == project.id) {
                return Some(&project.id);
            }
        }
        None
    }

    /// Whether any entry has an empty slug.
    pub fn blank_id(&self) -> bool {
        self.projects.iter().any(|p| p.id.is_empty())
    }
}
