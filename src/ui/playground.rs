// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playground view.
//!
//! A static list of side pieces - talks, articles, workshops. No
//! catalog dependency.

use super::widgets;

const PIECES: [(&str, &str, &str); 4] = [
    ("AI Ethics", "Article", "2024"),
    ("Microcopy", "Case Study", "2023"),
    ("Automation", "Workshop", "2023"),
    ("Future of UX", "Talk", "2022"),
];

/// Display the playground view.
pub fn show(ui: &mut egui::Ui) {
    widgets::section_header(ui, "FUN WORKS ALONG THE WAY", "PLAY-GROUND", None);
    ui.add_space(8.0);

    for (title, category, year) in PIECES {
        widgets::tile(ui, title, category, year);
    }
}
