// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Small shared widgets: section headers and list tiles.

use egui::{Color32, RichText};

/// A section header with an eyebrow line, a large title, and an
/// optional entry count.
pub fn section_header(ui: &mut egui::Ui, subtitle: &str, title: &str, count: Option<usize>) {
    ui.add_space(24.0);
    ui.label(
        RichText::new(subtitle.to_uppercase())
            .size(10.0)
            .color(Color32::from_gray(130)),
    );
    ui.horizontal(|ui| {
        ui.label(RichText::new(title).size(48.0).strong());
        if let Some(count) = count {
            ui.label(
                RichText::new(format!("({count})"))
                    .size(14.0)
                    .monospace()
                    .color(Color32::from_gray(130)),
            );
        }
    });
    ui.add_space(12.0);
    ui.separator();
}

/// A full-width list tile with title, category and year. Returns the
/// row response so callers can react to clicks.
pub fn tile(ui: &mut egui::Ui, title: &str, category: &str, year: &str) -> egui::Response {
    let response = ui
        .scope(|ui| {
            ui.add_space(16.0);
            ui.label(
                RichText::new(format!("{} — {}", category.to_uppercase(), year))
                    .size(10.0)
                    .monospace()
                    .color(Color32::from_gray(130)),
            );
            ui.label(RichText::new(title.to_uppercase()).size(32.0).strong());
            ui.add_space(16.0);
            ui.separator();
        })
        .response;
    response.interact(egui::Sense::click())
}
