// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Works listing view.
//!
//! Renders the catalog in its stable order as a two-column card grid;
//! each card links to the project's detail view.

use super::widgets;
use crate::models::catalog::Catalog;
use crate::models::project::Project;
use crate::routes::Route;
use crate::util::color::parse_hex;
use egui::{Color32, RichText};

const CARD_ASPECT: f32 = 4.0 / 5.0;

/// Display the works listing. Returns the route of a clicked card.
pub fn show(ui: &mut egui::Ui, catalog: &Catalog) -> Option<Route> {
    let mut clicked = None;

    widgets::section_header(ui, "2023—2025", "WORKS", Some(catalog.len()));
    ui.add_space(16.0);

    let columns = if ui.available_width() > 700.0 { 2 } else { 1 };
    let gap = 12.0;
    let card_width = (ui.available_width() - gap * (columns as f32 - 1.0)) / columns as f32;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(gap, gap);
        for project in catalog.iter() {
            if card(ui, project, card_width).clicked() {
                clicked = Some(Route::Detail(project.id.clone()));
            }
        }
    });

    clicked
}

/// One listing card: themed cover surface with the project metadata.
fn card(ui: &mut egui::Ui, project: &Project, width: f32) -> egui::Response {
    let theme = project.theme_or_default();
    let size = egui::vec2(width, width / CARD_ASPECT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let fill = parse_hex(&theme.background, Color32::from_gray(235));
        let text = parse_hex(&theme.text, Color32::from_gray(20));
        let painter = ui.painter();

        painter.rect_filled(rect, 16.0, fill);
        painter.rect_stroke(rect, 16.0, egui::Stroke::new(1.0, Color32::from_gray(60)));

        let content = rect.shrink(24.0);
        painter.text(
            content.left_bottom() - egui::vec2(0.0, 36.0),
            egui::Align2::LEFT_BOTTOM,
            format!("{} — {}", project.category.to_uppercase(), project.year),
            egui::FontId::monospace(10.0),
            text.gamma_multiply(0.6),
        );
        painter.text(
            content.left_bottom(),
            egui::Align2::LEFT_BOTTOM,
            &project.title,
            egui::FontId::proportional(28.0),
            text,
        );
        painter.text(
            content.left_top(),
            egui::Align2::LEFT_TOP,
            "COVER",
            egui::FontId::monospace(9.0),
            text.gamma_multiply(0.4),
        );
    }

    response.on_hover_ui(|ui| {
        ui.label(RichText::new(&project.cover_image).size(10.0).monospace());
    })
}
