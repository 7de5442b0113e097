// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Home view.
//!
//! A stack of full-height tiles: greeting, a link into the works
//! listing, a link into the playground, and the about/contact copy.
//! All content here is static apart from the works count.

use crate::models::catalog::Catalog;
use crate::routes::Route;
use egui::{Color32, RichText};

const TILE_HEIGHT: f32 = 420.0;

/// Display the home view. Returns the route of a clicked tile.
pub fn show(ui: &mut egui::Ui, catalog: &Catalog) -> Option<Route> {
    let mut clicked = None;

    hero_tile(ui);
    ui.add_space(12.0);

    if work_tile(ui, catalog.len()).clicked() {
        clicked = Some(Route::Works);
    }
    ui.add_space(12.0);

    if playground_tile(ui).clicked() {
        clicked = Some(Route::Playground);
    }
    ui.add_space(12.0);

    about_section(ui);
    ui.add_space(12.0);
    contact_section(ui);

    clicked
}

fn hero_tile(ui: &mut egui::Ui) {
    framed_tile(ui, |ui| {
        ui.label(RichText::new("HELLO").size(64.0).strong());
        ui.label(RichText::new("NICE TO").size(64.0).strong().italics());
        ui.label(RichText::new("MEET YOU").size(64.0).strong());
        ui.add_space(24.0);
        ui.label(
            RichText::new("PLEASE SCROLL")
                .size(10.0)
                .color(Color32::from_gray(150)),
        );
    });
}

fn work_tile(ui: &mut egui::Ui, count: usize) -> egui::Response {
    framed_tile(ui, |ui| {
        ui.label(
            RichText::new("2023—2025")
                .size(11.0)
                .color(Color32::from_gray(130)),
        );
        ui.label(RichText::new("WORK").size(64.0).strong());
        ui.label(RichText::new(format!("({count})")).size(48.0).strong());
    })
    .interact(egui::Sense::click())
}

fn playground_tile(ui: &mut egui::Ui) -> egui::Response {
    framed_tile(ui, |ui| {
        ui.label(
            RichText::new("FUN WORKS ALONG THE WAY")
                .size(11.0)
                .color(Color32::from_gray(130)),
        );
        ui.label(RichText::new("PLAY-").size(64.0).strong());
        ui.label(RichText::new("GROUND").size(64.0).strong());
    })
    .interact(egui::Sense::click())
}

fn about_section(ui: &mut egui::Ui) {
    framed_tile(ui, |ui| {
        ui.label(
            RichText::new(
                "I'M AIRA, A CONTENT DESIGNER WHO BELIEVES IN PUSHING CULTURE \
                 AND CHALLENGING STANDARDS THROUGH CREATIVITY, COLLABORATION \
                 AND LOTS OF COFFEE.",
            )
            .size(22.0)
            .strong(),
        );
    });
}

fn contact_section(ui: &mut egui::Ui) {
    framed_tile(ui, |ui| {
        ui.label(RichText::new("HOLLA AT ME").size(48.0).strong());
        ui.add_space(16.0);
        ui.hyperlink_to(
            RichText::new("HELLO@AIRARAZI.COM").size(20.0).strong(),
            "mailto:hello@airarazi.com",
        );
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            for label in ["LINKEDIN", "INSTAGRAM", "TWITTER"] {
                ui.label(RichText::new(label).size(10.0).strong());
                ui.add_space(12.0);
            }
        });
    });
}

/// A rounded full-width tile with vertically centered content.
fn framed_tile(
    ui: &mut egui::Ui,
    content: impl FnOnce(&mut egui::Ui),
) -> egui::Response {
    egui::Frame::none()
        .fill(ui.visuals().extreme_bg_color)
        .rounding(16.0)
        .stroke(egui::Stroke::new(1.0, Color32::from_gray(60)))
        .inner_margin(32.0)
        .show(ui, |ui| {
            ui.set_min_height(TILE_HEIGHT);
            ui.set_width(ui.available_width());
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(content);
            });
        })
        .response
}
