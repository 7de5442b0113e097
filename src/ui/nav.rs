// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Top navigation bar.
//!
//! Fixed links to the three top-level views plus the name badge. The
//! bar is rendered on every view, including the not-found state of the
//! detail page.

use crate::routes::Route;
use egui::{Color32, RichText};

const LINKS: [(&str, Route); 3] = [
    ("HOME", Route::Home),
    ("WORK", Route::Works),
    ("PLAYGROUND", Route::Playground),
];

/// Display the navigation bar. Returns the route of a clicked link.
pub fn show(ui: &mut egui::Ui, current: &Route) -> Option<Route> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 18.0;

        for (label, route) in LINKS {
            let active = is_active(current, &route);
            if ui
                .selectable_label(active, RichText::new(label).size(10.0).strong())
                .clicked()
            {
                clicked = Some(route);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new("AIRA RAZI")
                    .size(10.0)
                    .monospace()
                    .color(Color32::from_gray(130)),
            );
        });
    });

    clicked
}

/// The WORK link stays highlighted on detail pages too.
fn is_active(current: &Route, link: &Route) -> bool {
    match (current, link) {
        (Route::Detail(_), Route::Works) => true,
        _ => current == link,
    }
}
