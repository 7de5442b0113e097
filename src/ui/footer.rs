// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page footer.

use crate::routes::Route;
use egui::{Color32, RichText};

/// Result of footer interaction.
pub enum FooterAction {
    None,
    Navigate(Route),
    BackToTop,
}

/// Display the footer with the copyright line and quick links.
pub fn show(ui: &mut egui::Ui) -> FooterAction {
    let mut action = FooterAction::None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("© 2026 AIRA RAZI — ALL RIGHTS RESERVED")
                .size(10.0)
                .monospace()
                .color(Color32::from_gray(110)),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .link(RichText::new("BACK TO TOP").size(10.0).strong())
                .clicked()
            {
                action = FooterAction::BackToTop;
            }
            ui.add_space(18.0);
            if ui.link(RichText::new("HOME").size(10.0).strong()).clicked() {
                action = FooterAction::Navigate(Route::Home);
            }
        });
    });

    action
}
