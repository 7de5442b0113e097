// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the catalog and the current route, dispatches each
//! frame to the view selected by the route, and applies navigation
//! actions coming back from the views, the nav bar, and the footer.

use crate::models::catalog::Catalog;
use crate::routes::Route;
use crate::ui::{detail, footer, home, nav, playground, works};

/// Main application state.
pub struct FolioApp {
    /// The immutable project catalog, fixed between catalog loads.
    catalog: Catalog,

    /// Route of the view currently shown.
    route: Route,

    /// Scroll the central view back to the top on the next frame.
    scroll_to_top: bool,
}

impl FolioApp {
    /// Create the application on the given catalog and starting route.
    pub fn new(catalog: Catalog, initial_route: Route) -> Self {
        Self {
            catalog,
            route: initial_route,
            scroll_to_top: true,
        }
    }

    /// Switch views. Every navigation resets the scroll position.
    fn navigate(&mut self, route: Route) {
        if route != self.route {
            log::info!("Navigating to {}", route.path());
            self.route = route;
        }
        self.scroll_to_top = true;
    }

    /// Replace the catalog with one loaded from a file.
    ///
    /// On failure the current catalog stays installed. On success the
    /// view moves to the works listing, since the current route may
    /// reference a project that no longer exists.
    fn open_catalog(&mut self, path: std::path::PathBuf) {
        match crate::io::serialization::import_catalog(&path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded catalog with {} projects from {}",
                    catalog.len(),
                    path.display()
                );
                self.catalog = catalog;
                self.navigate(Route::Works);
            }
            Err(e) => {
                log::error!("Failed to load catalog: {e:#}");
            }
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Catalog...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Catalog", &["json", "yaml", "yml"])
                            .pick_file()
                        {
                            self.open_catalog(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Go", |ui| {
                    if ui.button("Home").clicked() {
                        self.navigate(Route::Home);
                        ui.close_menu();
                    }
                    if ui.button("Works").clicked() {
                        self.navigate(Route::Works);
                        ui.close_menu();
                    }
                    if ui.button("Playground").clicked() {
                        self.navigate(Route::Playground);
                        ui.close_menu();
                    }
                });
            });
        });

        // Navigation bar, shown on every view
        let nav_clicked = egui::TopBottomPanel::top("nav")
            .show(ctx, |ui| nav::show(ui, &self.route))
            .inner;
        if let Some(route) = nav_clicked {
            self.navigate(route);
        }

        // Footer, shown on every view
        let footer_action = egui::TopBottomPanel::bottom("footer")
            .show(ctx, |ui| footer::show(ui))
            .inner;
        match footer_action {
            footer::FooterAction::Navigate(route) => self.navigate(route),
            footer::FooterAction::BackToTop => self.scroll_to_top = true,
            footer::FooterAction::None => {}
        }

        // Routed central view
        let reset_scroll = std::mem::take(&mut self.scroll_to_top);
        let view_clicked = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical();
                if reset_scroll {
                    area = area.vertical_scroll_offset(0.0);
                }
                area.show(ui, |ui| match self.route.clone() {
                    Route::Home => home::show(ui, &self.catalog),
                    Route::Works => works::show(ui, &self.catalog),
                    Route::Detail(id) => detail::show(ui, &self.catalog, &id),
                    Route::Playground => {
                        playground::show(ui);
                        None
                    }
                })
                .inner
            })
            .inner;
        if let Some(route) = view_clicked {
            self.navigate(route);
        }
    }
}
