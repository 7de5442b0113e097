// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! folio - portfolio catalog viewer
//!
//! A desktop viewer for a content designer's portfolio: home, works
//! listing, per-project detail pages with a media gallery, and a
//! playground of side pieces.

mod app;
mod io;
mod models;
mod routes;
mod ui;
mod util;

use anyhow::Result;
use app::FolioApp;
use routes::Route;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // The catalog is built once here and handed to the app; nothing
    // mutates it afterwards short of loading a replacement file.
    let catalog = io::serialization::load_builtin()?;

    // An optional path argument deep-links into a view, e.g. /work/colabs
    let initial_route = match std::env::args().nth(1) {
        Some(path) => Route::parse(&path).unwrap_or_else(|| {
            log::warn!("Unrecognized start path {path:?}, starting at home");
            Route::Home
        }),
        None => Route::Home,
    };

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("AIRA RAZI - Portfolio"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "folio",
        options,
        Box::new(move |_cc| Ok(Box::new(FolioApp::new(catalog, initial_route)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
