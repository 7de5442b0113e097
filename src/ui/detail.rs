// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project detail view.
//!
//! Resolves the route slug against the catalog and renders the project
//! header, hero, description, media grid, and the wrap-around link to
//! the next project. A slug that resolves to nothing gets a neutral
//! placeholder; the surrounding chrome stays untouched.

use crate::io::media::{display_url, video_embed_url};
use crate::models::catalog::Catalog;
use crate::models::media::{MediaItem, MediaKind};
use crate::models::project::{Hero, Project};
use crate::routes::Route;
use crate::util::color::parse_hex;
use crate::util::layout::layout_hint;
use egui::{Color32, RichText};

const GRID_COLUMNS: usize = 3;

/// Display the detail view for `id`. Returns the route of a clicked link.
pub fn show(ui: &mut egui::Ui, catalog: &Catalog, id: &str) -> Option<Route> {
    let Some(project) = catalog.find(id) else {
        not_found(ui, id);
        return back_link(ui);
    };

    let mut clicked = None;
    let theme = project.theme_or_default();
    let accent = parse_hex(&theme.accent, Color32::from_gray(20));
    let text = parse_hex(&theme.text, ui.visuals().text_color());

    if back_link(ui).is_some() {
        clicked = Some(Route::Works);
    }
    ui.add_space(16.0);

    header(ui, project, accent, text);
    ui.add_space(24.0);
    hero(ui, project, text);
    ui.add_space(24.0);

    ui.label(
        RichText::new(project.description_or_default().to_uppercase())
            .size(20.0)
            .strong()
            .color(text),
    );
    ui.add_space(32.0);

    gallery(ui, project, text);
    ui.add_space(48.0);

    if let Some(route) = next_project_link(ui, catalog, project, accent) {
        clicked = Some(route);
    }

    clicked
}

fn back_link(ui: &mut egui::Ui) -> Option<Route> {
    ui.link(RichText::new("← BACK TO WORKS").size(10.0).strong())
        .clicked()
        .then_some(Route::Works)
}

fn header(ui: &mut egui::Ui, project: &Project, accent: Color32, text: Color32) {
    ui.label(
        RichText::new(format!(
            "{} — {}",
            project.category.to_uppercase(),
            project.year
        ))
        .size(10.0)
        .monospace()
        .color(text.gamma_multiply(0.6)),
    );
    ui.label(RichText::new(&project.title).size(56.0).strong().color(accent));
}

/// Full-width 16:9 hero: the first gallery video when designated,
/// otherwise the cover image.
fn hero(ui: &mut egui::Ui, project: &Project, text: Color32) {
    let width = ui.available_width();
    let size = egui::vec2(width, width * 9.0 / 16.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let (label, url) = match project.hero() {
        Hero::Video(item) => ("HERO — VIDEO", video_embed_url(&item.reference_id)),
        Hero::Cover(cover) => ("HERO — COVER", cover.to_string()),
    };
    media_frame(ui, rect, label, &url, text);
}

/// The media grid: three columns, aspect and span assigned per item by
/// the layout policy.
fn gallery(ui: &mut egui::Ui, project: &Project, text: Color32) {
    if project.media.is_empty() {
        return;
    }

    let gap = 10.0;
    let column_width =
        (ui.available_width() - gap * (GRID_COLUMNS as f32 - 1.0)) / GRID_COLUMNS as f32;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(gap, gap);
        for (index, item) in project.media.iter().enumerate() {
            gallery_cell(ui, item, index, column_width, gap, text);
        }
    });
}

fn gallery_cell(
    ui: &mut egui::Ui,
    item: &MediaItem,
    index: usize,
    column_width: f32,
    gap: f32,
    text: Color32,
) {
    let class = layout_hint(item.kind, index);
    let span = class.column_span(GRID_COLUMNS) as f32;
    let width = column_width * span + gap * (span - 1.0);
    let size = egui::vec2(width, width / class.aspect_ratio());

    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let label = match item.kind {
        MediaKind::Image => format!("IMAGE {index:02}"),
        MediaKind::Video => format!("VIDEO {index:02}"),
    };
    media_frame(ui, rect, &label, &display_url(item), text);
}

/// Placeholder surface for one external media asset. Fetching the asset
/// itself is the remote host's side of the contract; we show the
/// resolved URL.
fn media_frame(ui: &mut egui::Ui, rect: egui::Rect, label: &str, url: &str, text: Color32) {
    let painter = ui.painter();
    painter.rect_filled(rect, 12.0, Color32::from_gray(32));
    painter.rect_stroke(rect, 12.0, egui::Stroke::new(1.0, Color32::from_gray(70)));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::monospace(11.0),
        text.gamma_multiply(0.8),
    );
    painter.text(
        rect.left_bottom() + egui::vec2(10.0, -10.0),
        egui::Align2::LEFT_BOTTOM,
        truncated(url, 48),
        egui::FontId::monospace(8.0),
        text.gamma_multiply(0.4),
    );
}

fn next_project_link(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    project: &Project,
    accent: Color32,
) -> Option<Route> {
    let next = catalog.next_after(project);

    ui.separator();
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("NEXT PROJECT")
                .size(10.0)
                .color(Color32::from_gray(130)),
        );
        ui.add_space(8.0);
        ui.link(RichText::new(&next.title).size(48.0).strong().color(accent))
            .clicked()
            .then(|| Route::Detail(next.id.clone()))
    })
    .inner
}

/// Neutral placeholder for an unknown slug. Nav and footer are drawn by
/// the app shell and remain fully usable around this.
fn not_found(ui: &mut egui::Ui, id: &str) {
    ui.add_space(96.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Project not found").size(24.0).strong());
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!("No project with id {id:?}"))
                .size(12.0)
                .color(Color32::from_gray(130)),
        );
    });
    ui.add_space(96.0);
}

fn truncated(url: &str, max: usize) -> String {
    if url.chars().count() <= max {
        url.to_string()
    } else {
        let head: String = url.chars().take(max).collect();
        format!("{head}…")
    }
}
