use eframe::egui::{self, Sense, Ui, Vec2};

use super::gallery::GalleryState;
use crate::entities::{Portfolio, SlideItem};
use crate::widgets::carousel::carousel_ui::{render_image, render_item_detail};
use crate::widgets::thumbs::ImageCache;

const TILE_SIZE: Vec2 = Vec2::new(220.0, 230.0);
const TILE_IMAGE_HEIGHT: f32 = 140.0;
const MODAL_WIDTH: f32 = 560.0;

/// Grid of tiles; clicking one selects it.
pub fn render<T: SlideItem>(
    ui: &mut Ui,
    state: &mut GalleryState,
    items: &[T],
    portfolio: &Portfolio,
    images: &mut ImageCache,
) {
    if items.is_empty() {
        ui.weak("Nothing to show");
        return;
    }

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = Vec2::splat(12.0);
        for (i, item) in items.iter().enumerate() {
            let response = ui
                .allocate_ui(TILE_SIZE, |ui| {
                    egui::Frame::group(ui.style()).corner_radius(8.0).show(ui, |ui| {
                        ui.set_width(TILE_SIZE.x - 16.0);
                        ui.set_height(TILE_SIZE.y - 16.0);
                        render_image(ui, item, portfolio, images, TILE_IMAGE_HEIGHT);
                        ui.add_space(4.0);
                        ui.add(egui::Label::new(egui::RichText::new(item.title()).strong()).truncate());
                        if let Some(subtitle) = item.subtitle() {
                            ui.add(egui::Label::new(egui::RichText::new(subtitle).weak().small()).truncate());
                        }
                    })
                })
                .response;

            let response = ui.interact(response.rect, ui.id().with(("gallery_tile", i)), Sense::click());
            if response.hovered() {
                ui.painter().rect_stroke(
                    response.rect,
                    8.0,
                    ui.visuals().selection.stroke,
                    egui::epaint::StrokeKind::Inside,
                );
            }
            if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                state.open(i, items.len());
            }
        }
    });
}

/// Detail modal for the selected item. Escape or a click outside closes it.
pub fn render_modal<T: SlideItem>(
    ctx: &egui::Context,
    state: &mut GalleryState,
    items: &[T],
    portfolio: &Portfolio,
    images: &mut ImageCache,
) {
    let Some(item) = state.selected().and_then(|i| items.get(i)) else {
        state.close();
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("gallery_modal")).show(ctx, |ui| {
        ui.set_width(MODAL_WIDTH);
        render_image(ui, item, portfolio, images, 280.0);
        ui.add_space(8.0);
        render_item_detail(ui, item, portfolio);
        ui.add_space(8.0);
        ui.separator();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.button("Close").clicked()
        })
        .inner
    });

    if modal.inner || modal.should_close() {
        state.close();
    }
}
