use eframe::egui::{self, Align, Color32, Layout, Pos2, Rect, Sense, Ui, Vec2};
use egui_extras::{Size, StripBuilder};
use std::time::Instant;

use crate::core::carousel_events::*;
use crate::core::slideshow::Slideshow;
use crate::entities::{Portfolio, SlideItem};
use crate::widgets::actions::ActionQueue;
use crate::widgets::thumbs::{ImageCache, ImageSlot};

/// Fraction of the live drag distance the slide follows
const DRAG_FOLLOW: f32 = 0.25;
const DOT_RADIUS: f32 = 4.0;
const ARROW_WIDTH: f32 = 28.0;

/// Size and motion of one carousel on the page
#[derive(Clone, Copy, Debug)]
pub struct CarouselLayout {
    pub height: f32,
    /// Exit/enter travel as a fraction of the slide width
    pub travel: f32,
    pub arrows: bool,
}

impl CarouselLayout {
    /// Full-width record carousel (certifications, projects)
    pub const CARDS: CarouselLayout = CarouselLayout {
        height: 340.0,
        travel: 1.0,
        arrows: true,
    };

    /// Small rotating text panel
    pub const PANEL: CarouselLayout = CarouselLayout {
        height: 120.0,
        travel: 0.3,
        arrows: false,
    };
}

/// Accent used for highlights (active dot, primary buttons)
pub fn accent(ui: &Ui) -> Color32 {
    ui.visuals().selection.bg_fill
}

/// Render a record carousel: image + detail card, arrows, dots.
pub fn render<T: SlideItem>(
    ui: &mut Ui,
    slideshow: &Slideshow,
    items: &[T],
    portfolio: &Portfolio,
    images: &mut ImageCache,
    now: Instant,
) -> ActionQueue {
    slide_area(ui, slideshow, items.len(), CarouselLayout::CARDS, now, |ui, idx| {
        if let Some(item) = items.get(idx) {
            render_card(ui, item, portfolio, images);
        }
    })
}

/// Animated slot with gesture handling, arrows and indicator dots.
///
/// `draw` renders item `idx` into a ui positioned by the current slide frame.
pub fn slide_area(
    ui: &mut Ui,
    slideshow: &Slideshow,
    len: usize,
    layout: CarouselLayout,
    now: Instant,
    mut draw: impl FnMut(&mut Ui, usize),
) -> ActionQueue {
    let mut actions = ActionQueue::new();
    let id = slideshow.id();

    if len == 0 {
        ui.vertical_centered(|ui| {
            ui.add_space(layout.height * 0.4);
            ui.weak(format!("No {} to show", id.as_str().to_lowercase()));
            ui.add_space(layout.height * 0.4);
        });
        return actions;
    }

    ui.horizontal(|ui| {
        let arrow_space = if layout.arrows { ARROW_WIDTH * 2.0 + ui.spacing().item_spacing.x * 2.0 } else { 0.0 };
        let width = (ui.available_width() - arrow_space).max(80.0);

        if layout.arrows && arrow(ui, "⏴", layout.height, "Previous") {
            actions.send(PrevSlideEvent(id));
        }

        let (rect, response) = ui.allocate_exact_size(Vec2::new(width, layout.height), Sense::click_and_drag());

        // Gesture: egui reports touch as pointer drags
        if response.drag_started()
            && let Some(x) = swipe_origin(ui.input(|i| i.pointer.press_origin()), response.interact_pointer_pos())
        {
            actions.send(SwipeStartEvent { carousel: id, x });
        }
        if response.dragged()
            && let Some(pos) = response.interact_pointer_pos()
        {
            actions.send(SwipeMoveEvent { carousel: id, x: pos.x });
        }
        if response.drag_stopped() {
            actions.send(SwipeEndEvent(id));
        }

        let (idx, frame) = slideshow.visible(now);
        let drag = slideshow.drag_delta().unwrap_or(0.0);
        let dx = frame.offset_px(rect.width() * layout.travel) - drag * DRAG_FOLLOW;

        let mut slot = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(rect.translate(Vec2::new(dx, 0.0)))
                .layout(Layout::top_down(Align::Min))
                .id_salt(egui::Id::new("carousel_slot").with(id)),
        );
        slot.set_clip_rect(rect.intersect(ui.clip_rect()));
        slot.set_opacity(frame.opacity);
        draw(&mut slot, idx);

        if layout.arrows && arrow(ui, "⏵", layout.height, "Next") {
            actions.send(NextSlideEvent(id));
        }

        actions.hovered = ui.rect_contains_pointer(rect);
    });

    if let Some(index) = indicator_dots(ui, len, slideshow.position()) {
        actions.send(GoToSlideEvent { carousel: id, index });
    }

    if actions.hovered != slideshow.is_hovered() {
        actions.send(CarouselHoverEvent {
            carousel: id,
            hovered: actions.hovered,
        });
    }
    actions
}

fn arrow(ui: &mut Ui, glyph: &str, height: f32, hint: &str) -> bool {
    ui.add_sized(Vec2::new(ARROW_WIDTH, height), egui::Button::new(glyph).frame(false))
        .on_hover_text(hint)
        .clicked()
}

/// One dot per item, `active` highlighted. Returns the clicked index.
pub fn indicator_dots(ui: &mut Ui, len: usize, active: usize) -> Option<usize> {
    let spacing = DOT_RADIUS * 3.0;
    let total = spacing * len as f32;
    let mut clicked = None;

    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));
        for i in 0..len {
            let (rect, response) = ui.allocate_exact_size(Vec2::splat(spacing), Sense::click());
            let color = if i == active {
                accent(ui)
            } else if response.hovered() {
                ui.visuals().widgets.hovered.fg_stroke.color
            } else {
                ui.visuals().widgets.inactive.bg_fill
            };
            let radius = if i == active { DOT_RADIUS * 1.25 } else { DOT_RADIUS };
            ui.painter().circle_filled(rect.center(), radius, color);
            if response.on_hover_text(format!("{}", i + 1)).clicked() {
                clicked = Some(i);
            }
        }
    });
    clicked
}

/// Two-column card: image on the left, detail on the right.
fn render_card<T: SlideItem>(ui: &mut Ui, item: &T, portfolio: &Portfolio, images: &mut ImageCache) {
    egui::Frame::group(ui.style())
        .inner_margin(12.0)
        .corner_radius(8.0)
        .show(ui, |ui| {
            let height = ui.available_height() - 24.0;
            ui.set_min_height(height);
            StripBuilder::new(ui)
                .size(Size::relative(0.45))
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    strip.cell(|ui| render_image(ui, item, portfolio, images, height));
                    strip.cell(|ui| {
                        egui::ScrollArea::vertical()
                            .id_salt("carousel_detail")
                            .show(ui, |ui| render_item_detail(ui, item, portfolio));
                    });
                });
        });
}

/// Image slot with badge; placeholder while loading or when missing.
pub fn render_image<T: SlideItem>(
    ui: &mut Ui,
    item: &T,
    portfolio: &Portfolio,
    images: &mut ImageCache,
    height: f32,
) {
    let size = Vec2::new(ui.available_width(), height.max(40.0));
    let slot = match item.image() {
        Some(image) => images.get(&portfolio.resolve_image(image)),
        None => ImageSlot::Missing,
    };

    let rect = match slot {
        ImageSlot::Ready(tex) => {
            let sized = egui::load::SizedTexture::from_handle(&tex);
            ui.add(egui::Image::from_texture(sized).fit_to_exact_size(size).maintain_aspect_ratio(true))
                .rect
        }
        ImageSlot::Loading => placeholder(ui, size, true),
        ImageSlot::Missing => placeholder(ui, size, false),
    };

    if let Some(badge) = item.badge() {
        let pos = rect.left_top() + Vec2::new(8.0, 8.0);
        let galley = ui.painter().layout_no_wrap(
            badge.to_string(),
            egui::FontId::proportional(12.0),
            Color32::WHITE,
        );
        let bg = Rect::from_min_size(pos, galley.size() + Vec2::new(10.0, 4.0));
        ui.painter().rect_filled(bg, 4.0, accent(ui).gamma_multiply(0.85));
        ui.painter().galley(pos + Vec2::new(5.0, 2.0), galley, Color32::WHITE);
    }
}

fn placeholder(ui: &mut Ui, size: Vec2, loading: bool) -> Rect {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    ui.painter().rect_filled(rect, 6.0, ui.visuals().extreme_bg_color);
    if loading {
        let spinner = Rect::from_center_size(rect.center(), Vec2::splat(24.0));
        ui.put(spinner, egui::Spinner::new());
    } else {
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No image",
            egui::FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
    }
    rect
}

/// Title, subtitle, description, tags and links. Shared with the gallery modal.
pub fn render_item_detail<T: SlideItem>(ui: &mut Ui, item: &T, portfolio: &Portfolio) {
    ui.heading(item.title());
    if let Some(subtitle) = item.subtitle() {
        ui.weak(subtitle);
    }
    ui.add_space(6.0);
    ui.label(item.description());

    let (heading, tags) = item.tags();
    if !tags.is_empty() {
        ui.add_space(8.0);
        if !heading.is_empty() {
            ui.strong(heading);
        }
        ui.horizontal_wrapped(|ui| {
            for tag in tags {
                tag_chip(ui, tag);
            }
        });
    }

    let links = item.links(portfolio.pages_owner());
    if !links.is_empty() {
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            for link in links {
                let mut button = egui::Button::new(link.label);
                if link.primary {
                    button = button.fill(accent(ui));
                }
                if ui.add(button).on_hover_text(&link.url).clicked() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(&link.url));
                }
            }
        });
    }
}

/// Small rounded label
pub fn tag_chip(ui: &mut Ui, text: &str) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.small(text);
        });
}

/// X where the gesture began. egui only reports a drag once the pointer has
/// left the click distance, so the press origin is preferred.
fn swipe_origin(press_origin: Option<Pos2>, pointer: Option<Pos2>) -> Option<f32> {
    press_origin.or(pointer).map(|p| p.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_origin_uses_press_position() {
        let press = Pos2::new(300.0, 40.0);
        let pointer = Pos2::new(294.0, 41.0);
        assert_eq!(swipe_origin(Some(press), Some(pointer)), Some(300.0));
        assert_eq!(swipe_origin(None, Some(pointer)), Some(294.0));
        assert_eq!(swipe_origin(None, None), None);
    }
}
