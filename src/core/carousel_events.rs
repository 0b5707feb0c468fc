//! Carousel navigation events.

use serde::{Deserialize, Serialize};

use super::motion::Direction;

/// Carousel instances on the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarouselId {
    About,
    Certifications,
    Projects,
}

impl CarouselId {
    pub const ALL: [CarouselId; 3] = [CarouselId::About, CarouselId::Certifications, CarouselId::Projects];

    pub fn as_str(&self) -> &'static str {
        match self {
            CarouselId::About => "About",
            CarouselId::Certifications => "Certifications",
            CarouselId::Projects => "Projects",
        }
    }
}

// === Navigation requests (UI -> app) ===

#[derive(Clone, Debug)]
pub struct NextSlideEvent(pub CarouselId);

#[derive(Clone, Debug)]
pub struct PrevSlideEvent(pub CarouselId);

#[derive(Clone, Debug)]
pub struct GoToSlideEvent {
    pub carousel: CarouselId,
    pub index: usize,
}

// === Gestures ===

#[derive(Clone, Debug)]
pub struct SwipeStartEvent {
    pub carousel: CarouselId,
    pub x: f32,
}

#[derive(Clone, Debug)]
pub struct SwipeMoveEvent {
    pub carousel: CarouselId,
    pub x: f32,
}

#[derive(Clone, Debug)]
pub struct SwipeEndEvent(pub CarouselId);

#[derive(Clone, Debug)]
pub struct CarouselHoverEvent {
    pub carousel: CarouselId,
    pub hovered: bool,
}

// === Notifications (slideshow -> app) ===

/// Emitted when a navigation was accepted and a transition started
#[derive(Clone, Debug)]
pub struct SlideChangedEvent {
    pub carousel: CarouselId,
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}
