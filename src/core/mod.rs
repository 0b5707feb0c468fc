//! Core engine - carousel state machine, animation, timers, events, workers
//!
//! Nothing in here depends on egui; widgets drive these types with `Instant`s.

pub mod carousel;
pub mod carousel_events;
pub mod content_events;
pub mod event_bus;
pub mod motion;
pub mod slideshow;
pub mod swipe;
pub mod ticker;
pub mod workers;

// Re-exports for convenience
pub use carousel::{CarouselController, Navigation};
pub use carousel_events::CarouselId;
pub use event_bus::EventBus;
pub use motion::{Direction, SlideFrame, SlideVariant};
pub use slideshow::{Slideshow, SlideshowConfig};
pub use swipe::SwipeTracker;
pub use ticker::Ticker;
pub use workers::Workers;
