//! Folio - developer portfolio viewer library
//!
//! Re-exports all modules for use by the binary target.

// Core engine (carousel state machine, timers, events, workers)
pub mod core;

// App modules
pub mod app;
pub mod cli;
pub mod config;
pub mod dialogs;
pub mod entities;
pub mod help;
pub mod widgets;

// Re-export commonly used types from core
pub use core::event_bus::{BoxedEvent, EventBus, EventEmitter, downcast_event};
pub use core::{CarouselId, Slideshow, SlideshowConfig};

// Re-export entities
pub use entities::{Portfolio, SlideItem};
