//! Carousel widget
//!
//! Draws a [`Slideshow`](crate::core::slideshow::Slideshow) over a slice of
//! [`SlideItem`](crate::entities::SlideItem)s. All navigation leaves as events.

pub mod carousel_ui;

pub use carousel_ui::{CarouselLayout, indicator_dots, render, render_item_detail, slide_area, tag_chip};
