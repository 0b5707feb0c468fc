//! Gallery grid with modal detail

pub mod gallery;
pub mod gallery_ui;

pub use gallery::GalleryState;
pub use gallery_ui::{render, render_modal};
