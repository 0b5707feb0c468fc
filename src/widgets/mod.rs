//! UI widgets - modular, reusable UI components
//!
//! Widgets read state and return an [`actions::ActionQueue`]; the app turns
//! the queued events into state changes after the UI pass.

pub mod actions;
pub mod carousel;
pub mod gallery;
pub mod rotating;
pub mod sections;
pub mod status;
pub mod thumbs;
