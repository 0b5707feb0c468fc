//! Entities - portfolio content, separate from how it is drawn
//!
//! Records are plain serde data. Widgets see them through [`SlideItem`].

pub mod portfolio;
pub mod records;
pub mod slide;

pub use portfolio::Portfolio;
pub use records::{
    AboutItem, Certification, ContactInfo, Education, Experience, Profile, ProjectCard, Skill,
    SkillGroup,
};
pub use slide::{SlideItem, SlideLink};
