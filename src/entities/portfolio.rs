//! Portfolio - the whole content document.
//!
//! Loaded from JSON (user file or the bundled sample) and handed to the
//! widgets as plain data. The app never edits it; `to_json` exists for
//! "Save As" of the currently shown content.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::records::{
    AboutItem, Certification, ContactInfo, Education, Experience, Profile, ProjectCard, SkillGroup,
};

const BUNDLED_JSON: &str = include_str!("../../assets/portfolio.json");

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: Vec<AboutItem>,
    pub skills: Vec<SkillGroup>,
    pub tools: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<ProjectCard>,
    pub contact: Vec<ContactInfo>,

    /// Directory relative image paths resolve against (runtime-only)
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Portfolio {
    /// Sample content compiled into the binary.
    pub fn bundled() -> Result<Self> {
        serde_json::from_str(BUNDLED_JSON).context("Parse bundled portfolio")
    }

    /// Load from a JSON file. Relative image paths resolve next to it.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Read portfolio {}", path.display()))?;
        let mut portfolio: Portfolio = serde_json::from_str(&json)
            .with_context(|| format!("Parse portfolio {}", path.display()))?;
        portfolio.base_dir = path.parent().map(Path::to_path_buf);

        info!(
            "Loaded portfolio {}: {} certifications, {} projects",
            path.display(),
            portfolio.certifications.len(),
            portfolio.projects.len()
        );
        for problem in portfolio.validate() {
            debug!("Portfolio: {}", problem);
        }
        Ok(portfolio)
    }

    /// Write pretty JSON. Adds the `.json` extension if missing.
    pub fn to_json<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(self).context("Serialize portfolio")?;

        let path = path.as_ref();
        let path = if path.extension().and_then(|s| s.to_str()) != Some("json") {
            path.with_extension("json")
        } else {
            path.to_path_buf()
        };

        fs::write(&path, json).with_context(|| format!("Write portfolio {}", path.display()))?;
        Ok(path)
    }

    /// Non-fatal content problems (blank titles, out of range levels).
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.profile.name.trim().is_empty() {
            problems.push("profile name is empty".to_string());
        }
        for (i, item) in self.about.iter().enumerate() {
            if item.title.trim().is_empty() {
                problems.push(format!("about[{}] has no title", i));
            }
        }
        for group in &self.skills {
            for skill in group.skills.iter().filter(|s| s.level > 100) {
                problems.push(format!("skill '{}' level {} > 100", skill.name, skill.level));
            }
        }
        for (i, cert) in self.certifications.iter().enumerate() {
            if cert.title.trim().is_empty() {
                problems.push(format!("certifications[{}] has no title", i));
            }
        }
        for (i, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                problems.push(format!("projects[{}] has no title", i));
            }
        }
        problems
    }

    /// Resolve an image reference against the content directory.
    /// URLs and absolute paths pass through unchanged.
    pub fn resolve_image(&self, image: &str) -> PathBuf {
        let path = Path::new(image);
        match &self.base_dir {
            Some(base) if path.is_relative() && !image.contains("://") => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// GitHub account used for Pages demo links
    pub fn pages_owner(&self) -> Option<&str> {
        self.profile.github_user.as_deref().filter(|u| !u.is_empty())
    }
}
