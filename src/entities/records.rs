//! Portfolio content records.
//!
//! Plain serde structs; every field defaults so partial JSON files load.

use serde::{Deserialize, Serialize};

/// Person the portfolio belongs to
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub location: String,
    pub email: String,
    /// GitHub account whose repositories get GitHub Pages demo links
    pub github_user: Option<String>,
    pub resume_url: Option<String>,
}

/// Entry of the rotating "about" panel
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutItem {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0..=100
    pub level: u8,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    /// Image path, relative to the content file
    pub image: String,
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

const GITHUB_PREFIX: &str = "https://github.com/";

impl ProjectCard {
    /// Live demo link.
    ///
    /// Explicit `demo` wins. Otherwise a repository owned by `pages_owner`
    /// maps to its GitHub Pages site, and any other repository links to
    /// itself.
    pub fn demo_url(&self, pages_owner: Option<&str>) -> Option<String> {
        if let Some(demo) = self.demo.as_deref().filter(|d| !d.is_empty()) {
            return Some(demo.to_string());
        }
        let github = self.github.as_deref().filter(|g| !g.is_empty())?;

        let repo_path = github.strip_prefix(GITHUB_PREFIX).unwrap_or(github).trim_end_matches('/');
        let mut parts = repo_path.split('/');
        if let (Some(owner), Some(repo), Some(user)) = (parts.next(), parts.last(), pages_owner)
            && !repo.is_empty()
            && owner.eq_ignore_ascii_case(user)
        {
            return Some(format!("https://{}.github.io/{}", owner.to_ascii_lowercase(), repo));
        }
        Some(github.to_string())
    }
}

/// One line of the contact section (email, phone, location, status)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub label: String,
    pub text: String,
    pub icon: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(github: Option<&str>, demo: Option<&str>) -> ProjectCard {
        ProjectCard {
            title: "Demo".into(),
            github: github.map(String::from),
            demo: demo.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_explicit_demo_wins() {
        let p = project(Some("https://github.com/alex/shop"), Some("https://shop.example.com"));
        assert_eq!(p.demo_url(Some("alex")).as_deref(), Some("https://shop.example.com"));
    }

    #[test]
    fn test_own_repo_maps_to_pages() {
        let p = project(Some("https://github.com/Alex/tic-tac-toe/"), None);
        assert_eq!(
            p.demo_url(Some("alex")).as_deref(),
            Some("https://alex.github.io/tic-tac-toe")
        );
    }

    #[test]
    fn test_foreign_repo_links_to_itself() {
        let p = project(Some("https://github.com/someone/lib"), None);
        assert_eq!(p.demo_url(Some("alex")).as_deref(), Some("https://github.com/someone/lib"));
        assert_eq!(p.demo_url(None).as_deref(), Some("https://github.com/someone/lib"));
    }

    #[test]
    fn test_no_links() {
        assert_eq!(project(None, None).demo_url(Some("alex")), None);
        assert_eq!(project(Some(""), Some("")).demo_url(Some("alex")), None);
    }

    #[test]
    fn test_partial_json_defaults() {
        let cert: Certification = serde_json::from_str(r#"{"title":"MongoDB"}"#).unwrap();
        assert_eq!(cert.title, "MongoDB");
        assert!(cert.issuer.is_empty());
        assert!(cert.link.is_none());
    }
}
