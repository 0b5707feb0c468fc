//! Common view over displayable records.
//!
//! Carousel, gallery tile and detail modal render any [`SlideItem`], so one
//! widget serves certifications, projects and the about panel.

use super::records::{AboutItem, Certification, ProjectCard};

/// Outbound link shown under an item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideLink {
    pub label: &'static str,
    pub url: String,
    /// Drawn as the primary (filled) button
    pub primary: bool,
}

/// Read-only fields a carousel or gallery needs from a record
pub trait SlideItem {
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// Secondary line under the title
    fn subtitle(&self) -> Option<String> {
        None
    }

    /// Image reference (path or file name); empty means none
    fn image(&self) -> Option<&str> {
        None
    }

    /// Short label drawn over the image
    fn badge(&self) -> Option<&str> {
        None
    }

    /// Tag heading + tags (e.g. "Technologies Used")
    fn tags(&self) -> (&'static str, &[String]) {
        ("", &[])
    }

    /// `pages_owner` is the GitHub account whose repos have Pages demos
    fn links(&self, _pages_owner: Option<&str>) -> Vec<SlideLink> {
        Vec::new()
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.trim().is_empty()).then_some(s)
}

impl SlideItem for Certification {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn subtitle(&self) -> Option<String> {
        match (non_empty(&self.issuer), non_empty(&self.date)) {
            (Some(issuer), Some(date)) => Some(format!("{} • {}", issuer, date)),
            (Some(issuer), None) => Some(issuer.to_string()),
            (None, Some(date)) => Some(date.to_string()),
            (None, None) => None,
        }
    }

    fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    fn badge(&self) -> Option<&str> {
        non_empty(&self.issuer)
    }

    fn links(&self, _pages_owner: Option<&str>) -> Vec<SlideLink> {
        self.link
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| SlideLink {
                label: "View Certificate",
                url: l.clone(),
                primary: true,
            })
            .collect()
    }
}

impl SlideItem for ProjectCard {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    fn tags(&self) -> (&'static str, &[String]) {
        ("Technologies Used:", &self.technologies)
    }

    fn links(&self, pages_owner: Option<&str>) -> Vec<SlideLink> {
        let mut links = Vec::new();
        if let Some(github) = self.github.as_deref().filter(|g| !g.is_empty()) {
            links.push(SlideLink {
                label: "View Code",
                url: github.to_string(),
                primary: false,
            });
        }
        if let Some(demo) = self.demo_url(pages_owner) {
            links.push(SlideLink {
                label: "Live Demo",
                url: demo,
                primary: true,
            });
        }
        links
    }
}

impl SlideItem for AboutItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certification_fields() {
        let cert = Certification {
            title: "AWS S3 Basics".into(),
            issuer: "Coursera".into(),
            date: "2023".into(),
            image: "".into(),
            link: Some("https://example.com/cert".into()),
            ..Default::default()
        };
        assert_eq!(cert.subtitle().as_deref(), Some("Coursera • 2023"));
        assert_eq!(cert.image(), None);
        assert_eq!(cert.badge(), Some("Coursera"));
        let links = cert.links(None);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label, "View Certificate");
    }

    #[test]
    fn test_project_links() {
        let p = ProjectCard {
            title: "Clone".into(),
            technologies: vec!["HTML".into(), "CSS".into()],
            github: Some("https://github.com/alex/clone".into()),
            ..Default::default()
        };
        let links = p.links(Some("alex"));
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url, "https://github.com/alex/clone");
        assert_eq!(links[1].url, "https://alex.github.io/clone");
        assert!(links[1].primary);
        assert_eq!(p.tags().1.len(), 2);
    }

    #[test]
    fn test_about_item_is_plain() {
        let a = AboutItem {
            title: "Problem Solver".into(),
            description: "Analytical".into(),
        };
        assert!(a.links(None).is_empty());
        assert!(a.tags().1.is_empty());
        assert_eq!(a.subtitle(), None);
    }
}
