//! Portfolio content — owner details, About statistics and project cards.
//!
//! Content lives in a TOML file; when none is given a built-in sample is
//! used so the viewer always has something to show.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Portfolio {
    pub owner: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub projects: Vec<ProjectCard>,
}

/// A number the About section counts up to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub target: u32,
}

/// One carousel card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Portfolio {
    pub fn from_toml(s: &str, origin: &Path) -> Result<Self> {
        toml::from_str(s).map_err(|source| FolioError::ContentParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| FolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio = Self::from_toml(&contents, path)?;
        tracing::info!(
            path = %path.display(),
            projects = portfolio.projects.len(),
            "loaded portfolio content"
        );
        Ok(portfolio)
    }

    /// Built-in sample content.
    pub fn sample() -> Self {
        let card = |title: &str, description: &str, tags: &[&str]| ProjectCard {
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            link: None,
        };
        Self {
            owner: "Alex Example".into(),
            tagline: "Frontend / Backend / FullStack developer. Building fast, friendly software."
                .into(),
            about: "I design clean interfaces and build reliable back-end services, \
                    with a focus on performance, accessibility and maintainable code."
                .into(),
            email: Some("alex@example.com".into()),
            location: Some("Ghent, Belgium".into()),
            stats: vec![
                Stat { label: "Years experience".into(), target: 5 },
                Stat { label: "Projects".into(), target: 40 },
                Stat { label: "Happy clients".into(), target: 25 },
            ],
            projects: vec![
                card(
                    "Handyman Services",
                    "Service website with clear structure, quick booking and a trust-building UI.",
                    &["HTML", "CSS", "JS"],
                ),
                card(
                    "SaaS Dashboard",
                    "Analytics dashboard with authentication, charts and API integrations.",
                    &["React", "TypeScript"],
                ),
                card(
                    "Content Site",
                    "Fast content site on a static generator with excellent SEO.",
                    &["Astro", "API"],
                ),
                card(
                    "E-commerce",
                    "Store with payments, inventory management and an admin dashboard.",
                    &["Node", "Postgres"],
                ),
                card(
                    "Task Manager",
                    "Cross-platform task app with real-time sync and team collaboration.",
                    &["Flutter", "Firebase"],
                ),
                card(
                    "Portfolio",
                    "Minimal portfolio with smooth animations and a dark mode.",
                    &["HTML", "CSS"],
                ),
                card(
                    "CLI Toolkit",
                    "Terminal utilities for everyday developer chores.",
                    &["Rust"],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_minimal_content() {
        let p = Portfolio::from_toml("owner = \"Sam\"\n", Path::new("inline")).unwrap();
        assert_eq!(p.owner, "Sam");
        assert!(p.projects.is_empty());
        assert!(p.stats.is_empty());
    }

    #[test]
    fn parses_projects_and_stats() {
        let src = r#"
owner = "Sam"
tagline = "Builder"

[[stats]]
label = "Projects"
target = 12

[[projects]]
title = "One"
tags = ["rust"]

[[projects]]
title = "Two"
description = "Second"
link = "https://example.com"
"#;
        let p = Portfolio::from_toml(src, Path::new("inline")).unwrap();
        assert_eq!(p.stats[0].target, 12);
        assert_eq!(p.projects.len(), 2);
        assert_eq!(p.projects[1].link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn invalid_toml_reports_path() {
        let err = Portfolio::from_toml("owner = ", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, FolioError::ContentParse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "owner = \"Disk\"\n[[projects]]\ntitle = \"P\"").unwrap();
        let p = Portfolio::load(file.path()).unwrap();
        assert_eq!(p.owner, "Disk");
        assert_eq!(p.projects.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Portfolio::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Io { .. }));
    }

    #[test]
    fn sample_has_seven_cards() {
        assert_eq!(Portfolio::sample().projects.len(), 7);
    }
}
