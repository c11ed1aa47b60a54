//! Portfolio content: profile, headline phrases, projects, and skills.
//!
//! A built-in catalog ships with the binary so `folio` works out of the
//! box; `--content <path>` swaps in a JSON catalog with the same shape.

pub mod project;
pub mod skills;

pub use project::{available_tags, filter_projects, Project, TAG_ALL};
pub use skills::Skill;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors from loading a content catalog.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse content file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("content must include at least one headline phrase")]
    NoPhrases,
}

/// Identity block rendered on the home section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    /// Recipient address for the contact card.
    pub email: String,
    #[serde(default)]
    pub links: Vec<String>,
}

/// A complete portfolio catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    /// Phrases cycled by the typewriter headline.
    pub phrases: Vec<String>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

impl Default for Content {
    fn default() -> Self {
        builtin()
    }
}

impl Content {
    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    /// I/O and JSON errors, plus [`ContentError::NoPhrases`] when the
    /// catalog has no headline phrases (the typewriter needs at least
    /// one).
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path)?;
        let content: Self = serde_json::from_str(&raw)?;
        if content.phrases.is_empty() {
            return Err(ContentError::NoPhrases);
        }
        Ok(content)
    }
}

/// The catalog compiled into the binary.
fn builtin() -> Content {
    Content {
        profile: Profile {
            name: "Jordan Vale".to_string(),
            tagline: "Software engineer who likes small, sharp tools".to_string(),
            email: "jordan@example.dev".to_string(),
            links: vec![
                "https://github.com/jordanvale".to_string(),
                "https://example.dev".to_string(),
            ],
        },
        phrases: vec![
            "Systems Programmer".to_string(),
            "CLI Toolsmith".to_string(),
            "Open Source Contributor".to_string(),
            "Problem Solver".to_string(),
        ],
        projects: vec![
            Project {
                slug: "termboard".to_string(),
                title: "Termboard".to_string(),
                summary: "Terminal dashboard for long-running jobs".to_string(),
                details: "Termboard tails the status of build farms, cron jobs, and \
                          deploy pipelines in one terminal window. Jobs are grouped \
                          into boards, each board streams incremental updates over a \
                          local socket, and failures bubble to the top with their \
                          last log lines attached.\n\n\
                          The renderer diffs against the previous frame and only \
                          repaints changed cells, which keeps it usable over slow SSH \
                          links. Configuration is a single TOML file with per-board \
                          refresh intervals."
                    .to_string(),
                tags: vec!["tui".to_string(), "cli".to_string()],
                tech: vec![
                    "ratatui".to_string(),
                    "crossterm".to_string(),
                    "tokio".to_string(),
                ],
                link: Some("https://github.com/jordanvale/termboard".to_string()),
            },
            Project {
                slug: "fieldlines".to_string(),
                title: "Fieldlines".to_string(),
                summary: "Interactive charged-particle sandbox".to_string(),
                details: "Fieldlines drops point charges onto a canvas and integrates \
                          their motion under Coulomb forces in real time. Charge \
                          strength maps to color, velocity to trail length, and the \
                          field itself can be overlaid as streamlines.\n\n\
                          The integrator is a fixed-step velocity Verlet with \
                          pairwise force accumulation; a simple spatial grid keeps \
                          the pair loop tractable at a few thousand particles."
                    .to_string(),
                tags: vec!["simulation".to_string(), "graphics".to_string()],
                tech: vec!["wgpu".to_string(), "winit".to_string()],
                link: Some("https://github.com/jordanvale/fieldlines".to_string()),
            },
            Project {
                slug: "matchstick".to_string(),
                title: "Matchstick".to_string(),
                summary: "Text similarity checker built on tries and n-grams".to_string(),
                details: "Matchstick flags overlapping passages between documents. \
                          Each document is normalized (tokenized, lowercased, \
                          stopwords dropped), split into n-grams, and indexed in a \
                          trie; candidate matches are scored by weighted n-gram \
                          overlap with a tunable threshold.\n\n\
                          The index is memory-mapped so repeated comparisons against \
                          a large corpus skip the build step, and the comparison \
                          stage fans out across a thread pool."
                    .to_string(),
                tags: vec!["cli".to_string(), "data".to_string()],
                tech: vec!["rayon".to_string(), "memmap2".to_string()],
                link: Some("https://github.com/jordanvale/matchstick".to_string()),
            },
            Project {
                slug: "ledgerlens".to_string(),
                title: "Ledgerlens".to_string(),
                summary: "Spending pattern reports from bank exports".to_string(),
                details: "Ledgerlens ingests CSV exports from banks, deduplicates \
                          and categorizes transactions with a small rule engine, and \
                          renders monthly spending reports: category breakdowns, \
                          recurring-payment detection, and month-over-month deltas.\n\n\
                          Reports render as plain text, HTML, or JSON so they slot \
                          into whatever the next tool in the pipeline expects."
                    .to_string(),
                tags: vec!["data".to_string(), "cli".to_string()],
                tech: vec!["serde".to_string(), "csv".to_string()],
                link: None,
            },
        ],
        skills: vec![
            Skill {
                name: "Rust".to_string(),
                level: 90,
            },
            Skill {
                name: "Systems Design".to_string(),
                level: 80,
            },
            Skill {
                name: "Terminal UIs".to_string(),
                level: 85,
            },
            Skill {
                name: "Data Analysis".to_string(),
                level: 75,
            },
            Skill {
                name: "Testing".to_string(),
                level: 85,
            },
            Skill {
                name: "Tooling".to_string(),
                level: 88,
            },
            Skill {
                name: "Collaboration".to_string(),
                level: 90,
            },
            Skill {
                name: "Communication".to_string(),
                level: 82,
            },
        ],
    }
}
