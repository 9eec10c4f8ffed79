//! Static challenge catalog
//!
//! Challenges are defined at build time and never change at runtime. Progress
//! entries are validated against this table when they are loaded.

mod challenges;
mod library;
mod templates;

pub use challenges::{CHALLENGES, ChallengeDescriptor, Requirement};
pub use library::{LIBRARY, LibrarySection, LibraryTemplate, library_section, library_template};
pub use templates::{LANGUAGES, starter_template};

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Challenge category, used for grouping and per-category progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Javascript,
    Python,
    Java,
    Cpp,
    Web,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::Web => "web",
            Self::General => "general",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Some(Self::Javascript),
            "python" | "py" => Some(Self::Python),
            "java" => Some(Self::Java),
            "cpp" | "c++" => Some(Self::Cpp),
            "web" => Some(Self::Web),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Javascript => "JavaScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::Web => "Web",
            Self::General => "General",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &[
            Self::Javascript,
            Self::Python,
            Self::Java,
            Self::Cpp,
            Self::Web,
            Self::General,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static BY_ID: Lazy<HashMap<&'static str, &'static ChallengeDescriptor>> =
    Lazy::new(|| CHALLENGES.iter().map(|c| (c.id, c)).collect());

/// Look up a challenge by identifier
pub fn challenge(id: &str) -> Option<&'static ChallengeDescriptor> {
    BY_ID.get(id).copied()
}

/// Number of challenges in the catalog
pub fn total() -> usize {
    CHALLENGES.len()
}

/// Challenges belonging to `category`, in catalog order
pub fn in_category(category: Category) -> impl Iterator<Item = &'static ChallengeDescriptor> {
    CHALLENGES.iter().filter(move |c| c.category == category)
}

/// Categories that have at least one challenge
pub fn populated_categories() -> Vec<Category> {
    Category::all()
        .iter()
        .copied()
        .filter(|cat| in_category(*cat).next().is_some())
        .collect()
}

/// Catalog id closest to `id`, for "did you mean" hints
pub fn suggest(id: &str) -> Option<&'static str> {
    CHALLENGES
        .iter()
        .map(|c| (c.id, strsim::jaro_winkler(id, c.id)))
        .filter(|(_, score)| *score >= 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}
