//! Page identifiers

use serde::{Deserialize, Serialize};

/// Every content page the router can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    Home,
    ProgrammingLanguages,
    CodingSchemes,
    NumberSystem,
    Compiler,
    Challenges,
    Progress,
    AiBot,
}

impl PageId {
    /// Identifier used in the URL fragment
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::ProgrammingLanguages => "programming-languages",
            Self::CodingSchemes => "coding-schemes",
            Self::NumberSystem => "number-system",
            Self::Compiler => "compiler",
            Self::Challenges => "challenges",
            Self::Progress => "progress",
            Self::AiBot => "ai-bot",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "home" => Some(Self::Home),
            "programming-languages" => Some(Self::ProgrammingLanguages),
            "coding-schemes" => Some(Self::CodingSchemes),
            "number-system" => Some(Self::NumberSystem),
            "compiler" => Some(Self::Compiler),
            "challenges" => Some(Self::Challenges),
            "progress" => Some(Self::Progress),
            "ai-bot" => Some(Self::AiBot),
            _ => None,
        }
    }

    /// Display name for navigation and breadcrumbs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::ProgrammingLanguages => "Programming Languages",
            Self::CodingSchemes => "Coding Schemes",
            Self::NumberSystem => "Number System",
            Self::Compiler => "Compiler",
            Self::Challenges => "Challenges",
            Self::Progress => "Progress",
            Self::AiBot => "AI Bot",
        }
    }

    /// All pages in navigation order
    pub fn all() -> &'static [PageId] {
        &[
            Self::Home,
            Self::ProgrammingLanguages,
            Self::CodingSchemes,
            Self::NumberSystem,
            Self::Compiler,
            Self::Challenges,
            Self::Progress,
            Self::AiBot,
        ]
    }

    /// Known page closest to `s`, for "did you mean" hints
    pub fn suggest(s: &str) -> Option<PageId> {
        Self::all()
            .iter()
            .map(|p| (*p, strsim::jaro_winkler(s, p.as_str())))
            .filter(|(_, score)| *score >= 0.8)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(p, _)| p)
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for page in PageId::all() {
            assert_eq!(PageId::from_str(page.as_str()), Some(*page));
        }
        assert_eq!(PageId::from_str("Home"), None);
    }

    #[test]
    fn test_serde_matches_fragment_ids() {
        let json = serde_json::to_string(&PageId::AiBot).unwrap();
        assert_eq!(json, "\"ai-bot\"");
    }

    #[test]
    fn test_suggest() {
        assert_eq!(PageId::suggest("challenge"), Some(PageId::Challenges));
        assert_eq!(PageId::suggest("xyzzy"), None);
    }
}
