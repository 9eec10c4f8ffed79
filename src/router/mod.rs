//! Page router
//!
//! Exactly one page is active at a time. The active page, the URL fragment
//! and the highlighted navigation item always change together; a request for
//! an unknown page leaves all three untouched.

mod pages;

pub use pages::PageId;

use std::collections::BTreeSet;

/// Error type for rejected navigation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Unknown page '{requested}'{hint}", hint = did_you_mean(.suggestion))]
    UnknownPage {
        requested: String,
        suggestion: Option<PageId>,
    },
}

fn did_you_mean(suggestion: &Option<PageId>) -> String {
    suggestion
        .map(|p| format!(" (did you mean '{}'?)", p))
        .unwrap_or_default()
}

/// A completed navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: PageId,
    pub to: PageId,
}

impl Transition {
    /// False when the target was already active
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// One entry of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: PageId,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Router {
    active: PageId,
    fragment: String,
    visited: BTreeSet<PageId>,
}

impl Router {
    /// Start on the page named by `fragment`, or on `home` when the fragment
    /// is missing or unknown
    pub fn new(fragment: Option<&str>, home: PageId) -> Self {
        let initial = match fragment.map(strip_fragment).filter(|f| !f.is_empty()) {
            Some(id) => PageId::from_str(id).unwrap_or_else(|| {
                tracing::warn!("Ignoring unknown initial page '{}', showing {}", id, home);
                home
            }),
            None => home,
        };

        Self {
            active: initial,
            fragment: fragment_for(initial),
            visited: BTreeSet::from([initial]),
        }
    }

    pub fn active(&self) -> PageId {
        self.active
    }

    /// Current URL fragment, always `#<active page>`
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn is_active(&self, page: PageId) -> bool {
        self.active == page
    }

    /// Pages shown at least once during this router's lifetime
    pub fn visited(&self) -> &BTreeSet<PageId> {
        &self.visited
    }

    /// Merge pages remembered from an earlier run into the visited set
    pub fn restore_visited(&mut self, pages: impl IntoIterator<Item = PageId>) {
        self.visited.extend(pages);
    }

    /// Navigate to a page by identifier (`challenges` or `#challenges`)
    pub fn navigate_to(&mut self, page_id: &str) -> Result<Transition, NavigationError> {
        let id = strip_fragment(page_id);
        match PageId::from_str(id) {
            Some(page) => Ok(self.go(page)),
            None => {
                let err = NavigationError::UnknownPage {
                    requested: id.to_string(),
                    suggestion: PageId::suggest(id),
                };
                tracing::error!("Navigation rejected: {}", err);
                Err(err)
            }
        }
    }

    /// React to an external fragment change (back/forward navigation)
    pub fn handle_fragment_change(&mut self, fragment: &str) -> Result<Transition, NavigationError> {
        if strip_fragment(fragment) == self.active.as_str() {
            return Ok(Transition {
                from: self.active,
                to: self.active,
            });
        }
        self.navigate_to(fragment)
    }

    /// Navigate to a known page
    pub fn go(&mut self, page: PageId) -> Transition {
        let from = self.active;
        if from != page {
            self.active = page;
            self.fragment = fragment_for(page);
            tracing::debug!("Navigated {} -> {}", from, page);
        }
        self.visited.insert(page);
        Transition { from, to: page }
    }

    /// Navigation bar entries with the active one marked
    pub fn nav_items(&self) -> Vec<NavItem> {
        PageId::all()
            .iter()
            .map(|&page| NavItem {
                page,
                label: page.label(),
                active: page == self.active,
            })
            .collect()
    }

    /// `Home` on the home page, `Home / <page>` everywhere else
    pub fn breadcrumbs(&self) -> Vec<&'static str> {
        if self.active == PageId::Home {
            vec![PageId::Home.label()]
        } else {
            vec![PageId::Home.label(), self.active.label()]
        }
    }
}

fn strip_fragment(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('#').unwrap_or(s)
}

fn fragment_for(page: PageId) -> String {
    format!("#{}", page.as_str())
}
