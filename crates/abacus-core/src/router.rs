//! Top-level view selection and home-screen launchers

use std::fmt;

use crate::error::{Error, Result};

/// Screens the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Calculator,
    Home,
    Gallery,
    Notes,
}

impl View {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::Home => "home",
            Self::Gallery => "gallery",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-valued view selector with a fixed transition table.
///
/// There is no history stack; every transition names its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewRouter {
    current: View,
}

impl ViewRouter {
    /// Start on the calculator
    pub const fn new() -> Self {
        Self {
            current: View::Calculator,
        }
    }

    pub const fn current(&self) -> View {
        self.current
    }

    /// Calculator to home, after the gate accepted the passcode
    pub fn unlock(&mut self) -> Result<View> {
        self.transition(View::Calculator, View::Home)
    }

    /// Home to gallery or notes
    pub fn open(&mut self, target: View) -> Result<View> {
        if !matches!(target, View::Gallery | View::Notes) {
            return Err(Error::InvalidInput(format!("Cannot open {target} from home")));
        }
        self.transition(View::Home, target)
    }

    /// Gallery or notes back to home
    pub fn back(&mut self) -> Result<View> {
        match self.current {
            View::Gallery | View::Notes => {
                self.current = View::Home;
                Ok(View::Home)
            }
            other => Err(Error::InvalidInput(format!("No way back from {other}"))),
        }
    }

    /// Home back to the calculator disguise
    pub fn lock(&mut self) -> Result<View> {
        self.transition(View::Home, View::Calculator)
    }

    fn transition(&mut self, from: View, to: View) -> Result<View> {
        if self.current != from {
            return Err(Error::InvalidInput(format!(
                "Cannot move to {to} while on {}",
                self.current
            )));
        }
        tracing::debug!("View {from} -> {to}");
        self.current = to;
        Ok(to)
    }
}

/// URL opened by the home-screen search bar
pub const SEARCH_URL: &str = "https://google.com";

/// Where a launcher leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTarget {
    /// An internal view, through the router
    View(View),
    /// An external page in a new browsing context; bypasses the router
    External(&'static str),
}

/// One tile of the home-screen grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Launcher {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub target: LaunchTarget,
}

/// Home-screen launchers in display order
pub const LAUNCHERS: &[Launcher] = &[
    Launcher {
        id: "photos",
        name: "Photos",
        icon: "\u{1F5BC}",
        target: LaunchTarget::View(View::Gallery),
    },
    Launcher {
        id: "notes",
        name: "Notes",
        icon: "\u{1F4DD}",
        target: LaunchTarget::View(View::Notes),
    },
    Launcher {
        id: "chrome",
        name: "Chrome",
        icon: "\u{1F310}",
        target: LaunchTarget::External("https://www.google.com"),
    },
    Launcher {
        id: "youtube",
        name: "YouTube",
        icon: "\u{25B6}",
        target: LaunchTarget::External("https://www.youtube.com"),
    },
    Launcher {
        id: "search",
        name: "Search",
        icon: "\u{1F50D}",
        target: LaunchTarget::External("https://www.google.com"),
    },
];

/// Find a launcher by id
pub fn launcher(id: &str) -> Option<&'static Launcher> {
    LAUNCHERS.iter().find(|launcher| launcher.id == id)
}

/// URL for the home-screen search bar. A blank query opens the search page.
pub fn search_url(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return SEARCH_URL.to_string();
    }
    let encoded = urlencoding::encode(query);
    format!("{SEARCH_URL}/search?q={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::is_http_url;

    #[test]
    fn test_initial_view_is_calculator() {
        assert_eq!(ViewRouter::new().current(), View::Calculator);
        assert_eq!(ViewRouter::default().current(), View::Calculator);
    }

    #[test]
    fn test_full_round_trip() {
        let mut router = ViewRouter::new();
        assert_eq!(router.unlock().unwrap(), View::Home);
        assert_eq!(router.open(View::Gallery).unwrap(), View::Gallery);
        assert_eq!(router.back().unwrap(), View::Home);
        assert_eq!(router.open(View::Notes).unwrap(), View::Notes);
        assert_eq!(router.back().unwrap(), View::Home);
        assert_eq!(router.lock().unwrap(), View::Calculator);
    }

    #[test]
    fn test_hidden_views_unreachable_while_locked() {
        let mut router = ViewRouter::new();
        assert!(router.open(View::Gallery).is_err());
        assert!(router.open(View::Notes).is_err());
        assert!(router.back().is_err());
        assert!(router.lock().is_err());
        assert_eq!(router.current(), View::Calculator);
    }

    #[test]
    fn test_invalid_transitions_keep_current_view() {
        let mut router = ViewRouter::new();
        router.unlock().unwrap();
        assert!(router.unlock().is_err());
        assert!(router.open(View::Calculator).is_err());
        assert!(router.open(View::Home).is_err());

        router.open(View::Notes).unwrap();
        assert!(router.open(View::Gallery).is_err());
        assert!(router.lock().is_err());
        assert_eq!(router.current(), View::Notes);
    }

    #[test]
    fn test_launchers() {
        assert_eq!(LAUNCHERS.len(), 5);
        assert_eq!(
            launcher("photos").map(|l| l.target),
            Some(LaunchTarget::View(View::Gallery))
        );
        assert_eq!(
            launcher("notes").map(|l| l.target),
            Some(LaunchTarget::View(View::Notes))
        );
        for entry in LAUNCHERS {
            if let LaunchTarget::External(url) = entry.target {
                assert!(is_http_url(url), "{} has bad url {url}", entry.id);
            }
        }
        assert!(launcher("settings").is_none());
    }

    #[test]
    fn test_search_url() {
        assert_eq!(
            search_url("rust lang & more"),
            "https://google.com/search?q=rust%20lang%20%26%20more"
        );
        assert_eq!(search_url("   "), SEARCH_URL);
    }
}
