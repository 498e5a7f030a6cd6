//! Page selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five dashboard pages, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Comedians,
    Shows,
    Venues,
    Analytics,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Comedians,
        Page::Shows,
        Page::Venues,
        Page::Analytics,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Comedians => "Comedians",
            Page::Shows => "Shows",
            Page::Venues => "Venues",
            Page::Analytics => "Analytics",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Dashboard => "📊",
            Page::Comedians => "🎤",
            Page::Shows => "🗓",
            Page::Venues => "🏢",
            Page::Analytics => "📈",
        }
    }

    /// Position in the sidebar, zero-based.
    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// Page for a sidebar number key (`'1'..='5'`).
    pub fn from_digit(c: char) -> Option<Page> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Page::ALL.get(i).copied())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|page| page.title().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown page '{s}' (expected dashboard, comedians, shows, venues or analytics)")
            })
    }
}

/// Holds the active page. Every page is always reachable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Page,
}

impl Navigator {
    pub fn new(start: Page) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn go(&mut self, page: Page) {
        self.current = page;
    }

    pub fn next(&mut self) {
        let i = (self.current.index() + 1) % Page::ALL.len();
        self.current = Page::ALL[i];
    }

    pub fn previous(&mut self) {
        let len = Page::ALL.len();
        let i = (self.current.index() + len - 1) % len;
        self.current = Page::ALL[i];
    }
}
