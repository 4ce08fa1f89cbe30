//! The fixed, ordered list of member profiles shown in the card grid and
//! the detail overlay. Order defines navigation order.

use fnv::FnvHashMap;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub handle: &'static str,
    pub theme_color: &'static str,
    pub gradient: &'static str,
    pub bio: &'static str,
    pub committees: &'static [&'static str],
    pub projects: &'static [&'static str],
    pub image: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog must contain at least one entry")]
    Empty,
    #[error("duplicate catalog id: {0}")]
    DuplicateId(String),
}

/// Read-only view over the static entries with an id -> position index.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: &'static [CatalogEntry],
    by_id: FnvHashMap<&'static str, usize>,
}

impl Catalog {
    pub fn new(entries: &'static [CatalogEntry]) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut by_id = FnvHashMap::default();
        for (i, e) in entries.iter().enumerate() {
            if by_id.insert(e.id, i).is_some() {
                return Err(CatalogError::DuplicateId(e.id.to_string()));
            }
        }
        Ok(Self { entries, by_id })
    }

    /// The page's built-in member list.
    pub fn members() -> Result<Self, CatalogError> {
        Self::new(MEMBERS)
    }

    /// Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'static CatalogEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }
}

pub static MEMBERS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "aria-fernandes",
        name: "Aria Fernandes",
        role: "President",
        handle: "@aria.f",
        theme_color: "#5227FF",
        gradient: "linear-gradient(145deg, #5227FF, #000)",
        bio: "Chairs the senate, sets the agenda for each term and represents students to the faculty board.",
        committees: &["Executive", "Student Welfare"],
        projects: &["Open Forum Series", "Campus Charter Review"],
        image: "/members/aria-fernandes.jpg",
    },
    CatalogEntry {
        id: "rohan-pillai",
        name: "Rohan Pillai",
        role: "Vice President",
        handle: "@rohanp",
        theme_color: "#B19EEF",
        gradient: "linear-gradient(210deg, #B19EEF, #000)",
        bio: "Runs committee coordination and steps in for the president at inter-college meetings.",
        committees: &["Executive", "Events"],
        projects: &["Inter-College Summit"],
        image: "/members/rohan-pillai.jpg",
    },
    CatalogEntry {
        id: "meera-das",
        name: "Meera Das",
        role: "General Secretary",
        handle: "@meera.das",
        theme_color: "#d8db24",
        gradient: "linear-gradient(165deg, #d8db24, #000)",
        bio: "Keeps the minutes, tracks resolutions to completion and publishes the monthly bulletin.",
        committees: &["Executive", "Communications"],
        projects: &["Senate Bulletin", "Resolution Tracker"],
        image: "/members/meera-das.jpg",
    },
    CatalogEntry {
        id: "kabir-sen",
        name: "Kabir Sen",
        role: "Treasurer",
        handle: "@kabirsen",
        theme_color: "#10B981",
        gradient: "linear-gradient(195deg, #10B981, #000)",
        bio: "Manages the senate budget, club grants and the annual financial report.",
        committees: &["Finance"],
        projects: &["Club Grant Portal", "Budget Transparency Report"],
        image: "/members/kabir-sen.jpg",
    },
    CatalogEntry {
        id: "nila-thomas",
        name: "Nila Thomas",
        role: "Cultural Secretary",
        handle: "@nila.t",
        theme_color: "#F59E0B",
        gradient: "linear-gradient(225deg, #F59E0B, #000)",
        bio: "Leads the arts calendar and the annual cultural festival.",
        committees: &["Events", "Arts & Culture"],
        projects: &["Spring Festival", "Open Mic Nights"],
        image: "/members/nila-thomas.jpg",
    },
    CatalogEntry {
        id: "dev-menon",
        name: "Dev Menon",
        role: "Technical Lead",
        handle: "@devmenon",
        theme_color: "#4c13e7",
        gradient: "linear-gradient(135deg, #4c13e7, #000)",
        bio: "Maintains the senate website and the tooling behind elections and feedback forms.",
        committees: &["Communications", "Technology"],
        projects: &["Senate Website", "Online Elections"],
        image: "/members/dev-menon.jpg",
    },
];
