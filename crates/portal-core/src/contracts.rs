//! Parameter bundles handed to the page's external rendering collaborators.
//!
//! All of these are built from static data once at startup and serialized
//! with camelCase keys for the JavaScript side.

use crate::catalog::Catalog;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

// ---------------- Headline typing ----------------

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingParams {
    pub phrases: Vec<&'static str>,
    pub typing_interval_ms: u32,
    pub deleting_interval_ms: u32,
    pub pause_ms: u32,
    pub looped: bool,
    pub cursor: &'static str,
    pub phrase_colors: Vec<&'static str>,
}

impl Default for TypingParams {
    fn default() -> Self {
        Self {
            phrases: vec!["Carmel Senate", "Student Voice", "Built Together"],
            typing_interval_ms: 75,
            deleting_interval_ms: 50,
            pause_ms: 1500,
            looped: true,
            cursor: "|",
            phrase_colors: vec!["#ffffff", "#B19EEF", "#d8db24"],
        }
    }
}

// ---------------- Navigation drawer ----------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub label: &'static str,
    pub accessible_label: &'static str,
    pub target_anchor: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialItem {
    pub label: &'static str,
    pub target_url: &'static str,
}

pub static MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        label: "Home",
        accessible_label: "Go to home page",
        target_anchor: "#home",
    },
    MenuItem {
        label: "About",
        accessible_label: "Learn about us",
        target_anchor: "#about",
    },
    MenuItem {
        label: "Services",
        accessible_label: "View our services",
        target_anchor: "#services",
    },
    MenuItem {
        label: "Contact",
        accessible_label: "Get in touch",
        target_anchor: "#contact",
    },
];

pub static SOCIAL_ITEMS: &[SocialItem] = &[
    SocialItem {
        label: "Twitter",
        target_url: "https://twitter.com",
    },
    SocialItem {
        label: "Instagram",
        target_url: "https://www.instagram.com/carmel_senate/?next=%2F",
    },
    SocialItem {
        label: "Linktree",
        target_url: "https://linktr.ee/CarmelSenate",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerPosition {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerTheme {
    pub button_color: &'static str,
    pub open_button_color: &'static str,
    pub change_color_on_open: bool,
    pub accent_color: &'static str,
    pub gradient: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerParams {
    pub position: DrawerPosition,
    pub items: &'static [MenuItem],
    pub socials: &'static [SocialItem],
    pub display_socials: bool,
    pub display_numbering: bool,
    pub theme: DrawerTheme,
    pub logo: &'static str,
}

impl Default for DrawerParams {
    fn default() -> Self {
        Self {
            position: DrawerPosition::Right,
            items: MENU_ITEMS,
            socials: SOCIAL_ITEMS,
            display_socials: true,
            display_numbering: true,
            theme: DrawerTheme {
                button_color: "#fff",
                open_button_color: "#4c13e7ff",
                change_color_on_open: true,
                accent_color: "#d8db24ff",
                gradient: vec!["#B19EEF", "#5227FF"],
            },
            logo: "/greyhound-logo.png",
        }
    }
}

/// Open/close notifications from the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerEvent {
    Opened,
    Closed,
}

// ---------------- Card grid ----------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardItem {
    pub id: &'static str,
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub handle: &'static str,
    pub border_color: &'static str,
    pub gradient: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardGridParams {
    pub items: Vec<CardItem>,
    pub tilt_radius: f32,
    pub columns: u32,
    /// Pointer-follow smoothing; passed through untouched.
    pub damping: f32,
}

impl CardGridParams {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let items = catalog
            .entries()
            .iter()
            .map(|e| CardItem {
                id: e.id,
                image: e.image,
                title: e.name,
                subtitle: e.role,
                handle: e.handle,
                border_color: e.theme_color,
                gradient: e.gradient,
            })
            .collect();
        Self {
            items,
            tilt_radius: 300.0,
            columns: 3,
            damping: 0.45,
        }
    }
}

// ---------------- Timeline embed ----------------

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub const TIMELINE_EMBED_BASE: &str = "https://cdn.knightlab.com/libs/timeline3/latest/embed/index.html";

/// Inert third-party timeline region, addressed by URL only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEmbed {
    pub source: String,
    pub font: &'static str,
    pub lang: &'static str,
    pub initial_zoom: u32,
    pub height: u32,
}

impl TimelineEmbed {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            font: "Default",
            lang: "en",
            initial_zoom: 2,
            height: 650,
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}?source={}&font={}&lang={}&initial_zoom={}&height={}",
            TIMELINE_EMBED_BASE,
            encode_query_value(&self.source),
            encode_query_value(self.font),
            self.lang,
            self.initial_zoom,
            self.height
        )
    }
}

fn encode_query_value(v: &str) -> String {
    utf8_percent_encode(v, QUERY_VALUE).to_string()
}
