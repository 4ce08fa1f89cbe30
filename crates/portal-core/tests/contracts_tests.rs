// Host-side tests for the collaborator parameter bundles.

use portal_core::*;

#[test]
fn drawer_defaults_match_page_configuration() {
    let d = DrawerParams::default();
    assert_eq!(d.position, DrawerPosition::Right);
    let labels: Vec<_> = d.items.iter().map(|i| i.label).collect();
    assert_eq!(labels, ["Home", "About", "Services", "Contact"]);
    let socials: Vec<_> = d.socials.iter().map(|s| s.label).collect();
    assert_eq!(socials, ["Twitter", "Instagram", "Linktree"]);
    assert!(d.display_socials && d.display_numbering);
    assert_eq!(d.theme.gradient, ["#B19EEF", "#5227FF"]);
}

#[test]
fn drawer_serializes_camel_case() {
    let v = serde_json::to_value(DrawerParams::default()).unwrap();
    assert_eq!(v["position"], "right");
    assert_eq!(v["items"][0]["accessibleLabel"], "Go to home page");
    assert_eq!(v["items"][0]["targetAnchor"], "#home");
    assert_eq!(v["theme"]["openButtonColor"], "#4c13e7ff");
    assert_eq!(v["socials"][2]["targetUrl"], "https://linktr.ee/CarmelSenate");
}

#[test]
fn card_grid_mirrors_catalog_order() {
    let catalog = Catalog::members().unwrap();
    let grid = CardGridParams::from_catalog(&catalog);
    assert_eq!(grid.items.len(), catalog.len());
    for (card, entry) in grid.items.iter().zip(catalog.entries()) {
        assert_eq!(card.title, entry.name);
        assert_eq!(card.subtitle, entry.role);
        assert_eq!(card.border_color, entry.theme_color);
    }
}

#[test]
fn typing_params_have_one_color_per_phrase() {
    let t = TypingParams::default();
    assert_eq!(t.phrases.len(), t.phrase_colors.len());
    assert!(t.looped);
    assert!(t.deleting_interval_ms < t.typing_interval_ms);
}

#[test]
fn timeline_url_carries_query_parameters() {
    let url = TimelineEmbed::new("1xAbC-d_e").url();
    assert!(url.starts_with(TIMELINE_EMBED_BASE));
    assert!(url.contains("source=1xAbC-d_e"));
    assert!(url.contains("font=Default"));
    assert!(url.contains("lang=en"));
    assert!(url.contains("initial_zoom=2"));
}

#[test]
fn timeline_source_is_percent_encoded() {
    let url = TimelineEmbed::new("a b&c").url();
    assert!(url.contains("source=a%20b%26c"));

    let url = TimelineEmbed::new("~sheet/é?x=1").url();
    assert!(url.contains("source=~sheet%2F%C3%A9%3Fx%3D1&"));
}
