// Host-side tests for the web front-end's constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn element_ids_are_unique_and_non_empty() {
    let ids = [
        PORTAL_CONTAINER_ID,
        EFFECT_CANVAS_ID,
        EFFECT_PLACEHOLDER_ID,
        EFFECT_LAYER_ID,
        VIGNETTE_ID,
        HEADLINE_ID,
        CONTENT_PANEL_ID,
        MEMBER_GRID_ID,
        MODAL_ID,
        MODAL_BODY_ID,
        MODAL_NEXT_ID,
        MODAL_PREV_ID,
        MODAL_CLOSE_ID,
    ];
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(ids.iter().all(|id| !id.is_empty() && !id.contains(' ')));
}

#[test]
fn member_attribute_is_a_data_attribute() {
    assert!(MEMBER_ID_ATTR.starts_with("data-"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_tuning_is_sane() {
    assert!(FRAME_DT_MAX_SEC > 0.0 && FRAME_DT_MAX_SEC < 1.0);
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert_eq!(CLEAR_COLOR[3], 1.0);
}

#[test]
fn clear_color_matches_placeholder_fill() {
    // "#1a1a1a" -> 26/255
    assert_eq!(PLACEHOLDER_FILL, "#1a1a1a");
    for c in &CLEAR_COLOR[..3] {
        assert!((c - 26.0 / 255.0).abs() < 1e-3);
    }
}
