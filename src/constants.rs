// DOM ids, frame tuning and defaults used by the web front-end.
// Kept free of web APIs so host tests can include this file directly.

// Page elements
pub const PORTAL_CONTAINER_ID: &str = "portal";
pub const EFFECT_CANVAS_ID: &str = "effect-canvas";
pub const EFFECT_PLACEHOLDER_ID: &str = "effect-placeholder";
pub const EFFECT_LAYER_ID: &str = "effect-layer";
pub const VIGNETTE_ID: &str = "vignette";
pub const HEADLINE_ID: &str = "headline";
pub const CONTENT_PANEL_ID: &str = "content";

// Member grid and detail overlay
pub const MEMBER_GRID_ID: &str = "member-grid";
pub const MEMBER_ID_ATTR: &str = "data-member-id";
pub const MODAL_ID: &str = "member-modal";
pub const MODAL_BODY_ID: &str = "member-modal-body";
pub const MODAL_NEXT_ID: &str = "member-modal-next";
pub const MODAL_PREV_ID: &str = "member-modal-prev";
pub const MODAL_CLOSE_ID: &str = "member-modal-close";

// Timeline embed data source (published sheet id)
pub const TIMELINE_SOURCE: &str = "carmel-senate-timeline";

// Render loop
pub const FRAME_DT_MAX_SEC: f32 = 0.1; // clamp long pauses (tab switches) to one small step
pub const PLACEHOLDER_FILL: &str = "#1a1a1a";
pub const CLEAR_COLOR: [f64; 4] = [0.102, 0.102, 0.102, 1.0]; // matches the placeholder fill
