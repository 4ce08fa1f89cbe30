// Shared tuning constants for input sampling, transitions and the effect.

// Device classification
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // widths strictly below are Mobile

// Pointer sampling
pub const POINTER_SAMPLE_INTERVAL_MS: u64 = 50; // minimum spacing between accepted samples
pub const POINTER_CENTER: [f32; 2] = [0.5, 0.5];

// Scroll transition
pub const FADE_START: f32 = 0.7; // zoom level where the portal starts fading out
pub const FADE_SPAN: f32 = 0.3; // zoom range over which fade/content ramps run
pub const PORTAL_DEPTH_SCALE: f32 = 5.0;
pub const TITLE_FADE_RATE: f32 = 2.0; // title reaches 0 at zoom 0.5
pub const TITLE_SCALE_PER_DEPTH: f32 = 0.1;

// Effect parameters, desktop tier (value = base + zoom * span)
pub const DESKTOP_INTENSITY_BASE: f32 = 2.0;
pub const DESKTOP_INTENSITY_SPAN: f32 = 2.0;
pub const DESKTOP_SPEED_BASE: f32 = 0.5;
pub const DESKTOP_SPEED_SPAN: f32 = 1.5;
pub const DESKTOP_DISTORTION_BASE: f32 = 5.0;
pub const DESKTOP_DISTORTION_SPAN: f32 = 15.0;

// Effect parameters, mobile tier (fixed)
pub const MOBILE_INTENSITY: f32 = 1.5;
pub const MOBILE_SPEED: f32 = 0.3;
pub const MOBILE_DISTORTION: f32 = 3.0;

// Effect appearance
pub const HOVER_DAMPNESS: f32 = 0.25;
pub const RAY_COUNT: u32 = 24;
pub const MAX_COLOR_STOPS: usize = 4;
pub const DEFAULT_COLOR_STOPS: [&str; 3] = ["#5227FF", "#B19EEF", "#d8db24"];
