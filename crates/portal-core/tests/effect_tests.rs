// Host-side tests for effect parameter composition and memoization.

use portal_core::*;

fn inputs(tier: DeviceTier, zoom_level: f32, x: f32, y: f32) -> EffectInputs {
    EffectInputs {
        tier,
        zoom_level,
        pointer: PointerSignal { x, y },
    }
}

#[test]
fn desktop_parameters_scale_with_zoom() {
    let cfg = PortalConfig::default();
    let p = compose(&cfg, inputs(DeviceTier::Desktop, 0.5, 0.2, 0.8));
    assert_eq!(p.animation_type, AnimationType::Hover);
    assert_eq!(p.intensity, 3.0);
    assert_eq!(p.speed, 1.25);
    assert_eq!(p.distortion, 12.5);
    assert_eq!(p.mouse_position, PointerSignal { x: 0.2, y: 0.8 });
    assert_eq!(p.hover_dampness, HOVER_DAMPNESS);
    assert_eq!(p.ray_count, RAY_COUNT);
    assert_eq!(p.color_stops, cfg.color_stops);
}

#[test]
fn mobile_parameters_are_fixed_regardless_of_zoom() {
    let cfg = PortalConfig::default();
    let profiler = DeviceProfiler::new(cfg.mobile_breakpoint_px);
    let tier = profiler.classify(ViewportProbe {
        width: 500.0,
        touch: Some(false),
    });
    assert_eq!(tier, DeviceTier::Mobile);

    for z in [0.0, 0.3, 0.85, 1.0] {
        let p = compose(&cfg, inputs(tier, z, 0.9, 0.1));
        assert_eq!(p.animation_type, AnimationType::Rotate);
        assert_eq!(p.intensity, MOBILE_INTENSITY);
        assert_eq!(p.speed, MOBILE_SPEED);
        assert_eq!(p.distortion, MOBILE_DISTORTION);
        assert_eq!(p.mouse_position, PointerSignal::CENTER);
    }
}

#[test]
fn composer_skips_recompute_on_identical_inputs() {
    let mut c = EffectComposer::new(PortalConfig::default());
    let a = inputs(DeviceTier::Desktop, 0.1, 0.5, 0.5);
    let first = c.parameters(a).clone();
    let again = c.parameters(a).clone();
    assert_eq!(first, again);
    assert_eq!(c.recomputations(), 1);
}

#[test]
fn composer_recomputes_when_any_input_changes() {
    let mut c = EffectComposer::new(PortalConfig::default());
    c.parameters(inputs(DeviceTier::Desktop, 0.1, 0.5, 0.5));
    c.parameters(inputs(DeviceTier::Desktop, 0.2, 0.5, 0.5));
    assert_eq!(c.recomputations(), 2);
    c.parameters(inputs(DeviceTier::Desktop, 0.2, 0.6, 0.5));
    assert_eq!(c.recomputations(), 3);
    let p = c.parameters(inputs(DeviceTier::Mobile, 0.2, 0.6, 0.5)).clone();
    assert_eq!(c.recomputations(), 4);
    assert_eq!(p.animation_type, AnimationType::Rotate);
}

#[test]
fn mobile_key_ignores_zoom_and_pointer() {
    let mut c = EffectComposer::new(PortalConfig::default());
    c.parameters(inputs(DeviceTier::Mobile, 0.1, 0.5, 0.5));
    c.parameters(inputs(DeviceTier::Mobile, 0.9, 0.1, 0.7));
    assert_eq!(c.recomputations(), 1);
}

#[test]
fn parameters_serialize_with_camel_case_keys() {
    let p = compose(
        &PortalConfig::default(),
        inputs(DeviceTier::Desktop, 0.0, 0.5, 0.5),
    );
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v["animationType"], "hover");
    assert_eq!(v["rayCount"], RAY_COUNT);
    assert_eq!(v["mousePosition"]["x"], 0.5);
    assert!(v["colorStops"].is_array());
    assert!(v.get("hoverDampness").is_some());
}

#[test]
fn hex_colors_parse_in_all_forms() {
    assert_eq!(parse_hex_color("#fff"), Some([1.0, 1.0, 1.0, 1.0]));
    assert_eq!(parse_hex_color("#000000"), Some([0.0, 0.0, 0.0, 1.0]));
    let c = parse_hex_color("#4c13e7ff").unwrap();
    assert!((c[0] - 0x4c as f32 / 255.0).abs() < 1e-6);
    assert_eq!(c[3], 1.0);
    assert_eq!(parse_hex_color("4c13e7"), None);
    assert_eq!(parse_hex_color("#12345"), None);
    assert_eq!(parse_hex_color("#zzzzzz"), None);
}

#[test]
fn hex_colors_reject_sign_prefixed_digits() {
    assert_eq!(parse_hex_color("#+f+f+f+f"), None);
    assert_eq!(parse_hex_color("#+ff"), None);
    assert_eq!(parse_hex_color("#+fffff"), None);
    assert_eq!(parse_hex_color("# fff"), None);
}

#[test]
fn color_stop_packing_caps_and_falls_back() {
    let many: Vec<String> = ["#f00", "#0f0", "#00f", "#fff", "#000"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let (packed, n) = pack_color_stops(&many);
    assert_eq!(n as usize, MAX_COLOR_STOPS);
    assert_eq!(packed[0], [1.0, 0.0, 0.0, 1.0]);

    let (packed, n) = pack_color_stops(&["nope".to_string()]);
    assert_eq!(n, 1);
    assert_eq!(packed[0], [1.0; 4]);
}
