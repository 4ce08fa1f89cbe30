// Host-side tests for device tier classification.

use portal_core::*;

fn probe(width: f64, touch: Option<bool>) -> ViewportProbe {
    ViewportProbe { width, touch }
}

#[test]
fn narrow_viewport_is_mobile() {
    let p = DeviceProfiler::new(MOBILE_BREAKPOINT_PX);
    assert_eq!(p.classify(probe(500.0, Some(false))), DeviceTier::Mobile);
    assert_eq!(p.classify(probe(767.9, None)), DeviceTier::Mobile);
}

#[test]
fn breakpoint_width_is_desktop() {
    let p = DeviceProfiler::new(MOBILE_BREAKPOINT_PX);
    assert_eq!(p.classify(probe(768.0, Some(false))), DeviceTier::Desktop);
    assert_eq!(p.classify(probe(1440.0, Some(false))), DeviceTier::Desktop);
}

#[test]
fn touch_capability_forces_mobile() {
    let p = DeviceProfiler::new(MOBILE_BREAKPOINT_PX);
    assert_eq!(p.classify(probe(1920.0, Some(true))), DeviceTier::Mobile);
}

#[test]
fn missing_touch_probe_reads_as_no_touch() {
    let p = DeviceProfiler::new(MOBILE_BREAKPOINT_PX);
    assert_eq!(p.classify(probe(1280.0, None)), DeviceTier::Desktop);
}

#[test]
fn update_reports_only_changes() {
    let mut p = DeviceProfiler::new(MOBILE_BREAKPOINT_PX);
    assert_eq!(p.tier(), DeviceTier::Desktop);
    assert_eq!(p.update(probe(1280.0, Some(false))), None);
    assert_eq!(p.update(probe(500.0, Some(false))), Some(DeviceTier::Mobile));
    assert_eq!(p.update(probe(600.0, Some(false))), None);
    assert_eq!(p.tier(), DeviceTier::Mobile);
    assert_eq!(p.update(probe(1024.0, Some(false))), Some(DeviceTier::Desktop));
}
