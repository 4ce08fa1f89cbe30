//! Coarse capability classification of the host environment.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceTier {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceTier {
    #[inline]
    pub fn is_mobile(self) -> bool {
        matches!(self, DeviceTier::Mobile)
    }
}

/// Snapshot of what the host reports about the viewport.
///
/// `touch` is `None` when the capability probe is unavailable; that is read
/// as "no touch" rather than an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportProbe {
    pub width: f64,
    pub touch: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct DeviceProfiler {
    breakpoint_px: f64,
    tier: DeviceTier,
}

impl DeviceProfiler {
    pub fn new(breakpoint_px: f64) -> Self {
        Self {
            breakpoint_px,
            tier: DeviceTier::default(),
        }
    }

    pub fn classify(&self, probe: ViewportProbe) -> DeviceTier {
        let narrow = probe.width < self.breakpoint_px;
        if narrow || probe.touch.unwrap_or(false) {
            DeviceTier::Mobile
        } else {
            DeviceTier::Desktop
        }
    }

    /// Re-classify on mount or resize. Returns the new tier when it changed.
    pub fn update(&mut self, probe: ViewportProbe) -> Option<DeviceTier> {
        let next = self.classify(probe);
        if next == self.tier {
            return None;
        }
        log::debug!(
            "[device] tier {:?} -> {:?} (width={:.0}, touch={:?})",
            self.tier,
            next,
            probe.width,
            probe.touch
        );
        self.tier = next;
        Some(next)
    }

    #[inline]
    pub fn tier(&self) -> DeviceTier {
        self.tier
    }
}
