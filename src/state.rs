use portal_core::{
    Catalog, DeviceProfiler, DeviceTier, DrawerEvent, EffectComposer, EffectInputs,
    EffectParameters, EventEmitter, ModalNavigator, Observable, PointerSampler, PointerSignal,
    PortalConfig, ScrollSampler, TransitionController, TransitionState,
};
use std::cell::{Cell, RefCell};

/// Everything the page's listeners and frame callbacks share.
///
/// Each signal has exactly one writer: the matching sampler/profiler wiring
/// in `events`. Everything else only reads or subscribes.
pub struct PortalState {
    pub alive: Cell<bool>,
    pub profiler: RefCell<DeviceProfiler>,
    pub tier: Observable<DeviceTier>,
    pub pointer_sampler: RefCell<PointerSampler>,
    pub pointer: Observable<PointerSignal>,
    pub scroll_sampler: RefCell<ScrollSampler>,
    pub zoom: Observable<f32>,
    pub transition: RefCell<TransitionController>,
    pub composer: RefCell<EffectComposer>,
    pub modal: ModalNavigator,
    pub drawer_events: EventEmitter<DrawerEvent>,
}

impl PortalState {
    pub fn new(config: PortalConfig, catalog: Catalog) -> Self {
        Self {
            alive: Cell::new(true),
            profiler: RefCell::new(DeviceProfiler::new(config.mobile_breakpoint_px)),
            tier: Observable::new(DeviceTier::Desktop),
            pointer_sampler: RefCell::new(PointerSampler::new(config.pointer_sample_interval)),
            pointer: Observable::new(PointerSignal::CENTER),
            scroll_sampler: RefCell::new(ScrollSampler::new()),
            zoom: Observable::new(0.0),
            transition: RefCell::new(TransitionController::new()),
            composer: RefCell::new(EffectComposer::new(config)),
            modal: ModalNavigator::new(catalog),
            drawer_events: EventEmitter::new(),
        }
    }

    pub fn effect_inputs(&self) -> EffectInputs {
        EffectInputs {
            tier: self.tier.get(),
            zoom_level: self.zoom.get(),
            pointer: self.pointer.get(),
        }
    }

    pub fn effect_parameters(&self) -> EffectParameters {
        let inputs = self.effect_inputs();
        self.composer.borrow_mut().parameters(inputs).clone()
    }

    pub fn transition_state(&self) -> TransitionState {
        self.transition.borrow().state()
    }
}
