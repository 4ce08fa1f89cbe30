pub mod catalog;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod device;
pub mod effect;
pub mod keys;
pub mod layers;
pub mod loader;
pub mod memo;
pub mod modal;
pub mod observe;
pub mod sampler;
pub mod transition;

pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use contracts::*;
pub use device::*;
pub use effect::*;
pub use keys::*;
pub use layers::*;
pub use loader::*;
pub use memo::*;
pub use modal::*;
pub use observe::*;
pub use sampler::*;
pub use transition::*;

// Background effect shader bundled as a string constant
pub static BURST_WGSL: &str = include_str!("../shaders/burst.wgsl");
