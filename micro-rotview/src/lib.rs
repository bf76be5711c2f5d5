#![no_std]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "logging")]
use defmt_rtt as _;

/// Forwards a state-transition message to whichever logger the build enables.
macro_rules! viz_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        defmt::info!($($arg)*);
        #[cfg(feature = "std")]
        log::debug!($($arg)*);
    }};
}

pub mod animation_driver;
pub mod canvas;
pub mod config;
pub mod node_chain;
pub mod node_state;
pub mod scale_math;
pub mod scene_renderer;
pub mod square_drawer;

pub use animation_driver::{AnimationDriver, Clock};
#[cfg(feature = "std")]
pub use animation_driver::StdClock;
pub use canvas::{Canvas, CanvasError, Paint, Surface};
pub use config::ViewConfig;
pub use node_chain::{Direction, NodeChain};
pub use node_state::NodeState;
pub use scene_renderer::{MultiLineSquareView, Renderer, SceneRenderer, Settle};
