/// Auto-advancing, manually steerable slideshow
///
/// - `clock.rs` - injectable time sources
/// - `controller.rs` - rotation state and the auto-advance deadline

pub mod clock;
pub mod controller;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{Slideshow, SlideshowPhase, DEFAULT_INTERVAL};
