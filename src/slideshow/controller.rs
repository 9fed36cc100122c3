/// Slideshow rotation state for one folder
///
/// The controller owns the current position over a snapshot of a folder's
/// images and an auto-advance timer. The timer is just a deadline: whoever
/// drives the controller calls `tick()` and the controller decides, from its
/// clock, whether the deadline has passed. Nothing runs in the background, so
/// once the controller is torn down or dropped nothing can fire into it.
use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};
use crate::assets::ImageRecord;

/// Default auto-advance interval (matches the hero slideshow)
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5_000);

/// Shortest interval accepted; zero would spin
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Longest interval accepted; keeps `now + interval` representable
const MAX_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Lifecycle phase of a slideshow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowPhase {
    /// No images: presentation shows a static placeholder
    Empty,
    /// Exactly one image, nothing to rotate
    Static,
    /// Two or more images, auto-advance available
    Rotating,
    /// Released; the timer is gone for good
    TornDown,
}

pub struct Slideshow<C: Clock = SystemClock> {
    images: Vec<ImageRecord>,
    current: usize,
    interval: Duration,
    /// Next auto-advance; `None` while the timer is disarmed
    deadline: Option<Instant>,
    torn_down: bool,
    clock: C,
}

impl Slideshow<SystemClock> {
    /// Slideshow driven by wall-clock time
    pub fn with_system_clock(images: Vec<ImageRecord>, interval: Duration) -> Self {
        Self::new(images, interval, SystemClock)
    }
}

impl<C: Clock> Slideshow<C> {
    /// Create a slideshow over a snapshot of `images`.
    ///
    /// With two or more images the timer is armed right away, first firing
    /// `interval` from now.
    pub fn new(images: Vec<ImageRecord>, interval: Duration, clock: C) -> Self {
        let interval = interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
        let deadline = (images.len() >= 2).then(|| clock.now() + interval);

        tracing::debug!(
            images = images.len(),
            interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
            "slideshow created"
        );

        Self {
            images,
            current: 0,
            interval,
            deadline,
            torn_down: false,
            clock,
        }
    }

    pub fn phase(&self) -> SlideshowPhase {
        if self.torn_down {
            return SlideshowPhase::TornDown;
        }
        match self.images.len() {
            0 => SlideshowPhase::Empty,
            1 => SlideshowPhase::Static,
            _ => SlideshowPhase::Rotating,
        }
    }

    /// Position of the visible image, `None` when there are no images
    pub fn current_index(&self) -> Option<usize> {
        (!self.images.is_empty()).then_some(self.current)
    }

    /// The visible image
    pub fn current(&self) -> Option<&ImageRecord> {
        self.images.get(self.current)
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the auto-advance timer is armed
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Show the next image (wrapping) and push the next auto-advance out
    pub fn next(&mut self) {
        if !self.ensure_alive("next") || self.images.len() < 2 {
            return;
        }
        self.current = (self.current + 1) % self.images.len();
        self.restart_timer();
    }

    /// Show the previous image (wrapping) and push the next auto-advance out
    pub fn previous(&mut self) {
        if !self.ensure_alive("previous") || self.images.len() < 2 {
            return;
        }
        let len = self.images.len();
        self.current = (self.current + len - 1) % len;
        self.restart_timer();
    }

    /// Jump straight to `index`; out-of-range indices are ignored
    pub fn jump_to(&mut self, index: usize) {
        if !self.ensure_alive("jump_to") || index >= self.images.len() {
            return;
        }
        self.current = index;
        self.restart_timer();
    }

    /// Arm auto-advance (only meaningful with two or more images)
    pub fn start(&mut self) {
        if !self.ensure_alive("start") {
            return;
        }
        if self.images.len() >= 2 && self.deadline.is_none() {
            self.deadline = Some(self.clock.now() + self.interval);
        }
    }

    /// Disarm auto-advance; manual navigation keeps working
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Apply any auto-advance that is due.
    ///
    /// If the driver was late by several intervals, all of them are applied
    /// at once so the slideshow stays in phase. Returns the number of steps
    /// taken.
    pub fn tick(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        let Some(deadline) = self.deadline else {
            return 0;
        };

        let now = self.clock.now();
        if now < deadline {
            return 0;
        }

        let interval_ns = self.interval.as_nanos();
        let late_ns = now.duration_since(deadline).as_nanos();
        let steps = 1 + late_ns / interval_ns;

        let len = self.images.len() as u128;
        self.current = ((self.current as u128 + steps % len) % len) as usize;

        // Next deadline is the first interval boundary strictly after now
        let remaining_ns = interval_ns - late_ns % interval_ns;
        self.deadline = Some(now + Duration::from_nanos(u64::try_from(remaining_ns).unwrap_or(u64::MAX)));

        tracing::trace!(index = self.current, steps = steps as u64, "slideshow advanced");
        usize::try_from(steps).unwrap_or(usize::MAX)
    }

    /// How long until the next auto-advance is due
    pub fn time_until_next(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(self.clock.now()))
    }

    /// Release the timer for good (view unmount).
    ///
    /// Ticks after this are ignored; navigation after this is a lifecycle bug.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.deadline = None;
        self.torn_down = true;
        tracing::debug!(images = self.images.len(), "slideshow torn down");
    }

    fn restart_timer(&mut self) {
        if self.deadline.is_some() {
            self.deadline = Some(self.clock.now() + self.interval);
        }
    }

    fn ensure_alive(&self, operation: &str) -> bool {
        if self.torn_down {
            debug_assert!(false, "slideshow `{}` called after teardown", operation);
            tracing::warn!(operation, "slideshow used after teardown; ignoring");
            return false;
        }
        true
    }
}

impl<C: Clock> std::fmt::Debug for Slideshow<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slideshow")
            .field("phase", &self.phase())
            .field("current", &self.current_index())
            .field("len", &self.images.len())
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Locator;
    use crate::slideshow::clock::ManualClock;

    const INTERVAL: Duration = Duration::from_millis(5_000);

    fn images(count: usize) -> Vec<ImageRecord> {
        (0..count)
            .map(|i| ImageRecord {
                identifier: format!("slide-{}", i),
                source: Locator::Url(format!("/hero/slide-{}.jpg", i)),
                folder: "hero".to_string(),
                path: format!("hero/slide-{}.jpg", i),
            })
            .collect()
    }

    fn slideshow(count: usize) -> (Slideshow<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Slideshow::new(images(count), INTERVAL, clock.clone()), clock)
    }

    #[test]
    fn test_empty_phase() {
        let (mut show, clock) = slideshow(0);

        assert_eq!(show.phase(), SlideshowPhase::Empty);
        assert_eq!(show.current_index(), None);
        assert!(show.current().is_none());
        assert!(!show.is_running());

        show.next();
        show.previous();
        show.jump_to(0);
        show.start();
        clock.advance(INTERVAL * 3);
        assert_eq!(show.tick(), 0);
        assert_eq!(show.current_index(), None);
    }

    #[test]
    fn test_single_image_is_static() {
        let (mut show, clock) = slideshow(1);

        assert_eq!(show.phase(), SlideshowPhase::Static);
        assert!(!show.is_running());

        show.next();
        assert_eq!(show.current_index(), Some(0));
        show.previous();
        assert_eq!(show.current_index(), Some(0));

        show.start();
        assert!(!show.is_running());
        clock.advance(INTERVAL * 2);
        assert_eq!(show.tick(), 0);
        assert_eq!(show.current_index(), Some(0));
    }

    #[test]
    fn test_next_cycles_back() {
        let (mut show, _clock) = slideshow(3);
        assert_eq!(show.phase(), SlideshowPhase::Rotating);

        let start = show.current_index();
        show.next();
        show.next();
        show.next();
        assert_eq!(show.current_index(), start);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let (mut show, _clock) = slideshow(3);

        show.previous();
        assert_eq!(show.current_index(), Some(2));
        assert_eq!(show.current().unwrap().identifier, "slide-2");
    }

    #[test]
    fn test_jump_to_ignores_out_of_range() {
        let (mut show, _clock) = slideshow(3);

        show.jump_to(2);
        assert_eq!(show.current_index(), Some(2));
        show.jump_to(3);
        assert_eq!(show.current_index(), Some(2));
    }

    #[test]
    fn test_auto_advance_on_interval() {
        let (mut show, clock) = slideshow(3);
        assert!(show.is_running());

        clock.advance(INTERVAL - Duration::from_millis(1));
        assert_eq!(show.tick(), 0);
        assert_eq!(show.current_index(), Some(0));

        clock.advance(Duration::from_millis(1));
        assert_eq!(show.tick(), 1);
        assert_eq!(show.current_index(), Some(1));

        // Ticking again without time passing does nothing
        assert_eq!(show.tick(), 0);
        assert_eq!(show.time_until_next(), Some(INTERVAL));
    }

    #[test]
    fn test_manual_navigation_resets_timer_phase() {
        let (mut show, clock) = slideshow(3);

        clock.advance(Duration::from_millis(4_000));
        show.next();
        assert_eq!(show.current_index(), Some(1));

        // The original deadline (5s) passes without an advance
        clock.advance(Duration::from_millis(1_500));
        assert_eq!(show.tick(), 0);
        assert_eq!(show.current_index(), Some(1));

        // A full interval after the click, it advances
        clock.advance(Duration::from_millis(3_500));
        assert_eq!(show.tick(), 1);
        assert_eq!(show.current_index(), Some(2));
    }

    #[test]
    fn test_late_tick_catches_up() {
        let (mut show, clock) = slideshow(3);

        clock.advance(INTERVAL * 4 + Duration::from_millis(1_000));
        assert_eq!(show.tick(), 4);
        assert_eq!(show.current_index(), Some(1));
        assert_eq!(show.time_until_next(), Some(Duration::from_millis(4_000)));
    }

    #[test]
    fn test_stop_and_start() {
        let (mut show, clock) = slideshow(2);

        show.stop();
        clock.advance(INTERVAL * 2);
        assert_eq!(show.tick(), 0);

        // Manual navigation does not re-arm a stopped timer
        show.next();
        assert!(!show.is_running());

        show.start();
        assert_eq!(show.time_until_next(), Some(INTERVAL));
        clock.advance(INTERVAL);
        assert_eq!(show.tick(), 1);
        assert_eq!(show.current_index(), Some(0));
    }

    #[test]
    fn test_no_tick_after_teardown() {
        let (mut show, clock) = slideshow(3);
        show.next();

        show.teardown();
        assert_eq!(show.phase(), SlideshowPhase::TornDown);
        assert!(!show.is_running());

        clock.advance(INTERVAL * 10);
        assert_eq!(show.tick(), 0);
        assert_eq!(show.current_index(), Some(1));
        assert_eq!(show.time_until_next(), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "after teardown")]
    fn test_navigation_after_teardown_is_a_bug() {
        let (mut show, _clock) = slideshow(3);
        show.teardown();
        show.next();
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let clock = ManualClock::new();
        let show = Slideshow::new(images(2), Duration::ZERO, clock);
        assert_eq!(show.interval(), MIN_INTERVAL);
    }

    #[test]
    fn test_huge_interval_is_clamped() {
        let clock = ManualClock::new();
        let mut show = Slideshow::new(images(2), Duration::MAX, clock.clone());

        assert_eq!(show.interval(), MAX_INTERVAL);
        assert_eq!(show.time_until_next(), Some(MAX_INTERVAL));

        show.stop();
        show.start();
        show.next();
        clock.advance(MAX_INTERVAL);
        assert_eq!(show.tick(), 1);
        assert_eq!(show.current_index(), Some(0));
    }
}
