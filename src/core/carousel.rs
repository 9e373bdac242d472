//! # Rotating Carousel
//!
//! The state machine behind the home screen's sliding quote window. Pure
//! logic: no I/O, no terminal types. The TUI feeds it width changes,
//! swipes, and clock readings; it answers with which collection indices
//! are currently visible.
//!
//! ```text
//! Idle(len = 0)            Active(start_index, cards_to_show, deadline)
//!      │  set_len(n>0)          │ advance/retreat  → new start_index, rearmed deadline
//!      └─────────────────►      │ on_resize        → new cards_to_show, same start_index
//!                               │ poll_timer       → advance() when the quiet period lapses
//! ```
//!
//! Auto-advance is an inactivity debounce, not an interval tick: every
//! qualifying interaction and every manual navigation replaces the single
//! pending deadline. At most one deadline is ever armed, and only while
//! `len > 1`.

use std::time::{Duration, Instant};

/// Width bands (in terminal columns) that decide how many cards fit.
///
/// Below `two` columns a single card is shown, from `two` up two cards,
/// and from `three` up three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub two: u16,
    pub three: u16,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self { two: 80, three: 120 }
    }
}

impl Breakpoints {
    /// Number of visible cards for a given viewport width.
    pub fn cards_for_width(&self, width: u16) -> usize {
        if width >= self.three {
            3
        } else if width >= self.two {
            2
        } else {
            1
        }
    }
}

/// How far a single navigation step moves the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvanceStep {
    /// Step by `cards_to_show`, a full window per step (primary behavior).
    #[default]
    Window,
    /// Step by one item regardless of window size (alternative configuration).
    Single,
}

/// Tunables for the carousel. All values have sensible defaults and can be
/// overridden through the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Quiet period before an automatic advance.
    pub auto_advance: Duration,
    /// Minimum horizontal drag distance (in cells) that counts as a swipe.
    pub swipe_threshold: i32,
    pub breakpoints: Breakpoints,
    pub step: AdvanceStep,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance: Duration::from_millis(15_000),
            swipe_threshold: 5,
            breakpoints: Breakpoints::default(),
            step: AdvanceStep::Window,
        }
    }
}

/// Circular sliding window over an externally owned collection.
///
/// The carousel never touches the items themselves; it tracks only
/// viewing state (`start_index`, `cards_to_show`, the pending deadline)
/// and hands back indices. Callers map those through the backing list.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    start_index: usize,
    cards_to_show: usize,
    deadline: Option<Instant>,
    config: CarouselConfig,
}

impl Carousel {
    /// Construct over a collection of `len` items at the given viewport
    /// width. An empty collection starts Idle: nothing visible, no
    /// deadline armed.
    pub fn new(len: usize, width: u16, now: Instant, config: CarouselConfig) -> Self {
        let mut carousel = Self {
            len,
            start_index: 0,
            cards_to_show: config.breakpoints.cards_for_width(width),
            deadline: None,
            config,
        };
        carousel.rearm(now);
        carousel
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn cards_to_show(&self) -> usize {
        self.cards_to_show
    }

    /// The pending auto-advance deadline, if one is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    fn step(&self) -> usize {
        match self.config.step {
            AdvanceStep::Window => self.cards_to_show,
            AdvanceStep::Single => 1,
        }
    }

    /// Replace the previous deadline with a fresh one. Only armed while
    /// there is something to cycle through.
    fn rearm(&mut self, now: Instant) {
        self.deadline = if self.len > 1 {
            Some(now + self.config.auto_advance)
        } else {
            None
        };
    }

    /// Move the window forward, wrapping at the end. No-op for empty or
    /// single-item collections.
    pub fn advance(&mut self, now: Instant) {
        if self.len <= 1 {
            return;
        }
        self.start_index = (self.start_index + self.step()) % self.len;
        self.rearm(now);
    }

    /// Move the window backward using non-negative modulo arithmetic.
    pub fn retreat(&mut self, now: Instant) {
        if self.len <= 1 {
            return;
        }
        let step = self.step() % self.len;
        self.start_index = (self.start_index + self.len - step) % self.len;
        self.rearm(now);
    }

    /// Recompute `cards_to_show` from the viewport width band. Never
    /// changes `start_index`; the visible window simply re-slices (and
    /// wraps) around the same anchor.
    pub fn on_resize(&mut self, width: u16) {
        self.cards_to_show = self.config.breakpoints.cards_for_width(width);
    }

    /// Reduce a completed horizontal drag to a navigation action. Drags
    /// shorter than the threshold are ignored.
    pub fn on_swipe(&mut self, delta_x: i32, now: Instant) {
        if delta_x <= -self.config.swipe_threshold {
            self.advance(now);
        } else if delta_x >= self.config.swipe_threshold {
            self.retreat(now);
        }
    }

    /// A qualifying interaction happened: push the auto-advance deadline
    /// out by a full quiet period, cancelling the previous one.
    pub fn note_activity(&mut self, now: Instant) {
        self.rearm(now);
    }

    /// Fire the auto-advance if the quiet period has lapsed. Returns true
    /// when the window moved. The step uses `cards_to_show` as of fire
    /// time, so a resize between arming and firing never causes a stale
    /// jump.
    pub fn poll_timer(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.advance(now);
                true
            }
            _ => false,
        }
    }

    /// The backing collection changed size between renders. Keeps
    /// `start_index` when still valid, otherwise resets it to 0; drops
    /// the deadline when there is nothing left to cycle.
    pub fn set_len(&mut self, len: usize, now: Instant) {
        self.len = len;
        if len == 0 || self.start_index >= len {
            self.start_index = 0;
        }
        if len <= 1 {
            self.deadline = None;
        } else if self.deadline.is_none() {
            self.rearm(now);
        }
    }

    /// Indices of the currently visible items, in display order. Always
    /// exactly `cards_to_show` entries when the collection is non-empty,
    /// wrapping past the end and repeating items when `len <
    /// cards_to_show`. Empty when the collection is empty.
    pub fn visible_indices(&self) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        (0..self.cards_to_show)
            .map(|i| (self.start_index + i) % self.len)
            .collect()
    }

    /// Whether prev/next affordances should render. Controls are dead
    /// weight unless there is more than one window's worth of items.
    pub fn show_controls(&self) -> bool {
        self.len > self.cards_to_show
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(threshold: i32) -> CarouselConfig {
        CarouselConfig {
            swipe_threshold: threshold,
            ..CarouselConfig::default()
        }
    }

    /// Width in the middle of the two-card band under default breakpoints.
    const TWO_CARD_WIDTH: u16 = 100;
    const ONE_CARD_WIDTH: u16 = 60;
    const THREE_CARD_WIDTH: u16 = 140;

    fn carousel(len: usize) -> (Carousel, Instant) {
        let now = Instant::now();
        (
            Carousel::new(len, TWO_CARD_WIDTH, now, CarouselConfig::default()),
            now,
        )
    }

    #[test]
    fn breakpoint_bands() {
        let bp = Breakpoints::default();
        assert_eq!(bp.cards_for_width(0), 1);
        assert_eq!(bp.cards_for_width(79), 1);
        assert_eq!(bp.cards_for_width(80), 2);
        assert_eq!(bp.cards_for_width(119), 2);
        assert_eq!(bp.cards_for_width(120), 3);
        assert_eq!(bp.cards_for_width(500), 3);
    }

    #[test]
    fn four_items_two_cards_wraps_in_two_steps() {
        let (mut c, now) = carousel(4);
        assert_eq!(c.visible_indices(), vec![0, 1]);

        c.advance(now);
        assert_eq!(c.start_index(), 2);
        assert_eq!(c.visible_indices(), vec![2, 3]);

        c.advance(now);
        assert_eq!(c.start_index(), 0);
        assert_eq!(c.visible_indices(), vec![0, 1]);
    }

    #[test]
    fn retreat_is_inverse_of_advance() {
        for len in 1..=7 {
            let (mut c, now) = carousel(len);
            for start in 0..len {
                c.start_index = start;
                c.advance(now);
                c.retreat(now);
                assert_eq!(c.start_index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn start_index_stays_in_bounds_under_any_sequence() {
        for len in 1..=6 {
            let (mut c, now) = carousel(len);
            for i in 0..50 {
                if i % 3 == 0 {
                    c.retreat(now);
                } else {
                    c.advance(now);
                }
                assert!(c.start_index() < len, "len={len} iteration={i}");
            }
        }
    }

    #[test]
    fn window_wraps_and_repeats_when_shorter_than_cards() {
        let now = Instant::now();
        let mut c = Carousel::new(2, THREE_CARD_WIDTH, now, CarouselConfig::default());
        assert_eq!(c.cards_to_show(), 3);
        // Two items, three slots: the first item repeats.
        assert_eq!(c.visible_indices(), vec![0, 1, 0]);

        c.start_index = 1;
        assert_eq!(c.visible_indices(), vec![1, 0, 1]);
    }

    #[test]
    fn window_always_has_exactly_cards_to_show_entries() {
        let now = Instant::now();
        for len in 1..=5 {
            for width in [ONE_CARD_WIDTH, TWO_CARD_WIDTH, THREE_CARD_WIDTH] {
                let c = Carousel::new(len, width, now, CarouselConfig::default());
                assert_eq!(c.visible_indices().len(), c.cards_to_show());
            }
        }
    }

    #[test]
    fn resize_is_idempotent_and_keeps_start_index() {
        let (mut c, now) = carousel(5);
        c.advance(now);
        let anchor = c.start_index();

        c.on_resize(THREE_CARD_WIDTH);
        assert_eq!(c.cards_to_show(), 3);
        assert_eq!(c.start_index(), anchor);

        c.on_resize(THREE_CARD_WIDTH);
        assert_eq!(c.cards_to_show(), 3);
        assert_eq!(c.start_index(), anchor);
    }

    #[test]
    fn single_item_has_no_controls_and_no_timer() {
        let (mut c, now) = carousel(1);
        assert!(c.deadline().is_none());
        assert!(!c.show_controls());
        assert_eq!(c.visible_indices(), vec![0, 0]);

        c.advance(now);
        c.retreat(now);
        assert_eq!(c.start_index(), 0);
        assert!(!c.poll_timer(now + Duration::from_secs(3600)));
    }

    #[test]
    fn empty_collection_is_inert() {
        let (mut c, now) = carousel(0);
        assert!(c.is_empty());
        assert!(c.deadline().is_none());
        assert!(c.visible_indices().is_empty());
        assert!(!c.show_controls());

        // None of these may panic or divide by zero.
        c.advance(now);
        c.retreat(now);
        c.on_resize(THREE_CARD_WIDTH);
        c.on_swipe(-100, now);
        assert!(!c.poll_timer(now + Duration::from_secs(60)));
        assert_eq!(c.start_index(), 0);
    }

    #[test]
    fn swipe_threshold_gates_navigation() {
        let now = Instant::now();
        let mut c = Carousel::new(4, TWO_CARD_WIDTH, now, config(50));

        c.on_swipe(-80, now);
        assert_eq!(c.start_index(), 2); // one advance

        c.on_swipe(-30, now);
        assert_eq!(c.start_index(), 2); // below threshold, ignored

        c.on_swipe(80, now);
        assert_eq!(c.start_index(), 0); // one retreat
    }

    #[test]
    fn exactly_one_deadline_while_cycling() {
        let (mut c, now) = carousel(3);
        let first = c.deadline().expect("armed on construct");

        let later = now + Duration::from_secs(5);
        c.note_activity(later);
        let second = c.deadline().expect("rearmed on activity");
        assert_eq!(second, later + Duration::from_millis(15_000));
        assert!(second > first);

        c.advance(later);
        assert!(c.deadline().is_some());
    }

    #[test]
    fn timer_fires_once_after_quiet_period() {
        let (mut c, now) = carousel(4);

        assert!(!c.poll_timer(now + Duration::from_secs(14)));
        assert_eq!(c.start_index(), 0);

        assert!(c.poll_timer(now + Duration::from_secs(15)));
        assert_eq!(c.start_index(), 2);

        // Rearmed on fire: the next poll right after is quiet again.
        assert!(!c.poll_timer(now + Duration::from_secs(16)));
    }

    #[test]
    fn activity_defers_the_auto_advance() {
        let (mut c, now) = carousel(4);
        c.note_activity(now + Duration::from_secs(10));

        // Original deadline would have been at t+15; activity moved it to t+25.
        assert!(!c.poll_timer(now + Duration::from_secs(20)));
        assert!(c.poll_timer(now + Duration::from_secs(25)));
    }

    #[test]
    fn timer_step_uses_cards_to_show_at_fire_time() {
        let (mut c, now) = carousel(6);
        assert_eq!(c.cards_to_show(), 2);

        // Widen the viewport while the deadline is pending.
        c.on_resize(THREE_CARD_WIDTH);
        assert!(c.poll_timer(now + Duration::from_secs(15)));
        assert_eq!(c.start_index(), 3); // stepped by 3, not the stale 2
    }

    #[test]
    fn shrinking_collection_resets_out_of_range_anchor() {
        let (mut c, now) = carousel(6);
        c.advance(now);
        c.advance(now);
        assert_eq!(c.start_index(), 4);

        c.set_len(3, now);
        assert_eq!(c.start_index(), 0);
        assert!(c.deadline().is_some());

        c.set_len(0, now);
        assert!(c.deadline().is_none());
        assert!(c.visible_indices().is_empty());

        // A deadline that would have fired against the emptied list is gone.
        assert!(!c.poll_timer(now + Duration::from_secs(60)));
    }

    #[test]
    fn growing_from_empty_arms_the_timer() {
        let (mut c, now) = carousel(0);
        c.set_len(5, now);
        assert_eq!(c.start_index(), 0);
        assert!(c.deadline().is_some());
        assert_eq!(c.visible_indices(), vec![0, 1]);
    }

    #[test]
    fn controls_render_only_when_there_is_something_to_cycle() {
        let now = Instant::now();
        let cfg = CarouselConfig::default();
        assert!(!Carousel::new(0, TWO_CARD_WIDTH, now, cfg).show_controls());
        assert!(!Carousel::new(2, TWO_CARD_WIDTH, now, cfg).show_controls());
        assert!(Carousel::new(3, TWO_CARD_WIDTH, now, cfg).show_controls());
    }

    #[test]
    fn single_step_configuration_moves_one_item() {
        let now = Instant::now();
        let cfg = CarouselConfig {
            step: AdvanceStep::Single,
            ..CarouselConfig::default()
        };
        let mut c = Carousel::new(4, TWO_CARD_WIDTH, now, cfg);

        c.advance(now);
        assert_eq!(c.start_index(), 1);
        assert_eq!(c.visible_indices(), vec![1, 2]);

        c.retreat(now);
        c.retreat(now);
        assert_eq!(c.start_index(), 3);
    }
}
