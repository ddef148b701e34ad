//! Related-items carousel navigation.
//!
//! The navigator owns the scroll state of a horizontally scrolling strip and
//! derives whether the left/right controls are enabled. Observers subscribe
//! explicitly and are notified after every change of offset, extent or
//! viewport width.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Width of one card in layout units.
pub const CARD_WIDTH: f64 = 272.0;

/// Gap between cards.
pub const CARD_GAP: f64 = 40.0;

/// Distance moved by one scroll control press.
pub const SCROLL_STEP: f64 = 300.0;

/// Slack before the right edge at which scrolling right is disabled.
pub const EDGE_EPSILON: f64 = 10.0;

/// Window widths below which fewer cards are visible.
const NARROW_WINDOW: f64 = 768.0;
const MEDIUM_WINDOW: f64 = 1024.0;

/// Scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Card strip geometry for a window width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselLayout {
    pub cards: usize,
    pub window_width: f64,
}

impl CarouselLayout {
    pub fn new(cards: usize, window_width: f64) -> Self {
        Self {
            cards,
            window_width,
        }
    }

    /// Cards that fit in the viewport: 2 on narrow windows, 3 on medium, 4 otherwise.
    pub fn visible_cards(&self) -> usize {
        if self.window_width < NARROW_WINDOW {
            2
        } else if self.window_width < MEDIUM_WINDOW {
            3
        } else {
            4
        }
    }

    /// Total width of the card track.
    pub fn content_extent(&self) -> f64 {
        strip_width(self.cards)
    }

    /// Visible width, never wider than the content.
    pub fn viewport_width(&self) -> f64 {
        strip_width(self.visible_cards()).min(self.content_extent())
    }

    /// The strip is hidden when there is nothing to show.
    pub fn is_visible(&self) -> bool {
        self.cards > 0
    }
}

fn strip_width(cards: usize) -> f64 {
    if cards == 0 {
        return 0.0;
    }
    let n = cards as f64;
    n * CARD_WIDTH + (n - 1.0) * CARD_GAP
}

/// Scroll state of the strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CarouselState {
    pub scroll_offset: f64,
    pub scroll_extent: f64,
    pub viewport_width: f64,
}

impl CarouselState {
    /// Largest reachable offset.
    pub fn max_offset(&self) -> f64 {
        (self.scroll_extent - self.viewport_width).max(0.0)
    }

    pub fn can_scroll_left(&self) -> bool {
        self.scroll_offset > 0.0
    }

    pub fn can_scroll_right(&self) -> bool {
        self.scroll_offset < self.scroll_extent - self.viewport_width - EDGE_EPSILON
    }

    pub fn flags(&self) -> CarouselFlags {
        CarouselFlags {
            can_scroll_left: self.can_scroll_left(),
            can_scroll_right: self.can_scroll_right(),
        }
    }

    fn clamp_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_offset());
    }
}

/// Derived navigation affordances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselFlags {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

/// Receives carousel changes.
pub trait CarouselObserver: Send {
    fn on_change(&mut self, state: &CarouselState, flags: CarouselFlags);
}

impl<F> CarouselObserver for F
where
    F: FnMut(&CarouselState, CarouselFlags) + Send,
{
    fn on_change(&mut self, state: &CarouselState, flags: CarouselFlags) {
        self(state, flags)
    }
}

/// Handle returned by [`CarouselNavigator::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Scroll controller for one carousel.
pub struct CarouselNavigator {
    state: CarouselState,
    observers: Vec<(SubscriptionId, Box<dyn CarouselObserver>)>,
    next_subscription: u64,
}

impl fmt::Debug for CarouselNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselNavigator")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for CarouselNavigator {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

impl CarouselNavigator {
    /// Create a navigator at offset 0.
    pub fn new(scroll_extent: f64, viewport_width: f64) -> Self {
        Self {
            state: CarouselState {
                scroll_offset: 0.0,
                scroll_extent: sanitize(scroll_extent),
                viewport_width: sanitize(viewport_width),
            },
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a navigator sized for a layout.
    pub fn for_layout(layout: &CarouselLayout) -> Self {
        Self::new(layout.content_extent(), layout.viewport_width())
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn flags(&self) -> CarouselFlags {
        self.state.flags()
    }

    pub fn can_scroll_left(&self) -> bool {
        self.state.can_scroll_left()
    }

    pub fn can_scroll_right(&self) -> bool {
        self.state.can_scroll_right()
    }

    /// Register an observer. It is not called until the next change.
    pub fn subscribe(&mut self, observer: impl CarouselObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Move one step in `direction` if the matching control is enabled.
    /// Returns whether the offset changed.
    pub fn scroll_by(&mut self, direction: ScrollDirection) -> bool {
        let delta = match direction {
            ScrollDirection::Left if self.state.can_scroll_left() => -SCROLL_STEP,
            ScrollDirection::Right if self.state.can_scroll_right() => SCROLL_STEP,
            _ => return false,
        };
        self.update(|state| state.scroll_offset += delta)
    }

    /// Record a scroll position reported by the view.
    pub fn set_scroll_offset(&mut self, offset: f64) -> bool {
        let offset = sanitize(offset);
        self.update(|state| state.scroll_offset = offset)
    }

    /// Record a new content width.
    pub fn set_scroll_extent(&mut self, extent: f64) -> bool {
        let extent = sanitize(extent);
        self.update(|state| state.scroll_extent = extent)
    }

    /// Record a new viewport width.
    pub fn set_viewport_width(&mut self, width: f64) -> bool {
        let width = sanitize(width);
        self.update(|state| state.viewport_width = width)
    }

    /// Resize for a new layout, e.g. after the window width changed.
    pub fn apply_layout(&mut self, layout: &CarouselLayout) -> bool {
        let extent = layout.content_extent();
        let viewport = layout.viewport_width();
        self.update(|state| {
            state.scroll_extent = extent;
            state.viewport_width = viewport;
        })
    }

    fn update(&mut self, change: impl FnOnce(&mut CarouselState)) -> bool {
        let before = self.state;
        change(&mut self.state);
        self.state.clamp_offset();
        if self.state == before {
            return false;
        }
        let flags = self.state.flags();
        for (_, observer) in &mut self.observers {
            observer.on_change(&self.state, flags);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_layout_breakpoints() {
        assert_eq!(CarouselLayout::new(10, 500.0).visible_cards(), 2);
        assert_eq!(CarouselLayout::new(10, 800.0).visible_cards(), 3);
        assert_eq!(CarouselLayout::new(10, 1024.0).visible_cards(), 4);
    }

    #[test]
    fn test_layout_widths() {
        let layout = CarouselLayout::new(6, 1280.0);
        assert_eq!(layout.content_extent(), 6.0 * 272.0 + 5.0 * 40.0);
        assert_eq!(layout.viewport_width(), 4.0 * 272.0 + 3.0 * 40.0);

        let short = CarouselLayout::new(1, 1280.0);
        assert_eq!(short.viewport_width(), 272.0);

        let empty = CarouselLayout::new(0, 1280.0);
        assert!(!empty.is_visible());
        assert_eq!(empty.content_extent(), 0.0);
    }

    #[test]
    fn test_edges() {
        let mut nav = CarouselNavigator::new(1000.0, 400.0);
        assert!(!nav.can_scroll_left());
        assert!(nav.can_scroll_right());

        nav.set_scroll_offset(600.0);
        assert!(nav.can_scroll_left());
        assert!(!nav.can_scroll_right());

        nav.set_scroll_offset(595.0);
        assert!(!nav.can_scroll_right());
        nav.set_scroll_offset(589.0);
        assert!(nav.can_scroll_right());
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut nav = CarouselNavigator::new(1000.0, 400.0);
        assert!(nav.scroll_by(ScrollDirection::Right));
        assert_eq!(nav.state().scroll_offset, 300.0);
        assert!(nav.scroll_by(ScrollDirection::Right));
        assert_eq!(nav.state().scroll_offset, 600.0);
        assert!(!nav.scroll_by(ScrollDirection::Right));

        assert!(nav.scroll_by(ScrollDirection::Left));
        assert!(nav.scroll_by(ScrollDirection::Left));
        assert_eq!(nav.state().scroll_offset, 0.0);
        assert!(!nav.scroll_by(ScrollDirection::Left));
    }

    #[test]
    fn test_content_narrower_than_viewport() {
        let mut nav = CarouselNavigator::new(272.0, 400.0);
        assert!(!nav.can_scroll_right());
        assert!(!nav.scroll_by(ScrollDirection::Right));
        nav.set_scroll_offset(50.0);
        assert_eq!(nav.state().scroll_offset, 0.0);
    }

    #[test]
    fn test_shrinking_extent_reclamps_offset() {
        let mut nav = CarouselNavigator::new(2000.0, 400.0);
        nav.set_scroll_offset(1500.0);
        nav.set_scroll_extent(1000.0);
        assert_eq!(nav.state().scroll_offset, 600.0);
    }

    #[test]
    fn test_observers_notified_until_unsubscribed() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut nav = CarouselNavigator::new(1000.0, 400.0);

        let sink = Arc::clone(&seen);
        let id = nav.subscribe(move |state: &CarouselState, flags: CarouselFlags| {
            sink.lock().unwrap().push((state.scroll_offset, flags));
        });

        nav.scroll_by(ScrollDirection::Right);
        nav.set_viewport_width(400.0);
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(
            seen.lock().unwrap()[0],
            (
                300.0,
                CarouselFlags {
                    can_scroll_left: true,
                    can_scroll_right: true
                }
            )
        );

        assert!(nav.unsubscribe(id));
        assert!(!nav.unsubscribe(id));
        nav.scroll_by(ScrollDirection::Right);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_apply_layout_on_resize() {
        let mut nav = CarouselNavigator::for_layout(&CarouselLayout::new(6, 1280.0));
        nav.scroll_by(ScrollDirection::Right);
        assert!(nav.apply_layout(&CarouselLayout::new(6, 600.0)));
        assert_eq!(nav.state().viewport_width, 2.0 * 272.0 + 40.0);
    }

    #[derive(Debug, Clone)]
    enum Action {
        Scroll(ScrollDirection),
        Offset(f64),
        Extent(f64),
        Viewport(f64),
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            Just(Action::Scroll(ScrollDirection::Left)),
            Just(Action::Scroll(ScrollDirection::Right)),
            (-500.0f64..5000.0).prop_map(Action::Offset),
            (0.0f64..5000.0).prop_map(Action::Extent),
            (0.0f64..2000.0).prop_map(Action::Viewport),
        ]
    }

    proptest! {
        #[test]
        fn offset_stays_in_bounds(
            extent in 0.0f64..5000.0,
            viewport in 0.0f64..2000.0,
            actions in prop::collection::vec(action(), 0..40),
        ) {
            let mut nav = CarouselNavigator::new(extent, viewport);
            for action in actions {
                match action {
                    Action::Scroll(direction) => { nav.scroll_by(direction); }
                    Action::Offset(offset) => { nav.set_scroll_offset(offset); }
                    Action::Extent(extent) => { nav.set_scroll_extent(extent); }
                    Action::Viewport(width) => { nav.set_viewport_width(width); }
                }
                let state = nav.state();
                prop_assert!(state.scroll_offset >= 0.0);
                prop_assert!(state.scroll_offset <= state.max_offset());
            }
        }

        #[test]
        fn flags_false_at_edges(extent in 0.0f64..5000.0, viewport in 0.0f64..2000.0) {
            let mut nav = CarouselNavigator::new(extent, viewport);
            prop_assert!(!nav.can_scroll_left());
            nav.set_scroll_offset(extent - viewport);
            prop_assert!(!nav.can_scroll_right());
        }
    }
}
