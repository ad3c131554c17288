//! Indicator state transitions.
//!
//! Each transition returns the `IndicatorUpdate` the browser layer applies
//! to the indicator element and the link set.

use crate::Placement;

/// Whether a reposition slides or jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    /// Use the stylesheet transition.
    #[default]
    Animated,
    /// Suspend the transition for this one reposition.
    Instant,
}

/// What to apply to the DOM after a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorUpdate {
    /// New left/width. `None` leaves the geometry as it was.
    pub placement: Option<Placement>,
    pub visible: bool,
    /// The one link carrying the focused mark; all others lose it.
    pub focused: Option<usize>,
    pub motion: Motion,
}

impl IndicatorUpdate {
    /// CSS `opacity` value.
    pub fn opacity(&self) -> &'static str {
        if self.visible {
            "1"
        } else {
            "0"
        }
    }
}

/// Current indicator state for one nav bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorState {
    focused: Option<usize>,
    placement: Option<Placement>,
    visible: bool,
}

impl IndicatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the indicator under link `index`.
    pub fn move_to(&mut self, index: usize, placement: Placement, motion: Motion) -> IndicatorUpdate {
        self.focused = Some(index);
        self.placement = Some(placement);
        self.visible = true;
        IndicatorUpdate {
            placement: Some(placement),
            visible: true,
            focused: Some(index),
            motion,
        }
    }

    /// Fade the indicator out and clear every focused mark.
    pub fn hide(&mut self) -> IndicatorUpdate {
        self.focused = None;
        self.visible = false;
        IndicatorUpdate {
            placement: None,
            visible: false,
            focused: None,
            motion: Motion::Animated,
        }
    }

    /// Return to the active link, or hide when there is none.
    ///
    /// Used when the pointer or focus leaves a link and on setup.
    pub fn rest(&mut self, active: Option<(usize, Placement)>, motion: Motion) -> IndicatorUpdate {
        match active {
            Some((index, placement)) => self.move_to(index, placement, motion),
            None => self.hide(),
        }
    }

    /// Jump to the active link if there is one; otherwise leave things be.
    ///
    /// Used after resizes and nav scrolls, where the geometry moved under
    /// the indicator.
    pub fn follow_active(&mut self, active: Option<(usize, Placement)>) -> Option<IndicatorUpdate> {
        active.map(|(index, placement)| self.move_to(index, placement, Motion::Instant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{active_link, Rect};

    fn at(left: f64, width: f64) -> Placement {
        Placement { left, width }
    }

    #[test]
    fn test_hover_then_leave_returns_to_active() {
        let mut state = IndicatorState::new();
        let active = Some((1, at(80.0, 60.0)));

        state.move_to(2, at(150.0, 70.0), Motion::Animated);
        assert_eq!(state.focused, Some(2));

        let update = state.rest(active, Motion::Animated);
        assert_eq!(update.focused, Some(1));
        assert_eq!(update.placement, Some(at(80.0, 60.0)));
        assert_eq!(update.opacity(), "1");
    }

    #[test]
    fn test_leave_without_active_hides() {
        let mut state = IndicatorState::new();
        state.move_to(0, at(0.0, 50.0), Motion::Animated);

        let update = state.rest(None, Motion::Animated);
        assert!(!update.visible);
        assert_eq!(update.opacity(), "0");
        assert_eq!(update.focused, None);
        assert!(!state.visible);
        // Geometry is kept so the fade-out happens in place.
        assert_eq!(state.placement, Some(at(0.0, 50.0)));
    }

    #[test]
    fn test_single_focus() {
        let mut state = IndicatorState::new();
        state.move_to(0, at(0.0, 50.0), Motion::Animated);
        let update = state.move_to(3, at(200.0, 40.0), Motion::Animated);
        assert_eq!(update.focused, Some(3));
        assert_eq!(state.focused, Some(3));
    }

    #[test]
    fn test_follow_active_is_instant() {
        let mut state = IndicatorState::new();
        let update = state.follow_active(Some((1, at(80.0, 60.0)))).unwrap();
        assert_eq!(update.motion, Motion::Instant);
    }

    #[test]
    fn test_follow_without_active_is_noop() {
        let mut state = IndicatorState::new();
        state.move_to(2, at(150.0, 70.0), Motion::Animated);
        assert!(state.follow_active(None).is_none());
        assert_eq!(state.focused, Some(2));
    }

    #[test]
    fn test_initial_placement_on_second_link() {
        let nav = Rect::new(40.0, 0.0, 500.0, 48.0);
        let links = [
            ("/", Rect::new(60.0, 8.0, 70.0, 32.0)),
            ("/menu.html", Rect::new(150.0, 8.0, 90.0, 32.0)),
            ("/about.html", Rect::new(260.0, 8.0, 80.0, 32.0)),
        ];

        let index = active_link(links.iter().map(|(p, _)| Some(*p)), "/menu.html").unwrap();
        let placement = Placement::under(nav, links[index].1, 0.0);

        let mut state = IndicatorState::new();
        let update = state.rest(Some((index, placement)), Motion::Instant);

        assert_eq!(update.focused, Some(1));
        assert_eq!(update.placement, Some(at(110.0, 90.0)));
        assert_eq!(update.motion, Motion::Instant);
    }
}
