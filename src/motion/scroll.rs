//! Scroll-driven transforms.
//!
//! Everything here is a pure function of the current scroll offset and the
//! measured layout. Nothing accumulates between samples, so a resize or a jump
//! to an arbitrary offset produces the right frame straight away.

/// A point on the element lined up with a point on the viewport, both given as
/// fractions from the top edge. `"top bottom"` is `Anchor::new(0.0, 1.0)`:
/// the element's top edge meets the viewport's bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub element: f64,
    pub viewport: f64,
}

impl Anchor {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }
}

/// Layout of a trigger element, measured at sample time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Top edge in document coordinates.
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

impl Geometry {
    /// Builds document-space geometry from a viewport-relative rect top.
    pub fn from_client_rect(rect_top: f64, rect_height: f64, scroll_y: f64, viewport_height: f64) -> Self {
        Self {
            element_top: rect_top + scroll_y,
            element_height: rect_height,
            viewport_height,
        }
    }

    fn scroll_at(&self, anchor: Anchor) -> f64 {
        self.element_top + anchor.element * self.element_height - anchor.viewport * self.viewport_height
    }
}

/// Scroll offsets at which a region starts and ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollBounds {
    pub start: f64,
    pub end: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRegion {
    pub start: Anchor,
    pub end: Anchor,
}

impl TriggerRegion {
    pub const fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }

    pub fn bounds(&self, geometry: &Geometry) -> ScrollBounds {
        ScrollBounds {
            start: geometry.scroll_at(self.start),
            end: geometry.scroll_at(self.end),
        }
    }
}

/// Normalised progress through `bounds`, clamped to `[0, 1]`.
pub fn progress(scroll: f64, bounds: ScrollBounds) -> f64 {
    let span = bounds.end - bounds.start;
    if span <= 0.0 {
        return if scroll >= bounds.start { 1.0 } else { 0.0 };
    }
    ((scroll - bounds.start) / span).clamp(0.0, 1.0)
}

/// Whether the scroll offset has passed a single anchor.
pub fn passed(scroll: f64, anchor: Anchor, geometry: &Geometry) -> bool {
    scroll >= geometry.scroll_at(anchor)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power2InOut,
    Power3Out,
    Power4Out,
}

impl Ease {
    pub fn apply(self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Ease::Linear => p,
            Ease::Power2InOut => {
                if p < 0.5 {
                    4.0 * p * p * p
                } else {
                    1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - p).powi(4),
            Ease::Power4Out => 1.0 - (1.0 - p).powi(5),
        }
    }

    /// Closest CSS timing function, for tweens the browser runs on its own.
    pub fn css_timing(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Power2InOut => "cubic-bezier(0.645, 0.045, 0.355, 1)",
            Ease::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)",
            Ease::Power4Out => "cubic-bezier(0.23, 1, 0.32, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channel {
    pub from: f64,
    pub to: f64,
}

impl Channel {
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    pub fn at(&self, p: f64) -> f64 {
        self.from + (self.to - self.from) * p
    }
}

/// Output channels of a transform. The default is the untouched element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub scale: f64,
    pub opacity: f64,
    pub blur_px: f64,
    pub y_percent: f64,
    pub y_px: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: 1.0,
            blur_px: 0.0,
            y_percent: 0.0,
            y_px: 0.0,
        }
    }
}

impl VisualState {
    pub fn to_style(&self) -> String {
        format!(
            "transform: translateY({:.3}%) translateY({:.3}px) scale({:.4}); opacity: {:.4}; filter: blur({:.2}px);",
            self.y_percent, self.y_px, self.scale, self.opacity, self.blur_px
        )
    }
}

/// Which channels move, and how, as progress goes from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub ease: Ease,
    pub scale: Option<Channel>,
    pub opacity: Option<Channel>,
    pub blur_px: Option<Channel>,
    pub y_percent: Option<Channel>,
    pub y_px: Option<Channel>,
}

impl Tween {
    pub const fn new(ease: Ease) -> Self {
        Self {
            ease,
            scale: None,
            opacity: None,
            blur_px: None,
            y_percent: None,
            y_px: None,
        }
    }

    pub fn sample(&self, p: f64) -> VisualState {
        let t = self.ease.apply(p);
        let base = VisualState::default();
        let at = |channel: Option<Channel>, neutral: f64| channel.map_or(neutral, |c| c.at(t));
        VisualState {
            scale: at(self.scale, base.scale),
            opacity: at(self.opacity, base.opacity),
            blur_px: at(self.blur_px, base.blur_px),
            y_percent: at(self.y_percent, base.y_percent),
            y_px: at(self.y_px, base.y_px),
        }
    }
}

pub mod presets {
    use super::*;
    use crate::config;

    /// A protocol card recedes while the next card slides over it. The region
    /// is measured on the *next* card, not on the receding one.
    pub fn stacking_card() -> (TriggerRegion, Tween) {
        let tween = Tween {
            scale: Some(Channel::new(1.0, 0.9)),
            opacity: Some(Channel::new(1.0, 0.4)),
            blur_px: Some(Channel::new(0.0, 20.0)),
            ..Tween::new(Ease::Power2InOut)
        };
        (TriggerRegion::new(config::STACK_START, config::STACK_END), tween)
    }

    /// Philosophy background drifts down by 30% of its height across the section.
    pub fn parallax() -> (TriggerRegion, Tween) {
        let tween = Tween {
            y_percent: Some(Channel::new(0.0, 30.0)),
            ..Tween::new(Ease::Linear)
        };
        (TriggerRegion::new(config::PARALLAX_START, config::PARALLAX_END), tween)
    }

    /// Philosophy lines rise 40px and fade in once, after their top passes 85%
    /// of the viewport.
    pub fn reveal() -> (Anchor, Tween) {
        let tween = Tween {
            opacity: Some(Channel::new(0.0, 1.0)),
            y_px: Some(Channel::new(40.0, 0.0)),
            ..Tween::new(Ease::Power3Out)
        };
        (config::REVEAL_AT, tween)
    }

    /// Hero lines rise into place on first paint.
    pub fn hero_entrance() -> Tween {
        Tween {
            opacity: Some(Channel::new(0.0, 1.0)),
            y_px: Some(Channel::new(40.0, 0.0)),
            ..Tween::new(Ease::Power4Out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VH: f64 = 800.0;

    fn section() -> Geometry {
        Geometry {
            element_top: 2_000.0,
            element_height: 1_000.0,
            viewport_height: VH,
        }
    }

    #[test]
    fn bounds_follow_anchor_math() {
        let region = TriggerRegion::new(Anchor::new(0.0, 1.0), Anchor::new(1.0, 0.0));
        let b = region.bounds(&section());
        assert_eq!(b.start, 1_200.0);
        assert_eq!(b.end, 3_000.0);
    }

    #[test]
    fn progress_is_zero_at_start_and_one_at_end() {
        let b = ScrollBounds { start: 1_200.0, end: 3_000.0 };
        assert_eq!(progress(1_200.0, b), 0.0);
        assert_eq!(progress(3_000.0, b), 1.0);
        assert!((progress(2_100.0, b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn progress_clamps_outside_the_region() {
        let b = ScrollBounds { start: 100.0, end: 200.0 };
        assert_eq!(progress(-500.0, b), 0.0);
        assert_eq!(progress(10_000.0, b), 1.0);
    }

    #[test]
    fn degenerate_region_is_a_step() {
        let b = ScrollBounds { start: 300.0, end: 300.0 };
        assert_eq!(progress(299.0, b), 0.0);
        assert_eq!(progress(300.0, b), 1.0);
    }

    #[test]
    fn client_rect_geometry_is_scroll_independent() {
        // Same element seen from two scroll offsets.
        let a = Geometry::from_client_rect(1_500.0, 400.0, 500.0, VH);
        let b = Geometry::from_client_rect(-200.0, 400.0, 2_200.0, VH);
        assert_eq!(a, b);
    }

    #[test]
    fn reveal_fires_once_top_reaches_85_percent() {
        let anchor = Anchor::new(0.0, 0.85);
        let g = section();
        assert!(!passed(1_319.0, anchor, &g));
        assert!(passed(1_320.0, anchor, &g));
    }

    #[test]
    fn stacking_card_ends_match_design() {
        let (_, tween) = presets::stacking_card();
        assert_eq!(tween.sample(0.0), VisualState::default());

        let end = tween.sample(1.0);
        assert!((end.scale - 0.9).abs() < 1e-12);
        assert!((end.opacity - 0.4).abs() < 1e-12);
        assert!((end.blur_px - 20.0).abs() < 1e-12);
    }

    #[test]
    fn stacking_region_uses_next_card_entry() {
        let (region, _) = presets::stacking_card();
        let next_card = Geometry {
            element_top: 1_600.0,
            element_height: VH,
            viewport_height: VH,
        };
        let b = region.bounds(&next_card);
        assert_eq!(b.start, 800.0);
        assert_eq!(b.end, 1_600.0);
    }

    #[test]
    fn parallax_drifts_thirty_percent() {
        let (_, tween) = presets::parallax();
        assert_eq!(tween.sample(0.0).y_percent, 0.0);
        assert_eq!(tween.sample(0.5).y_percent, 15.0);
        assert_eq!(tween.sample(1.0).y_percent, 30.0);
    }

    #[test]
    fn reveal_starts_hidden_and_ends_neutral() {
        let (anchor, tween) = presets::reveal();
        assert_eq!(anchor, Anchor::new(0.0, 0.85));
        let hidden = tween.sample(0.0);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.y_px, 40.0);
        assert_eq!(tween.sample(1.0), VisualState::default());
        assert_eq!(presets::hero_entrance().sample(1.0), VisualState::default());
    }

    #[test]
    fn eases_are_pinned_at_the_ends() {
        for ease in [Ease::Linear, Ease::Power2InOut, Ease::Power3Out, Ease::Power4Out] {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        }
    }

    proptest! {
        #[test]
        fn progress_stays_in_unit_range(
            scroll in -1e6f64..1e6,
            start in -1e5f64..1e5,
            len in 0f64..1e5
        ) {
            let p = progress(scroll, ScrollBounds { start, end: start + len });
            prop_assert!((0.0..=1.0).contains(&p));
        }

        #[test]
        fn tween_outputs_stay_between_channel_ends(p in -2f64..3.0) {
            let (_, tween) = presets::stacking_card();
            let v = tween.sample(p);
            prop_assert!((0.9..=1.0).contains(&v.scale));
            prop_assert!((0.4..=1.0).contains(&v.opacity));
            prop_assert!((0.0..=20.0).contains(&v.blur_px));
        }
    }
}
