//! Easing curve catalog
//!
//! Thirty named curves covering the standard easings.net families (sine,
//! quad, cubic, quart, quint, expo, circ, back, elastic, bounce), each in
//! in/out/in-out variants. Every catalog accessor constructs a fresh [`Ease`];
//! callers needing identity stability hold the returned value themselves.

use animetric_core::SignalStack;
use std::f64::consts::PI;
use std::fmt;

/// Pure curve function mapping linear progress to eased progress.
///
/// Input is conventionally in `[0, 1]` and is not clamped. Output stays in
/// `[0, 1]` for the standard families; back and elastic curves overshoot by
/// design.
pub type EasingFormula = fn(f64) -> f64;

/// Events published by an [`Ease`] instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EaseEvent {
    /// A curve value was computed
    Change,
}

/// A named easing curve.
///
/// Wraps a formula together with its identity: a unique name such as
/// `"easeInOutQuad"` and a CSS `cubic-bezier(...)` descriptor (empty for
/// curves that are not bezier-approximable, e.g. elastic and bounce).
/// Each instance owns a signal stack so observers can trace evaluation
/// without touching the call site.
pub struct Ease {
    name: &'static str,
    cubic_bezier: &'static str,
    formula: EasingFormula,
    signal: SignalStack<EaseEvent, f64>,
}

impl Ease {
    pub fn new(name: &'static str, cubic_bezier: &'static str, formula: EasingFormula) -> Self {
        Self {
            name,
            cubic_bezier,
            formula,
            signal: SignalStack::new(),
        }
    }

    /// Identity curve, the default for a fresh engine
    pub fn linear() -> Self {
        Self::new("linear", "cubic-bezier(0, 0, 1, 1)", |x| x)
    }

    /// Unique curve identifier, e.g. `"easeOutExpo"`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// CSS descriptor, empty when the curve is not bezier-approximable
    pub fn cubic_bezier(&self) -> &'static str {
        self.cubic_bezier
    }

    /// Evaluate the curve at linear progress `x`.
    ///
    /// Publishes [`EaseEvent::Change`] with the computed value before
    /// returning it.
    pub fn compute(&self, x: f64) -> f64 {
        let value = (self.formula)(x);
        self.signal.dispatch(EaseEvent::Change, &value);
        value
    }

    /// Signal stack carrying [`EaseEvent::Change`] notifications
    pub fn signal(&self) -> &SignalStack<EaseEvent, f64> {
        &self.signal
    }

    pub fn signal_mut(&mut self) -> &mut SignalStack<EaseEvent, f64> {
        &mut self.signal
    }
}

impl fmt::Debug for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ease")
            .field("name", &self.name)
            .field("cubic_bezier", &self.cubic_bezier)
            .finish()
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::linear()
    }
}

// Standard constants from the easings.net formulations
const C1: f64 = 1.70158;
const C2: f64 = C1 * 1.525;
const C3: f64 = C1 + 1.0;
const C4: f64 = (2.0 * PI) / 3.0;
const C5: f64 = (2.0 * PI) / 4.5;

const N1: f64 = 7.5625;
const D1: f64 = 2.75;

fn in_sine(x: f64) -> f64 {
    1.0 - (x * PI / 2.0).cos()
}

fn out_sine(x: f64) -> f64 {
    (x * PI / 2.0).sin()
}

fn in_out_sine(x: f64) -> f64 {
    -((PI * x).cos() - 1.0) / 2.0
}

fn in_quad(x: f64) -> f64 {
    x * x
}

fn out_quad(x: f64) -> f64 {
    1.0 - (1.0 - x) * (1.0 - x)
}

fn in_out_quad(x: f64) -> f64 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
    }
}

fn in_cubic(x: f64) -> f64 {
    x * x * x
}

fn out_cubic(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(3)
}

fn in_out_cubic(x: f64) -> f64 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

fn in_quart(x: f64) -> f64 {
    x * x * x * x
}

fn out_quart(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(4)
}

fn in_out_quart(x: f64) -> f64 {
    if x < 0.5 {
        8.0 * x * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(4) / 2.0
    }
}

fn in_quint(x: f64) -> f64 {
    x * x * x * x * x
}

fn out_quint(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(5)
}

fn in_out_quint(x: f64) -> f64 {
    if x < 0.5 {
        16.0 * x * x * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(5) / 2.0
    }
}

// Expo and elastic special-case the exact endpoints so 2^(-inf) artifacts
// never leak into frame values.
fn in_expo(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * x - 10.0)
    }
}

fn out_expo(x: f64) -> f64 {
    if x == 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * x)
    }
}

fn in_out_expo(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else if x < 0.5 {
        2f64.powf(20.0 * x - 10.0) / 2.0
    } else {
        (2.0 - 2f64.powf(-20.0 * x + 10.0)) / 2.0
    }
}

fn in_circ(x: f64) -> f64 {
    1.0 - (1.0 - x * x).sqrt()
}

fn out_circ(x: f64) -> f64 {
    (1.0 - (x - 1.0).powi(2)).sqrt()
}

fn in_out_circ(x: f64) -> f64 {
    if x < 0.5 {
        (1.0 - (1.0 - (2.0 * x).powi(2)).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * x + 2.0).powi(2)).sqrt() + 1.0) / 2.0
    }
}

fn in_back(x: f64) -> f64 {
    C3 * x * x * x - C1 * x * x
}

fn out_back(x: f64) -> f64 {
    1.0 + C3 * (x - 1.0).powi(3) + C1 * (x - 1.0).powi(2)
}

fn in_out_back(x: f64) -> f64 {
    if x < 0.5 {
        ((2.0 * x).powi(2) * ((C2 + 1.0) * 2.0 * x - C2)) / 2.0
    } else {
        ((2.0 * x - 2.0).powi(2) * ((C2 + 1.0) * (x * 2.0 - 2.0) + C2) + 2.0) / 2.0
    }
}

fn in_elastic(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else {
        -(2f64.powf(10.0 * x - 10.0)) * ((x * 10.0 - 10.75) * C4).sin()
    }
}

fn out_elastic(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else {
        2f64.powf(-10.0 * x) * ((x * 10.0 - 0.75) * C4).sin() + 1.0
    }
}

fn in_out_elastic(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else if x < 0.5 {
        -(2f64.powf(20.0 * x - 10.0) * ((20.0 * x - 11.125) * C5).sin()) / 2.0
    } else {
        (2f64.powf(-20.0 * x + 10.0) * ((20.0 * x - 11.125) * C5).sin()) / 2.0 + 1.0
    }
}

fn in_bounce(x: f64) -> f64 {
    1.0 - out_bounce(1.0 - x)
}

fn out_bounce(x: f64) -> f64 {
    if x < 1.0 / D1 {
        N1 * x * x
    } else if x < 2.0 / D1 {
        let x = x - 1.5 / D1;
        N1 * x * x + 0.75
    } else if x < 2.5 / D1 {
        let x = x - 2.25 / D1;
        N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / D1;
        N1 * x * x + 0.984375
    }
}

fn in_out_bounce(x: f64) -> f64 {
    if x < 0.5 {
        (1.0 - out_bounce(1.0 - 2.0 * x)) / 2.0
    } else {
        (1.0 + out_bounce(2.0 * x - 1.0)) / 2.0
    }
}

/// The fixed catalog of named easing curves.
///
/// Every accessor constructs a new [`Ease`] on each call; there is no shared
/// cache. [`Easing::by_name`] resolves the `easeXxx` string identifiers to
/// the same constructors.
pub struct Easing;

impl Easing {
    /// <https://easings.net/#easeInSine>
    pub fn in_sine() -> Ease {
        Ease::new("easeInSine", "cubic-bezier(0.12, 0, 0.39, 0)", in_sine)
    }

    /// <https://easings.net/#easeOutSine>
    pub fn out_sine() -> Ease {
        Ease::new("easeOutSine", "cubic-bezier(0.37, 0, 0.63, 1)", out_sine)
    }

    /// <https://easings.net/#easeInOutSine>
    pub fn in_out_sine() -> Ease {
        Ease::new("easeInOutSine", "cubic-bezier(0.11, 0, 0.5, 0)", in_out_sine)
    }

    /// <https://easings.net/#easeInQuad>
    pub fn in_quad() -> Ease {
        Ease::new("easeInQuad", "cubic-bezier(0.11, 0, 0.5, 0)", in_quad)
    }

    /// <https://easings.net/#easeOutQuad>
    pub fn out_quad() -> Ease {
        Ease::new("easeOutQuad", "cubic-bezier(0.5, 1, 0.89, 1)", out_quad)
    }

    /// <https://easings.net/#easeInOutQuad>
    pub fn in_out_quad() -> Ease {
        Ease::new("easeInOutQuad", "cubic-bezier(0.45, 0, 0.55, 1)", in_out_quad)
    }

    /// <https://easings.net/#easeInCubic>
    pub fn in_cubic() -> Ease {
        Ease::new("easeInCubic", "cubic-bezier(0.32, 0, 0.67, 0)", in_cubic)
    }

    /// <https://easings.net/#easeOutCubic>
    pub fn out_cubic() -> Ease {
        Ease::new("easeOutCubic", "cubic-bezier(0.33, 1, 0.68, 1)", out_cubic)
    }

    /// <https://easings.net/#easeInOutCubic>
    pub fn in_out_cubic() -> Ease {
        Ease::new("easeInOutCubic", "cubic-bezier(0.65, 0, 0.35, 1)", in_out_cubic)
    }

    /// <https://easings.net/#easeInQuart>
    pub fn in_quart() -> Ease {
        Ease::new("easeInQuart", "cubic-bezier(0.5, 0, 0.75, 0)", in_quart)
    }

    /// <https://easings.net/#easeOutQuart>
    pub fn out_quart() -> Ease {
        Ease::new("easeOutQuart", "cubic-bezier(0.25, 1, 0.5, 1)", out_quart)
    }

    /// <https://easings.net/#easeInOutQuart>
    pub fn in_out_quart() -> Ease {
        Ease::new("easeInOutQuart", "cubic-bezier(0.76, 0, 0.24, 1)", in_out_quart)
    }

    /// <https://easings.net/#easeInQuint>
    pub fn in_quint() -> Ease {
        Ease::new("easeInQuint", "cubic-bezier(0.64, 0, 0.78, 0)", in_quint)
    }

    /// <https://easings.net/#easeOutQuint>
    pub fn out_quint() -> Ease {
        Ease::new("easeOutQuint", "cubic-bezier(0.22, 1, 0.36, 1)", out_quint)
    }

    /// <https://easings.net/#easeInOutQuint>
    pub fn in_out_quint() -> Ease {
        Ease::new("easeInOutQuint", "cubic-bezier(0.83, 0, 0.17, 1)", in_out_quint)
    }

    /// <https://easings.net/#easeInExpo>
    pub fn in_expo() -> Ease {
        Ease::new("easeInExpo", "cubic-bezier(0.7, 0, 0.84, 0)", in_expo)
    }

    /// <https://easings.net/#easeOutExpo>
    pub fn out_expo() -> Ease {
        Ease::new("easeOutExpo", "cubic-bezier(0.16, 1, 0.3, 1)", out_expo)
    }

    /// <https://easings.net/#easeInOutExpo>
    pub fn in_out_expo() -> Ease {
        Ease::new("easeInOutExpo", "cubic-bezier(0.87, 0, 0.13, 1)", in_out_expo)
    }

    /// <https://easings.net/#easeInCirc>
    pub fn in_circ() -> Ease {
        Ease::new("easeInCirc", "cubic-bezier(0.55, 0, 1, 0.45)", in_circ)
    }

    /// <https://easings.net/#easeOutCirc>
    pub fn out_circ() -> Ease {
        Ease::new("easeOutCirc", "cubic-bezier(0, 0.55, 0.45, 1)", out_circ)
    }

    /// <https://easings.net/#easeInOutCirc>
    pub fn in_out_circ() -> Ease {
        Ease::new("easeInOutCirc", "cubic-bezier(0.85, 0, 0.15, 1)", in_out_circ)
    }

    /// <https://easings.net/#easeInBack>
    pub fn in_back() -> Ease {
        Ease::new("easeInBack", "cubic-bezier(0.36, 0, 0.66, -0.56)", in_back)
    }

    /// <https://easings.net/#easeOutBack>
    pub fn out_back() -> Ease {
        Ease::new("easeOutBack", "cubic-bezier(0.34, 1.56, 0.64, 1)", out_back)
    }

    /// <https://easings.net/#easeInOutBack>
    pub fn in_out_back() -> Ease {
        Ease::new("easeInOutBack", "cubic-bezier(0.68, -0.6, 0.32, 1.6)", in_out_back)
    }

    /// <https://easings.net/#easeInElastic>
    pub fn in_elastic() -> Ease {
        Ease::new("easeInElastic", "", in_elastic)
    }

    /// <https://easings.net/#easeOutElastic>
    pub fn out_elastic() -> Ease {
        Ease::new("easeOutElastic", "", out_elastic)
    }

    /// <https://easings.net/#easeInOutElastic>
    pub fn in_out_elastic() -> Ease {
        Ease::new("easeInOutElastic", "", in_out_elastic)
    }

    /// <https://easings.net/#easeInBounce>
    pub fn in_bounce() -> Ease {
        Ease::new("easeInBounce", "", in_bounce)
    }

    /// <https://easings.net/#easeOutBounce>
    pub fn out_bounce() -> Ease {
        Ease::new("easeOutBounce", "", out_bounce)
    }

    /// <https://easings.net/#easeInOutBounce>
    pub fn in_out_bounce() -> Ease {
        Ease::new("easeInOutBounce", "", in_out_bounce)
    }

    /// Resolve a curve by its `easeXxx` identifier.
    ///
    /// Returns a fresh instance on every lookup, like the accessors.
    pub fn by_name(name: &str) -> Option<Ease> {
        let ease = match name {
            "easeInSine" => Self::in_sine(),
            "easeOutSine" => Self::out_sine(),
            "easeInOutSine" => Self::in_out_sine(),
            "easeInQuad" => Self::in_quad(),
            "easeOutQuad" => Self::out_quad(),
            "easeInOutQuad" => Self::in_out_quad(),
            "easeInCubic" => Self::in_cubic(),
            "easeOutCubic" => Self::out_cubic(),
            "easeInOutCubic" => Self::in_out_cubic(),
            "easeInQuart" => Self::in_quart(),
            "easeOutQuart" => Self::out_quart(),
            "easeInOutQuart" => Self::in_out_quart(),
            "easeInQuint" => Self::in_quint(),
            "easeOutQuint" => Self::out_quint(),
            "easeInOutQuint" => Self::in_out_quint(),
            "easeInExpo" => Self::in_expo(),
            "easeOutExpo" => Self::out_expo(),
            "easeInOutExpo" => Self::in_out_expo(),
            "easeInCirc" => Self::in_circ(),
            "easeOutCirc" => Self::out_circ(),
            "easeInOutCirc" => Self::in_out_circ(),
            "easeInBack" => Self::in_back(),
            "easeOutBack" => Self::out_back(),
            "easeInOutBack" => Self::in_out_back(),
            "easeInElastic" => Self::in_elastic(),
            "easeOutElastic" => Self::out_elastic(),
            "easeInOutElastic" => Self::in_out_elastic(),
            "easeInBounce" => Self::in_bounce(),
            "easeOutBounce" => Self::out_bounce(),
            "easeInOutBounce" => Self::in_out_bounce(),
            _ => return None,
        };
        Some(ease)
    }

    /// All 30 catalog identifiers, in family order
    pub fn names() -> [&'static str; 30] {
        [
            "easeInSine",
            "easeOutSine",
            "easeInOutSine",
            "easeInQuad",
            "easeOutQuad",
            "easeInOutQuad",
            "easeInCubic",
            "easeOutCubic",
            "easeInOutCubic",
            "easeInQuart",
            "easeOutQuart",
            "easeInOutQuart",
            "easeInQuint",
            "easeOutQuint",
            "easeInOutQuint",
            "easeInExpo",
            "easeOutExpo",
            "easeInOutExpo",
            "easeInCirc",
            "easeOutCirc",
            "easeInOutCirc",
            "easeInBack",
            "easeOutBack",
            "easeInOutBack",
            "easeInElastic",
            "easeOutElastic",
            "easeInOutElastic",
            "easeInBounce",
            "easeOutBounce",
            "easeInOutBounce",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_all_curves_hit_endpoints() {
        for name in Easing::names() {
            let ease = Easing::by_name(name).expect(name);
            assert!(
                ease.compute(0.0).abs() < EPS,
                "{name} must start at 0, got {}",
                ease.compute(0.0)
            );
            assert!(
                (ease.compute(1.0) - 1.0).abs() < EPS,
                "{name} must end at 1, got {}",
                ease.compute(1.0)
            );
        }
    }

    #[test]
    fn test_by_name_rejects_unknown_curves() {
        assert!(Easing::by_name("easeInOutWobble").is_none());
        assert!(Easing::by_name("").is_none());
    }

    #[test]
    fn test_accessors_return_fresh_instances() {
        let mut first = Easing::out_quad();
        let second = Easing::out_quad();
        assert_eq!(first.name(), second.name());

        // Listeners registered on one instance never leak to another
        first.signal_mut().listen(EaseEvent::Change, |_| {});
        assert_eq!(first.signal().listener_count(EaseEvent::Change), 1);
        assert_eq!(second.signal().listener_count(EaseEvent::Change), 0);
    }

    #[test]
    fn test_compute_publishes_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut ease = Easing::in_quad();
        let sink = seen.clone();
        ease.signal_mut()
            .listen(EaseEvent::Change, move |value| sink.lock().unwrap().push(*value));

        let result = ease.compute(0.5);
        assert!((result - 0.25).abs() < EPS);
        assert_eq!(*seen.lock().unwrap(), vec![0.25]);
    }

    #[test]
    fn test_out_bounce_is_continuous_at_segment_boundaries() {
        let ease = Easing::out_bounce();
        for boundary in [1.0 / D1, 2.0 / D1, 2.5 / D1] {
            let below = ease.compute(boundary - 1e-9);
            let above = ease.compute(boundary + 1e-9);
            assert!(
                (below - above).abs() < 1e-6,
                "discontinuity at {boundary}: {below} vs {above}"
            );
        }
    }

    #[test]
    fn test_in_bounce_mirrors_out_bounce() {
        let in_b = Easing::in_bounce();
        let out_b = Easing::out_bounce();
        for i in 0..=100 {
            let x = i as f64 / 100.0;
            let mirrored = 1.0 - out_b.compute(1.0 - x);
            assert!(
                (in_b.compute(x) - mirrored).abs() < EPS,
                "mirror identity broken at x={x}"
            );
        }
    }

    #[test]
    fn test_back_and_elastic_overshoot() {
        // Back eases below zero early on, elastic rings past one near the end
        assert!(Easing::in_back().compute(0.2) < 0.0);
        assert!(Easing::out_back().compute(0.8) > 1.0);
        assert!(Easing::out_elastic().compute(0.15) > 1.0);
    }

    #[test]
    fn test_expo_endpoints_are_exact() {
        assert_eq!(Easing::in_expo().compute(0.0), 0.0);
        assert_eq!(Easing::out_expo().compute(1.0), 1.0);
        assert_eq!(Easing::in_out_expo().compute(0.0), 0.0);
        assert_eq!(Easing::in_out_expo().compute(1.0), 1.0);
        assert_eq!(Easing::in_elastic().compute(0.0), 0.0);
        assert_eq!(Easing::out_elastic().compute(1.0), 1.0);
    }

    #[test]
    fn test_in_out_sine_midpoint() {
        assert!((Easing::in_out_sine().compute(0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_bezier_descriptors() {
        assert_eq!(Easing::in_out_quad().cubic_bezier(), "cubic-bezier(0.45, 0, 0.55, 1)");
        // Elastic and bounce are not bezier-approximable
        assert_eq!(Easing::out_elastic().cubic_bezier(), "");
        assert_eq!(Easing::in_out_bounce().cubic_bezier(), "");
    }
}
