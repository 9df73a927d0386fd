//! Counter tweens for the value-proposition section.
//!
//! Each counter animates its displayed number from zero to a declared
//! target over a declared duration along an ease-out-quartic curve. The
//! whole group is gated by a single "already animated" flag: the first
//! trigger starts every counter, later triggers are ignored, and there is
//! no cancellation path once a tween has started.

use tracing::debug;

use marquee_types::CounterSpec;

use crate::easing::{ease_out_quart, progress_ratio};

/// A single counter's tween state plus its declared presentation.
#[derive(Debug, Clone)]
pub struct CounterTween {
    spec: CounterSpec,
    started_at_ms: Option<u64>,
    /// Last eased value, kept so the display never moves backwards.
    value: f64,
    done: bool,
}

impl CounterTween {
    fn new(spec: CounterSpec) -> Self {
        Self {
            spec,
            started_at_ms: None,
            value: 0.0,
            done: false,
        }
    }

    /// Declared presentation for this counter.
    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    /// Formats the current value as `prefix + value + suffix` with the
    /// declared number of decimal places.
    pub fn display(&self) -> String {
        format!(
            "{}{:.*}{}",
            self.spec.prefix, self.spec.decimal_places as usize, self.value, self.spec.suffix
        )
    }

    fn advance(&mut self, now_ms: u64, reduced_motion: bool) -> bool {
        let Some(started_at) = self.started_at_ms else {
            return false;
        };
        if self.done {
            return false;
        }
        let elapsed = now_ms.saturating_sub(started_at);
        let p = if reduced_motion {
            // Reduced motion keeps the redraw cadence but skips the curve.
            1.0
        } else {
            progress_ratio(elapsed, self.spec.duration_ms)
        };
        let next = self.spec.target * ease_out_quart(p);
        let changed = (next - self.value).abs() > f64::EPSILON;
        self.value = next;
        if p >= 1.0 {
            self.done = true;
            self.value = self.spec.target;
        }
        changed || self.done
    }
}

/// The counter section's animator: independent tweens behind one gate.
#[derive(Debug, Default)]
pub struct CounterGroup {
    tweens: Vec<CounterTween>,
    has_animated: bool,
    reduced_motion: bool,
}

impl CounterGroup {
    /// Builds a group from the declared counters.
    pub fn new(specs: Vec<CounterSpec>, reduced_motion: bool) -> Self {
        Self {
            tweens: specs.into_iter().map(CounterTween::new).collect(),
            has_animated: false,
            reduced_motion,
        }
    }

    /// The tweens, in declaration order.
    pub fn counters(&self) -> &[CounterTween] {
        &self.tweens
    }

    /// Whether the one-shot trigger already fired this session.
    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    /// Whether any tween still has frames left to draw.
    pub fn is_animating(&self) -> bool {
        self.has_animated && self.tweens.iter().any(|t| !t.done)
    }

    /// Starts every counter. Gated: only the first call per session has any
    /// effect, no matter how often the section re-enters view.
    pub fn trigger(&mut self, now_ms: u64) {
        if self.has_animated {
            return;
        }
        self.has_animated = true;
        debug!(counters = self.tweens.len(), "counter animation triggered");
        for tween in &mut self.tweens {
            tween.started_at_ms = Some(now_ms);
        }
    }

    /// Advances all running tweens to `now_ms`. Returns `true` when any
    /// displayed value changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let reduced_motion = self.reduced_motion;
        let mut changed = false;
        for tween in &mut self.tweens {
            changed |= tween.advance(now_ms, reduced_motion);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollar_counter() -> CounterSpec {
        CounterSpec {
            label: "Saved".into(),
            target: 1000.0,
            prefix: "$".into(),
            suffix: String::new(),
            duration_ms: 2000,
            decimal_places: 0,
        }
    }

    #[test]
    fn displays_zero_before_trigger_and_at_start() {
        let mut group = CounterGroup::new(vec![dollar_counter()], false);
        assert_eq!(group.counters()[0].display(), "$0");
        group.trigger(5000);
        group.tick(5000);
        assert_eq!(group.counters()[0].display(), "$0");
    }

    #[test]
    fn reaches_exact_target_at_duration() {
        let mut group = CounterGroup::new(vec![dollar_counter()], false);
        group.trigger(0);
        group.tick(2000);
        assert_eq!(group.counters()[0].display(), "$1000");
        assert!(!group.is_animating());
        // Ticks past the end keep the terminal value.
        group.tick(10_000);
        assert_eq!(group.counters()[0].display(), "$1000");
    }

    #[test]
    fn values_follow_ease_out_quart_and_never_regress() {
        let mut group = CounterGroup::new(vec![dollar_counter()], false);
        group.trigger(0);
        let mut previous = 0.0;
        for now in (0..=2000).step_by(100) {
            group.tick(now);
            let value = group.counters()[0].value;
            let expected = 1000.0 * crate::ease_out_quart(now as f64 / 2000.0);
            assert!((value - expected).abs() < 1e-9, "at {now}ms");
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn reduced_motion_jumps_to_target_on_first_frame() {
        let mut group = CounterGroup::new(vec![dollar_counter()], true);
        group.trigger(0);
        group.tick(16);
        assert_eq!(group.counters()[0].display(), "$1000");
        assert!(!group.is_animating());
    }

    #[test]
    fn trigger_is_once_per_session() {
        let mut group = CounterGroup::new(vec![dollar_counter()], false);
        group.trigger(0);
        group.tick(1000);
        let mid = group.counters()[0].value;
        assert!(mid > 0.0 && mid < 1000.0);

        // A second trigger must not restart the tween from zero.
        group.trigger(1000);
        group.tick(1100);
        assert!(group.counters()[0].value > mid);
        assert!(group.has_animated());
    }

    #[test]
    fn formatting_applies_prefix_suffix_and_decimals() {
        let spec = CounterSpec {
            label: "Uptime".into(),
            target: 99.95,
            prefix: String::new(),
            suffix: "%".into(),
            duration_ms: 1000,
            decimal_places: 2,
        };
        let mut group = CounterGroup::new(vec![spec], false);
        group.trigger(0);
        group.tick(1000);
        assert_eq!(group.counters()[0].display(), "99.95%");
    }

    #[test]
    fn counters_run_independently_per_duration() {
        let fast = CounterSpec {
            duration_ms: 500,
            target: 10.0,
            ..CounterSpec::default()
        };
        let slow = CounterSpec {
            duration_ms: 4000,
            target: 10.0,
            ..CounterSpec::default()
        };
        let mut group = CounterGroup::new(vec![fast, slow], false);
        group.trigger(0);
        group.tick(600);
        assert_eq!(group.counters()[0].display(), "10");
        assert!(group.counters()[1].value < 10.0);
        assert!(group.is_animating());
    }
}
