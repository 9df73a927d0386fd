//! Declarative page model.
//!
//! A `PageSpec` is the single input document for the player: hero copy, the
//! workflow section with its ordered steps, the counters section, and the
//! closing copy. All numeric configuration is parsed leniently. A value
//! that is missing, non-numeric, or non-positive silently falls back to its
//! documented default, so misconfiguration can degrade an animation but
//! never halt the page.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Default duration of a workflow step in milliseconds.
pub const DEFAULT_STEP_DURATION_MS: u64 = 2500;

/// Default duration of a counter tween in milliseconds.
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2000;

/// Top-level page document.
///
/// Every section is optional; an absent section simply renders nothing and
/// its animation never triggers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSpec {
    /// Page title shown in the frame border.
    #[serde(default)]
    pub title: String,
    /// Leading hero copy.
    #[serde(default)]
    pub hero: Option<HeroSpec>,
    /// The animated workflow section.
    #[serde(default)]
    pub workflow: Option<WorkflowSectionSpec>,
    /// The animated counters section.
    #[serde(default)]
    pub counters: Option<CountersSectionSpec>,
    /// Closing copy at the bottom of the page.
    #[serde(default)]
    pub closing: Option<ClosingSpec>,
}

/// Static hero copy at the top of the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroSpec {
    /// Large headline line.
    #[serde(default)]
    pub headline: String,
    /// Secondary tagline under the headline.
    #[serde(default)]
    pub tagline: String,
    /// Additional body lines.
    #[serde(default)]
    pub lines: Vec<String>,
}

/// The workflow section: an ordered step sequence played against a
/// progress bar once the section scrolls into view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowSectionSpec {
    /// Section heading.
    #[serde(default)]
    pub heading: String,
    /// Whether the animation restarts after completing while visible.
    #[serde(default, rename = "loop")]
    pub loop_enabled: bool,
    /// Ordered steps; sequence order is significant.
    #[serde(default)]
    pub steps: Vec<StepSpec>,
}

/// One labeled stage in the workflow sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepSpec {
    /// Step title (e.g., "Connect").
    #[serde(default)]
    pub title: String,
    /// Optional one-line description rendered under the title.
    #[serde(default)]
    pub detail: Option<String>,
    /// How long the step stays active, in milliseconds. Lenient: invalid
    /// or missing values fall back to [`DEFAULT_STEP_DURATION_MS`].
    #[serde(
        default = "default_step_duration",
        deserialize_with = "de_step_duration"
    )]
    pub duration_ms: u64,
}

impl Default for StepSpec {
    fn default() -> Self {
        Self {
            title: String::new(),
            detail: None,
            duration_ms: DEFAULT_STEP_DURATION_MS,
        }
    }
}

/// The counters section: numeric displays tweened from zero to a target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountersSectionSpec {
    /// Section heading.
    #[serde(default)]
    pub heading: String,
    /// The counters, rendered side by side.
    #[serde(default)]
    pub counters: Vec<CounterSpec>,
}

/// One numeric display in the counters section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterSpec {
    /// Caption rendered under the number.
    #[serde(default)]
    pub label: String,
    /// Final value the display reaches. Lenient: defaults to 0.
    #[serde(default, deserialize_with = "de_target")]
    pub target: f64,
    /// Text placed before the number (e.g., "$").
    #[serde(default)]
    pub prefix: String,
    /// Text placed after the number (e.g., "%", "+").
    #[serde(default)]
    pub suffix: String,
    /// Tween duration in milliseconds. Lenient: invalid or missing values
    /// fall back to [`DEFAULT_COUNTER_DURATION_MS`].
    #[serde(
        default = "default_counter_duration",
        deserialize_with = "de_counter_duration"
    )]
    pub duration_ms: u64,
    /// Decimal places in the formatted value. Lenient: defaults to 0.
    #[serde(default, deserialize_with = "de_decimal_places")]
    pub decimal_places: u8,
}

impl Default for CounterSpec {
    fn default() -> Self {
        Self {
            label: String::new(),
            target: 0.0,
            prefix: String::new(),
            suffix: String::new(),
            duration_ms: DEFAULT_COUNTER_DURATION_MS,
            decimal_places: 0,
        }
    }
}

/// Closing copy rendered at the bottom of the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClosingSpec {
    /// Section heading.
    #[serde(default)]
    pub heading: String,
    /// Body lines.
    #[serde(default)]
    pub lines: Vec<String>,
}

fn default_step_duration() -> u64 {
    DEFAULT_STEP_DURATION_MS
}

fn default_counter_duration() -> u64 {
    DEFAULT_COUNTER_DURATION_MS
}

/// Coerces a loosely typed value into a positive millisecond count.
///
/// Accepts integers, floats with an integral positive value, and numeric
/// strings. Anything else yields `None` so the caller can substitute the
/// documented default.
fn positive_ms(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f > 0.0).map(|f| f as u64))
            .filter(|ms| *ms > 0),
        Value::String(s) => s.trim().parse::<u64>().ok().filter(|ms| *ms > 0),
        _ => None,
    }
}

fn de_step_duration<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(positive_ms(&value).unwrap_or(DEFAULT_STEP_DURATION_MS))
}

fn de_counter_duration<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(positive_ms(&value).unwrap_or(DEFAULT_COUNTER_DURATION_MS))
}

fn de_target<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let target = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(target.unwrap_or(0.0))
}

fn de_decimal_places<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let places = match &value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(places.map(|p| p.min(u8::MAX as u64) as u8).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_duration_defaults_when_absent() {
        let step: StepSpec = serde_yaml::from_str("title: Connect").expect("deserialize StepSpec");
        assert_eq!(step.title, "Connect");
        assert_eq!(step.duration_ms, DEFAULT_STEP_DURATION_MS);
        assert!(step.detail.is_none());
    }

    #[test]
    fn step_duration_recovers_from_garbage() {
        for doc in [
            "title: A\nduration_ms: fast",
            "title: A\nduration_ms: -200",
            "title: A\nduration_ms: 0",
            "title: A\nduration_ms: [1, 2]",
        ] {
            let step: StepSpec = serde_yaml::from_str(doc).expect("deserialize StepSpec");
            assert_eq!(step.duration_ms, DEFAULT_STEP_DURATION_MS, "doc: {doc}");
        }
    }

    #[test]
    fn step_duration_accepts_numeric_strings() {
        let step: StepSpec =
            serde_yaml::from_str("title: A\nduration_ms: \"1800\"").expect("deserialize StepSpec");
        assert_eq!(step.duration_ms, 1800);
    }

    #[test]
    fn counter_defaults() {
        let counter: CounterSpec =
            serde_yaml::from_str("label: Uptime").expect("deserialize CounterSpec");
        assert_eq!(counter.target, 0.0);
        assert_eq!(counter.duration_ms, DEFAULT_COUNTER_DURATION_MS);
        assert_eq!(counter.decimal_places, 0);
        assert_eq!(counter.prefix, "");
        assert_eq!(counter.suffix, "");
    }

    #[test]
    fn counter_lenient_fields() {
        let counter: CounterSpec = serde_yaml::from_str(
            "label: Saved\ntarget: \"1000\"\nprefix: \"$\"\nduration_ms: oops\ndecimal_places: \"2\"",
        )
        .expect("deserialize CounterSpec");
        assert_eq!(counter.target, 1000.0);
        assert_eq!(counter.prefix, "$");
        assert_eq!(counter.duration_ms, DEFAULT_COUNTER_DURATION_MS);
        assert_eq!(counter.decimal_places, 2);
    }

    #[test]
    fn workflow_loop_flag_defaults_off() {
        let section: WorkflowSectionSpec =
            serde_yaml::from_str("heading: How it works\nsteps: []").expect("deserialize section");
        assert!(!section.loop_enabled);
        assert!(section.steps.is_empty());
    }

    #[test]
    fn page_sections_are_optional() {
        let page: PageSpec = serde_yaml::from_str("title: Marquee").expect("deserialize PageSpec");
        assert_eq!(page.title, "Marquee");
        assert!(page.hero.is_none());
        assert!(page.workflow.is_none());
        assert!(page.counters.is_none());
        assert!(page.closing.is_none());
    }

    #[test]
    fn full_page_round_trip() {
        let doc = r#"
title: Marquee
workflow:
  heading: How it works
  loop: true
  steps:
    - title: Connect
      duration_ms: 1000
    - title: Model
      duration_ms: 2000
counters:
  heading: By the numbers
  counters:
    - label: Saved
      target: 1000
      prefix: "$"
"#;
        let page: PageSpec = serde_yaml::from_str(doc).expect("deserialize PageSpec");
        let workflow = page.workflow.as_ref().expect("workflow section");
        assert!(workflow.loop_enabled);
        assert_eq!(workflow.steps.len(), 2);
        assert_eq!(workflow.steps[1].duration_ms, 2000);
        let counters = page.counters.as_ref().expect("counters section");
        assert_eq!(counters.counters[0].prefix, "$");
    }
}
