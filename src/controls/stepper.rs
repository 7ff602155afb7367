//! Bounded numeric stepper
//!
//! One parameterised control replaces the dozens of hand-written +/- widgets
//! the panel needs. Each instance is described by a `StepperSpec`
//! (key, bounds, step, display transform) from the static schema.
//!
//! # Read-clamp-write-render
//!
//! Every press reads the store once before it writes, writes exactly once and
//! reads once more to redisplay:
//!
//! 1. Read the raw value; empty or malformed values coerce to `0`
//! 2. Step and clamp into `[min, max]`
//! 3. Write the clamped value back, even when it did not change
//! 4. Re-read and re-render the label from the store
//!
//! The control never keeps a value that could drift from the store; the
//! label is always a pure function of the stored raw value.

use crate::params::{SharedParams, parse_int};
use std::fmt::Write as _;
use tracing::debug;

/// How a stored raw integer is shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTransform {
    /// The integer itself
    Raw,
    /// Fixed-point value, `raw * 10^-decimals`
    Fixed {
        /// Number of decimal places the raw value carries
        decimals: u32,
    },
    /// Enumerated choice; raw value indexes the label list
    Labels(&'static [&'static str]),
    /// The integer itself, except for a few named values
    RawWithNames(&'static [(i32, &'static str)]),
}

impl DisplayTransform {
    /// Render a raw value
    pub fn render(self, raw: i32) -> String {
        match self {
            Self::Raw => raw.to_string(),
            Self::Fixed { decimals } => format_fixed(raw, decimals),
            Self::Labels(labels) => choice_label(labels, raw)
                .map_or_else(|| raw.to_string(), str::to_string),
            Self::RawWithNames(names) => names
                .iter()
                .find(|(value, _)| *value == raw)
                .map_or_else(|| raw.to_string(), |(_, name)| (*name).to_string()),
        }
    }
}

/// Total label lookup for enumerated controls
///
/// Values at or below zero map to the first label and values at or above
/// `N-1` map to the last one, so corrupted stored values still show a valid
/// label. Returns `None` only for an empty list.
pub fn choice_label(labels: &[&'static str], raw: i32) -> Option<&'static str> {
    let last = labels.len().checked_sub(1)?;
    let index = usize::try_from(raw).map_or(0, |i| i.min(last));
    Some(labels[index])
}

/// Format `raw * 10^-decimals` exactly, dropping trailing zeros
///
/// `150` with 2 decimals is `"1.5"`, `-50` with 1 decimal is `"-5"`.
pub fn format_fixed(raw: i32, decimals: u32) -> String {
    if decimals == 0 {
        return raw.to_string();
    }

    let divisor = 10_i64.pow(decimals);
    let value = i64::from(raw);
    let int_part = (value / divisor).abs();
    let frac_part = (value % divisor).abs();

    let mut out = String::new();
    if value < 0 {
        out.push('-');
    }
    let _ = write!(out, "{int_part}");

    if frac_part != 0 {
        let width = decimals as usize;
        let frac = format!("{frac_part:0width$}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// Static description of one stepper instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperSpec {
    /// Parameter key the control binds to
    pub key: &'static str,
    /// Row title
    pub title: &'static str,
    /// Longer help text
    pub description: &'static str,
    /// Inclusive lower bound
    pub min: i32,
    /// Inclusive upper bound
    pub max: i32,
    /// Increment/decrement granularity
    pub step: i32,
    /// How the raw value is displayed
    pub display: DisplayTransform,
}

impl StepperSpec {
    /// Numeric stepper shown as the raw integer
    pub const fn raw(
        key: &'static str,
        title: &'static str,
        description: &'static str,
        min: i32,
        max: i32,
        step: i32,
    ) -> Self {
        Self {
            key,
            title,
            description,
            min,
            max,
            step,
            display: DisplayTransform::Raw,
        }
    }

    /// Numeric stepper shown as a fixed-point decimal
    pub const fn fixed(
        key: &'static str,
        title: &'static str,
        description: &'static str,
        min: i32,
        max: i32,
        step: i32,
        decimals: u32,
    ) -> Self {
        Self {
            key,
            title,
            description,
            min,
            max,
            step,
            display: DisplayTransform::Fixed { decimals },
        }
    }

    /// Enumerated choice over `labels`, range `[0, N-1]`, step 1
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)] // label lists are tiny
    pub const fn choice(
        key: &'static str,
        title: &'static str,
        description: &'static str,
        labels: &'static [&'static str],
    ) -> Self {
        let max = if labels.is_empty() {
            0
        } else {
            labels.len() as i32 - 1
        };
        Self {
            key,
            title,
            description,
            min: 0,
            max,
            step: 1,
            display: DisplayTransform::Labels(labels),
        }
    }

    /// Replace the display transform
    pub const fn with_display(mut self, display: DisplayTransform) -> Self {
        self.display = display;
        self
    }

    /// Clamp a value into `[min, max]`
    pub fn clamp(&self, value: i32) -> i32 {
        value.max(self.min).min(self.max)
    }

    /// Value one step below `current`, clamped
    pub fn decremented(&self, current: i32) -> i32 {
        self.clamp(current.saturating_sub(self.step))
    }

    /// Value one step above `current`, clamped
    pub fn incremented(&self, current: i32) -> i32 {
        self.clamp(current.saturating_add(self.step))
    }
}

/// Live stepper bound to a parameter store
pub struct Stepper {
    spec: StepperSpec,
    params: SharedParams,
    label: String,
}

impl Stepper {
    /// Build the control and render its initial label
    pub fn new(spec: StepperSpec, params: SharedParams) -> Self {
        let mut stepper = Self {
            spec,
            params,
            label: String::new(),
        };
        stepper.render();
        stepper
    }

    /// Descriptor this control was built from
    pub fn spec(&self) -> &StepperSpec {
        &self.spec
    }

    /// Currently displayed label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stored raw value, coerced to `0` when unset or malformed
    pub fn raw(&self) -> i32 {
        parse_int(&self.params.get(self.spec.key))
    }

    /// Step down by `step`, never below `min`
    pub fn decrement(&mut self) {
        let current = self.raw();
        let next = self.spec.decremented(current);
        self.write(current, next);
    }

    /// Step up by `step`, never above `max`
    pub fn increment(&mut self) {
        let current = self.raw();
        let next = self.spec.incremented(current);
        self.write(current, next);
    }

    /// Recompute the label from the stored value
    pub fn render(&mut self) {
        self.label = self.spec.display.render(self.raw());
    }

    fn write(&mut self, current: i32, next: i32) {
        debug!("{}: {} -> {}", self.spec.key, current, next);
        self.params.put(self.spec.key, &next.to_string());
        self.render();
    }
}

impl std::fmt::Debug for Stepper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stepper")
            .field("key", &self.spec.key)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{MemoryParamStore, ParamStore};
    use std::sync::Arc;

    const SHUTDOWN_LABELS: &[&str] = &[
        "Always On", "Instant", "30s", "1m", "3m", "5m", "10m", "30m", "1h", "3h", "5h",
    ];

    fn store_with(pairs: &[(&'static str, &'static str)]) -> Arc<MemoryParamStore> {
        Arc::new(MemoryParamStore::with_values(pairs.iter().copied()))
    }

    #[test]
    fn fixed_format_examples() {
        assert_eq!(format_fixed(150, 2), "1.5");
        assert_eq!(format_fixed(-50, 1), "-5");
        assert_eq!(format_fixed(-5, 1), "-0.5");
        assert_eq!(format_fixed(0, 3), "0");
        assert_eq!(format_fixed(5, 5), "0.00005");
        assert_eq!(format_fixed(-300, 3), "-0.3");
        assert_eq!(format_fixed(42, 0), "42");
    }

    #[test]
    fn scaled_render_from_store() {
        let store = store_with(&[("SteerActuatorDelayAdj", "150")]);
        let spec = StepperSpec::fixed("SteerActuatorDelayAdj", "Delay", "", 0, 200, 1, 2);
        let stepper = Stepper::new(spec, store);
        assert_eq!(stepper.label(), "1.5");
    }

    #[test]
    fn choice_label_is_total() {
        let labels = &["PID", "INDI", "LQR"];
        assert_eq!(choice_label(labels, -4), Some("PID"));
        assert_eq!(choice_label(labels, 0), Some("PID"));
        assert_eq!(choice_label(labels, 1), Some("INDI"));
        assert_eq!(choice_label(labels, 2), Some("LQR"));
        assert_eq!(choice_label(labels, 99), Some("LQR"));
        assert_eq!(choice_label(&[], 1), None);
    }

    #[test]
    fn choice_spec_bounds() {
        let spec = StepperSpec::choice("OpkrAutoShutdown", "Auto shutdown", "", SHUTDOWN_LABELS);
        assert_eq!(spec.min, 0);
        assert_eq!(spec.max, 10);
        assert_eq!(spec.step, 1);
    }

    #[test]
    fn unset_key_renders_zero_state() {
        let store = store_with(&[]);
        let spec = StepperSpec::choice("OpkrAutoShutdown", "Auto shutdown", "", SHUTDOWN_LABELS);
        let stepper = Stepper::new(spec, store);
        assert_eq!(stepper.label(), "Always On");
    }

    #[test]
    fn increment_clamps_at_max() {
        let store = store_with(&[]);
        let spec = StepperSpec::choice("OpkrAutoShutdown", "Auto shutdown", "", SHUTDOWN_LABELS);
        let mut stepper = Stepper::new(spec, store.clone());

        for _ in 0..12 {
            stepper.increment();
        }

        assert_eq!(store.get("OpkrAutoShutdown"), "10");
        assert_eq!(stepper.label(), "5h");
    }

    #[test]
    fn choice_floor_and_corrupt_ceiling() {
        let labels: &'static [&'static str] = &["PID", "INDI", "LQR"];
        let store = store_with(&[]);
        let spec = StepperSpec::choice("LateralControlMethod", "Lateral control", "", labels);
        let mut stepper = Stepper::new(spec, store.clone());

        stepper.decrement();
        stepper.decrement();
        assert_eq!(store.get("LateralControlMethod"), "0");
        assert_eq!(stepper.label(), "PID");

        store.put("LateralControlMethod", "7");
        stepper.render();
        assert_eq!(stepper.label(), "LQR");

        stepper.increment();
        assert_eq!(store.get("LateralControlMethod"), "2");
        assert_eq!(stepper.label(), "LQR");
    }

    #[test]
    fn decrement_at_min_still_writes() {
        let store = store_with(&[("OpkrBatteryChargingMin", "10")]);
        let spec = StepperSpec::raw("OpkrBatteryChargingMin", "Min", "", 10, 90, 1);
        let mut stepper = Stepper::new(spec, store.clone());

        let writes = store.write_count();
        for _ in 0..5 {
            stepper.decrement();
        }

        assert_eq!(store.write_count(), writes + 5);
        assert_eq!(store.get("OpkrBatteryChargingMin"), "10");
        assert_eq!(stepper.label(), "10");
    }

    #[test]
    fn malformed_value_coerces_to_zero_before_clamp() {
        let store = store_with(&[("OpkrLaneChangeSpeed", "fast")]);
        let spec = StepperSpec::raw("OpkrLaneChangeSpeed", "Speed", "", 30, 160, 5);
        let mut stepper = Stepper::new(spec, store.clone());

        stepper.increment();
        // 0 + 5 clamps up to the floor
        assert_eq!(store.get("OpkrLaneChangeSpeed"), "30");
    }

    #[test]
    fn out_of_range_value_is_pulled_into_range() {
        let store = store_with(&[("MaxRateUp", "40")]);
        let spec = StepperSpec::raw("MaxRateUp", "MAX_RATE_UP", "", 3, 7, 1);
        let mut stepper = Stepper::new(spec, store.clone());
        assert_eq!(stepper.label(), "40");

        stepper.decrement();
        assert_eq!(store.get("MaxRateUp"), "7");
    }

    #[test]
    fn named_values_render() {
        let names: &'static [(i32, &'static str)] = &[(0, "Default"), (-10, "Mute")];
        let store = store_with(&[("OpkrUIVolumeBoost", "0")]);
        let spec = StepperSpec::raw("OpkrUIVolumeBoost", "Volume", "", -10, 100, 10)
            .with_display(DisplayTransform::RawWithNames(names));
        let mut stepper = Stepper::new(spec, store);

        assert_eq!(stepper.label(), "Default");
        stepper.decrement();
        assert_eq!(stepper.label(), "Mute");
        stepper.increment();
        stepper.increment();
        assert_eq!(stepper.label(), "10");
    }

    #[test]
    fn each_press_writes_once_and_rereads_for_display() {
        let store = store_with(&[("PidKp", "25")]);
        let spec = StepperSpec::fixed("PidKp", "Kp", "", 1, 50, 1, 2);
        let mut stepper = Stepper::new(spec, store.clone());

        let reads = store.read_count();
        let writes = store.write_count();
        stepper.increment();
        assert_eq!(store.write_count(), writes + 1);
        assert_eq!(store.read_count(), reads + 2);
        assert_eq!(stepper.label(), "0.26");
    }

    #[test]
    fn render_picks_up_external_writes() {
        let store = store_with(&[("CameraOffsetAdj", "60")]);
        let spec = StepperSpec::fixed("CameraOffsetAdj", "CameraOffset", "", -300, 300, 5, 3);
        let mut stepper = Stepper::new(spec, store.clone());
        assert_eq!(stepper.label(), "0.06");

        store.put("CameraOffsetAdj", "-120");
        stepper.render();
        assert_eq!(stepper.label(), "-0.12");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone, Copy)]
        enum Press {
            Up,
            Down,
        }

        fn press() -> impl Strategy<Value = Press> {
            prop_oneof![Just(Press::Up), Just(Press::Down)]
        }

        proptest! {
            /// Property: any press sequence from any starting value stays within bounds
            #[test]
            fn presses_stay_in_bounds(
                start in prop_oneof![
                    any::<i32>().prop_map(|v| v.to_string()),
                    "[a-z ]{0,6}",
                ],
                min in -500i32..500,
                span in 0i32..1000,
                step in 1i32..60,
                presses in prop::collection::vec(press(), 1..40),
            ) {
                let max = min + span;
                let store = Arc::new(MemoryParamStore::new());
                store.put("Value", &start);
                let spec = StepperSpec::raw("Value", "Value", "", min, max, step);
                let mut stepper = Stepper::new(spec, store.clone());

                for p in presses {
                    match p {
                        Press::Up => stepper.increment(),
                        Press::Down => stepper.decrement(),
                    }
                    let stored = parse_int(&store.get("Value"));
                    prop_assert!(stored >= min && stored <= max);
                    prop_assert_eq!(stepper.label(), stored.to_string());
                }
            }

            /// Property: extra decrements at the floor leave the floor in place
            #[test]
            fn floor_is_idempotent(min in -100i32..100, extra in 1usize..20) {
                let store = Arc::new(MemoryParamStore::new());
                store.put("Value", &min.to_string());
                let spec = StepperSpec::raw("Value", "Value", "", min, min + 50, 3);
                let mut stepper = Stepper::new(spec, store.clone());

                for _ in 0..extra {
                    stepper.decrement();
                }
                prop_assert_eq!(parse_int(&store.get("Value")), min);
                prop_assert_eq!(stepper.label(), min.to_string());
            }

            /// Property: enumerated labels always come from the list
            #[test]
            fn choice_always_yields_a_label(raw in any::<i32>()) {
                let label = DisplayTransform::Labels(SHUTDOWN_LABELS).render(raw);
                prop_assert!(SHUTDOWN_LABELS.contains(&label.as_str()));
            }
        }
    }
}
