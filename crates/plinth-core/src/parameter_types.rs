//! Typed parameters with encapsulated atomic storage.
//!
//! Each parameter owns exactly one atomic slot, so the audio thread reads a
//! value with a single load while control threads write it with a single
//! store. No parameter update ever spans more than one slot.
//!
//! # Parameter Types
//!
//! - [`FloatParameter`] - Continuous float values, optionally stepped
//! - [`IntParameter`] - Discrete integer values
//! - [`BoolParameter`] - Toggle/boolean values
//! - [`ChoiceParameter`] - One option out of a fixed list of names
//!
//! Typed parameters are built from a [`ParameterInfo`] with `from_info`, which
//! checks that the declaration has the matching [`ParameterKind`].
//!
//! # The `Parameters` Trait
//!
//! Plugins group their typed parameters in a struct and implement
//! [`Parameters`] for it. The trait supplies lookup by numeric or string id
//! and state serialization on top of a single required `iter` method.
//!
//! ```ignore
//! use plinth_core::{FloatParameter, ParameterInfo, ParameterRef, Parameters};
//!
//! struct MyParameters {
//!     gain: FloatParameter,
//! }
//!
//! impl Parameters for MyParameters {
//!     fn iter(&self) -> Box<dyn Iterator<Item = &dyn ParameterRef> + '_> {
//!         Box::new(std::iter::once(&self.gain as &dyn ParameterRef))
//!     }
//! }
//! ```

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, AtomicUsize, Ordering};

use crate::error::{LayoutError, StateError};
use crate::parameter_format::Formatter;
use crate::parameter_info::{ParameterFlags, ParameterInfo, ParameterKind};
use crate::state;
use crate::types::{ParameterId, ParameterValue};

// =============================================================================
// ParameterRef - type-erased access
// =============================================================================

/// Trait for type-erased parameter access at runtime.
///
/// This allows iteration over heterogeneous parameter collections
/// and runtime lookup without knowing the concrete parameter type.
///
/// All implementations must be thread-safe (`Send + Sync`) for
/// concurrent access from audio, UI, and host threads.
pub trait ParameterRef: Send + Sync {
    /// Get the parameter metadata.
    fn info(&self) -> &ParameterInfo;

    /// Get the current value normalized to 0.0-1.0.
    fn get_normalized(&self) -> ParameterValue;

    /// Set the value from a normalized 0.0-1.0 value.
    fn set_normalized(&self, value: ParameterValue);

    /// Get the current value in plain units.
    fn get_plain(&self) -> ParameterValue;

    /// Set the value in plain units. Out-of-range values are clamped.
    fn set_plain(&self, value: ParameterValue);

    /// Format a normalized value for display.
    fn display_normalized(&self, normalized: ParameterValue) -> String;

    /// Parse a display string into a normalized value.
    fn parse(&self, s: &str) -> Option<ParameterValue>;

    /// Convert normalized to plain.
    fn normalized_to_plain(&self, normalized: ParameterValue) -> ParameterValue;

    /// Convert plain to normalized.
    fn plain_to_normalized(&self, plain: ParameterValue) -> ParameterValue;

    /// Numeric parameter id.
    fn id(&self) -> ParameterId {
        self.info().id
    }

    /// Stable string id.
    fn string_id(&self) -> &'static str {
        self.info().string_id
    }

    /// Display name.
    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Short display name.
    fn short_name(&self) -> &'static str {
        self.info().short_name
    }

    /// Behavioral flags.
    fn flags(&self) -> &ParameterFlags {
        &self.info().flags
    }

    /// Number of discrete steps. 0 = continuous.
    fn step_count(&self) -> i32 {
        self.info().step_count()
    }

    /// Default value normalized to 0.0-1.0.
    fn default_normalized(&self) -> ParameterValue {
        self.plain_to_normalized(self.info().kind.default_plain())
    }

    /// Format the current value for display.
    fn display(&self) -> String {
        self.display_normalized(self.get_normalized())
    }
}

// =============================================================================
// Parameters - collections
// =============================================================================

/// Trait for parameter collections.
///
/// Implement this trait to expose a plugin's parameters in declaration order.
/// Everything except [`iter`](Self::iter) has a default implementation.
pub trait Parameters: Send + Sync + 'static {
    /// Iterate over all parameters in declaration order.
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn ParameterRef> + '_>;

    /// Number of parameters.
    fn count(&self) -> usize {
        self.iter().count()
    }

    /// Look up a parameter by numeric id.
    fn by_id(&self, id: ParameterId) -> Option<&dyn ParameterRef> {
        self.iter().find(|parameter| parameter.id() == id)
    }

    /// Look up a parameter by string id.
    fn by_string_id(&self, string_id: &str) -> Option<&dyn ParameterRef> {
        self.iter()
            .find(|parameter| parameter.string_id() == string_id)
    }

    /// Current plain value of a parameter, or `None` for an unknown id.
    fn try_value(&self, string_id: &str) -> Option<ParameterValue> {
        self.by_string_id(string_id).map(|parameter| parameter.get_plain())
    }

    /// Current plain value of a parameter.
    ///
    /// Floats return their value, integers their value as `f64`, toggles
    /// `0.0`/`1.0` and choices their option index.
    ///
    /// # Panics
    ///
    /// Panics if no parameter has this id. Ids are fixed at build time, so an
    /// unknown id is a programming error.
    fn get_value(&self, string_id: &str) -> ParameterValue {
        match self.try_value(string_id) {
            Some(value) => value,
            None => panic!("unknown parameter id `{string_id}`"),
        }
    }

    /// Serialize all parameter values into a state blob tagged with `tag`.
    ///
    /// See [`crate::state`] for the format.
    fn save_state(&self, tag: &str) -> Result<Vec<u8>, StateError> {
        state::save(self, tag)
    }

    /// Restore parameter values from a state blob.
    ///
    /// The blob is fully validated before any value is applied. On error, no
    /// parameter changes.
    fn load_state(&self, tag: &str, data: &[u8]) -> Result<(), StateError> {
        state::load(self, tag, data)
    }
}

// =============================================================================
// FloatParameter
// =============================================================================

/// Float parameter with atomic storage.
///
/// The plain value is stored as `f64` bits, so [`get`](Self::get) returns
/// exactly what was last set (after clamping and step snapping).
///
/// # Example
///
/// ```ignore
/// let info = ParameterInfo::float("gain", "Gain", 1.0, 0.0..=1.0).with_step(0.1);
/// let gain = FloatParameter::from_info(info)?;
///
/// gain.set(0.53);
/// assert!((gain.get() - 0.5).abs() < 1e-9);
/// ```
pub struct FloatParameter {
    /// Parameter metadata (ids, name, kind, flags)
    info: ParameterInfo,
    /// Atomic storage for the plain value
    value: AtomicU64,
    min: f64,
    max: f64,
    /// Optional step size for discrete stepping. None = continuous.
    step_size: Option<f64>,
    /// Formatter for display string conversion
    formatter: Formatter,
}

impl FloatParameter {
    /// Build a float parameter from its declaration.
    ///
    /// Fails if the declaration is invalid or not of kind [`ParameterKind::Float`].
    pub fn from_info(info: ParameterInfo) -> Result<Self, LayoutError> {
        info.validate()?;
        let (min, max, step_size, default) = match &info.kind {
            ParameterKind::Float {
                range,
                step,
                default,
            } => (*range.start(), *range.end(), *step, *default),
            other => return Err(kind_mismatch(&info, "float", other)),
        };

        let parameter = Self {
            info,
            value: AtomicU64::new(default.to_bits()),
            min,
            max,
            step_size,
            formatter: Formatter::Float { precision: 2 },
        };
        // Store the default through the setter so it is snapped like any other value
        parameter.set(default);
        Ok(parameter)
    }

    /// Set a custom formatter.
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Get the parameter metadata.
    pub fn info(&self) -> &ParameterInfo {
        &self.info
    }

    /// Get the step size, if any.
    pub fn step_size(&self) -> Option<f64> {
        self.step_size
    }

    // === Value access ===

    /// Get the current plain value.
    #[inline]
    pub fn get(&self) -> f64 {
        f64::from_bits(self.value.load(Ordering::Relaxed))
    }

    /// Get the current plain value as `f32` for DSP.
    #[inline]
    pub fn get_f32(&self) -> f32 {
        self.get() as f32
    }

    /// Set the plain value.
    ///
    /// The value is clamped to the range and, if a step size is configured,
    /// snapped to the nearest step. NaN is ignored.
    #[inline]
    pub fn set(&self, value: f64) {
        if value.is_nan() {
            return;
        }
        let value = match self.step_size {
            Some(step) => snap_to_step(value, step, self.min, self.max),
            None => value.clamp(self.min, self.max),
        };
        self.value.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl ParameterRef for FloatParameter {
    fn info(&self) -> &ParameterInfo {
        &self.info
    }

    fn get_normalized(&self) -> ParameterValue {
        self.plain_to_normalized(self.get())
    }

    fn set_normalized(&self, value: ParameterValue) {
        self.set(self.normalized_to_plain(value));
    }

    fn get_plain(&self) -> ParameterValue {
        self.get()
    }

    fn set_plain(&self, value: ParameterValue) {
        self.set(value);
    }

    fn display_normalized(&self, normalized: ParameterValue) -> String {
        self.formatter.text(self.normalized_to_plain(normalized))
    }

    fn parse(&self, s: &str) -> Option<ParameterValue> {
        let plain = self.formatter.parse(s)?;
        Some(self.plain_to_normalized(plain))
    }

    fn normalized_to_plain(&self, normalized: ParameterValue) -> ParameterValue {
        let normalized = normalized.clamp(0.0, 1.0);
        self.min + normalized * (self.max - self.min)
    }

    fn plain_to_normalized(&self, plain: ParameterValue) -> ParameterValue {
        if self.max == self.min {
            return 0.5;
        }
        ((plain - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

// =============================================================================
// IntParameter
// =============================================================================

/// Integer parameter with atomic storage.
pub struct IntParameter {
    /// Parameter metadata (ids, name, kind, flags)
    info: ParameterInfo,
    /// Atomic storage for the integer value
    value: AtomicI64,
    min: i64,
    max: i64,
    /// Formatter for display string conversion
    formatter: Formatter,
}

impl IntParameter {
    /// Build an integer parameter from its declaration.
    ///
    /// Fails if the declaration is invalid or not of kind [`ParameterKind::Integer`].
    pub fn from_info(info: ParameterInfo) -> Result<Self, LayoutError> {
        info.validate()?;
        let (min, max, default) = match &info.kind {
            ParameterKind::Integer { range, default } => (*range.start(), *range.end(), *default),
            other => return Err(kind_mismatch(&info, "integer", other)),
        };

        Ok(Self {
            info,
            value: AtomicI64::new(default),
            min,
            max,
            formatter: Formatter::Float { precision: 0 },
        })
    }

    /// Get the parameter metadata.
    pub fn info(&self) -> &ParameterInfo {
        &self.info
    }

    /// Get the current integer value.
    #[inline]
    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Set the integer value, clamped to the range.
    #[inline]
    pub fn set(&self, value: i64) {
        self.value
            .store(value.clamp(self.min, self.max), Ordering::Relaxed);
    }
}

impl ParameterRef for IntParameter {
    fn info(&self) -> &ParameterInfo {
        &self.info
    }

    fn get_normalized(&self) -> ParameterValue {
        self.plain_to_normalized(self.get() as f64)
    }

    fn set_normalized(&self, value: ParameterValue) {
        let plain = self.normalized_to_plain(value).round() as i64;
        self.set(plain);
    }

    fn get_plain(&self) -> ParameterValue {
        self.get() as f64
    }

    fn set_plain(&self, value: ParameterValue) {
        if value.is_nan() {
            return;
        }
        // `as` saturates out-of-range floats, and set() clamps afterwards
        self.set(value.round() as i64);
    }

    fn display_normalized(&self, normalized: ParameterValue) -> String {
        let plain = self.normalized_to_plain(normalized).round();
        self.formatter.text(plain)
    }

    fn parse(&self, s: &str) -> Option<ParameterValue> {
        let plain = self.formatter.parse(s)?;
        Some(self.plain_to_normalized(plain))
    }

    fn normalized_to_plain(&self, normalized: ParameterValue) -> ParameterValue {
        let normalized = normalized.clamp(0.0, 1.0);
        (self.min as f64) + normalized * ((self.max as f64) - (self.min as f64))
    }

    fn plain_to_normalized(&self, plain: ParameterValue) -> ParameterValue {
        if self.max == self.min {
            return 0.5;
        }
        ((plain - self.min as f64) / ((self.max as f64) - (self.min as f64))).clamp(0.0, 1.0)
    }
}

// =============================================================================
// BoolParameter
// =============================================================================

/// Boolean parameter (toggle).
pub struct BoolParameter {
    /// Parameter metadata (ids, name, kind, flags)
    info: ParameterInfo,
    /// Atomic storage for the boolean value
    value: AtomicBool,
    /// Formatter for display string conversion
    formatter: Formatter,
}

impl BoolParameter {
    /// Build a boolean parameter from its declaration.
    ///
    /// Fails if the declaration is invalid or not of kind [`ParameterKind::Boolean`].
    pub fn from_info(info: ParameterInfo) -> Result<Self, LayoutError> {
        info.validate()?;
        let default = match &info.kind {
            ParameterKind::Boolean { default } => *default,
            other => return Err(kind_mismatch(&info, "boolean", other)),
        };

        Ok(Self {
            info,
            value: AtomicBool::new(default),
            formatter: Formatter::Boolean,
        })
    }

    /// Get the parameter metadata.
    pub fn info(&self) -> &ParameterInfo {
        &self.info
    }

    /// Get the current boolean value.
    #[inline]
    pub fn get(&self) -> bool {
        self.value.load(Ordering::Relaxed)
    }

    /// Set the boolean value.
    #[inline]
    pub fn set(&self, value: bool) {
        self.value.store(value, Ordering::Relaxed);
    }
}

impl ParameterRef for BoolParameter {
    fn info(&self) -> &ParameterInfo {
        &self.info
    }

    fn get_normalized(&self) -> ParameterValue {
        if self.get() {
            1.0
        } else {
            0.0
        }
    }

    fn set_normalized(&self, value: ParameterValue) {
        self.set(value > 0.5);
    }

    fn get_plain(&self) -> ParameterValue {
        self.get_normalized()
    }

    fn set_plain(&self, value: ParameterValue) {
        self.set_normalized(value);
    }

    fn display_normalized(&self, normalized: ParameterValue) -> String {
        self.formatter.text(normalized)
    }

    fn parse(&self, s: &str) -> Option<ParameterValue> {
        self.formatter.parse(s)
    }

    fn normalized_to_plain(&self, normalized: ParameterValue) -> ParameterValue {
        if normalized > 0.5 {
            1.0
        } else {
            0.0
        }
    }

    fn plain_to_normalized(&self, plain: ParameterValue) -> ParameterValue {
        if plain > 0.5 {
            1.0
        } else {
            0.0
        }
    }
}

// =============================================================================
// ChoiceParameter
// =============================================================================

/// Choice parameter: one option out of a fixed list of names.
///
/// The plain value is the option index; the display text is the option name.
///
/// # Example
///
/// ```ignore
/// let info = ParameterInfo::choice("mode", "Mode", &["Clean", "Dirty"], 0);
/// let mode = ChoiceParameter::from_info(info)?;
///
/// mode.set_index(1);
/// assert_eq!(mode.selected(), "Dirty");
/// ```
pub struct ChoiceParameter {
    /// Parameter metadata (ids, name, kind, flags)
    info: ParameterInfo,
    /// Atomic storage for the option index
    value: AtomicUsize,
    options: &'static [&'static str],
}

impl ChoiceParameter {
    /// Build a choice parameter from its declaration.
    ///
    /// Fails if the declaration is invalid or not of kind [`ParameterKind::Choice`].
    pub fn from_info(info: ParameterInfo) -> Result<Self, LayoutError> {
        info.validate()?;
        let (options, default) = match &info.kind {
            ParameterKind::Choice { options, default } => (*options, *default),
            other => return Err(kind_mismatch(&info, "choice", other)),
        };

        Ok(Self {
            info,
            value: AtomicUsize::new(default),
            options,
        })
    }

    /// Get the parameter metadata.
    pub fn info(&self) -> &ParameterInfo {
        &self.info
    }

    /// All option names in index order.
    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    /// Get the current option index.
    #[inline]
    pub fn index(&self) -> usize {
        self.value.load(Ordering::Relaxed)
    }

    /// Set the option index, clamped to the last option.
    #[inline]
    pub fn set_index(&self, index: usize) {
        let last = self.options.len().saturating_sub(1);
        self.value.store(index.min(last), Ordering::Relaxed);
    }

    /// Name of the currently selected option.
    pub fn selected(&self) -> &'static str {
        // from_info guarantees at least one option and set_index clamps
        self.options[self.index().min(self.options.len() - 1)]
    }
}

impl ParameterRef for ChoiceParameter {
    fn info(&self) -> &ParameterInfo {
        &self.info
    }

    fn get_normalized(&self) -> ParameterValue {
        index_to_normalized(self.index(), self.options.len())
    }

    fn set_normalized(&self, value: ParameterValue) {
        self.set_index(normalized_to_index(value, self.options.len()));
    }

    fn get_plain(&self) -> ParameterValue {
        self.index() as f64
    }

    fn set_plain(&self, value: ParameterValue) {
        if value.is_nan() {
            return;
        }
        // Negative values saturate to 0 through the `as` cast
        self.set_index(value.round() as usize);
    }

    fn display_normalized(&self, normalized: ParameterValue) -> String {
        let index = normalized_to_index(normalized, self.options.len());
        self.options[index].to_string()
    }

    fn parse(&self, s: &str) -> Option<ParameterValue> {
        let s = s.trim();
        // Try to match option name (case-insensitive)
        if let Some(index) = self
            .options
            .iter()
            .position(|name| name.eq_ignore_ascii_case(s))
        {
            return Some(self.plain_to_normalized(index as f64));
        }
        // Also try parsing as index
        s.parse::<usize>()
            .ok()
            .filter(|&i| i < self.options.len())
            .map(|i| self.plain_to_normalized(i as f64))
    }

    fn normalized_to_plain(&self, normalized: ParameterValue) -> ParameterValue {
        normalized_to_index(normalized, self.options.len()) as f64
    }

    fn plain_to_normalized(&self, plain: ParameterValue) -> ParameterValue {
        index_to_normalized(plain.max(0.0).round() as usize, self.options.len())
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn kind_mismatch(info: &ParameterInfo, expected: &'static str, found: &ParameterKind) -> LayoutError {
    LayoutError::KindMismatch {
        id: info.string_id,
        expected,
        found: found.type_name(),
    }
}

/// Convert an option index to a normalized value [0.0, 1.0].
///
/// For N options, index 0 maps to 0.0 and index N-1 maps to 1.0.
/// Single-option lists always return 0.0.
#[inline]
fn index_to_normalized(index: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        index.min(count - 1) as f64 / (count - 1) as f64
    }
}

/// Convert a normalized value [0.0, 1.0] to an option index.
///
/// The result is clamped to [0, count-1]. Rounds to nearest index.
#[inline]
fn normalized_to_index(normalized: f64, count: usize) -> usize {
    if count <= 1 {
        0
    } else {
        ((normalized.clamp(0.0, 1.0) * (count - 1) as f64).round() as usize).min(count - 1)
    }
}

/// Snap a value to the nearest step within a range.
#[inline]
fn snap_to_step(value: f64, step_size: f64, min: f64, max: f64) -> f64 {
    let steps_from_min = ((value - min) / step_size).round();
    let snapped = min + steps_from_min * step_size;
    // Clamp to range (handles edge cases from rounding)
    snapped.clamp(min, max)
}

// =============================================================================
// Tests
// =============================================================================
