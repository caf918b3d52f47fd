//! Parameter metadata types.
//!
//! This module provides types for describing parameters before any storage
//! exists for them:
//! - [`ParameterKind`] - The parameter type together with only the fields that type uses
//! - [`ParameterInfo`] - Complete parameter description (ids, names, kind, flags)
//! - [`ParameterFlags`] - Behavioral flags (automation, list display)

use std::ops::RangeInclusive;

use crate::error::LayoutError;
use crate::types::{fnv1a_hash, ParameterId, ParameterValue};

/// The type of a parameter and the fields meaningful for that type.
///
/// # Example
///
/// ```ignore
/// let gain = ParameterKind::Float { range: 0.0..=1.0, step: Some(0.1), default: 1.0 };
/// let mode = ParameterKind::Choice { options: &["A", "B"], default: 0 };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterKind {
    /// Continuous value, optionally quantized to `step`.
    Float {
        /// Valid range in plain units (inclusive).
        range: RangeInclusive<f64>,
        /// Step size. `None` = continuous.
        step: Option<f64>,
        /// Default value in plain units.
        default: f64,
    },
    /// Whole number.
    Integer {
        /// Valid range (inclusive).
        range: RangeInclusive<i64>,
        /// Default value.
        default: i64,
    },
    /// On/off toggle.
    Boolean {
        /// Default state.
        default: bool,
    },
    /// One entry out of a fixed list of names.
    Choice {
        /// Display names, in index order.
        options: &'static [&'static str],
        /// Index of the default option.
        default: usize,
    },
}

impl ParameterKind {
    /// Short lowercase name of the kind, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Float { .. } => "float",
            Self::Integer { .. } => "integer",
            Self::Boolean { .. } => "boolean",
            Self::Choice { .. } => "choice",
        }
    }

    /// Number of discrete steps. 0 = continuous, 1 = toggle, >1 = discrete.
    pub fn step_count(&self) -> i32 {
        match self {
            Self::Float { range, step, .. } => match step {
                Some(step) => {
                    let span = range.end() - range.start();
                    ((span / step).round() as i32).max(1)
                }
                None => 0,
            },
            Self::Integer { range, .. } => {
                // i128 keeps extreme ranges like i64::MIN..=i64::MAX from overflowing
                let span = (*range.end() as i128) - (*range.start() as i128);
                span.min(i32::MAX as i128) as i32
            }
            Self::Boolean { .. } => 1,
            Self::Choice { options, .. } => options.len().saturating_sub(1) as i32,
        }
    }

    /// Default value in plain units (choice index and toggle state as numbers).
    pub fn default_plain(&self) -> ParameterValue {
        match self {
            Self::Float { default, .. } => *default,
            Self::Integer { default, .. } => *default as f64,
            Self::Boolean { default } => {
                if *default {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Choice { default, .. } => *default as f64,
        }
    }

    /// Check the kind-specific invariants.
    fn validate(&self, id: &'static str) -> Result<(), LayoutError> {
        match self {
            Self::Float {
                range,
                step,
                default,
            } => {
                let (min, max) = (*range.start(), *range.end());
                if !min.is_finite() || !max.is_finite() || min > max {
                    return Err(LayoutError::InvalidRange(id));
                }
                if let Some(step) = step {
                    if !step.is_finite() || *step <= 0.0 {
                        return Err(LayoutError::InvalidStep(id));
                    }
                }
                if !range.contains(default) {
                    return Err(LayoutError::DefaultOutOfRange(id));
                }
            }
            Self::Integer { range, default } => {
                if range.start() > range.end() {
                    return Err(LayoutError::InvalidRange(id));
                }
                if !range.contains(default) {
                    return Err(LayoutError::DefaultOutOfRange(id));
                }
            }
            Self::Boolean { .. } => {}
            Self::Choice { options, default } => {
                if options.is_empty() {
                    return Err(LayoutError::NoChoices(id));
                }
                if *default >= options.len() {
                    return Err(LayoutError::DefaultOutOfRange(id));
                }
            }
        }
        Ok(())
    }
}

/// Flags controlling parameter behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterFlags {
    /// Parameter can be automated by the host.
    pub can_automate: bool,
    /// Parameter should be displayed as a dropdown list.
    /// When true, hosts show the text labels rather than a slider.
    pub is_list: bool,
}

impl Default for ParameterFlags {
    fn default() -> Self {
        Self {
            can_automate: true,
            is_list: false,
        }
    }
}

/// Metadata describing a single parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterInfo {
    /// Numeric identifier (FNV-1a hash of `string_id`).
    pub id: ParameterId,
    /// Stable string identifier, also the key in saved state.
    pub string_id: &'static str,
    /// Full parameter name (e.g., "Master Volume").
    pub name: &'static str,
    /// Short parameter name for constrained UIs (e.g., "Vol").
    pub short_name: &'static str,
    /// Parameter type and its range, options and default.
    pub kind: ParameterKind,
    /// Behavioral flags.
    pub flags: ParameterFlags,
}

impl ParameterInfo {
    /// Create a parameter description. The numeric id is derived from `string_id`.
    pub fn new(string_id: &'static str, name: &'static str, kind: ParameterKind) -> Self {
        let flags = ParameterFlags {
            is_list: matches!(kind, ParameterKind::Choice { .. }),
            ..ParameterFlags::default()
        };
        Self {
            id: fnv1a_hash(string_id),
            string_id,
            name,
            short_name: name,
            kind,
            flags,
        }
    }

    /// Continuous float parameter with linear mapping.
    pub fn float(
        string_id: &'static str,
        name: &'static str,
        default: f64,
        range: RangeInclusive<f64>,
    ) -> Self {
        Self::new(
            string_id,
            name,
            ParameterKind::Float {
                range,
                step: None,
                default,
            },
        )
    }

    /// Integer parameter.
    pub fn integer(
        string_id: &'static str,
        name: &'static str,
        default: i64,
        range: RangeInclusive<i64>,
    ) -> Self {
        Self::new(string_id, name, ParameterKind::Integer { range, default })
    }

    /// Boolean toggle parameter.
    pub fn boolean(string_id: &'static str, name: &'static str, default: bool) -> Self {
        Self::new(string_id, name, ParameterKind::Boolean { default })
    }

    /// Choice parameter over a fixed list of option names.
    pub fn choice(
        string_id: &'static str,
        name: &'static str,
        options: &'static [&'static str],
        default: usize,
    ) -> Self {
        Self::new(string_id, name, ParameterKind::Choice { options, default })
    }

    /// Quantize a float parameter to `step`. Has no effect on other kinds.
    pub fn with_step(mut self, step_size: f64) -> Self {
        if let ParameterKind::Float { step, .. } = &mut self.kind {
            *step = Some(step_size);
        }
        self
    }

    /// Set the short name.
    pub fn with_short_name(mut self, short_name: &'static str) -> Self {
        self.short_name = short_name;
        self
    }

    /// Disable automation for this parameter.
    pub fn non_automatable(mut self) -> Self {
        self.flags.can_automate = false;
        self
    }

    /// Number of discrete steps. 0 = continuous.
    pub fn step_count(&self) -> i32 {
        self.kind.step_count()
    }

    /// Check the declaration's invariants.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.string_id.is_empty() {
            return Err(LayoutError::EmptyId);
        }
        self.kind.validate(self.string_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_derived_from_string_id() {
        let info = ParameterInfo::boolean("p_boolean", "Boolean", true);
        assert_eq!(info.id, fnv1a_hash("p_boolean"));
        assert_eq!(info.short_name, "Boolean");
    }

    #[test]
    fn test_step_counts() {
        let float = ParameterInfo::float("f", "F", 1.0, 0.0..=1.0).with_step(0.1);
        assert_eq!(float.step_count(), 10);
        assert_eq!(ParameterInfo::float("f", "F", 1.0, 0.0..=1.0).step_count(), 0);
        assert_eq!(ParameterInfo::integer("i", "I", 0, 0..=10).step_count(), 10);
        assert_eq!(ParameterInfo::boolean("b", "B", true).step_count(), 1);
        assert_eq!(
            ParameterInfo::choice("c", "C", &["a", "b", "c"], 0).step_count(),
            2
        );
    }

    #[test]
    fn test_integer_step_count_saturates() {
        let info = ParameterInfo::integer("i", "I", 0, i64::MIN..=i64::MAX);
        assert_eq!(info.step_count(), i32::MAX);
    }

    #[test]
    fn test_choice_is_list() {
        assert!(ParameterInfo::choice("c", "C", &["a"], 0).flags.is_list);
        assert!(!ParameterInfo::boolean("b", "B", false).flags.is_list);
    }

    #[test]
    fn test_with_step_ignored_for_non_float() {
        let info = ParameterInfo::integer("i", "I", 0, 0..=10).with_step(0.5);
        assert_eq!(info.kind, ParameterKind::Integer { range: 0..=10, default: 0 });
    }

    #[test]
    fn test_validate_rejects_bad_declarations() {
        assert_eq!(
            ParameterInfo::boolean("", "B", true).validate(),
            Err(LayoutError::EmptyId)
        );
        assert_eq!(
            ParameterInfo::float("f", "F", 0.5, 1.0..=0.0).validate(),
            Err(LayoutError::InvalidRange("f"))
        );
        assert_eq!(
            ParameterInfo::float("f", "F", 2.0, 0.0..=1.0).validate(),
            Err(LayoutError::DefaultOutOfRange("f"))
        );
        assert_eq!(
            ParameterInfo::float("f", "F", 0.5, 0.0..=1.0)
                .with_step(0.0)
                .validate(),
            Err(LayoutError::InvalidStep("f"))
        );
        assert_eq!(
            ParameterInfo::integer("i", "I", 11, 0..=10).validate(),
            Err(LayoutError::DefaultOutOfRange("i"))
        );
        assert_eq!(
            ParameterInfo::choice("c", "C", &[], 0).validate(),
            Err(LayoutError::NoChoices("c"))
        );
        assert_eq!(
            ParameterInfo::choice("c", "C", &["a"], 1).validate(),
            Err(LayoutError::DefaultOutOfRange("c"))
        );
    }

    #[test]
    fn test_default_plain() {
        assert_eq!(ParameterInfo::boolean("b", "B", true).kind.default_plain(), 1.0);
        assert_eq!(
            ParameterInfo::choice("c", "C", &["a", "b"], 1)
                .kind
                .default_plain(),
            1.0
        );
        assert_eq!(ParameterInfo::integer("i", "I", 3, 0..=10).kind.default_plain(), 3.0);
    }
}
