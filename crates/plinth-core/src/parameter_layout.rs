//! Validated, ordered parameter declarations.
//!
//! A plugin declares its parameters as a list of [`ParameterInfo`] and turns
//! it into a [`ParameterLayout`] once, at construction. Building the layout
//! checks every declaration plus the cross-parameter rules (unique string ids,
//! unique numeric ids), so typed parameters are only ever built from a layout
//! that is known to be consistent.

use std::collections::HashMap;

use crate::error::LayoutError;
use crate::parameter_info::ParameterInfo;
use crate::types::ParameterId;

/// Ordered list of parameter declarations that passed validation.
#[derive(Debug, Clone)]
pub struct ParameterLayout {
    infos: Vec<ParameterInfo>,
}

impl ParameterLayout {
    /// Validate `infos` and keep them in declaration order.
    pub fn new(infos: Vec<ParameterInfo>) -> Result<Self, LayoutError> {
        let mut seen: HashMap<ParameterId, &'static str> = HashMap::with_capacity(infos.len());

        for info in &infos {
            info.validate()?;

            if let Some(existing) = seen.insert(info.id, info.string_id) {
                return Err(if existing == info.string_id {
                    LayoutError::DuplicateId(info.string_id)
                } else {
                    LayoutError::HashCollision {
                        first: existing,
                        second: info.string_id,
                    }
                });
            }
        }

        Ok(Self { infos })
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    /// `true` if nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// Declaration for `string_id`.
    pub fn get(&self, string_id: &'static str) -> Result<&ParameterInfo, LayoutError> {
        self.infos
            .iter()
            .find(|info| info.string_id == string_id)
            .ok_or(LayoutError::Missing(string_id))
    }

    /// Declaration for `string_id`, cloned for building a typed parameter.
    pub fn take(&self, string_id: &'static str) -> Result<ParameterInfo, LayoutError> {
        self.get(string_id).cloned()
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterInfo> {
        self.infos.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_declaration_order() {
        let layout = ParameterLayout::new(vec![
            ParameterInfo::boolean("b", "B", true),
            ParameterInfo::integer("a", "A", 0, 0..=3),
        ])
        .unwrap();

        let ids: Vec<_> = layout.iter().map(|info| info.string_id).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(layout.len(), 2);
        assert!(layout.get("a").is_ok());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = ParameterLayout::new(vec![
            ParameterInfo::boolean("dup", "One", true),
            ParameterInfo::boolean("dup", "Two", false),
        ]);
        assert_eq!(result.unwrap_err(), LayoutError::DuplicateId("dup"));
    }

    #[test]
    fn test_hash_collision_rejected() {
        let mut second = ParameterInfo::boolean("second", "Second", true);
        second.id = ParameterInfo::boolean("first", "First", true).id;

        let result = ParameterLayout::new(vec![
            ParameterInfo::boolean("first", "First", true),
            second,
        ]);
        assert_eq!(
            result.unwrap_err(),
            LayoutError::HashCollision {
                first: "first",
                second: "second"
            }
        );
    }

    #[test]
    fn test_invalid_declaration_rejected() {
        let result = ParameterLayout::new(vec![ParameterInfo::choice("c", "C", &[], 0)]);
        assert_eq!(result.unwrap_err(), LayoutError::NoChoices("c"));
    }

    #[test]
    fn test_missing_id() {
        let layout = ParameterLayout::new(Vec::new()).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.take("nope").unwrap_err(), LayoutError::Missing("nope"));
    }
}
