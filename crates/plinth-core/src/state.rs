//! Parameter state serialization.
//!
//! The state blob the host persists is a JSON document:
//!
//! ```text
//! {
//!   "tag": "Plinth Skeleton",
//!   "version": 1,
//!   "parameters": { "p_boolean": 1.0, "p_float": 0.5, ... }
//! }
//! ```
//!
//! - `tag` identifies the plugin that wrote the blob. A blob with another tag
//!   is rejected.
//! - `version` is the layout version of the document. Versions from 1 up to
//!   [`STATE_VERSION`] are accepted.
//! - `parameters` maps string ids to plain values.
//!
//! Loading is all-or-nothing: the whole blob is parsed and validated before
//! the first parameter is touched. Unknown ids are skipped so that state
//! written by a newer build with more parameters still loads. Parameters
//! missing from the blob keep their current values.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::StateError;
use crate::parameter_types::Parameters;

/// Current state document version.
pub const STATE_VERSION: u32 = 1;

/// On-wire form of a state blob.
#[derive(Debug, Serialize, Deserialize)]
struct StateDocument {
    tag: String,
    version: u32,
    parameters: BTreeMap<String, f64>,
}

/// Serialize every parameter's plain value.
pub fn save<P: Parameters + ?Sized>(parameters: &P, tag: &str) -> Result<Vec<u8>, StateError> {
    let document = StateDocument {
        tag: tag.to_string(),
        version: STATE_VERSION,
        parameters: parameters
            .iter()
            .map(|parameter| (parameter.string_id().to_string(), parameter.get_plain()))
            .collect(),
    };

    serde_json::to_vec(&document).map_err(|e| StateError::Malformed(e.to_string()))
}

/// Restore parameter values from a blob written by [`save`].
///
/// On error, no parameter is modified.
pub fn load<P: Parameters + ?Sized>(
    parameters: &P,
    tag: &str,
    data: &[u8],
) -> Result<(), StateError> {
    let document = match decode(tag, data) {
        Ok(document) => document,
        Err(err) => {
            warn!("Ignoring state blob: {}", err);
            return Err(err);
        }
    };

    for (id, value) in &document.parameters {
        match parameters.by_string_id(id) {
            Some(parameter) => parameter.set_plain(*value),
            None => debug!("Skipping unknown parameter `{}` in state", id),
        }
    }

    Ok(())
}

/// Parse and validate a blob without applying it.
fn decode(tag: &str, data: &[u8]) -> Result<StateDocument, StateError> {
    let document: StateDocument =
        serde_json::from_slice(data).map_err(|e| StateError::Malformed(e.to_string()))?;

    if document.tag != tag {
        return Err(StateError::TagMismatch {
            expected: tag.to_string(),
            found: document.tag,
        });
    }

    if document.version == 0 || document.version > STATE_VERSION {
        return Err(StateError::UnsupportedVersion(document.version));
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter_info::ParameterInfo;
    use crate::parameter_types::{BoolParameter, FloatParameter, ParameterRef};

    struct TestParameters {
        level: FloatParameter,
        enabled: BoolParameter,
    }

    impl Parameters for TestParameters {
        fn iter(&self) -> Box<dyn Iterator<Item = &dyn ParameterRef> + '_> {
            Box::new(
                [
                    &self.level as &dyn ParameterRef,
                    &self.enabled as &dyn ParameterRef,
                ]
                .into_iter(),
            )
        }
    }

    fn parameters() -> TestParameters {
        TestParameters {
            level: FloatParameter::from_info(ParameterInfo::float("level", "Level", 1.0, 0.0..=2.0))
                .unwrap(),
            enabled: BoolParameter::from_info(ParameterInfo::boolean("enabled", "Enabled", true))
                .unwrap(),
        }
    }

    #[test]
    fn test_save_writes_tagged_document() {
        let params = parameters();
        params.level.set(0.25);

        let blob = save(&params, "Test").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&blob).unwrap();

        assert_eq!(value["tag"], "Test");
        assert_eq!(value["version"], STATE_VERSION);
        assert_eq!(value["parameters"]["level"], 0.25);
        assert_eq!(value["parameters"]["enabled"], 1.0);
    }

    #[test]
    fn test_round_trip() {
        let source = parameters();
        source.level.set(1.75);
        source.enabled.set(false);
        let blob = save(&source, "Test").unwrap();

        let target = parameters();
        load(&target, "Test", &blob).unwrap();
        assert_eq!(target.level.get(), 1.75);
        assert!(!target.enabled.get());
    }

    #[test]
    fn test_tag_mismatch_leaves_values_unchanged() {
        let source = parameters();
        source.level.set(0.0);
        let blob = save(&source, "Other Plugin").unwrap();

        let target = parameters();
        let err = load(&target, "Test", &blob).unwrap_err();
        assert_eq!(
            err,
            StateError::TagMismatch {
                expected: "Test".to_string(),
                found: "Other Plugin".to_string(),
            }
        );
        assert_eq!(target.level.get(), 1.0);
    }

    #[test]
    fn test_malformed_blob_rejected() {
        let target = parameters();
        assert!(matches!(
            load(&target, "Test", b"\x00\x01garbage"),
            Err(StateError::Malformed(_))
        ));
        assert!(matches!(
            load(&target, "Test", br#"{"tag":"Test","version":1}"#),
            Err(StateError::Malformed(_))
        ));
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let target = parameters();
        let blob = br#"{"tag":"Test","version":2,"parameters":{"level":0.5}}"#;
        assert_eq!(
            load(&target, "Test", blob),
            Err(StateError::UnsupportedVersion(2))
        );
        assert_eq!(target.level.get(), 1.0);
    }

    #[test]
    fn test_no_partial_apply_on_out_of_range_number() {
        let target = parameters();
        target.enabled.set(false);
        // JSON has no NaN or infinity; overflowing numbers fail to parse
        for blob in [
            &br#"{"tag":"Test","version":1,"parameters":{"enabled":1.0,"level":1e999}}"#[..],
            &br#"{"tag":"Test","version":1,"parameters":{"enabled":1.0,"level":-1e400}}"#[..],
            &br#"{"tag":"Test","version":1,"parameters":{"enabled":1.0,"level":NaN}}"#[..],
        ] {
            let result = load(&target, "Test", blob);
            assert!(
                matches!(result, Err(StateError::Malformed(_))),
                "unexpected result: {result:?}"
            );
        }
        assert!(!target.enabled.get());
        assert_eq!(target.level.get(), 1.0);
    }

    #[test]
    fn test_unknown_and_missing_ids() {
        let target = parameters();
        target.enabled.set(false);
        let blob = br#"{"tag":"Test","version":1,"parameters":{"level":0.5,"future":3.0}}"#;
        load(&target, "Test", blob).unwrap();
        assert_eq!(target.level.get(), 0.5);
        // Not in the blob, keeps its current value
        assert!(!target.enabled.get());
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let target = parameters();
        let blob = br#"{"tag":"Test","version":1,"parameters":{"level":9.0}}"#;
        load(&target, "Test", blob).unwrap();
        assert_eq!(target.level.get(), 2.0);
    }
}
