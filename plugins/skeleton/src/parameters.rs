//! The skeleton's four example parameters.

use plinth::prelude::*;

/// String id of the float parameter.
pub const FLOAT_ID: &str = "p_float";
/// String id of the integer parameter.
pub const INTEGER_ID: &str = "p_integer";
/// String id of the boolean parameter.
pub const BOOLEAN_ID: &str = "p_boolean";
/// String id of the choice parameter.
pub const CHOICE_ID: &str = "p_choice";

/// Option names of the choice parameter, in index order.
pub const CHOICE_OPTIONS: &[&str] = &["Cool Choice", "PeePee", "PooPoo"];

/// The fixed parameter declarations, always in the same order.
pub fn declare_parameters() -> Vec<ParameterInfo> {
    vec![
        ParameterInfo::float(FLOAT_ID, "Float", 1.0, 0.0..=1.0).with_step(0.1),
        ParameterInfo::integer(INTEGER_ID, "Integer", 0, 0..=10),
        ParameterInfo::boolean(BOOLEAN_ID, "Boolean", true),
        ParameterInfo::choice(CHOICE_ID, "Choice", CHOICE_OPTIONS, 0),
    ]
}

/// Live parameter values shared between the host, the editor and the audio
/// thread.
pub struct SkeletonParameters {
    /// Gain applied to every paired channel.
    pub float: FloatParameter,
    pub integer: IntParameter,
    pub boolean: BoolParameter,
    pub choice: ChoiceParameter,
}

impl SkeletonParameters {
    /// Build the parameters with their default values.
    pub fn new() -> PluginResult<Self> {
        let layout = ParameterLayout::new(declare_parameters())?;
        Ok(Self::from_layout(&layout)?)
    }

    /// Build the typed parameters from a validated layout.
    ///
    /// Fails if an id is missing or declared with the wrong kind.
    pub fn from_layout(layout: &ParameterLayout) -> Result<Self, LayoutError> {
        Ok(Self {
            float: FloatParameter::from_info(layout.take(FLOAT_ID)?)?
                .with_formatter(Formatter::Float { precision: 1 }),
            integer: IntParameter::from_info(layout.take(INTEGER_ID)?)?,
            boolean: BoolParameter::from_info(layout.take(BOOLEAN_ID)?)?,
            choice: ChoiceParameter::from_info(layout.take(CHOICE_ID)?)?,
        })
    }
}

impl Parameters for SkeletonParameters {
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn ParameterRef> + '_> {
        Box::new(
            [
                &self.float as &dyn ParameterRef,
                &self.integer as &dyn ParameterRef,
                &self.boolean as &dyn ParameterRef,
                &self.choice as &dyn ParameterRef,
            ]
            .into_iter(),
        )
    }
}
