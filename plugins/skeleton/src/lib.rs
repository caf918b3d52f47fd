//! Plinth Skeleton - minimal plugin with four example parameters.
//!
//! Uses the single-struct pattern: [`Skeleton`] is both the [`Plugin`]
//! (unprepared state) and the [`AudioProcessor`] (prepared state). Audio is
//! passed through scaled by the float parameter, output channels without a
//! matching input are silenced, and the editor is a static placeholder.

use std::sync::Arc;

use plinth::prelude::*;

pub mod editor;
pub mod parameters;

pub use editor::SkeletonEditor;
pub use parameters::{declare_parameters, SkeletonParameters};

// =============================================================================
// Plugin Configuration
// =============================================================================

/// Shared plugin configuration. The name is also the saved-state tag.
pub static CONFIG: Config = Config::new("Plinth Skeleton", Category::Effect)
    .with_vendor("Plinth")
    .with_version(env!("CARGO_PKG_VERSION"))
    .with_subcategories(&[Subcategory::Tools]);

// =============================================================================
// Skeleton Plugin (Single-Struct Pattern)
// =============================================================================

/// The skeleton plugin.
pub struct Skeleton {
    parameters: Arc<SkeletonParameters>,
}

impl Skeleton {
    /// Generic processing implementation for both f32 and f64.
    fn process_generic<S: Sample>(&mut self, buffer: &mut Buffer<S>) {
        let gain = S::from_f64(self.parameters.float.get());

        buffer.clear_unpaired_outputs();
        for (input, output) in buffer.zip_channels() {
            for (i, o) in input.iter().zip(output.iter_mut()) {
                *o = *i * gain;
            }
        }
    }
}

impl HasParameters for Skeleton {
    type Parameters = SkeletonParameters;

    fn parameters(&self) -> &Arc<SkeletonParameters> {
        &self.parameters
    }
}

impl Plugin for Skeleton {
    type Processor = Self;

    fn create() -> PluginResult<Self> {
        Ok(Self {
            parameters: Arc::new(SkeletonParameters::new()?),
        })
    }

    fn prepare(self, _setup: &ProcessSetup) -> Self {
        self
    }

    /// Mono or stereo output, with the input matching the output.
    fn supports_layout(layout: &BusLayout) -> bool {
        matches!(layout.main_output, ChannelSet::Mono | ChannelSet::Stereo)
            && layout.main_input == layout.main_output
    }

    fn has_editor() -> bool {
        true
    }

    fn create_editor(_parameters: Arc<SkeletonParameters>) -> Option<Box<dyn EditorDelegate>> {
        Some(Box::new(SkeletonEditor::new()))
    }
}

impl AudioProcessor for Skeleton {
    type Plugin = Self;

    fn process(&mut self, buffer: &mut Buffer) {
        self.process_generic(buffer);
    }

    fn supports_double_precision(&self) -> bool {
        true
    }

    fn process_f64(&mut self, buffer: &mut Buffer<f64>) {
        self.process_generic(buffer);
    }

    fn unprepare(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::{BOOLEAN_ID, CHOICE_ID, FLOAT_ID, INTEGER_ID};

    fn prepared(layout: BusLayout) -> PluginInstance<Skeleton> {
        let mut instance = PluginInstance::<Skeleton>::new(&CONFIG).unwrap();
        instance.set_bus_layout(layout).unwrap();
        instance.setup_processing(48000.0, 512).unwrap();
        instance
    }

    #[test]
    fn test_half_gain_mono() {
        let mut instance = prepared(BusLayout::mono());
        instance.parameters().float.set(0.5);

        let input = [1.0f32, 1.0, 1.0];
        let mut output = [0.0f32; 3];
        instance.process(&[&input[..]], &mut [&mut output[..]], 3);
        assert_eq!(output, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_default_gain_is_unity() {
        let mut instance = prepared(BusLayout::stereo());

        let left = [0.25f32, -0.5];
        let right = [1.0f32, 0.0];
        let mut out_left = [0.0f32; 2];
        let mut out_right = [0.0f32; 2];
        instance.process(
            &[&left[..], &right[..]],
            &mut [&mut out_left[..], &mut out_right[..]],
            2,
        );
        assert_eq!(out_left, left);
        assert_eq!(out_right, right);
    }

    #[test]
    fn test_zero_gain_silences() {
        let mut instance = prepared(BusLayout::mono());
        instance.parameters().float.set(0.0);

        let input = [0.8f32; 4];
        let mut output = [1.0f32; 4];
        instance.process(&[&input[..]], &mut [&mut output[..]], 4);
        assert_eq!(output, [0.0; 4]);
    }

    #[test]
    fn test_extra_outputs_are_zeroed() {
        let mut skeleton = Skeleton::create().unwrap();
        skeleton.parameters.float.set(0.5);

        let input = [1.0f32, 2.0];
        let mut out_left = [9.0f32; 2];
        let mut out_right = [9.0f32; 2];
        let mut outputs = [&mut out_left[..], &mut out_right[..]];
        let inputs = [&input[..]];
        let mut buffer = Buffer::new(&inputs, &mut outputs, 2);

        skeleton.process(&mut buffer);
        assert_eq!(out_left, [0.5, 1.0]);
        assert_eq!(out_right, [0.0, 0.0]);
    }

    #[test]
    fn test_double_precision() {
        let mut instance = prepared(BusLayout::mono());
        assert!(instance.supports_double_precision());
        instance.parameters().float.set(0.5);

        let input = [2.0f64, -4.0];
        let mut output = [0.0f64; 2];
        instance.process_f64(&[&input[..]], &mut [&mut output[..]], 2);
        assert_eq!(output, [1.0, -2.0]);
    }

    #[test]
    fn test_supported_layouts() {
        assert!(Skeleton::supports_layout(&BusLayout::mono()));
        assert!(Skeleton::supports_layout(&BusLayout::stereo()));
        assert!(!Skeleton::supports_layout(&BusLayout::new(
            ChannelSet::Mono,
            ChannelSet::Stereo
        )));
        assert!(!Skeleton::supports_layout(&BusLayout::new(
            ChannelSet::Discrete(6),
            ChannelSet::Discrete(6)
        )));
        assert!(!Skeleton::supports_layout(&BusLayout::new(
            ChannelSet::Disabled,
            ChannelSet::Disabled
        )));
    }

    #[test]
    fn test_state_round_trip() {
        let instance = PluginInstance::<Skeleton>::new(&CONFIG).unwrap();
        let parameters = instance.parameters();
        parameters.float.set(0.3);
        parameters.integer.set(4);
        parameters.boolean.set(false);
        parameters.choice.set_index(1);

        let blob = instance.get_state().unwrap();

        let restored = PluginInstance::<Skeleton>::new(&CONFIG).unwrap();
        restored.set_state(&blob).unwrap();
        for id in [FLOAT_ID, INTEGER_ID, BOOLEAN_ID, CHOICE_ID] {
            assert_eq!(
                restored.parameters().get_value(id),
                parameters.get_value(id),
                "{id}"
            );
        }
        assert_eq!(restored.parameters().choice.selected(), "PeePee");
    }

    #[test]
    fn test_mismatched_tag_leaves_values_unchanged() {
        let instance = PluginInstance::<Skeleton>::new(&CONFIG).unwrap();
        let blob = instance
            .parameters()
            .save_state("Some Other Plugin")
            .unwrap();

        instance.parameters().integer.set(9);
        assert!(instance.set_state(&blob).is_err());
        assert_eq!(instance.parameters().get_value(INTEGER_ID), 9.0);
        assert_eq!(instance.parameters().get_value(FLOAT_ID), 1.0);
    }

    #[test]
    fn test_editor() {
        let instance = PluginInstance::<Skeleton>::new(&CONFIG).unwrap();
        assert!(instance.has_editor());
        let editor = instance.create_editor().unwrap();
        assert_eq!(editor.size(), Size::new(400, 300));
        assert_eq!(editor.constraints().max, Size::new(800, 600));
    }

    #[test]
    fn test_metadata() {
        let instance = PluginInstance::<Skeleton>::new(&CONFIG).unwrap();
        assert_eq!(instance.name(), "Plinth Skeleton");
        assert!(!instance.accepts_midi());
        assert!(!instance.produces_midi());
        assert_eq!(instance.tail_length_seconds(), 0.0);
        assert_eq!(instance.program_count(), 1);
        assert_eq!(CONFIG.categories(), "Fx|Tools");
    }
}
