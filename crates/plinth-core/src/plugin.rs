//! Plugin traits.
//!
//! A plugin lives in one of two states:
//!
//! - **Unprepared**: the [`Plugin`] value. Created by the host, holds the
//!   shared parameters, answers layout and editor queries.
//! - **Prepared**: the [`AudioProcessor`] value returned by
//!   [`Plugin::prepare`]. Owns whatever the audio thread needs and processes
//!   blocks until the host releases it again with
//!   [`AudioProcessor::unprepare`].
//!
//! Simple plugins implement both traits on one struct: `prepare` returns
//! `self` and `unprepare` gives it back.
//!
//! ```ignore
//! impl Plugin for Gain {
//!     type Processor = Gain;
//!
//!     fn create() -> PluginResult<Self> {
//!         Ok(Self { parameters: Arc::new(GainParameters::new()?) })
//!     }
//!
//!     fn prepare(self, _setup: &ProcessSetup) -> Self {
//!         self
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::buffer::Buffer;
use crate::bus_config::BusLayout;
use crate::error::PluginResult;
use crate::gui::EditorDelegate;
use crate::parameter_types::Parameters;

/// Host information handed to [`Plugin::prepare`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessSetup {
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Largest block the host will pass to `process`.
    pub max_block_size: usize,
    /// Negotiated main bus layout.
    pub layout: BusLayout,
}

/// Access to a plugin's shared parameter collection.
pub trait HasParameters {
    /// The parameter collection type.
    type Parameters: Parameters;

    /// Shared handle to the parameters. Control and editor threads hold
    /// clones of this `Arc` while the audio thread processes.
    fn parameters(&self) -> &Arc<Self::Parameters>;
}

/// Unprepared plugin state.
pub trait Plugin: HasParameters + Sized + Send + 'static {
    /// Prepared state produced by [`prepare`](Self::prepare).
    type Processor: AudioProcessor<Plugin = Self>;

    /// Build the plugin with default parameter values.
    ///
    /// Invalid parameter declarations are reported here, before the host
    /// ever sees the plugin.
    fn create() -> PluginResult<Self>;

    /// Transition to the prepared state.
    fn prepare(self, setup: &ProcessSetup) -> Self::Processor;

    /// Layout the host should start from.
    fn default_layout() -> BusLayout {
        BusLayout::stereo()
    }

    /// Whether the plugin can run with `layout`.
    fn supports_layout(layout: &BusLayout) -> bool {
        *layout == Self::default_layout()
    }

    /// Length of the audio tail after input stops, in seconds.
    fn tail_length_seconds() -> f64 {
        0.0
    }

    /// Whether [`create_editor`](Self::create_editor) returns an editor.
    fn has_editor() -> bool {
        false
    }

    /// Create an editor bound to the shared parameters.
    fn create_editor(parameters: Arc<Self::Parameters>) -> Option<Box<dyn EditorDelegate>> {
        let _ = parameters;
        None
    }
}

/// Prepared plugin state. Runs on the audio thread.
///
/// `process` must not allocate, lock or block.
pub trait AudioProcessor: Send + 'static {
    /// Unprepared state this processor returns to.
    type Plugin: Plugin<Processor = Self>;

    /// Process one block of 32-bit audio.
    fn process(&mut self, buffer: &mut Buffer<'_, '_, f32>);

    /// Whether [`process_f64`](Self::process_f64) is implemented.
    fn supports_double_precision(&self) -> bool {
        false
    }

    /// Process one block of 64-bit audio.
    ///
    /// The default silences the outputs; plugins that report
    /// [`supports_double_precision`](Self::supports_double_precision) override it.
    fn process_f64(&mut self, buffer: &mut Buffer<'_, '_, f64>) {
        buffer.clear_outputs();
    }

    /// Called when the host starts or stops the processing stream.
    fn set_active(&mut self, active: bool) {
        let _ = active;
    }

    /// Return to the unprepared state, releasing processing resources.
    fn unprepare(self) -> Self::Plugin;
}
