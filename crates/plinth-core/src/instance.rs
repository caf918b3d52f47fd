//! Format-agnostic host surface.
//!
//! [`PluginInstance`] is what a format wrapper drives: it owns the plugin
//! through its unprepared and prepared states, negotiates the bus layout,
//! forwards audio blocks and routes state, program, metadata and editor
//! queries. Parameters live behind a shared `Arc` of atomics, so state can be
//! saved and restored in either lifecycle state without deferring anything.

use std::sync::Arc;

use log::{debug, error, warn};

use crate::buffer::Buffer;
use crate::bus_config::BusLayout;
use crate::config::Config;
use crate::error::{PluginError, PluginResult};
use crate::gui::EditorDelegate;
use crate::parameter_types::Parameters;
use crate::plugin::{AudioProcessor, Plugin, ProcessSetup};

/// Lifecycle state of the wrapped plugin.
enum PluginState<P: Plugin> {
    /// Before `setup_processing`, or after `release`.
    Unprepared(P),
    /// Ready for audio.
    Prepared {
        processor: P::Processor,
        max_block_size: usize,
    },
    /// Only observable if `prepare` or `unprepare` panicked.
    Transitioning,
}

/// A plugin instance as seen by the host.
pub struct PluginInstance<P: Plugin> {
    config: &'static Config,
    state: PluginState<P>,
    parameters: Arc<P::Parameters>,
    layout: BusLayout,
    active: bool,
}

impl<P: Plugin> PluginInstance<P> {
    /// Create the plugin in the unprepared state with its default layout.
    pub fn new(config: &'static Config) -> PluginResult<Self> {
        let plugin = P::create()?;
        let parameters = Arc::clone(plugin.parameters());
        debug!(
            "Created '{}' with {} parameters",
            config.name,
            parameters.count()
        );

        Ok(Self {
            config,
            state: PluginState::Unprepared(plugin),
            parameters,
            layout: P::default_layout(),
            active: false,
        })
    }

    /// The plugin's static configuration.
    pub fn config(&self) -> &'static Config {
        self.config
    }

    /// Shared handle to the parameters for control and editor threads.
    pub fn parameters(&self) -> Arc<P::Parameters> {
        Arc::clone(&self.parameters)
    }

    // =========================================================================
    // Bus layout
    // =========================================================================

    /// Currently negotiated layout.
    pub fn bus_layout(&self) -> BusLayout {
        self.layout
    }

    /// Whether the plugin could run with `layout`.
    pub fn is_layout_supported(&self, layout: &BusLayout) -> bool {
        layout.validate().is_ok() && P::supports_layout(layout)
    }

    /// Request a new layout. Must happen while unprepared.
    ///
    /// A refused layout leaves the current one in place.
    pub fn set_bus_layout(&mut self, layout: BusLayout) -> PluginResult<()> {
        if self.is_prepared() {
            warn!("Refusing layout change to {} while prepared", layout);
            return Err(PluginError::AlreadyPrepared);
        }
        if !self.is_layout_supported(&layout) {
            warn!("Refusing unsupported layout {}", layout);
            return Err(PluginError::UnsupportedLayout(layout));
        }

        debug!("Bus layout set to {}", layout);
        self.layout = layout;
        Ok(())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Prepare for processing. Re-preparing an already prepared instance
    /// unprepares it first.
    pub fn setup_processing(&mut self, sample_rate: f64, max_block_size: usize) -> PluginResult<()> {
        if let Err(msg) = self.layout.validate() {
            error!("Plugin bus configuration exceeds limits: {}", msg);
            return Err(PluginError::UnsupportedLayout(self.layout));
        }

        let plugin = match std::mem::replace(&mut self.state, PluginState::Transitioning) {
            PluginState::Unprepared(plugin) => plugin,
            PluginState::Prepared { processor, .. } => processor.unprepare(),
            PluginState::Transitioning => {
                error!("Plugin state lost during an earlier transition");
                return Err(PluginError::NotPrepared);
            }
        };

        let setup = ProcessSetup {
            sample_rate,
            max_block_size,
            layout: self.layout,
        };
        debug!(
            "Preparing '{}' at {} Hz, max block {}, layout {}",
            self.config.name, sample_rate, max_block_size, self.layout
        );

        let mut processor = plugin.prepare(&setup);
        if self.active {
            processor.set_active(true);
        }
        self.state = PluginState::Prepared {
            processor,
            max_block_size,
        };
        Ok(())
    }

    /// Release processing resources and return to the unprepared state.
    pub fn release(&mut self) {
        self.active = false;
        self.state = match std::mem::replace(&mut self.state, PluginState::Transitioning) {
            PluginState::Prepared { processor, .. } => {
                debug!("Releasing '{}'", self.config.name);
                PluginState::Unprepared(processor.unprepare())
            }
            other => other,
        };
    }

    /// Whether the instance is ready for audio.
    pub fn is_prepared(&self) -> bool {
        matches!(self.state, PluginState::Prepared { .. })
    }

    /// Start or stop the processing stream.
    ///
    /// Also applies to a processor prepared later.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if let PluginState::Prepared { processor, .. } = &mut self.state {
            processor.set_active(active);
        }
    }

    /// Whether the processing stream is running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    // =========================================================================
    // Processing
    // =========================================================================

    /// Process one block of 32-bit audio.
    ///
    /// Outputs are silenced when the instance is not prepared or the block is
    /// larger than the prepared maximum.
    pub fn process(&mut self, inputs: &[&[f32]], outputs: &mut [&mut [f32]], num_samples: usize) {
        let mut buffer = Buffer::new(inputs, outputs, num_samples);
        match self.processor_for(num_samples) {
            Some(processor) => processor.process(&mut buffer),
            None => buffer.clear_outputs(),
        }
    }

    /// Process one block of 64-bit audio.
    pub fn process_f64(&mut self, inputs: &[&[f64]], outputs: &mut [&mut [f64]], num_samples: usize) {
        let mut buffer = Buffer::new(inputs, outputs, num_samples);
        match self.processor_for(num_samples) {
            Some(processor) => processor.process_f64(&mut buffer),
            None => buffer.clear_outputs(),
        }
    }

    /// Whether the prepared processor handles 64-bit audio natively.
    pub fn supports_double_precision(&self) -> bool {
        match &self.state {
            PluginState::Prepared { processor, .. } => processor.supports_double_precision(),
            _ => false,
        }
    }

    fn processor_for(&mut self, num_samples: usize) -> Option<&mut P::Processor> {
        match &mut self.state {
            PluginState::Prepared {
                processor,
                max_block_size,
            } if num_samples <= *max_block_size => Some(processor),
            _ => None,
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Serialize all parameter values.
    pub fn get_state(&self) -> PluginResult<Vec<u8>> {
        Ok(self.parameters.save_state(self.config.state_tag())?)
    }

    /// Restore parameter values. An empty blob restores nothing.
    ///
    /// On error, no parameter changes.
    pub fn set_state(&self, data: &[u8]) -> PluginResult<()> {
        if data.is_empty() {
            debug!("Empty state blob, keeping current values");
            return Ok(());
        }
        self.parameters.load_state(self.config.state_tag(), data)?;
        Ok(())
    }

    // =========================================================================
    // Programs
    // =========================================================================

    /// Number of programs. Always one.
    pub fn program_count(&self) -> usize {
        1
    }

    /// Index of the current program. Always zero.
    pub fn current_program(&self) -> usize {
        0
    }

    /// Program changes are ignored.
    pub fn set_current_program(&mut self, index: usize) {
        debug!("Ignoring program change to {}", index);
    }

    /// Name of a program. Always empty.
    pub fn program_name(&self, _index: usize) -> &'static str {
        ""
    }

    /// Program renames are ignored.
    pub fn rename_program(&mut self, index: usize, name: &str) {
        debug!("Ignoring rename of program {} to '{}'", index, name);
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    /// Plugin name.
    pub fn name(&self) -> &'static str {
        self.config.name
    }

    /// Whether the plugin wants MIDI input.
    pub fn accepts_midi(&self) -> bool {
        self.config.category.accepts_midi()
    }

    /// Whether the plugin produces MIDI output.
    pub fn produces_midi(&self) -> bool {
        self.config.category.produces_midi()
    }

    /// Whether the plugin processes MIDI only.
    pub fn is_midi_effect(&self) -> bool {
        self.config.category.is_midi_effect()
    }

    /// Audio tail length in seconds.
    pub fn tail_length_seconds(&self) -> f64 {
        P::tail_length_seconds()
    }

    // =========================================================================
    // Editor
    // =========================================================================

    /// Whether the plugin provides an editor.
    pub fn has_editor(&self) -> bool {
        P::has_editor()
    }

    /// Create a new editor bound to the shared parameters.
    pub fn create_editor(&self) -> Option<Box<dyn EditorDelegate>> {
        P::create_editor(self.parameters())
    }
}
