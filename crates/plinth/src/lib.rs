//! # Plinth
//!
//! Format-agnostic audio plugin framework.
//!
//! ## Architecture
//!
//! ```text
//! Your Plugin (implements Plugin + AudioProcessor)
//!        ↓
//! PluginInstance<P> (lifecycle, layout, state, programs, editor)
//!        ↓
//! format wrapper (VST3, AU, ...)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plinth::prelude::*;
//!
//! static CONFIG: Config = Config::new("My Gain", Category::Effect);
//!
//! let mut instance = PluginInstance::<MyGain>::new(&CONFIG)?;
//! instance.setup_processing(48000.0, 512)?;
//! instance.process(&inputs, &mut outputs, 512);
//! ```

pub use plinth_core as core;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use plinth::prelude::*;
/// ```
pub mod prelude {
    pub use plinth_core::{
        // Buffer types
        Buffer, Sample,
        // Traits
        AudioProcessor, EditorDelegate, HasParameters, Plugin, ProcessSetup,
        // Host surface
        PluginInstance,
        // Bus configuration
        BusLayout, ChannelSet,
        // Editor description
        Color, EditorConstraints, Label, View,
        // Parameter metadata
        ParameterFlags, ParameterInfo, ParameterKind, ParameterLayout,
        // Parameter types
        BoolParameter, ChoiceParameter, FloatParameter, Formatter, IntParameter, ParameterRef,
        Parameters,
        // Error types
        LayoutError, PluginError, PluginResult, StateError,
        // Geometry
        Size,
    };

    // Shared plugin configuration (format-agnostic)
    pub use plinth_core::{Category, Config, Subcategory};
}
