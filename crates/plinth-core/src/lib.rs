//! Core abstractions for the Plinth plugin framework.
//!
//! This crate is format-agnostic: it defines the parameter model, the state
//! blob, audio buffers, bus layouts, the plugin traits and the
//! [`PluginInstance`] host surface a format wrapper drives. It exports no
//! plugin ABI itself.

pub mod buffer;
pub mod bus_config;
pub mod config;
pub mod error;
pub mod gui;
pub mod instance;
pub mod parameter_format;
pub mod parameter_info;
pub mod parameter_layout;
pub mod parameter_types;
pub mod plugin;
pub mod sample;
pub mod state;
pub mod types;

pub use buffer::{Buffer, ChannelPairs};
pub use bus_config::{BusLayout, ChannelSet};
pub use config::{Category, Config, Subcategory};
pub use error::{LayoutError, PluginError, PluginResult, StateError};
pub use gui::{Color, EditorConstraints, EditorDelegate, Label, View};
pub use instance::PluginInstance;
pub use parameter_format::Formatter;
pub use parameter_info::{ParameterFlags, ParameterInfo, ParameterKind};
pub use parameter_layout::ParameterLayout;
pub use parameter_types::{
    BoolParameter, ChoiceParameter, FloatParameter, IntParameter, ParameterRef, Parameters,
};
pub use plugin::{AudioProcessor, HasParameters, Plugin, ProcessSetup};
pub use sample::Sample;
pub use state::STATE_VERSION;
pub use types::{ParameterId, ParameterValue, Size, MAX_CHANNELS};
