//! Error types for plugin construction, state handling and host negotiation.

use std::fmt;

use crate::bus_config::BusLayout;

/// Errors raised while building a parameter layout or typed parameters from it.
///
/// These indicate a misdeclared plugin, so they surface at construction time
/// instead of during processing.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A parameter was declared with an empty string id.
    EmptyId,
    /// Two parameters share the same string id.
    DuplicateId(&'static str),
    /// Two different string ids hash to the same numeric id.
    HashCollision {
        /// First string id.
        first: &'static str,
        /// Second string id.
        second: &'static str,
    },
    /// Range start is greater than range end (or not finite).
    InvalidRange(&'static str),
    /// Step size is zero, negative or not finite.
    InvalidStep(&'static str),
    /// Default value lies outside the declared range.
    DefaultOutOfRange(&'static str),
    /// A choice parameter declares no options.
    NoChoices(&'static str),
    /// A parameter required by the plugin is not part of the layout.
    Missing(&'static str),
    /// A typed parameter was built from a declaration of another kind.
    KindMismatch {
        /// String id of the parameter.
        id: &'static str,
        /// Kind required by the typed parameter.
        expected: &'static str,
        /// Kind found in the declaration.
        found: &'static str,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "parameter declared with an empty id"),
            Self::DuplicateId(id) => write!(f, "duplicate parameter id `{id}`"),
            Self::HashCollision { first, second } => {
                write!(f, "parameter ids `{first}` and `{second}` hash to the same value")
            }
            Self::InvalidRange(id) => write!(f, "parameter `{id}` has an invalid range"),
            Self::InvalidStep(id) => write!(f, "parameter `{id}` has an invalid step size"),
            Self::DefaultOutOfRange(id) => {
                write!(f, "default of parameter `{id}` is outside its range")
            }
            Self::NoChoices(id) => write!(f, "choice parameter `{id}` has no options"),
            Self::Missing(id) => write!(f, "parameter `{id}` is not declared"),
            Self::KindMismatch { id, expected, found } => write!(
                f,
                "parameter `{id}` is declared as {found}, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Errors raised while restoring a state blob.
///
/// A restore that fails with any of these leaves every parameter untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The blob is not a valid state document.
    Malformed(String),
    /// The blob belongs to another plugin or schema.
    TagMismatch {
        /// Tag this plugin writes.
        expected: String,
        /// Tag found in the blob.
        found: String,
    },
    /// The blob was written by an unknown state version.
    UnsupportedVersion(u32),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(msg) => write!(f, "malformed state blob: {msg}"),
            Self::TagMismatch { expected, found } => {
                write!(f, "state tag `{found}` does not match `{expected}`")
            }
            Self::UnsupportedVersion(version) => {
                write!(f, "unsupported state version {version}")
            }
        }
    }
}

impl std::error::Error for StateError {}

/// Top-level plugin error.
#[derive(Debug, Clone, PartialEq)]
pub enum PluginError {
    /// Parameter declarations are invalid.
    Layout(LayoutError),
    /// A state blob could not be restored.
    State(StateError),
    /// The requested bus layout is not supported.
    UnsupportedLayout(BusLayout),
    /// The operation requires a prepared processor.
    NotPrepared,
    /// The operation is not allowed while the processor is prepared.
    AlreadyPrepared,
}

impl fmt::Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "invalid parameter layout: {err}"),
            Self::State(err) => write!(f, "state error: {err}"),
            Self::UnsupportedLayout(layout) => write!(f, "unsupported bus layout {layout}"),
            Self::NotPrepared => write!(f, "processor is not prepared"),
            Self::AlreadyPrepared => write!(f, "processor is already prepared"),
        }
    }
}

impl std::error::Error for PluginError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::State(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LayoutError> for PluginError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<StateError> for PluginError {
    fn from(err: StateError) -> Self {
        Self::State(err)
    }
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;
