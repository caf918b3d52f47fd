//! Shared primitive types and limits.

/// Numeric parameter identifier used by hosts that address parameters by number.
///
/// Derived from the parameter's string id with [`fnv1a_hash`].
pub type ParameterId = u32;

/// Parameter value as exchanged with the host (normalized or plain, depending on context).
pub type ParameterValue = f64;

/// Maximum number of channels on the main bus.
pub const MAX_CHANNELS: usize = 32;

/// Width and height in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Clamp each dimension between `min` and `max`.
    pub fn clamp(self, min: Size, max: Size) -> Self {
        Self {
            width: self.width.clamp(min.width, max.width),
            height: self.height.clamp(min.height, max.height),
        }
    }
}

/// Compute the FNV-1a hash of a string at compile time.
///
/// Used to derive stable numeric [`ParameterId`]s from string ids.
pub const fn fnv1a_hash(s: &str) -> u32 {
    const FNV_OFFSET_BASIS: u32 = 2166136261;
    const FNV_PRIME: u32 = 16777619;

    let bytes = s.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}
