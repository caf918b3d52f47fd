//! Bus layouts negotiated with the host.
//!
//! A plugin declares a default [`BusLayout`] and decides which layouts it
//! accepts. The host proposes layouts before processing starts; once accepted,
//! the layout is validated against [`MAX_CHANNELS`] and fixed until the next
//! negotiation, so the processing path never re-checks channel counts.

use std::fmt;

use crate::types::MAX_CHANNELS;

/// Channel configuration of one bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelSet {
    /// Bus not present or disabled.
    #[default]
    Disabled,
    /// One channel.
    Mono,
    /// Left and right.
    Stereo,
    /// Any other channel count without speaker semantics.
    Discrete(u32),
}

impl ChannelSet {
    /// Number of channels in this set.
    pub const fn channel_count(&self) -> usize {
        match self {
            Self::Disabled => 0,
            Self::Mono => 1,
            Self::Stereo => 2,
            Self::Discrete(count) => *count as usize,
        }
    }

    /// Channel set for a plain channel count.
    pub const fn from_channel_count(count: usize) -> Self {
        match count {
            0 => Self::Disabled,
            1 => Self::Mono,
            2 => Self::Stereo,
            n => Self::Discrete(n as u32),
        }
    }
}

impl fmt::Display for ChannelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Mono => write!(f, "mono"),
            Self::Stereo => write!(f, "stereo"),
            Self::Discrete(count) => write!(f, "{count}ch"),
        }
    }
}

/// Main input and output bus configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusLayout {
    /// Main input bus.
    pub main_input: ChannelSet,
    /// Main output bus.
    pub main_output: ChannelSet,
}

impl BusLayout {
    /// Create a layout from input and output channel sets.
    pub const fn new(main_input: ChannelSet, main_output: ChannelSet) -> Self {
        Self {
            main_input,
            main_output,
        }
    }

    /// Mono in, mono out.
    pub const fn mono() -> Self {
        Self::new(ChannelSet::Mono, ChannelSet::Mono)
    }

    /// Stereo in, stereo out.
    pub const fn stereo() -> Self {
        Self::new(ChannelSet::Stereo, ChannelSet::Stereo)
    }

    /// Number of main input channels.
    pub const fn input_channels(&self) -> usize {
        self.main_input.channel_count()
    }

    /// Number of main output channels.
    pub const fn output_channels(&self) -> usize {
        self.main_output.channel_count()
    }

    /// Validate that this layout doesn't exceed system limits.
    ///
    /// Returns `Ok(())` if valid, or `Err` with a descriptive message.
    pub fn validate(&self) -> Result<(), String> {
        if self.input_channels() > MAX_CHANNELS {
            return Err(format!(
                "Input bus declares {} channels, but MAX_CHANNELS is {}",
                self.input_channels(),
                MAX_CHANNELS
            ));
        }
        if self.output_channels() > MAX_CHANNELS {
            return Err(format!(
                "Output bus declares {} channels, but MAX_CHANNELS is {}",
                self.output_channels(),
                MAX_CHANNELS
            ));
        }
        Ok(())
    }
}

impl Default for BusLayout {
    /// Stereo in, stereo out.
    fn default() -> Self {
        Self::stereo()
    }
}

impl fmt::Display for BusLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.main_input, self.main_output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = BusLayout::default();
        assert_eq!(layout.input_channels(), 2);
        assert_eq!(layout.output_channels(), 2);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_channel_set_counts() {
        assert_eq!(ChannelSet::from_channel_count(0), ChannelSet::Disabled);
        assert_eq!(ChannelSet::from_channel_count(1), ChannelSet::Mono);
        assert_eq!(ChannelSet::from_channel_count(6), ChannelSet::Discrete(6));
        assert_eq!(ChannelSet::Discrete(6).channel_count(), 6);
    }

    #[test]
    fn test_validate_rejects_too_many_channels() {
        let layout = BusLayout::new(
            ChannelSet::Stereo,
            ChannelSet::Discrete(MAX_CHANNELS as u32 + 1),
        );
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(BusLayout::mono().to_string(), "mono -> mono");
        assert_eq!(
            BusLayout::new(ChannelSet::Disabled, ChannelSet::Discrete(6)).to_string(),
            "disabled -> 6ch"
        );
    }
}
