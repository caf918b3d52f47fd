//! Plugin configuration.
//!
//! Format-agnostic plugin metadata, built in a `static` with `const` builder
//! methods.
//!
//! # Example
//!
//! ```ignore
//! use plinth_core::config::{Category, Config, Subcategory};
//!
//! pub static CONFIG: Config = Config::new("My Plugin", Category::Effect)
//!     .with_vendor("My Company")
//!     .with_version(env!("CARGO_PKG_VERSION"))
//!     .with_subcategories(&[Subcategory::Tools]);
//! ```

/// Plugin subcategory for more specific classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcategory {
    /// Volume, Mixer, Tuner
    Tools,
    /// Stereo only plug-in
    Stereo,
}

impl Subcategory {
    /// Host-facing subcategory string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Subcategory::Tools => "Tools",
            Subcategory::Stereo => "Stereo",
        }
    }
}

/// Plugin type - determines how hosts categorize and use the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Audio effect (EQ, compressor, reverb, delay)
    Effect,
    /// Virtual instrument (synth, sampler, drum machine)
    Instrument,
    /// MIDI processor (arpeggiator, chord generator)
    MidiEffect,
}

impl Category {
    /// Base category string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Effect | Category::MidiEffect => "Fx",
            Category::Instrument => "Instrument",
        }
    }

    /// Check if this type accepts MIDI input
    pub const fn accepts_midi(&self) -> bool {
        matches!(self, Category::Instrument | Category::MidiEffect)
    }

    /// Check if this type can produce MIDI output
    pub const fn produces_midi(&self) -> bool {
        matches!(self, Category::MidiEffect)
    }

    /// Check if this type processes MIDI only
    pub const fn is_midi_effect(&self) -> bool {
        matches!(self, Category::MidiEffect)
    }
}

/// Unified plugin configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Plugin name displayed in the DAW. Also the tag written into saved state.
    pub name: &'static str,

    /// Plugin category (effect, instrument, etc.)
    pub category: Category,

    /// Vendor/company name.
    pub vendor: &'static str,

    /// Vendor URL.
    pub url: &'static str,

    /// Vendor email.
    pub email: &'static str,

    /// Plugin version string.
    pub version: &'static str,

    /// Plugin subcategories for more specific classification.
    pub subcategories: &'static [Subcategory],
}

impl Config {
    /// Create a new plugin configuration.
    pub const fn new(name: &'static str, category: Category) -> Self {
        Self {
            name,
            category,
            vendor: "Unknown Vendor",
            url: "",
            email: "",
            version: "1.0.0",
            subcategories: &[],
        }
    }

    /// Set the vendor name.
    pub const fn with_vendor(mut self, vendor: &'static str) -> Self {
        self.vendor = vendor;
        self
    }

    /// Set the vendor URL.
    pub const fn with_url(mut self, url: &'static str) -> Self {
        self.url = url;
        self
    }

    /// Set the vendor email.
    pub const fn with_email(mut self, email: &'static str) -> Self {
        self.email = email;
        self
    }

    /// Set the version string.
    pub const fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }

    /// Set the subcategories.
    pub const fn with_subcategories(mut self, subcategories: &'static [Subcategory]) -> Self {
        self.subcategories = subcategories;
        self
    }

    /// Tag identifying this plugin's saved state.
    pub const fn state_tag(&self) -> &'static str {
        self.name
    }

    /// Category string with subcategories appended.
    ///
    /// For example: `Category::Effect` with `[Subcategory::Tools]` becomes `"Fx|Tools"`.
    pub fn categories(&self) -> String {
        let mut result = String::from(self.category.as_str());
        for sub in self.subcategories {
            result.push('|');
            result.push_str(sub.as_str());
        }
        result
    }
}
