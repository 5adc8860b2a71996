//! Configuration types for qcircuit picture output.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`PictureConfig`] - Unit length and standalone-document wrapping.
//! - [`VocabularyConfig`] - Which [`Vocabulary`] of symbols is accepted.
//! - [`PrimitiveNames`] - Box names used for each drawing primitive.
//!
//! # Example
//!
//! ```
//! # use qcircuit::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.picture().unit_length(), ".2in");
//! assert!(!config.picture().standalone());
//! ```

use serde::Deserialize;

use qcircuit_core::{
    primitive::{InvalidPrimitiveName, PrimitiveNames},
    vocabulary::Vocabulary,
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Picture output section.
    #[serde(default)]
    picture: PictureConfig,

    /// Symbol vocabulary section.
    #[serde(default)]
    vocabulary: VocabularyConfig,

    /// Box name overrides, keyed by primitive.
    #[serde(default)]
    primitives: PrimitiveNames,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        picture: PictureConfig,
        vocabulary: VocabularyConfig,
        primitives: PrimitiveNames,
    ) -> Self {
        Self {
            picture,
            vocabulary,
            primitives,
        }
    }

    /// Returns the picture configuration.
    pub fn picture(&self) -> &PictureConfig {
        &self.picture
    }

    /// Returns the vocabulary configuration.
    pub fn vocabulary(&self) -> &VocabularyConfig {
        &self.vocabulary
    }

    /// Returns the primitive box names.
    pub fn primitives(&self) -> &PrimitiveNames {
        &self.primitives
    }

    /// Replaces the vocabulary, e.g. from a command-line override.
    pub fn with_vocabulary(mut self, kind: Vocabulary) -> Self {
        self.vocabulary = VocabularyConfig::new(kind);
        self
    }

    /// Turns standalone-document wrapping on.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.picture.standalone = standalone;
        self
    }

    /// Checks values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns an error message if the unit length is blank or a primitive
    /// override is not a valid box name.
    pub fn validate(&self) -> Result<(), String> {
        if self.picture.unit_length.trim().is_empty() {
            return Err("picture.unit_length must not be empty".to_string());
        }
        self.primitives
            .validate()
            .map_err(|err: InvalidPrimitiveName| err.to_string())
    }
}

fn default_unit_length() -> String {
    ".2in".to_string()
}

/// Picture output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PictureConfig {
    /// Length of one picture unit, any LaTeX dimension.
    #[serde(default = "default_unit_length")]
    unit_length: String,

    /// Wrap the picture in a `standalone` LaTeX document.
    #[serde(default)]
    standalone: bool,

    /// File `\input` by the standalone document, expected to define the boxes.
    #[serde(default)]
    preamble: Option<String>,
}

impl Default for PictureConfig {
    fn default() -> Self {
        Self {
            unit_length: default_unit_length(),
            standalone: false,
            preamble: None,
        }
    }
}

impl PictureConfig {
    /// Creates a new [`PictureConfig`].
    ///
    /// # Arguments
    ///
    /// * `unit_length` - Value for `\setlength{\unitlength}{...}`.
    /// * `standalone` - Whether to emit a complete document.
    /// * `preamble` - Optional file to `\input` in standalone mode.
    pub fn new(unit_length: impl Into<String>, standalone: bool, preamble: Option<String>) -> Self {
        Self {
            unit_length: unit_length.into(),
            standalone,
            preamble,
        }
    }

    /// Returns the unit length.
    pub fn unit_length(&self) -> &str {
        &self.unit_length
    }

    /// Returns true if the picture is wrapped in a standalone document.
    pub fn standalone(&self) -> bool {
        self.standalone
    }

    /// Returns the preamble file, if any.
    pub fn preamble(&self) -> Option<&str> {
        self.preamble.as_deref()
    }
}

/// Symbol vocabulary configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct VocabularyConfig {
    /// Accepted [`Vocabulary`].
    #[serde(default)]
    kind: Vocabulary,
}

impl VocabularyConfig {
    pub fn new(kind: Vocabulary) -> Self {
        Self { kind }
    }

    /// Returns the configured [`Vocabulary`].
    pub fn kind(&self) -> Vocabulary {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use qcircuit_core::primitive::Primitive;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.picture().unit_length(), ".2in");
        assert!(!config.picture().standalone());
        assert!(config.picture().preamble().is_none());
        assert_eq!(config.vocabulary().kind(), Vocabulary::Extended);
        assert_eq!(config.primitives().name(Primitive::Wire), "gatesep");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [picture]
            unit_length = "5mm"
            standalone = true
            preamble = "boxes.tex"

            [vocabulary]
            kind = "minimal"

            [primitives]
            hadamard = "had"
            xor = "target"
            "#,
        )
        .unwrap();

        assert_eq!(config.picture().unit_length(), "5mm");
        assert!(config.picture().standalone());
        assert_eq!(config.picture().preamble(), Some("boxes.tex"));
        assert_eq!(config.vocabulary().kind(), Vocabulary::Minimal);
        assert_eq!(config.primitives().name(Primitive::Hadamard), "had");
        assert_eq!(config.primitives().name(Primitive::Xor), "target");
        assert_eq!(config.primitives().name(Primitive::Swap), "swapsym");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = toml::from_str("[picture]\nstandalone = true\n").unwrap();

        assert_eq!(config.picture().unit_length(), ".2in");
        assert!(config.picture().standalone());
        assert_eq!(config.vocabulary().kind(), Vocabulary::Extended);
    }

    #[test]
    fn test_unknown_primitive_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[primitives]\nrainbow = \"r\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_box_name() {
        let config: AppConfig = toml::from_str("[primitives]\nwire = \"wire_1\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_unit_length() {
        let config = AppConfig::new(
            PictureConfig::new("  ", false, None),
            VocabularyConfig::default(),
            PrimitiveNames::default(),
        );
        assert_eq!(
            config.validate(),
            Err("picture.unit_length must not be empty".to_string())
        );
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_vocabulary(Vocabulary::Minimal)
            .with_standalone(true);

        assert_eq!(config.vocabulary().kind(), Vocabulary::Minimal);
        assert!(config.picture().standalone());
    }
}
