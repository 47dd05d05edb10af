//! Declarative switch configuration.
//!
//! A [`SwitchConfig`] describes a switch the way a host document would
//! declare it: labels, flags, the initial position and theme overrides. It
//! can be loaded from TOML:
//!
//! ```toml
//! on-label = "Yes"
//! off-label = "No"
//! elastic = true
//! init-state = "Yes"
//!
//! [theme]
//! "switch-lever_checked--background" = "#007AFF"
//! ```
//!
//! Building a switch from a configuration goes through the attribute surface,
//! so it behaves exactly like markup. The `init-state` position is applied on
//! the first [`attach`](crate::ToggleSwitch::attach).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::logging::targets;
use crate::style::{StyleError, TextDirection};
use crate::switch::{ToggleSwitch, attributes};

/// Errors raised while loading or applying a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document is malformed or does not match [`SwitchConfig`].
    #[error("Invalid switch configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize switch configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The configuration file could not be read or written.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A theme entry was rejected.
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Declarative description of a switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SwitchConfig {
    /// Text of the on position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_label: Option<String>,
    /// Text of the off position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_label: Option<String>,
    /// Enable the stretch animation.
    pub elastic: bool,
    /// Reject user interaction.
    pub disabled: bool,
    /// Initial position, applied on the first attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_state: Option<String>,
    /// Form name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Text direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<TextDirection>,
    /// Custom property overrides, keyed by name with or without `--`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub theme: BTreeMap<String, String>,
}

impl SwitchConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading switch configuration");
        Self::from_toml_str(&source)
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The configuration as declarative attributes, in application order.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        if let Some(name) = &self.name {
            attrs.push((attributes::NAME, name.clone()));
        }
        if let Some(dir) = self.dir {
            attrs.push((attributes::DIR, dir.as_str().to_string()));
        }
        if let Some(label) = &self.on_label {
            attrs.push((attributes::ON_LABEL, label.clone()));
        }
        if let Some(label) = &self.off_label {
            attrs.push((attributes::OFF_LABEL, label.clone()));
        }
        if self.elastic {
            attrs.push((attributes::ELASTIC, String::new()));
        }
        if self.disabled {
            attrs.push((attributes::DISABLED, String::new()));
        }
        if let Some(state) = &self.init_state {
            attrs.push((attributes::INIT_STATE, state.clone()));
        }
        attrs
    }

    /// Build a switch from this configuration.
    pub fn build(&self) -> Result<ToggleSwitch, ConfigError> {
        ToggleSwitch::from_config(self)
    }
}

impl ToggleSwitch {
    /// Create a switch from a declarative configuration.
    ///
    /// Fails if a theme entry names an unknown custom property or has an
    /// invalid value.
    pub fn from_config(config: &SwitchConfig) -> Result<Self, ConfigError> {
        let mut switch = Self::with_attributes(config.attributes());
        for (name, value) in &config.theme {
            switch.set_style_variable(name, value)?;
        }
        tracing::debug!(
            target: targets::CONFIG,
            attributes = config.attributes().len(),
            theme = config.theme.len(),
            "switch built from configuration"
        );
        Ok(switch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = SwitchConfig::from_toml_str("").unwrap();
        assert_eq!(config, SwitchConfig::default());
        assert!(config.attributes().is_empty());
    }

    #[test]
    fn test_parse_kebab_case() {
        let config = SwitchConfig::from_toml_str(
            r#"
            on-label = "Yes"
            off-label = "No"
            init-state = "Yes"
            elastic = true
            dir = "rtl"

            [theme]
            "--switch_focus--outline-color" = "red"
            "#,
        )
        .unwrap();

        assert_eq!(config.on_label.as_deref(), Some("Yes"));
        assert_eq!(config.init_state.as_deref(), Some("Yes"));
        assert!(config.elastic);
        assert!(!config.disabled);
        assert_eq!(config.dir, Some(TextDirection::Rtl));
        assert_eq!(config.theme.len(), 1);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = SwitchConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = SwitchConfig::from_toml_str("elastic = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_build_applies_attributes() {
        let config = SwitchConfig {
            on_label: Some("I".into()),
            off_label: Some("O".into()),
            disabled: true,
            name: Some("power".into()),
            ..Default::default()
        };
        let switch = config.build().unwrap();

        assert_eq!(switch.on_label(), "I");
        assert_eq!(switch.state(), "O");
        assert!(switch.disabled());
        assert_eq!(switch.name(), Some("power"));
    }

    #[test]
    fn test_build_rejects_unknown_theme_property() {
        let mut config = SwitchConfig::default();
        config.theme.insert("--accent".into(), "red".into());

        let err = config.build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Style(StyleError::UnknownProperty { .. })
        ));
        assert_eq!(err.to_string(), "'--accent' is not a themable switch property");
    }

    #[test]
    fn test_toml_output_skips_unset_fields() {
        let config = SwitchConfig {
            on_label: Some("Yes".into()),
            ..Default::default()
        };
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("on-label = \"Yes\""));
        assert!(!text.contains("init-state"));
        assert!(!text.contains("[theme]"));
        assert_eq!(SwitchConfig::from_toml_str(&text).unwrap(), config);
    }
}
