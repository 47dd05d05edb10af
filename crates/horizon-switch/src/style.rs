//! Encapsulated styling for the switch element.
//!
//! The switch ships its own stylesheet scoped to its shadow tree. Host
//! selectors cannot reach inside; the only theming surface is the fixed set
//! of custom properties listed in [`CUSTOM_PROPERTIES`], declared on `:host`
//! and consumed through `var(--name, fallback)` by the internal rules.
//!
//! # Example
//!
//! ```
//! use horizon_switch::style::SwitchStyle;
//!
//! let mut style = SwitchStyle::new();
//! style.set_variable("--switch-lever_checked--background", "#007AFF").unwrap();
//! assert!(style.set_variable("--my-color", "red").is_err());
//!
//! assert!(style.stylesheet().contains("--switch-lever_checked--background: #007AFF;"));
//! ```

use std::fmt::Write as _;

use crate::logging::targets;

/// Errors raised when theming the switch stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The name is not one of the switch's custom properties.
    #[error("'--{name}' is not a themable switch property")]
    UnknownProperty { name: String },

    /// The value is empty.
    #[error("Empty value for '--{name}'")]
    EmptyValue { name: String },

    /// The value would terminate the declaration, the rule or the `<style>`
    /// element it is written into.
    #[error("Invalid value for '--{name}': {value:?}")]
    InvalidValue { name: String, value: String },
}

/// A themable custom property and its built-in value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomProperty {
    /// Property name without the leading `--`.
    pub name: &'static str,
    /// Value used when the host does not override it.
    pub default: &'static str,
}

const fn prop(name: &'static str, default: &'static str) -> CustomProperty {
    CustomProperty { name, default }
}

/// The complete theming contract of the switch.
pub const CUSTOM_PROPERTIES: &[CustomProperty] = &[
    prop("switch-lever--background", "rgb(230, 230, 230)"),
    prop("switch-lever_checked--background", "rgb(125, 200, 193)"),
    prop("switch-lever--handle-background", "rgb(247, 245, 245)"),
    prop("switch-lever_checked--handle-background", "rgb(112, 179, 173)"),
    prop("switch-lever_active--handle-box-shadow", "rgba(38, 166, 154, 0.1)"),
    prop("switch--on-text-color", "rgb(158, 158, 158)"),
    prop("switch--off-text-color", "rgb(205, 92, 92)"),
    prop("switch_checked--on-text-color", "rgb(112, 179, 173)"),
    prop("switch_checked--off-text-color", "rgb(158, 158, 158)"),
    prop("switch_focus--background", "rgb(255, 255, 255)"),
    prop("switch_focus--outline-color", "rgb(100, 149, 237)"),
    prop("switch_disabled--off-text-color", "rgb(158, 158, 158)"),
    prop("switch_disabled--on-text-color", "rgb(158, 158, 158)"),
];

/// Look up a custom property by name, with or without the leading `--`.
pub fn custom_property(name: &str) -> Option<&'static CustomProperty> {
    let name = name.strip_prefix("--").unwrap_or(name);
    CUSTOM_PROPERTIES.iter().find(|p| p.name == name)
}

/// Layout direction of the host, read from its `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right. The lever handle starts on the left.
    #[default]
    Ltr,
    /// Right to left. The lever handle starts on the right.
    Rtl,
}

impl TextDirection {
    /// Parse a `dir` attribute value. Anything other than `rtl` is LTR.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("rtl") => Self::Rtl,
            _ => Self::Ltr,
        }
    }

    /// The attribute value for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// The switch's encapsulated stylesheet plus host overrides of its custom
/// properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchStyle {
    overrides: Vec<(&'static str, String)>,
}

impl SwitchStyle {
    /// Create a style with every custom property at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override a custom property.
    pub fn set_variable(&mut self, name: &str, value: &str) -> Result<(), StyleError> {
        let bare = name.strip_prefix("--").unwrap_or(name);
        let property = custom_property(bare).ok_or_else(|| StyleError::UnknownProperty {
            name: bare.to_string(),
        })?;

        let value = value.trim();
        if value.is_empty() {
            return Err(StyleError::EmptyValue {
                name: bare.to_string(),
            });
        }
        if value.contains([';', '{', '}', '<']) {
            return Err(StyleError::InvalidValue {
                name: bare.to_string(),
                value: value.to_string(),
            });
        }

        tracing::debug!(target: targets::STYLE, name = property.name, value, "custom property overridden");
        match self.overrides.iter_mut().find(|(n, _)| *n == property.name) {
            Some((_, current)) => *current = value.to_string(),
            None => self.overrides.push((property.name, value.to_string())),
        }
        Ok(())
    }

    /// Restore a custom property to its default. Returns `false` if it was
    /// not overridden.
    pub fn reset_variable(&mut self, name: &str) -> bool {
        let bare = name.strip_prefix("--").unwrap_or(name);
        let before = self.overrides.len();
        self.overrides.retain(|(n, _)| *n != bare);
        self.overrides.len() != before
    }

    /// The effective value of a custom property.
    pub fn variable(&self, name: &str) -> Option<&str> {
        let property = custom_property(name)?;
        let value = self
            .overrides
            .iter()
            .find(|(n, _)| *n == property.name)
            .map_or(property.default, |(_, v)| v.as_str());
        Some(value)
    }

    /// Iterate over the host overrides.
    pub fn overrides(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.overrides.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// The `:host` rule declaring every custom property.
    pub fn host_rule(&self) -> String {
        let mut rule = String::from(":host {\n  display: inline-block;\n  contain: layout;\n");
        for property in CUSTOM_PROPERTIES {
            let value = self.variable(property.name).unwrap_or(property.default);
            let _ = writeln!(rule, "  --{}: {};", property.name, value);
        }
        rule.push_str("}\n");
        rule
    }

    /// The complete stylesheet for the shadow tree.
    pub fn stylesheet(&self) -> String {
        let mut sheet = self.host_rule();
        sheet.push_str(SHADOW_RULES);
        sheet
    }
}

/// Rules scoped to the shadow tree. Colors always go through the custom
/// properties so that [`SwitchStyle`] overrides apply.
const SHADOW_RULES: &str = r#":host([hidden]) {
  display: none;
}

:host([disabled]) {
  opacity: 0.7;
  cursor: not-allowed;
  pointer-events: none;
}

:host(:focus) {
  outline: none;
}

.switch {
  position: relative;
  display: inline-flex;
  align-items: center;
  cursor: pointer;
  user-select: none;
  -webkit-tap-highlight-color: transparent;
}

.switch [type=checkbox]:not(:hover):not(:active):focus ~ .switch__lever {
  box-shadow: 1px 0 2px rgb(197 195 195) inset, -1px 1px 4px rgb(197 195 195) inset,
    0 0 0 8px var(--switch_focus--background, rgb(255 255 255)),
    0 0 0 9px var(--switch_focus--outline-color, rgb(100, 149, 237));
}

.switch__lever {
  position: relative;
  display: inline-block;
  width: 3.75em;
  height: 1.25em;
  margin: 0 0.625em;
  border-radius: 1.25em;
  vertical-align: middle;
  background: var(--switch-lever--background, rgb(230 230 230));
  box-shadow: 1px 0 2px rgb(197 195 195) inset, -1px 1px 4px rgb(197 195 195) inset;
  transition: background .1s;
}

.switch__lever::before {
  content: "";
  position: absolute;
  top: -0.3125em;
  left: -0.125em;
  width: 1.875em;
  height: 1.875em;
  border-radius: 50%;
  background: var(--switch-lever--handle-background, rgb(247, 245, 245));
  box-shadow: 1px 1px 4px rgba(0, 0, 0, .4);
  transition: transform .1s ease;
}

:host([dir="rtl"]) .switch .switch__lever::before {
  left: initial;
  right: -0.125em;
}

:dir(rtl) .switch .switch__lever::before {
  left: initial;
  right: -0.125em;
}

.switch__lever:active::before {
  box-shadow: 0 0.0625em 0.1875em 0.0625em rgba(0, 0, 0, 0.4),
    0 0 0 0.625em var(--switch-lever_active--handle-box-shadow, rgba(38, 166, 154, 0.1));
}

[type="checkbox"]:checked ~ .switch__lever {
  background: var(--switch-lever_checked--background, rgb(125, 200, 193));
}

[type="checkbox"]:checked ~ .switch__lever::before {
  transform: translateX(111%);
  background: var(--switch-lever_checked--handle-background, rgb(112, 179, 173));
}

:host([dir="rtl"]) .switch [type="checkbox"]:checked ~ .switch__lever::before {
  transform: translateX(-111%);
}

:dir(rtl) .switch [type="checkbox"]:checked ~ .switch__lever::before {
  transform: translateX(-111%);
}

.switch__on-text {
  color: var(--switch--on-text-color, rgb(158, 158, 158));
}

[type="checkbox"]:checked ~ .switch__on-text {
  color: var(--switch_checked--on-text-color, rgb(112, 179, 173));
}

:host([disabled]) .switch__on-text {
  color: var(--switch_disabled--on-text-color, rgb(158, 158, 158));
}

.switch__off-text {
  color: var(--switch--off-text-color, rgb(205, 92, 92));
}

[type="checkbox"]:checked ~ .switch__off-text {
  color: var(--switch_checked--off-text-color, rgb(158, 158, 158));
}

:host([disabled]) .switch__off-text {
  color: var(--switch_disabled--off-text-color, rgb(158, 158, 158));
}

.switch--elastic [type="checkbox"]:checked ~ .switch__lever {
  transition-delay: .1s;
}

.switch--elastic:active .switch__lever::before,
.switch--elastic .switch__lever.is-active::before {
  width: 2.3em;
}

.switch--elastic .switch__lever::before {
  transition: transform .3s, left .3s, width .3s;
}

.switch--elastic [type="checkbox"]:checked ~ .switch__lever::before {
  transform: translateX(-100%);
  left: 100%;
}

.off-screen {
  position: fixed;
  width: 1px;
  height: 1px;
  margin: -1px;
  padding: 0;
  border: none;
  overflow: hidden;
  clip-path: inset(100%);
  white-space: nowrap;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_declared_on_host() {
        let style = SwitchStyle::new();
        let rule = style.host_rule();
        for property in CUSTOM_PROPERTIES {
            assert!(rule.contains(&format!("--{}: {};", property.name, property.default)));
        }
        assert_eq!(
            style.variable("--switch--off-text-color"),
            Some("rgb(205, 92, 92)")
        );
    }

    #[test]
    fn test_override_and_reset() {
        let mut style = SwitchStyle::new();
        style
            .set_variable("switch_focus--outline-color", " #FF0000 ")
            .unwrap();
        style
            .set_variable("--switch_focus--outline-color", "#00FF00")
            .unwrap();

        assert_eq!(style.variable("switch_focus--outline-color"), Some("#00FF00"));
        assert_eq!(style.overrides().count(), 1);

        assert!(style.reset_variable("--switch_focus--outline-color"));
        assert!(!style.reset_variable("--switch_focus--outline-color"));
        assert_eq!(
            style.variable("switch_focus--outline-color"),
            Some("rgb(100, 149, 237)")
        );
    }

    #[test]
    fn test_rejected_overrides() {
        let mut style = SwitchStyle::new();
        assert_eq!(
            style.set_variable("--background", "red"),
            Err(StyleError::UnknownProperty {
                name: "background".to_string()
            })
        );
        assert!(matches!(
            style.set_variable("--switch-lever--background", "  "),
            Err(StyleError::EmptyValue { .. })
        ));
        assert!(matches!(
            style.set_variable("--switch-lever--background", "red; } .switch { color: red"),
            Err(StyleError::InvalidValue { .. })
        ));
        assert!(matches!(
            style.set_variable(
                "--switch-lever--background",
                "red</style><script>alert(1)</script>"
            ),
            Err(StyleError::InvalidValue { .. })
        ));
        assert_eq!(style, SwitchStyle::new());
        assert!(!style.stylesheet().contains("</style>"));
    }

    #[test]
    fn test_rtl_rules_cover_host_and_inherited_direction() {
        let sheet = SwitchStyle::new().stylesheet();
        for scope in [":host([dir=\"rtl\"]) .switch", ":dir(rtl) .switch"] {
            assert!(sheet.contains(&format!("{scope} .switch__lever::before {{")));
            assert!(sheet.contains(&format!(
                "{scope} [type=\"checkbox\"]:checked ~ .switch__lever::before {{"
            )));
        }
    }

    #[test]
    fn test_stylesheet_uses_only_declared_variables() {
        let sheet = SwitchStyle::new().stylesheet();
        for reference in sheet.split("var(--").skip(1) {
            let name = reference.split(',').next().unwrap_or_default();
            assert!(custom_property(name).is_some(), "undeclared variable {name}");
        }
    }

    #[test]
    fn test_text_direction() {
        assert_eq!(TextDirection::from_attribute(None), TextDirection::Ltr);
        assert_eq!(TextDirection::from_attribute(Some("RTL")), TextDirection::Rtl);
        assert_eq!(TextDirection::from_attribute(Some("auto")), TextDirection::Ltr);
        assert_eq!(TextDirection::Rtl.as_str(), "rtl");
    }
}
