//! Process-wide element registry.
//!
//! Maps a tag name to the behavior of a custom element type. Definitions are
//! made once, at startup, through an explicit [`define`] call; redefining a
//! tag is an error.
//!
//! # Example
//!
//! ```ignore
//! use horizon_switch_core::registry::{self, ElementDefinition};
//!
//! registry::define(ElementDefinition::new::<MyElement, _>("my-element", || {
//!     Box::new(MyElement::new())
//! }))?;
//!
//! let element = registry::create("my-element")?;
//! ```

use std::any::type_name;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::element::CustomElement;
use crate::error::RegistryError;
use crate::logging::targets;

type Constructor = Arc<dyn Fn() -> Box<dyn CustomElement> + Send + Sync>;

/// Names reserved by the host document model that custom elements may not use.
const RESERVED_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// The behavior registered for a tag name.
#[derive(Clone)]
pub struct ElementDefinition {
    tag: String,
    type_name: &'static str,
    constructor: Constructor,
}

impl ElementDefinition {
    /// Create a definition for element type `T`.
    pub fn new<T, F>(tag: impl Into<String>, constructor: F) -> Self
    where
        T: CustomElement + 'static,
        F: Fn() -> Box<dyn CustomElement> + Send + Sync + 'static,
    {
        Self {
            tag: tag.into(),
            type_name: type_name::<T>(),
            constructor: Arc::new(constructor),
        }
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The concrete element type's name.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Construct a new element instance.
    pub fn construct(&self) -> Box<dyn CustomElement> {
        (self.constructor)()
    }
}

impl fmt::Debug for ElementDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementDefinition")
            .field("tag", &self.tag)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// A registry of element definitions.
///
/// Most code uses the process-wide instance through [`define`], [`lookup`]
/// and [`create`]; standalone registries are useful in tests.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    definitions: HashMap<String, ElementDefinition>,
}

impl ElementRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition.
    pub fn define(&mut self, definition: ElementDefinition) -> Result<(), RegistryError> {
        validate_tag_name(definition.tag())?;

        if self.definitions.contains_key(definition.tag()) {
            tracing::debug!(target: targets::REGISTRY, tag = definition.tag(), "duplicate definition rejected");
            return Err(RegistryError::DuplicateDefinition {
                tag: definition.tag().to_string(),
            });
        }

        tracing::debug!(
            target: targets::REGISTRY,
            tag = definition.tag(),
            type_name = definition.type_name(),
            "element defined"
        );
        self.definitions
            .insert(definition.tag().to_string(), definition);
        Ok(())
    }

    /// Whether a tag has been defined.
    pub fn is_defined(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }

    /// Look up the definition for a tag.
    pub fn lookup(&self, tag: &str) -> Option<&ElementDefinition> {
        self.definitions.get(tag)
    }

    /// Construct a new element by tag name.
    pub fn create(&self, tag: &str) -> Result<Box<dyn CustomElement>, RegistryError> {
        self.lookup(tag)
            .map(ElementDefinition::construct)
            .ok_or_else(|| RegistryError::UnknownTag {
                tag: tag.to_string(),
            })
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry has no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Check that `tag` is a valid custom element name.
///
/// A valid name starts with a lowercase ASCII letter, contains a hyphen,
/// uses only lowercase letters, digits, `-`, `.` and `_`, and is not one of
/// the reserved names.
pub fn validate_tag_name(tag: &str) -> Result<(), RegistryError> {
    let invalid = |reason| RegistryError::InvalidTagName {
        tag: tag.to_string(),
        reason,
    };

    match tag.chars().next() {
        Some(c) if c.is_ascii_lowercase() => {}
        Some(_) => return Err(invalid("must start with a lowercase ASCII letter")),
        None => return Err(invalid("must not be empty")),
    }
    if !tag.contains('-') {
        return Err(invalid("must contain a hyphen"));
    }
    if !tag
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
    {
        return Err(invalid("may only contain lowercase letters, digits, '-', '.' and '_'"));
    }
    if RESERVED_NAMES.contains(&tag) {
        return Err(invalid("is a reserved name"));
    }
    Ok(())
}

static GLOBAL_REGISTRY: Mutex<Option<ElementRegistry>> = Mutex::new(None);

fn with_global<R>(f: impl FnOnce(&mut ElementRegistry) -> R) -> R {
    let mut guard = GLOBAL_REGISTRY.lock();
    f(guard.get_or_insert_with(ElementRegistry::new))
}

/// Register a definition in the process-wide registry.
pub fn define(definition: ElementDefinition) -> Result<(), RegistryError> {
    with_global(|registry| registry.define(definition))
}

/// Whether a tag is defined in the process-wide registry.
pub fn is_defined(tag: &str) -> bool {
    with_global(|registry| registry.is_defined(tag))
}

/// Look up a definition in the process-wide registry.
pub fn lookup(tag: &str) -> Option<ElementDefinition> {
    with_global(|registry| registry.lookup(tag).cloned())
}

/// Construct a new element from the process-wide registry.
///
/// The registry lock is released before the constructor runs, so
/// constructors may themselves consult the registry.
pub fn create(tag: &str) -> Result<Box<dyn CustomElement>, RegistryError> {
    let definition = lookup(tag).ok_or_else(|| RegistryError::UnknownTag {
        tag: tag.to_string(),
    })?;
    Ok(definition.construct())
}
