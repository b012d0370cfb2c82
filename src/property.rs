//! The static registry of properties each known block stores in its state.
//!
//! The registry is generated from `data/blocks.json` with `cargo xtask codegen`.
//!
//! ## Example
//!
//! ```
//! use mcfacing::property::BooleanProperty;
//!
//! let up = BooleanProperty::lookup("minecraft:vine", "up").unwrap();
//! assert!(!up.default);
//!
//! // vines cannot attach to the block below them
//! assert_eq!(BooleanProperty::lookup("minecraft:vine", "down"), None);
//! ```

#[macro_use]
mod macros;
mod list;

/// A descriptor for a named boolean property of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BooleanProperty {
    /// The name under which the value is stored, e.g. `north`.
    pub name: &'static str,
    /// The value of this property in the block's default state.
    pub default: bool,
}

/// A descriptor for a named, bounded integer property of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerProperty {
    /// The name under which the value is stored, e.g. `age`.
    pub name: &'static str,
    /// The smallest allowed value.
    pub min: u8,
    /// The largest allowed value.
    pub max: u8,
    /// The value of this property in the block's default state.
    pub default: u8,
}

/// Any property descriptor in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// A `true`/`false` property.
    Boolean(BooleanProperty),
    /// An integer property.
    Integer(IntegerProperty),
}

/// An error returned by [`BooleanProperty::require`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("block `{block}` has no boolean property `{name}`")]
pub struct MissingProperty {
    /// The block id that was searched.
    pub block: String,
    /// The property name that was not found.
    pub name: String,
}

/// All properties registered for the block with the given id, or [`None`] if the block is not
/// in the registry.
pub fn properties(block: &str) -> Option<&'static [Property]> {
    list::properties(block)
}

/// The ids of all blocks in the registry.
pub fn blocks() -> impl Iterator<Item = &'static str> {
    list::BLOCKS.iter().copied()
}

impl Property {
    /// The name of this property.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean(prop) => prop.name,
            Self::Integer(prop) => prop.name,
        }
    }

    /// The default value of this property, formatted like it is stored in a block state.
    pub fn default_value(&self) -> String {
        match self {
            Self::Boolean(prop) => prop.default.to_string(),
            Self::Integer(prop) => prop.default.to_string(),
        }
    }

    /// Return the boolean descriptor if this is a [`Property::Boolean`].
    pub const fn as_boolean(&self) -> Option<&BooleanProperty> {
        match self {
            Self::Boolean(prop) => Some(prop),
            Self::Integer(_) => None,
        }
    }
}

impl BooleanProperty {
    /// Create a new descriptor.
    pub const fn new(name: &'static str, default: bool) -> Self {
        Self { name, default }
    }

    /// Find the boolean property `name` of `block` in the registry.
    ///
    /// Returns [`None`] if the block is unknown or has no boolean property with that name.
    pub fn lookup(block: &str, name: &str) -> Option<&'static Self> {
        let found = properties(block)?
            .iter()
            .filter_map(Property::as_boolean)
            .find(|prop| prop.name == name);
        if found.is_none() {
            log::debug!("block `{block}` has no boolean property `{name}`");
        }
        found
    }

    /// Like [`lookup`](Self::lookup), but treats an absent property as an error.
    pub fn require(block: &str, name: &str) -> Result<&'static Self, MissingProperty> {
        Self::lookup(block, name).ok_or_else(|| MissingProperty {
            block: block.into(),
            name: name.into(),
        })
    }

    /// Turn the raw stored value into a `bool`, using the default for missing or invalid values.
    pub(crate) fn decode(&self, block: &str, raw: Option<&str>) -> bool {
        match raw {
            Some("true") => true,
            Some("false") => false,
            Some(value) => {
                log::warn!(
                    "block `{block}` stores invalid value `{value}` for property `{}`, using `{}`",
                    self.name,
                    self.default
                );
                self.default
            }
            None => self.default,
        }
    }
}

impl IntegerProperty {
    /// Create a new descriptor.
    pub const fn new(name: &'static str, min: u8, max: u8, default: u8) -> Self {
        Self {
            name,
            min,
            max,
            default,
        }
    }
}
