//! Types and traits describing the block states the adapters read from and write to.
//!
//! ## Example
//!
//! ```
//! use mcfacing::GenericBlockState;
//!
//! let state: GenericBlockState = "chorus_plant[up=true,down=false]".parse().unwrap();
//! assert_eq!(state.name, "minecraft:chorus_plant");
//! assert_eq!(state.to_string(), "minecraft:chorus_plant[down=false,up=true]");
//! ```

use std::{collections::HashMap, fmt, str::FromStr};

use crate::property::{self, BooleanProperty};

/// Any type that can represent a block state.
pub trait BlockState: Clone + PartialEq + Sized {
    /// Return the default state of the block with the given id, with every property the
    /// [registry](crate::property) knows for it set to its default value.
    fn default_state(block: &str) -> Self;

    /// The id of the block this state belongs to, e.g. `minecraft:vine`.
    fn name(&self) -> Option<&str>;
}

/// Read and write access to the named boolean properties of a block state.
///
/// Adapters never create or destroy the state they wrap, they only go through this trait.
/// It is implemented for `&mut T` as well, so an adapter can work on a borrowed state.
pub trait StateAccess {
    /// Get the value of `property`, falling back to its default when the state does not store
    /// a valid value for it.
    fn get(&self, property: &BooleanProperty) -> bool;

    /// Set `property` to `value`.
    ///
    /// Afterwards [`get`](Self::get) must return `value` for `property`, unless the state cannot
    /// hold properties at all.
    fn set(&mut self, property: &BooleanProperty, value: bool);
}

impl<T: StateAccess + ?Sized> StateAccess for &mut T {
    fn get(&self, property: &BooleanProperty) -> bool {
        (**self).get(property)
    }

    fn set(&mut self, property: &BooleanProperty, value: bool) {
        (**self).set(property, value)
    }
}

/// A generic block state that can represent _any_ possible block state by storing the name and
/// properties as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct GenericBlockState {
    /// The id of this block, e.g. `minecraft:vine`.
    pub name: String,

    /// The properties of this block state as a map from names to values.
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: HashMap<String, String>,
}

impl BlockState for GenericBlockState {
    fn default_state(block: &str) -> Self {
        Self {
            name: block.into(),
            properties: property::properties(block)
                .unwrap_or_default()
                .iter()
                .map(|prop| (prop.name().into(), prop.default_value()))
                .collect(),
        }
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl StateAccess for GenericBlockState {
    fn get(&self, property: &BooleanProperty) -> bool {
        property.decode(
            &self.name,
            self.properties.get(property.name).map(String::as_str),
        )
    }

    fn set(&mut self, property: &BooleanProperty, value: bool) {
        self.properties.insert(property.name.into(), value.to_string());
    }
}

impl fmt::Display for GenericBlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.properties.is_empty() {
            return Ok(());
        }
        let mut properties: Vec<_> = self.properties.iter().collect();
        properties.sort_unstable();
        f.write_str("[")?;
        for (index, (name, value)) in properties.into_iter().enumerate() {
            if index != 0 {
                f.write_str(",")?;
            }
            write!(f, "{name}={value}")?;
        }
        f.write_str("]")
    }
}

/// An error returned when parsing a [`GenericBlockState`] from its text form fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBlockStateError {
    /// The text has no block id before the properties.
    #[error("block state is missing a block id")]
    EmptyName,
    /// The property list was opened with `[` but never closed.
    #[error("missing closing `]` in block state properties")]
    UnclosedBracket,
    /// There is more text after the closing `]`.
    #[error("unexpected input `{0}` after block state properties")]
    TrailingInput(String),
    /// A property has no `=value` part.
    #[error("property `{0}` has no value")]
    MissingValue(String),
    /// A property has an empty name, like in `vine[=true]`.
    #[error("property with value `{0}` has no name")]
    EmptyKey(String),
    /// The block id has a namespace but no path, like `minecraft:`.
    #[error("block id `{0}` has an empty path")]
    EmptyPath(String),
    /// The same property is given twice.
    #[error("property `{0}` is given more than once")]
    DuplicateProperty(String),
}

impl FromStr for GenericBlockState {
    type Err = ParseBlockStateError;

    /// Parse the `namespace:id[name=value,...]` form. The namespace defaults to `minecraft`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, properties) = match s.split_once('[') {
            Some((name, rest)) => match rest.split_once(']') {
                Some((properties, "")) => (name, Some(properties)),
                Some((_, trailing)) => {
                    return Err(ParseBlockStateError::TrailingInput(trailing.into()))
                }
                None => return Err(ParseBlockStateError::UnclosedBracket),
            },
            None => (s, None),
        };
        if name.is_empty() {
            return Err(ParseBlockStateError::EmptyName);
        }
        let name = match name.split_once(':') {
            Some((_, "")) => return Err(ParseBlockStateError::EmptyPath(name.into())),
            Some(_) => name.to_owned(),
            None => format!("minecraft:{name}"),
        };

        let mut map = HashMap::new();
        for prop in properties.into_iter().flat_map(|props| props.split(',')) {
            if prop.is_empty() {
                continue;
            }
            let (key, value) = prop
                .split_once('=')
                .ok_or_else(|| ParseBlockStateError::MissingValue(prop.into()))?;
            if key.is_empty() {
                return Err(ParseBlockStateError::EmptyKey(value.into()));
            }
            if map.insert(key.to_owned(), value.to_owned()).is_some() {
                return Err(ParseBlockStateError::DuplicateProperty(key.into()));
            }
        }

        Ok(Self {
            name,
            properties: map,
        })
    }
}

impl From<GenericBlockState> for fastnbt::Value {
    fn from(state: GenericBlockState) -> Self {
        let mut compound =
            HashMap::from([("Name".to_owned(), fastnbt::Value::String(state.name))]);
        if !state.properties.is_empty() {
            compound.insert(
                "Properties".into(),
                fastnbt::Value::Compound(
                    state
                        .properties
                        .into_iter()
                        .map(|(name, value)| (name, fastnbt::Value::String(value)))
                        .collect(),
                ),
            );
        }
        fastnbt::Value::Compound(compound)
    }
}

impl BlockState for fastnbt::Value {
    fn default_state(block: &str) -> Self {
        GenericBlockState::default_state(block).into()
    }

    fn name(&self) -> Option<&str> {
        match self {
            fastnbt::Value::Compound(root) => match root.get("Name") {
                Some(fastnbt::Value::String(name)) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Properties are stored as strings in the `Properties` compound, which is created (or
/// replaced, if it has another type) on the first write.
///
/// A value that is not a compound is not a block state. Writes to it are dropped with a
/// warning and reads return the property's default.
impl StateAccess for fastnbt::Value {
    fn get(&self, property: &BooleanProperty) -> bool {
        let raw = match self {
            fastnbt::Value::Compound(root) => match root.get("Properties") {
                Some(fastnbt::Value::Compound(props)) => match props.get(property.name) {
                    Some(fastnbt::Value::String(value)) => Some(value.as_str()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        };
        property.decode(BlockState::name(self).unwrap_or("<unnamed>"), raw)
    }

    fn set(&mut self, property: &BooleanProperty, value: bool) {
        let fastnbt::Value::Compound(root) = self else {
            log::warn!(
                "cannot set property `{}` on an NBT block state that is not a compound",
                property.name
            );
            return;
        };
        let props = root
            .entry("Properties".into())
            .or_insert_with(|| fastnbt::Value::Compound(HashMap::new()));
        if !matches!(props, fastnbt::Value::Compound(_)) {
            log::warn!("replacing `Properties` tag that is not a compound: {props:?}");
            *props = fastnbt::Value::Compound(HashMap::new());
        }
        if let fastnbt::Value::Compound(props) = props {
            props.insert(
                property.name.into(),
                fastnbt::Value::String(value.to_string()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_print() {
        let state: GenericBlockState = "minecraft:fire[age=3,west=true]".parse().unwrap();
        assert_eq!(state.properties["age"], "3");
        assert_eq!(state.to_string(), "minecraft:fire[age=3,west=true]");

        let bare: GenericBlockState = "stone".parse().unwrap();
        assert_eq!(bare.to_string(), "minecraft:stone");
        assert!(bare.properties.is_empty());

        let empty: GenericBlockState = "vine[]".parse().unwrap();
        assert!(empty.properties.is_empty());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "".parse::<GenericBlockState>(),
            Err(ParseBlockStateError::EmptyName)
        );
        assert_eq!(
            "[up=true]".parse::<GenericBlockState>(),
            Err(ParseBlockStateError::EmptyName)
        );
        assert_eq!(
            "vine[up=true".parse::<GenericBlockState>(),
            Err(ParseBlockStateError::UnclosedBracket)
        );
        assert_eq!(
            "vine[up=true]x".parse::<GenericBlockState>(),
            Err(ParseBlockStateError::TrailingInput("x".into()))
        );
        assert_eq!(
            "vine[up]".parse::<GenericBlockState>(),
            Err(ParseBlockStateError::MissingValue("up".into()))
        );
        assert_eq!(
            "vine[=true]".parse::<GenericBlockState>(),
            Err(ParseBlockStateError::EmptyKey("true".into()))
        );
        assert_eq!(
            "minecraft:".parse::<GenericBlockState>(),
            Err(ParseBlockStateError::EmptyPath("minecraft:".into()))
        );
        assert_eq!(
            "minecraft:[up=true]".parse::<GenericBlockState>(),
            Err(ParseBlockStateError::EmptyPath("minecraft:".into()))
        );
        assert_eq!(
            "vine[up=true,up=false]".parse::<GenericBlockState>(),
            Err(ParseBlockStateError::DuplicateProperty("up".into()))
        );
    }

    #[test]
    fn default_state_from_registry() {
        let state = GenericBlockState::default_state("minecraft:fire");
        assert_eq!(
            state.to_string(),
            "minecraft:fire[age=0,east=false,north=false,south=false,up=false,west=false]"
        );

        let unknown = GenericBlockState::default_state("minecraft:stone");
        assert!(unknown.properties.is_empty());
    }

    #[test]
    fn nbt_state_access() {
        let prop = BooleanProperty::lookup("minecraft:vine", "up").unwrap();
        let mut nbt = fastnbt::Value::default_state("minecraft:vine");
        assert!(!StateAccess::get(&nbt, prop));
        StateAccess::set(&mut nbt, prop, true);
        assert!(StateAccess::get(&nbt, prop));
        assert_eq!(BlockState::name(&nbt), Some("minecraft:vine"));

        // a state without a `Properties` tag gets one on the first write
        let mut bare = fastnbt::nbt!({ "Name": "minecraft:vine" });
        StateAccess::set(&mut bare, prop, true);
        assert_eq!(
            bare,
            fastnbt::nbt!({ "Name": "minecraft:vine", "Properties": { "up": "true" } })
        );
    }

    #[test]
    fn nbt_properties_tag_of_wrong_type_is_replaced() {
        let prop = BooleanProperty::lookup("minecraft:vine", "up").unwrap();
        let mut nbt = fastnbt::nbt!({ "Name": "minecraft:vine", "Properties": "oops" });
        StateAccess::set(&mut nbt, prop, true);
        assert!(StateAccess::get(&nbt, prop));
        assert_eq!(
            nbt,
            fastnbt::nbt!({ "Name": "minecraft:vine", "Properties": { "up": "true" } })
        );
    }

    #[test]
    fn nbt_non_compound_drops_writes() {
        let prop = BooleanProperty::lookup("minecraft:vine", "up").unwrap();
        let mut nbt = fastnbt::Value::Int(3);
        StateAccess::set(&mut nbt, prop, true);
        assert_eq!(nbt, fastnbt::Value::Int(3));
        assert!(!StateAccess::get(&nbt, prop));
        assert_eq!(BlockState::name(&nbt), None);
    }

    #[test]
    fn malformed_value_falls_back_to_default() {
        let prop = BooleanProperty::lookup("minecraft:mushroom_stem", "up").unwrap();
        let state: GenericBlockState = "mushroom_stem[up=maybe]".parse().unwrap();
        assert!(state.get(prop));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_as_nbt() {
        let state: GenericBlockState = "vine[up=true]".parse().unwrap();
        assert_eq!(
            fastnbt::to_value(&state),
            Ok(fastnbt::nbt!({ "Name": "minecraft:vine", "Properties": { "up": "true" } }))
        );
    }
}
