//! Typed adapters exposing parts of a block state through stable traits.
//!
//! Every adapter wraps a state implementing [`StateAccess`] and delegates all reads and writes
//! to it. The adapters in this module are generated from `data/blocks.json` with
//! `cargo xtask codegen`.
//!
//! ## Example
//!
//! ```
//! use mcfacing::{
//!     block_data::{ChorusPlant, Fire, MultipleFacing},
//!     BlockFace, FaceSet,
//! };
//!
//! let mut plant = ChorusPlant::new();
//! plant.set_face(BlockFace::Up, true).unwrap();
//! plant.set_face(BlockFace::Down, true).unwrap();
//! assert_eq!(plant.faces(), FaceSet::from([BlockFace::Up, BlockFace::Down]));
//!
//! // fire never burns on the face below it
//! let fire = Fire::new();
//! assert!(!fire.allowed_faces().contains(BlockFace::Down));
//! assert!(fire.has_face(BlockFace::Down).is_err());
//! ```

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};

use crate::{property::BooleanProperty, BlockFace, FaceSet, StateAccess};

pub use self::list::*;

#[macro_use]
mod macros;
mod list;

/// Any typed view onto the state of one specific block.
pub trait BlockData {
    /// The id of the block this data belongs to, e.g. `minecraft:chorus_plant`.
    fn id(&self) -> &'static str;
}

/// Block data with independent boolean flags for several of its faces, like the connections of
/// a fence or the sides a vine grows on.
pub trait MultipleFacing: BlockData {
    /// Whether `face` is set.
    ///
    /// Fails if the block has no flag for `face`, see [`allowed_faces`](Self::allowed_faces).
    fn has_face(&self, face: BlockFace) -> Result<bool, NonAllowedFace>;

    /// Set or clear `face`.
    ///
    /// Fails if the block has no flag for `face`, see [`allowed_faces`](Self::allowed_faces).
    fn set_face(&mut self, face: BlockFace, has: bool) -> Result<(), NonAllowedFace>;

    /// All faces that are currently set.
    fn faces(&self) -> FaceSet;

    /// All faces this block has a flag for, regardless of their value.
    fn allowed_faces(&self) -> FaceSet;
}

/// The error returned when querying or setting a face a block has no flag for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("non-allowed face {face} for {block}, check `allowed_faces`")]
pub struct NonAllowedFace {
    /// The id of the block.
    pub block: &'static str,
    /// The rejected face.
    pub face: BlockFace,
}

/// The boolean property backing each face of a block, with empty slots for faces the block
/// does not support.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FaceTable {
    block: &'static str,
    slots: [Option<&'static BooleanProperty>; BlockFace::COUNT],
}

impl FaceTable {
    /// Build the table for `block` by looking up the property named after each face in the
    /// [registry](crate::property).
    pub fn resolve(block: &'static str) -> Self {
        let mut slots = [None; BlockFace::COUNT];
        for face in BlockFace::iter() {
            slots[face.ordinal()] = BooleanProperty::lookup(block, face.name());
        }
        let table = Self { block, slots };
        log::trace!("resolved face table of `{block}`: {:?}", table.allowed());
        table
    }

    /// The id of the block this table belongs to.
    pub const fn block(&self) -> &'static str {
        self.block
    }

    /// The property backing `face`, if any.
    pub const fn get(&self, face: BlockFace) -> Option<&'static BooleanProperty> {
        self.slots[face.ordinal()]
    }

    /// All faces with a backing property.
    pub fn allowed(&self) -> FaceSet {
        BlockFace::iter()
            .filter(|face| self.get(*face).is_some())
            .collect()
    }

    /// Read `face` from `state`.
    pub fn has_face<S: StateAccess + ?Sized>(
        &self,
        state: &S,
        face: BlockFace,
    ) -> Result<bool, NonAllowedFace> {
        Ok(state.get(self.require(face)?))
    }

    /// Write `face` to `state`. The state is left untouched if `face` is not allowed.
    pub fn set_face<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        face: BlockFace,
        has: bool,
    ) -> Result<(), NonAllowedFace> {
        state.set(self.require(face)?, has);
        Ok(())
    }

    /// All allowed faces that are set in `state`.
    pub fn faces<S: StateAccess + ?Sized>(&self, state: &S) -> FaceSet {
        BlockFace::iter()
            .filter(|face| self.get(*face).is_some_and(|prop| state.get(prop)))
            .collect()
    }

    fn require(&self, face: BlockFace) -> Result<&'static BooleanProperty, NonAllowedFace> {
        self.get(face).ok_or(NonAllowedFace {
            block: self.block,
            face,
        })
    }
}

impl fmt::Debug for FaceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                BlockFace::iter()
                    .filter_map(|face| self.get(face).map(|prop| (face, prop.name))),
            )
            .finish()
    }
}
