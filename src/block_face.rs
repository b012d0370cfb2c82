//! The six faces of a block and sets of them.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};

/// One of the six compass and vertical directions a block can face or connect to.
///
/// The declaration order is significant: it defines each face's [ordinal](Self::ordinal) and
/// the iteration order of a [`FaceSet`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlockFace {
    /// -Z
    North,
    /// +X
    East,
    /// +Z
    South,
    /// -X
    West,
    /// +Y
    Up,
    /// -Y
    Down,
}

impl BlockFace {
    /// The stable position of this face in the enumeration, in `0..BlockFace::COUNT`.
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// The face at the given [ordinal](Self::ordinal), if there is one.
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::iter().nth(ordinal)
    }

    /// The face pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// The unit offset `(x, y, z)` of a step towards this face.
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Self::North => (0, 0, -1),
            Self::East => (1, 0, 0),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::Up => (0, 1, 0),
            Self::Down => (0, -1, 0),
        }
    }

    /// The name of this face, which is also the name of the boolean property storing it.
    pub fn name(self) -> &'static str {
        self.into()
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of [`BlockFace`]s.
///
/// Iteration always yields faces in [`BlockFace`] declaration order, and a face is never
/// contained twice.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FaceSet(u8);

impl FaceSet {
    /// The set without any faces.
    pub const EMPTY: Self = Self(0);
    /// The set with all six faces.
    pub const ALL: Self = Self((1 << BlockFace::COUNT) - 1);

    /// Create an empty set.
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Return a copy of this set that also contains `face`.
    #[must_use]
    pub const fn with(self, face: BlockFace) -> Self {
        Self(self.0 | face.bit())
    }

    /// Return a copy of this set that does not contain `face`.
    #[must_use]
    pub const fn without(self, face: BlockFace) -> Self {
        Self(self.0 & !face.bit())
    }

    /// Add `face` to this set. Returns whether it was newly inserted.
    pub fn insert(&mut self, face: BlockFace) -> bool {
        let inserted = !self.contains(face);
        self.0 |= face.bit();
        inserted
    }

    /// Whether this set contains `face`.
    pub const fn contains(&self, face: BlockFace) -> bool {
        self.0 & face.bit() != 0
    }

    /// The number of faces in this set.
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether this set contains no faces at all.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether every face of this set is also in `other`.
    pub const fn is_subset(&self, other: &Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate the faces of this set in [`BlockFace`] order.
    pub const fn iter(&self) -> FaceSetIter {
        FaceSetIter(self.0)
    }
}

impl fmt::Debug for FaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<BlockFace> for FaceSet {
    fn from_iter<T: IntoIterator<Item = BlockFace>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl<const N: usize> From<[BlockFace; N]> for FaceSet {
    fn from(faces: [BlockFace; N]) -> Self {
        faces.into_iter().collect()
    }
}

impl IntoIterator for FaceSet {
    type Item = BlockFace;
    type IntoIter = FaceSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the faces of a [`FaceSet`], in [`BlockFace`] order.
#[derive(Debug, Clone)]
pub struct FaceSetIter(u8);

impl Iterator for FaceSetIter {
    type Item = BlockFace;

    fn next(&mut self) -> Option<BlockFace> {
        if self.0 == 0 {
            return None;
        }
        let ordinal = self.0.trailing_zeros() as usize;
        // clear the lowest set bit
        self.0 &= self.0 - 1;
        BlockFace::from_ordinal(ordinal)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for FaceSetIter {}

#[cfg(feature = "serde")]
impl serde::Serialize for FaceSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FaceSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Vec::<BlockFace>::deserialize(deserializer)?
            .into_iter()
            .collect())
    }
}
