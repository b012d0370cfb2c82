//! Other Minecraft related types.

use crate::BlockFace;

/// A Minecraft BlockPos storing an integer coordinate in 3D.
///
/// The [`x`](Self::x), [`y`](Self::y), and [`z`](Self::z) components are stored as [`i32`]s and
/// can thus be both positive and negative.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockPos {
    /// The `x` component of this vector.
    pub x: i32,
    /// The `y` component of this vector.
    pub y: i32,
    /// The `z` component of this vector.
    pub z: i32,
}

impl BlockPos {
    /// The position at (0, 0, 0).
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Create a new [`BlockPos`] given values for [`x`](Self::x), [`y`](Self::y), and
    /// [`z`](Self::z).
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The neighbouring position one block towards `face`.
    pub const fn relative(&self, face: BlockFace) -> Self {
        self.offset(face, 1)
    }

    /// The position `distance` blocks towards `face`.
    ///
    /// Coordinates wrap around at the bounds of [`i32`].
    pub const fn offset(&self, face: BlockFace, distance: i32) -> Self {
        let (x, y, z) = face.offset();
        Self::new(
            self.x.wrapping_add(x.wrapping_mul(distance)),
            self.y.wrapping_add(y.wrapping_mul(distance)),
            self.z.wrapping_add(z.wrapping_mul(distance)),
        )
    }
}

impl std::fmt::Debug for BlockPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
