macro_rules! multiple_facing {
    (
        $(
            $id:literal,
            $variant:ident
        );+
        $(;)?
    ) => {
        use std::fmt;

        use once_cell::sync::Lazy;

        use crate::{
            block_data::{BlockData, FaceTable, MultipleFacing, NonAllowedFace},
            BlockFace, BlockState, FaceSet, GenericBlockState, StateAccess,
        };

        $(
            #[doc = concat!("Multiple facing block data for `", $id, "`.")]
            ///
            /// The state `S` is only ever accessed through [`StateAccess`], pass a `&mut` to
            /// work on a state owned elsewhere.
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct $variant<S = GenericBlockState> {
                state: S,
            }

            impl $variant {
                /// The id of this block.
                pub const ID: &'static str = $id;

                /// Create block data holding the default state of this block.
                pub fn new() -> Self {
                    Self::default()
                }
            }

            impl<S> $variant<S> {
                /// Wrap an existing block state.
                pub const fn from_state(state: S) -> Self {
                    Self { state }
                }

                /// The wrapped block state.
                pub const fn state(&self) -> &S {
                    &self.state
                }

                /// Unwrap the block state.
                pub fn into_state(self) -> S {
                    self.state
                }

                fn table() -> &'static FaceTable {
                    static FACES: Lazy<FaceTable> = Lazy::new(|| FaceTable::resolve($id));
                    &FACES
                }
            }

            impl<S: BlockState> Default for $variant<S> {
                fn default() -> Self {
                    Self::from_state(S::default_state($id))
                }
            }

            impl<S: fmt::Display> fmt::Display for $variant<S> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.state.fmt(f)
                }
            }

            impl<S> BlockData for $variant<S> {
                fn id(&self) -> &'static str {
                    $id
                }
            }

            impl<S: StateAccess> MultipleFacing for $variant<S> {
                fn has_face(&self, face: BlockFace) -> Result<bool, NonAllowedFace> {
                    Self::table().has_face(&self.state, face)
                }

                fn set_face(&mut self, face: BlockFace, has: bool) -> Result<(), NonAllowedFace> {
                    Self::table().set_face(&mut self.state, face, has)
                }

                fn faces(&self) -> FaceSet {
                    Self::table().faces(&self.state)
                }

                fn allowed_faces(&self) -> FaceSet {
                    Self::table().allowed()
                }
            }
        )+

        /// Any of the multiple facing block data types, chosen by the block id of a state.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum MultipleFacingBlock<S = GenericBlockState> {
            $(
                #[doc = concat!("`", $id, "`")]
                $variant($variant<S>),
            )+
        }

        impl MultipleFacingBlock {
            /// The ids of all blocks with multiple facing block data.
            pub const IDS: &'static [&'static str] = &[$($id),+];
        }

        impl<S> MultipleFacingBlock<S> {
            /// Unwrap the block state.
            pub fn into_state(self) -> S {
                match self {
                    $(Self::$variant(data) => data.into_state(),)+
                }
            }
        }

        impl<S: BlockState> MultipleFacingBlock<S> {
            /// Wrap `state` in the block data type matching its block id.
            ///
            /// The state is handed back unchanged if no block data type exists for it.
            pub fn from_state(state: S) -> Result<Self, S> {
                match state.name() {
                    $(Some($id) => Ok(Self::$variant($variant::from_state(state))),)+
                    _ => Err(state),
                }
            }
        }

        impl TryFrom<GenericBlockState> for MultipleFacingBlock {
            type Error = GenericBlockState;

            fn try_from(state: GenericBlockState) -> Result<Self, Self::Error> {
                Self::from_state(state)
            }
        }

        impl<S> BlockData for MultipleFacingBlock<S> {
            fn id(&self) -> &'static str {
                match self {
                    $(Self::$variant(data) => data.id(),)+
                }
            }
        }

        impl<S: StateAccess> MultipleFacing for MultipleFacingBlock<S> {
            fn has_face(&self, face: BlockFace) -> Result<bool, NonAllowedFace> {
                match self {
                    $(Self::$variant(data) => data.has_face(face),)+
                }
            }

            fn set_face(&mut self, face: BlockFace, has: bool) -> Result<(), NonAllowedFace> {
                match self {
                    $(Self::$variant(data) => data.set_face(face, has),)+
                }
            }

            fn faces(&self) -> FaceSet {
                match self {
                    $(Self::$variant(data) => data.faces(),)+
                }
            }

            fn allowed_faces(&self) -> FaceSet {
                match self {
                    $(Self::$variant(data) => data.allowed_faces(),)+
                }
            }
        }
    };
}
