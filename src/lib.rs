#![doc = include_str!("../README.md")]
#![cfg_attr(
    feature = "docs",
    cfg_attr(doc, doc = ::document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#))
)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
#![warn(missing_docs, rust_2018_idioms)]

pub mod block_data;
mod block_face;
mod block_state;
pub mod property;
pub mod util;

pub use block_data::{BlockData, MultipleFacing, MultipleFacingBlock, NonAllowedFace};
pub use block_face::{BlockFace, FaceSet, FaceSetIter};
pub use block_state::{BlockState, GenericBlockState, ParseBlockStateError, StateAccess};
