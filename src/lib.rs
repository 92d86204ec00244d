//! Slice autotile sprite sheets into per-role images and a multitile descriptor.

pub mod autotile;
pub mod autotile_extractor;
pub mod descriptor;
pub mod error;
pub mod slicer;

pub use autotile::{Layout, Role};
pub use autotile_extractor::{AutotileExtractor, ExtractOptions, ExtractSummary};
pub use descriptor::{write_descriptor, TileDescriptor};
pub use error::SliceError;
