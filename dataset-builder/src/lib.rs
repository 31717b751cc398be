//! The building blocks of declarative dataset adapters.
//!
//! A dataset adapter describes a dataset to the host data-loading framework
//! in three steps: it declares a static [`DatasetDescriptor`], resolves the
//! list of [`SplitSpec`]s from the download configuration, and produces a
//! lazy sequence of keyed examples per split. The [`DatasetBuilder`] trait
//! ties the three together.

mod builder;
mod checksums;
mod common;
mod descriptor;
mod download;
mod split;

pub use builder::*;
pub use checksums::*;
pub use descriptor::*;
pub use download::*;
pub use split::*;
