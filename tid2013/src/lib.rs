//! TID2013 image-quality-assessment dataset adapter.
//!
//! The adapter declares the dataset metadata and yields one example per data
//! row of the `mos.txt` label file: a distorted image path, its reference
//! image path, and the human-rated mean opinion score. Image decoding is the
//! host framework's job.

mod common;
mod mos;
mod tid2013_;

pub use mos::*;
pub use tid2013_::*;
