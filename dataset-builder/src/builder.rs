use crate::{
    common::*, descriptor::DatasetDescriptor, download::DownloadManager, split::SplitSpec,
};

/// A lazily generated, finite sequence of keyed examples.
///
/// Keys are a unique, strictly increasing sequence starting at 0.
pub type Examples<E> = Box<dyn Iterator<Item = Result<(usize, E)>> + Send>;

/// The capability set the host framework requires of a dataset adapter.
pub trait DatasetBuilder {
    /// The arguments needed to generate one split.
    type Args;
    /// The per-example record matching the declared feature schema.
    type Example;

    /// The static dataset description.
    fn info(&self) -> &DatasetDescriptor;

    /// Resolves the list of splits and their generation arguments.
    fn split_generators(&self, manager: &DownloadManager)
        -> Result<Vec<SplitSpec<Self::Args>>>;

    /// Produces the keyed example sequence for one split.
    ///
    /// Each call reopens the underlying source, so the sequence is
    /// restartable across calls. The host framework owns decoding of the
    /// yielded records.
    fn generate_examples(&self, args: &Self::Args) -> Result<Examples<Self::Example>>;
}
