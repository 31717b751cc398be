use crate::{
    common::*,
    mos::{MosExamples, Tid2013Example},
};
use dataset_builder::{
    add_checksums_dir, DatasetBuilder, DatasetDescriptor, DownloadManager, Examples, FeatureKind,
    FeatureSchema, Split, SplitSpec, SupervisedKeys, Version,
};

pub const HOMEPAGE: &str = "http://www.ponomarenko.info/tid2013.htm";

pub const DESCRIPTION: &str = "\
The TID2013 contains 25 reference images and 3000 distorted images \
(25 reference images x 24 types of distortions x 5 levels of distortions). \
Reference images are obtained by cropping from Kodak Lossless True Color Image Suite. \
All images are saved in database in Bitmap format without any compression. File names are \
organized in such a manner that they indicate a number of the reference image, \
then a number of distortion's type, and, finally, a number of distortion's level: \"iXX_YY_Z.bmp\".";

pub const CITATION: &str = r#"@article{ponomarenko2015image,
  title={Image database TID2013: Peculiarities, results and perspectives},
  author={Ponomarenko, Nikolay and Jin, Lina and Ieremeiev, Oleg and Lukin, Vladimir and Egiazarian, Karen and Astola, Jaakko and Vozel, Benoit and Chehdi, Kacem and Carli, Marco and Battisti, Federica and others},
  journal={Signal Processing: Image Communication},
  volume={30},
  pages={57--77},
  year={2015},
  publisher={Elsevier}
}"#;

pub const MANUAL_DOWNLOAD_INSTRUCTIONS: &str = "\
Download and extract tid2013.zip from http://www.ponomarenko.info/tid2013.htm \
into the manual-download directory, so that the images and mos.txt live under \
<manual_dir>/tid2013/.";

/// Bundled URL checksum files, registered at builder construction.
const CHECKSUMS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/checksums");

/// Per-split generation arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tid2013Args {
    pub images_dir: PathBuf,
    pub labels_file: PathBuf,
}

/// The TID2013 dataset builder.
#[derive(Debug)]
pub struct Tid2013 {
    descriptor: DatasetDescriptor,
}

impl Tid2013 {
    /// Creates the builder and registers the bundled checksum directory.
    ///
    /// Registration is additive and idempotent, so constructing more than
    /// one builder per process is safe.
    pub fn new() -> Result<Self> {
        add_checksums_dir(CHECKSUMS_DIR);

        let descriptor = DatasetDescriptor {
            version: Version::new(1, 0, 0),
            description: DESCRIPTION.to_owned(),
            citation: CITATION.to_owned(),
            homepage: HOMEPAGE.to_owned(),
            features: FeatureSchema::new()
                .with("distorted_image", FeatureKind::Image)
                .with("reference_image", FeatureKind::Image)
                .with("mos", FeatureKind::Float32),
            supervised_keys: SupervisedKeys::new("distorted_image", "mos"),
            manual_download_instructions: MANUAL_DOWNLOAD_INSTRUCTIONS.to_owned(),
        };
        descriptor.validate()?;

        Ok(Self { descriptor })
    }
}

impl DatasetBuilder for Tid2013 {
    type Args = Tid2013Args;
    type Example = Tid2013Example;

    fn info(&self) -> &DatasetDescriptor {
        &self.descriptor
    }

    fn split_generators(&self, manager: &DownloadManager) -> Result<Vec<SplitSpec<Tid2013Args>>> {
        let images_dir = manager.manual_dir().join("tid2013");
        let labels_file = images_dir.join("mos.txt");
        debug!("resolved images directory '{}'", images_dir.display());
        debug!("resolved label file '{}'", labels_file.display());

        Ok(vec![SplitSpec {
            split: Split::Train,
            args: Tid2013Args {
                images_dir,
                labels_file,
            },
        }])
    }

    fn generate_examples(&self, args: &Tid2013Args) -> Result<Examples<Tid2013Example>> {
        let examples = MosExamples::open(&args.images_dir, &args.labels_file)?;
        Ok(Box::new(examples))
    }
}
