use crate::common::*;

/// One data row of the `mos.txt` label file.
///
/// Rows are comma separated with one header line; filenames never contain
/// commas, so no quoting is relied upon.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MosRecord {
    pub distorted_image: String,
    pub reference_image: String,
    pub mos: f32,
}

/// One example: two image paths and the human-rated quality score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tid2013Example {
    pub distorted_image: PathBuf,
    pub reference_image: PathBuf,
    pub mos: f32,
}

/// Streaming reader over a `mos.txt` label file.
///
/// Yields `(index, example)` pairs with a sequential index starting at 0,
/// one per data row. Rows are read incrementally and the score is validated
/// as it is read; a malformed row fails with its line number.
pub struct MosExamples {
    records: csv::StringRecordsIntoIter<File>,
    images_dir: PathBuf,
    index: usize,
}

impl MosExamples {
    pub fn open(images_dir: impl Into<PathBuf>, labels_file: impl AsRef<Path>) -> Result<Self> {
        let images_dir = images_dir.into();
        let labels_file = labels_file.as_ref();
        debug!(
            "reading labels from '{}', images from '{}'",
            labels_file.display(),
            images_dir.display()
        );

        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(labels_file)
            .with_context(|| format!("failed to open label file '{}'", labels_file.display()))?;

        Ok(Self {
            records: reader.into_records(),
            images_dir,
            index: 0,
        })
    }
}

impl Iterator for MosExamples {
    type Item = Result<(usize, Tid2013Example)>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(err) => return Some(Err(Error::from(err))),
        };

        let row = match record.deserialize::<MosRecord>(None) {
            Ok(row) => row,
            Err(err) => {
                let line = record.position().map(|pos| pos.line()).unwrap_or_default();
                return Some(
                    Err(err).with_context(|| format!("malformed label row at line {}", line)),
                );
            }
        };

        let example = Tid2013Example {
            distorted_image: self.images_dir.join(&row.distorted_image),
            reference_image: self.images_dir.join(&row.reference_image),
            mos: row.mos,
        };

        let index = self.index;
        self.index += 1;
        Some(Ok((index, example)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
    }

    fn collect(labels_file: &Path) -> Result<Vec<(usize, Tid2013Example)>> {
        MosExamples::open("/data/tid2013", labels_file)?.collect()
    }

    #[test]
    fn yields_one_example_per_data_row() {
        let examples = collect(&data_dir().join("tid2013").join("mos.txt")).unwrap();
        assert_eq!(examples.len(), 3);

        let keys: Vec<_> = examples.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec![0, 1, 2]);

        let (_, first) = &examples[0];
        assert_eq!(
            first.distorted_image,
            Path::new("/data/tid2013/i01_01_1.bmp")
        );
        assert_eq!(first.reference_image, Path::new("/data/tid2013/i01.bmp"));
        assert_abs_diff_eq!(first.mos, 5.51429, epsilon = 1e-5);
    }

    #[test]
    fn empty_label_file_yields_nothing() {
        let examples = collect(&data_dir().join("empty.txt")).unwrap();
        assert!(examples.is_empty());
    }

    #[test]
    fn short_row_fails() {
        let result = collect(&data_dir().join("short_row.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn non_numeric_score_fails_with_line_number() {
        let err = collect(&data_dir().join("bad_score.txt")).unwrap_err();
        assert!(format!("{}", err).contains("line 2"));
    }

    #[test]
    fn missing_label_file_fails() {
        assert!(MosExamples::open("/data/tid2013", data_dir().join("no_such.txt")).is_err());
    }

    #[test]
    fn sequence_is_restartable_across_calls() {
        let labels_file = data_dir().join("tid2013").join("mos.txt");
        let first = collect(&labels_file).unwrap();
        let second = collect(&labels_file).unwrap();
        assert_eq!(first, second);
    }
}
