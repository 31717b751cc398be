use crate::common::*;

/// The dataset version in `major.minor.patch` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            major,
            minor,
            patch,
        } = *self;
        write!(f, "{}.{}.{}", major, minor, patch)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut tokens = text.split('.');
        let mut next = |name: &str| -> Result<u32> {
            let token = tokens
                .next()
                .ok_or_else(|| format_err!("missing {} component in version '{}'", name, text))?;
            let value = token
                .parse()
                .with_context(|| format!("invalid {} component in version '{}'", name, text))?;
            Ok(value)
        };

        let version = Self {
            major: next("major")?,
            minor: next("minor")?,
            patch: next("patch")?,
        };
        ensure!(
            tokens.next().is_none(),
            "trailing components in version '{}'",
            text
        );
        Ok(version)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// The kind of a declared example field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// A path to an image file, decoded later by the host framework.
    Image,
    /// A 32-bit floating point scalar.
    Float32,
}

/// The ordered set of named, typed fields each example provides.
///
/// Insertion order is the declared feature order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureSchema(IndexMap<String, FeatureKind>);

impl FeatureSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a feature declaration.
    pub fn with(mut self, name: impl Into<String>, kind: FeatureKind) -> Self {
        self.0.insert(name.into(), kind);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<FeatureKind> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureKind)> {
        self.0.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The designated (input, label) feature pair for supervised consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisedKeys {
    pub input: String,
    pub target: String,
}

impl SupervisedKeys {
    pub fn new(input: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            target: target.into(),
        }
    }
}

/// The static description a dataset adapter declares to the host framework.
///
/// Created once at registration time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub version: Version,
    pub description: String,
    pub citation: String,
    pub homepage: String,
    pub features: FeatureSchema,
    pub supervised_keys: SupervisedKeys,
    pub manual_download_instructions: String,
}

impl DatasetDescriptor {
    /// Checks that both supervised keys name declared features.
    pub fn validate(&self) -> Result<()> {
        let SupervisedKeys { input, target } = &self.supervised_keys;
        ensure!(
            self.features.contains(input),
            "supervised input '{}' is not a declared feature",
            input
        );
        ensure!(
            self.features.contains(target),
            "supervised target '{}' is not a declared feature",
            target
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> DatasetDescriptor {
        DatasetDescriptor {
            version: Version::new(1, 0, 0),
            description: "a dataset".into(),
            citation: "@article{}".into(),
            homepage: "http://example.com".into(),
            features: FeatureSchema::new()
                .with("image", FeatureKind::Image)
                .with("score", FeatureKind::Float32),
            supervised_keys: SupervisedKeys::new("image", "score"),
            manual_download_instructions: String::new(),
        }
    }

    #[test]
    fn version_parse_and_display() {
        let version: Version = "1.2.3".parse().unwrap();
        assert_eq!(version, Version::new(1, 2, 3));
        assert_eq!(version.to_string(), "1.2.3");

        assert!("1.2".parse::<Version>().is_err());
        assert!("1.2.3.4".parse::<Version>().is_err());
        assert!("1.x.3".parse::<Version>().is_err());
    }

    #[test]
    fn schema_preserves_declaration_order() {
        let schema = descriptor().features;
        let names: Vec<_> = schema.iter().map(|(name, _)| name.to_owned()).collect();
        assert_eq!(names, vec!["image", "score"]);
        assert_eq!(schema.get("score"), Some(FeatureKind::Float32));
    }

    #[test]
    fn validate_accepts_declared_keys() {
        descriptor().validate().unwrap();
    }

    #[test]
    fn validate_rejects_undeclared_keys() {
        let mut desc = descriptor();
        desc.supervised_keys = SupervisedKeys::new("image", "label");
        assert!(desc.validate().is_err());
    }
}
