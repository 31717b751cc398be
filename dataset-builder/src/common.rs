pub use anyhow::{bail, ensure, format_err, Context as _, Error, Result};
pub use indexmap::{IndexMap, IndexSet};
pub use log::{debug, info, warn};
pub use serde::{Deserialize, Serialize};
pub use std::{
    fmt,
    fmt::Debug,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Mutex,
};
