pub use anyhow::{ensure, Context as _, Error, Result};
pub use log::{debug, warn};
pub use serde::{Deserialize, Serialize};
pub use std::{
    fmt::Debug,
    fs::File,
    path::{Path, PathBuf},
};
