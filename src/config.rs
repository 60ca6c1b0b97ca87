//! Store configuration loaded from the store root.

use std::path::Path;

use serde::Deserialize;

use crate::context::ServiceContext;
use crate::task::CategorySet;

/// File name of the optional configuration inside the store root.
const CONFIG_FILE: &str = "config.yaml";

/// Deployment configuration for a store root.
///
/// Lives in `<root>/config.yaml`. The only setting so far is the category
/// vocabulary; the priority scale is fixed because the sort contract pins
/// its ranks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreConfig {
    /// Accepted category names.
    pub categories: CategorySet,
}

/// Raw shape of `config.yaml` before validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    categories: Option<CategorySet>,
}

impl StoreConfig {
    /// Loads the configuration for `root`.
    ///
    /// A missing file yields the defaults. An unreadable or unparsable file
    /// also yields the defaults, with a warning, so a broken config never
    /// prevents the store from opening.
    #[must_use]
    pub fn load(ctx: &ServiceContext, root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        if !ctx.fs.exists(&path) {
            return Self::default();
        }
        let contents = match ctx.fs.read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Warning: failed to read {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };
        match serde_yaml::from_str::<RawConfig>(&contents) {
            Ok(raw) => Self { categories: raw.categories.unwrap_or_default() },
            Err(e) => {
                eprintln!("Warning: failed to parse {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
