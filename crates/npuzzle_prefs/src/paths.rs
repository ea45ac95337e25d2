use std::path::PathBuf;

use directories::ProjectDirs;
use eyre::{OptionExt, Result};

const PREFS_FILE_NAME: &str = "prefs.yaml";

lazy_static! {
    static ref PROJECT_DIRS: Option<ProjectDirs> = ProjectDirs::from("", "", "npuzzle-visual");
}

/// Returns the path of the user preferences file, which may not exist.
pub fn prefs_file() -> Result<PathBuf> {
    let dirs = PROJECT_DIRS
        .as_ref()
        .ok_or_eyre("unable to determine home directory")?;
    Ok(dirs.config_dir().join(PREFS_FILE_NAME))
}
