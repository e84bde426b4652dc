use std::{env, path::PathBuf};

use crate::ROOT_DIR_ENV;

const DEFAULT_ROOT_DIR_NAME: &str = ".container-desktop";

pub(crate) fn default_packaged_root_dir() -> Option<PathBuf> {
    root_dir_from(env::var(ROOT_DIR_ENV).ok(), home::home_dir())
}

fn root_dir_from(override_value: Option<String>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(raw) = override_value {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    home_dir.map(|home| home.join(DEFAULT_ROOT_DIR_NAME))
}
