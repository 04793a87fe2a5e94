use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::ledger::Account;

use super::{Result, StorageBackend};

const DATA_KEY: &str = "points_tracker_data";
const THEME_KEY: &str = "points_tracker_theme";
const THEME_DARK: &str = "dark";
const THEME_LIGHT: &str = "light";
const DEFAULT_DIR_NAME: &str = ".points_tracker";
const TMP_SUFFIX: &str = "tmp";
const HOME_ENV: &str = "POINTS_TRACKER_HOME";

/// File-per-key storage backend. Each durable key maps to one file under the
/// data directory; writes stage to a temp file and rename into place.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    data_file: PathBuf,
    theme_file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_root);
        fs::create_dir_all(&root)?;
        let data_file = root.join(format!("{DATA_KEY}.json"));
        let theme_file = root.join(THEME_KEY);
        Ok(Self {
            root,
            data_file,
            theme_file,
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self) -> &Path {
        &self.data_file
    }
}

/// Data directory defaulting to `~/.points_tracker`, overridable via env.
fn default_root() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

impl StorageBackend for JsonStorage {
    fn load_accounts(&self) -> Vec<Account> {
        if !self.data_file.exists() {
            return Vec::new();
        }
        let data = match fs::read_to_string(&self.data_file) {
            Ok(data) => data,
            Err(err) => {
                warn!(error = %err, "accounts file unreadable; starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(accounts) => accounts,
            Err(err) => {
                warn!(error = %err, "stored accounts corrupt; starting empty");
                Vec::new()
            }
        }
    }

    fn save_accounts(&self, accounts: &[Account]) -> Result<()> {
        let json = serde_json::to_string_pretty(accounts)?;
        write_atomic(&self.data_file, &json)
    }

    fn load_display_preference(&self) -> bool {
        match fs::read_to_string(&self.theme_file) {
            Ok(value) => value.trim() == THEME_DARK,
            Err(_) => false,
        }
    }

    fn save_display_preference(&self, dark: bool) -> Result<()> {
        let value = if dark { THEME_DARK } else { THEME_LIGHT };
        write_atomic(&self.theme_file, value)
    }
}

/// Writes by staging to a temporary file and renaming into place.
fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let tmp = tmp_path(path);
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
