use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    de::DeserializeOwned,
    Deserialize,
    Serialize,
};

use crate::core::{
    errors::KanagridError,
    KanaSet,
};

const APP_NAME: &str = "kanagrid";
const PREFS_FILE: &str = "preferences.json";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn save_json<T: Serialize>(data: &T, path: &Path) -> Result<(), KanagridError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    println!("Data saved to: {}", path.display());
    Ok(())
}

pub fn load_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, KanagridError> {
    if !path.exists() {
        return Ok(T::default());
    }
    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    Ok(data)
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load_json::<T>(path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", path.display(), e);
            T::default()
        }
    }
}

/// The one preference the drill keeps between runs.
pub trait PreferenceStore {
    /// `None` when nothing usable is stored, so the caller falls back to
    /// the default set.
    fn load_active_set(&self) -> Option<KanaSet>;

    fn store_active_set(&mut self, set: KanaSet) -> Result<(), KanagridError>;
}

#[derive(Serialize, Deserialize)]
struct DrillPrefs {
    active_set: String,
}

impl Default for DrillPrefs {
    fn default() -> Self {
        Self { active_set: KanaSet::default().as_key().to_string() }
    }
}

/// File-backed store under the per-user data directory.
pub struct JsonPreferences {
    path: PathBuf,
}

impl JsonPreferences {
    pub fn new() -> Self {
        Self { path: get_app_data_dir().join(PREFS_FILE) }
    }

    /// Store rooted at an explicit file path, used by tests.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for JsonPreferences {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for JsonPreferences {
    fn load_active_set(&self) -> Option<KanaSet> {
        let prefs = load_json_or_default::<DrillPrefs>(&self.path);
        // A stored key from an older or foreign build may be unknown.
        KanaSet::from_key(&prefs.active_set)
    }

    fn store_active_set(&mut self, set: KanaSet) -> Result<(), KanagridError> {
        save_json(&DrillPrefs { active_set: set.as_key().to_string() }, &self.path)
    }
}

/// In-memory store for tests and embedding without a disk.
#[derive(Default)]
pub struct MemoryPreferences {
    active_set: Option<KanaSet>,
}

impl PreferenceStore for MemoryPreferences {
    fn load_active_set(&self) -> Option<KanaSet> {
        self.active_set
    }

    fn store_active_set(&mut self, set: KanaSet) -> Result<(), KanagridError> {
        self.active_set = Some(set);
        Ok(())
    }
}
