use std::fs;
use std::path::{Path, PathBuf};
use vaultrun_core::{SaveError, SaveStore, Session};

/// Save file location: `VAULTRUN_SAVE` wins, then a dotfile in the home
/// directory.
pub fn default_save_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("VAULTRUN_SAVE") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".vaultrun_session.json"))
}

/// Pretty-printed JSON session store. Unreadable or corrupt files load as
/// "no save present".
#[derive(Debug, Clone)]
pub struct JsonSaveStore {
    path: PathBuf,
}

impl JsonSaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for JsonSaveStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let mut session: Session = serde_json::from_str(&raw).ok()?;
        session.normalize();
        Some(session)
    }

    fn save(&self, session: &Session) -> Result<(), SaveError> {
        let body =
            serde_json::to_string_pretty(session).map_err(|err| SaveError(err.to_string()))?;
        fs::write(&self.path, body).map_err(|err| SaveError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_file() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "vaultrun_persistence_test_{}_{}.json",
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn save_load_roundtrip() {
        let file = unique_temp_file();
        let store = JsonSaveStore::new(&file);
        assert!(!store.exists());

        let mut session = Session::default();
        session.balance = 1200;
        session.upgrades.odds_level = 2;
        session.unlock("first_deck");
        store.save(&session).expect("save");

        assert!(store.exists());
        let loaded = store.load().expect("load");
        assert_eq!(loaded, session);
        let _ = fs::remove_file(file);
    }

    #[test]
    fn unknown_keys_survive_the_roundtrip() {
        let file = unique_temp_file();
        let body = r#"{
            "balance": 900,
            "achievements": {"first_deck": true, "hypothetical_badge": true},
            "new_top_level_field": {"nested": 1}
        }"#;
        fs::write(&file, body).expect("write");

        let store = JsonSaveStore::new(&file);
        let loaded = store.load().expect("load");
        assert_eq!(loaded.balance, 900);
        assert_eq!(loaded.achievements.get("hypothetical_badge"), Some(&true));
        // catalog keys got defaulted in
        assert_eq!(loaded.achievements.get("win_streak_5"), Some(&false));

        store.save(&loaded).expect("save");
        let reloaded = store.load().expect("reload");
        assert_eq!(reloaded.achievements.get("hypothetical_badge"), Some(&true));
        assert!(reloaded.extra.contains_key("new_top_level_field"));
        let _ = fs::remove_file(file);
    }

    #[test]
    fn corrupt_files_read_as_no_save() {
        let file = unique_temp_file();
        fs::write(&file, "{not json").expect("write");
        let store = JsonSaveStore::new(&file);
        assert!(store.exists());
        assert!(store.load().is_none());
        let _ = fs::remove_file(file);
    }

    #[test]
    fn missing_file_reads_as_no_save() {
        let store = JsonSaveStore::new(unique_temp_file());
        assert!(!store.exists());
        assert!(store.load().is_none());
    }
}
