use folio::config::{self, AppConfig};
use folio::locale::FileLocaleStore;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

/// Tests share one process environment; `FOLIO_HOME` is only touched while
/// this is held.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Throwaway workspace exported as `FOLIO_HOME` for the life of the test.
pub struct IntegrationHarness {
    workspace: TempDir,
    _env: MutexGuard<'static, ()>,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let workspace = TempDir::new().expect("failed to create temp workspace");
        env::set_var("FOLIO_HOME", workspace.path());
        Self {
            workspace,
            _env: guard,
        }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.workspace
            .path()
            .join("config")
            .join(config::CONFIG_FILE_NAME)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.workspace
            .path()
            .join("config")
            .join(config::PREFERENCES_FILE_NAME)
    }

    pub fn locale_store(&self) -> FileLocaleStore {
        FileLocaleStore::new(self.preferences_path())
    }

    pub fn write_config(&self, cfg: &AppConfig) {
        config::save_to(&self.config_path(), cfg).expect("failed to write config");
    }
}

mod chat_session;
mod response_rules;
