//! App Core for Qio.
//!
//! Central struct holding the history store, services, and navigator,
//! managing application lifecycle.

use crate::managers::history_store::HistoryStore;
use crate::managers::navigation::Navigator;
use crate::services::settings_engine::SettingsEngine;
use crate::services::theme_engine::ThemeEngine;
use crate::storage::SqliteBackend;
use crate::types::settings::ThemeMode;

/// Central application struct.
///
/// The history store owns the durable scan history; the settings and theme
/// engines hold user preferences; the navigator tracks the screen stack.
pub struct App {
    pub history: HistoryStore<SqliteBackend>,
    pub settings_engine: SettingsEngine,
    pub theme_engine: ThemeEngine,
    pub navigator: Navigator,
}

impl App {
    /// Creates a new App, opening the key-value backend at the given path.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let backend = SqliteBackend::open(db_path)
            .map_err(|e| format!("History backend init failed: {}", e))?;
        let history = HistoryStore::new(backend);

        let settings_engine = SettingsEngine::new(None);
        let theme_engine = ThemeEngine::new(ThemeMode::System);
        let navigator = Navigator::new();

        Ok(Self {
            history,
            settings_engine,
            theme_engine,
            navigator,
        })
    }

    /// Startup sequence: load persisted settings and apply the theme mode.
    pub fn startup(&mut self) {
        use crate::services::settings_engine::SettingsEngineTrait;
        use crate::services::theme_engine::ThemeEngineTrait;

        match self.settings_engine.load() {
            Ok(settings) => {
                self.theme_engine.set_mode(settings.appearance.theme);
            }
            Err(e) => {
                log::warn!("settings load failed, keeping defaults: {}", e);
            }
        }

        log::info!(
            "Qio started (theme: {:?})",
            self.theme_engine.effective_mode()
        );
    }

    /// Shutdown sequence: flush settings to disk.
    pub fn shutdown(&mut self) {
        use crate::services::settings_engine::SettingsEngineTrait;
        if let Err(e) = self.settings_engine.save() {
            log::warn!("settings save failed on shutdown: {}", e);
        }
    }
}
