//! File persistence configuration

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading eframe window state
    pub state_path: &'static str,
}

/// Configuration for the user preference key-value store
pub struct PrefsPersistenceConfig {
    /// JSON file holding preferences on native targets
    pub prefs_path: &'static str,
    /// Key under which the chosen theme is recorded
    pub theme_key: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
    pub prefs: PrefsPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".states.json",
    },
    prefs: PrefsPersistenceConfig {
        prefs_path: ".prefs.json",
        theme_key: "theme",
    },
};
