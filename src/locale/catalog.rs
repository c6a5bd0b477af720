use {
    crate::{config::DF, error::DashboardError},
    std::collections::HashMap,
};

/// Key → display string for exactly one language. Replaced wholesale, never merged.
#[derive(Debug, Clone, Default)]
pub struct LanguageCatalog {
    code: Option<String>,
    entries: HashMap<String, String>,
}

impl LanguageCatalog {
    pub fn new(code: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self {
            code: Some(code.into()),
            entries,
        }
    }

    /// Language currently loaded, `None` until the first successful load.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw lookup. Empty strings count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Never fails and never returns an empty string: catalog value, else `fallback`,
    /// else the key itself.
    pub fn resolve(&self, key: &str, fallback: Option<&str>) -> String {
        self.get(key)
            .or(fallback.filter(|f| !f.is_empty()))
            .unwrap_or(key)
            .to_string()
    }

    /// Installs a fetched language resource. On failure the current catalog is kept
    /// untouched and the failure is logged.
    pub fn load(
        &mut self,
        code: &str,
        fetched: Result<String, DashboardError>,
    ) -> Result<usize, DashboardError> {
        let parsed = fetched.and_then(|body| {
            serde_json::from_str::<HashMap<String, String>>(&body).map_err(|e| {
                DashboardError::LocalizationLoad {
                    code: code.to_string(),
                    reason: format!("malformed resource: {}", e),
                }
            })
        });

        match parsed {
            Ok(entries) => {
                let count = entries.len();
                self.code = Some(code.to_string());
                self.entries = entries;
                if DF.log_locale {
                    log::info!("Loaded language '{}' ({} strings)", code, count);
                }
                Ok(count)
            }
            Err(e) => {
                let err = match e {
                    DashboardError::LocalizationLoad { .. } => e,
                    other => DashboardError::LocalizationLoad {
                        code: code.to_string(),
                        reason: other.to_string(),
                    },
                };
                log::error!(
                    "Could not load language file: {} (keeping '{}')",
                    err,
                    self.code().unwrap_or("built-in text")
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> LanguageCatalog {
        LanguageCatalog::new(
            "en",
            HashMap::from([
                ("run".to_string(), "Run simulation".to_string()),
                ("blank".to_string(), String::new()),
            ]),
        )
    }

    #[test]
    fn resolve_prefers_catalog_then_fallback_then_key() {
        let catalog = english();
        assert_eq!(catalog.resolve("run", Some("Go")), "Run simulation");
        assert_eq!(catalog.resolve("missing", Some("Analysis")), "Analysis");
        assert_eq!(catalog.resolve("missing", None), "missing");
    }

    #[test]
    fn resolve_never_returns_empty() {
        let catalog = english();
        assert_eq!(catalog.resolve("blank", None), "blank");
        assert_eq!(catalog.resolve("missing", Some("")), "missing");
    }

    #[test]
    fn load_replaces_wholesale() {
        let mut catalog = english();
        let count = catalog
            .load("fr", Ok(r#"{"other": "Autre"}"#.to_string()))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(catalog.code(), Some("fr"));
        assert_eq!(catalog.get("run"), None);
        assert_eq!(catalog.get("other"), Some("Autre"));
    }

    #[test]
    fn failed_fetch_keeps_previous_catalog() {
        let mut catalog = english();
        let err = catalog
            .load("fr", Err(DashboardError::Transport("connection reset".into())))
            .unwrap_err();
        assert!(matches!(err, DashboardError::LocalizationLoad { ref code, .. } if code == "fr"));
        assert_eq!(catalog.code(), Some("en"));
        assert_eq!(catalog.get("run"), Some("Run simulation"));
    }

    #[test]
    fn malformed_resource_keeps_previous_catalog() {
        let mut catalog = english();
        assert!(catalog.load("it", Ok("<html>404</html>".into())).is_err());
        assert!(catalog.load("it", Ok(r#"{"nested": {"a": 1}}"#.into())).is_err());
        assert_eq!(catalog.code(), Some("en"));
        assert_eq!(catalog.len(), 2);
    }
}
