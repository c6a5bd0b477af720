//! Simulator endpoint configuration

pub struct ServerConfig {
    /// Base URL used natively when `--server` is not given
    pub default_base_url: &'static str,
    pub simulate_path: &'static str,
    /// Prefix of the per-language resource, completed as `{prefix}{code}.json`
    pub languages_prefix: &'static str,
    pub location_path: &'static str,
    /// Language loaded at startup when `--lang` is not given
    pub default_language: &'static str,
    /// Language codes offered in the selector, with their native names
    pub languages: &'static [(&'static str, &'static str)],
}

pub const SERVER: ServerConfig = ServerConfig {
    default_base_url: "http://127.0.0.1:5000",
    simulate_path: "/simulate",
    languages_prefix: "/languages/",
    location_path: "/get_location_name",
    default_language: "en",
    languages: &[("en", "English"), ("fr", "Français"), ("it", "Italiano")],
};

impl ServerConfig {
    pub fn language_path(&self, code: &str) -> String {
        format!("{}{}.json", self.languages_prefix, code)
    }
}
