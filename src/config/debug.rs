//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Session phase transitions (Validating, Loading, Success, Error).
    pub log_lifecycle: bool,

    /// Language switches and static text re-binding.
    pub log_locale: bool,

    /// Chart creation, destruction and re-theming.
    pub log_charts: bool,

    pub log_theme: bool,

    /// Round-trip timings of every simulator call.
    pub log_network: bool,

    /// Responses that arrive after a newer submission and are dropped.
    pub log_stale_responses: bool,

    /// Warn when result interpretation or a chart draw exceeds its time budget.
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_lifecycle: true,
    log_stale_responses: true,

    log_locale: false,
    log_charts: false,
    log_theme: false,
    log_network: false,
    log_performance: false,
};
