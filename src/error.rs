use thiserror::Error;

use crate::{domain::FieldId, locale::LanguageCatalog, models::ChartId};

/// Input rejected before anything reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required fields are empty: {0:?}")]
    MissingFields(Vec<FieldId>),
    #[error("field {0:?} is not a number")]
    InvalidNumber(FieldId),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The call itself failed (connection refused, DNS, unreadable body...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The simulator answered with a failure status. Carries its `error` field when present.
    #[error("simulator reported failure: {}", .0.as_deref().unwrap_or("<no message>"))]
    Application(Option<String>),

    #[error("could not load language '{code}': {reason}")]
    LocalizationLoad { code: String, reason: String },

    #[error("charting is unavailable")]
    RenderingUnavailable,

    #[error("chart {0} is still live; destroy it before creating it again")]
    ChartAlreadyLive(ChartId),

    #[error("malformed simulation result: {0}")]
    MalformedResult(String),
}

impl DashboardError {
    /// Text shown in the error panel, resolved through the active catalog.
    pub fn user_message(&self, catalog: &LanguageCatalog) -> String {
        let detail = match self {
            Self::Validation(ValidationError::MissingFields(_)) => {
                return catalog.resolve("fill_all_fields", Some("Please fill in all fields."));
            }
            Self::Validation(ValidationError::InvalidNumber(field)) => {
                let template =
                    catalog.resolve("invalid_number", Some("'{field}' must be a number."));
                let label = catalog.resolve(field.label_key(), Some(field.default_label()));
                return crate::locale::substitute_one(&template, "field", &label);
            }
            Self::Transport(_) => catalog.resolve(
                "network_error",
                Some("Could not reach the simulation server."),
            ),
            Self::Application(Some(message)) => message.clone(),
            Self::Application(None) => catalog.resolve("unknown_error", Some("Unknown error.")),
            Self::MalformedResult(_) => catalog.resolve(
                "malformed_result",
                Some("The server returned an unexpected result."),
            ),
            Self::LocalizationLoad { .. } | Self::RenderingUnavailable | Self::ChartAlreadyLive(_) => {
                self.to_string()
            }
        };
        let template = catalog.resolve("simulation_failed", Some("Simulation failed: {message}"));
        crate::locale::substitute_one(&template, "message", &detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_message_is_shown_verbatim_inside_wrapper() {
        let catalog = LanguageCatalog::default();
        let err = DashboardError::Application(Some("bad latitude".into()));
        let msg = err.user_message(&catalog);
        assert_eq!(msg, "Simulation failed: bad latitude");
    }

    #[test]
    fn application_without_message_uses_generic_fallback() {
        let catalog = LanguageCatalog::default();
        let msg = DashboardError::Application(None).user_message(&catalog);
        assert_eq!(msg, "Simulation failed: Unknown error.");
    }

    #[test]
    fn transport_error_hides_internal_detail() {
        let catalog = LanguageCatalog::default();
        let msg = DashboardError::Transport("tcp connect error: refused".into()).user_message(&catalog);
        assert!(!msg.contains("refused"));
        assert!(msg.contains("Could not reach"));
    }

    #[test]
    fn missing_fields_uses_fill_all_fields_text() {
        let catalog = LanguageCatalog::default();
        let err = DashboardError::from(ValidationError::MissingFields(vec![FieldId::CropName]));
        assert_eq!(err.user_message(&catalog), "Please fill in all fields.");
    }
}
