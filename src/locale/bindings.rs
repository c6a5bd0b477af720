use {
    crate::{
        domain::FieldId,
        locale::LanguageCatalog,
        models::ChartId,
        render::{Renderer, TextSlot},
    },
    strum::IntoEnumIterator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// Hint text of an input.
    Placeholder,
    Text,
}

/// A UI element tagged with the catalog key of its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBinding {
    pub slot: TextSlot,
    pub key: &'static str,
    pub kind: BindingKind,
    /// Text shown before any catalog has loaded.
    pub default: &'static str,
}

const fn text(slot: TextSlot, key: &'static str, default: &'static str) -> TextBinding {
    TextBinding {
        slot,
        key,
        kind: BindingKind::Text,
        default,
    }
}

const FIXED_BINDINGS: &[TextBinding] = &[
    text(TextSlot::AppTitle, "app_title", "Agrivoltaic Water-Savings Simulator"),
    text(TextSlot::SystemHeading, "system_params_title", "System parameters"),
    text(TextSlot::CropHeading, "crop_params_title", "Crop parameters"),
    text(TextSlot::ModeHeading, "mode_title", "Simulation mode"),
    text(TextSlot::ModeOptimization, "mode_optimization", "Optimize pitch"),
    text(TextSlot::ModeCustom, "mode_custom", "Custom pitch"),
    text(TextSlot::RunButton, "run_simulation", "Run simulation"),
    text(TextSlot::LocateButton, "locate", "Find location"),
    text(TextSlot::ThemeToggle, "toggle_theme", "Theme"),
    text(TextSlot::LanguageLabel, "language", "Language"),
    text(
        TextSlot::WelcomeMessage,
        "welcome_message",
        "Configure your tracker system and crop, then run a simulation.",
    ),
    text(TextSlot::LoadingMessage, "loading", "Running simulation..."),
    text(TextSlot::CommentsHeading, "analysis_title", "Analysis"),
];

/// Every statically tagged element. The peak-temperature title is excluded: it embeds
/// the payload's date and is written by the results interpreter.
pub fn static_bindings() -> Vec<TextBinding> {
    let fields = FieldId::iter().flat_map(|f| {
        [
            text(TextSlot::FieldLabel(f), f.label_key(), f.default_label()),
            TextBinding {
                slot: TextSlot::FieldInput(f),
                key: f.placeholder_key(),
                kind: BindingKind::Placeholder,
                default: f.default_placeholder(),
            },
        ]
    });
    let chart_titles = ChartId::iter()
        .filter(|id| *id != ChartId::PeakTemp)
        .map(|id| text(TextSlot::ChartTitle(id), id.title_key(), id.default_title()));

    FIXED_BINDINGS
        .iter()
        .copied()
        .chain(fields)
        .chain(chart_titles)
        .collect()
}

fn write(renderer: &mut dyn Renderer, binding: &TextBinding, value: &str) {
    match binding.kind {
        BindingKind::Placeholder => renderer.set_placeholder(binding.slot, value),
        BindingKind::Text => renderer.set_text(binding.slot, value),
    }
}

/// Writes the built-in English text into every bound element.
pub fn apply_default_text(renderer: &mut dyn Renderer) {
    for binding in static_bindings() {
        write(renderer, &binding, binding.default);
    }
}

/// Re-resolves every bound element against the catalog. Elements whose key is
/// absent keep whatever they currently show. Returns how many were written.
pub fn apply_static_bindings(catalog: &LanguageCatalog, renderer: &mut dyn Renderer) -> usize {
    let mut written = 0;
    for binding in static_bindings() {
        if let Some(value) = catalog.get(binding.key) {
            write(renderer, &binding, value);
            written += 1;
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRenderer;
    use std::collections::HashMap;

    #[test]
    fn absent_keys_leave_elements_unchanged() {
        let mut renderer = RecordingRenderer::default();
        apply_default_text(&mut renderer);

        let catalog = LanguageCatalog::new(
            "fr",
            HashMap::from([("run_simulation".to_string(), "Lancer".to_string())]),
        );
        let written = apply_static_bindings(&catalog, &mut renderer);

        assert_eq!(written, 1);
        assert_eq!(renderer.text(TextSlot::RunButton), Some("Lancer"));
        assert_eq!(
            renderer.text(TextSlot::AppTitle),
            Some("Agrivoltaic Water-Savings Simulator")
        );
    }

    #[test]
    fn inputs_receive_placeholders_not_text() {
        let mut renderer = RecordingRenderer::default();
        let catalog = LanguageCatalog::new(
            "fr",
            HashMap::from([
                ("crop_name_placeholder".to_string(), "ex. Tomate".to_string()),
                ("crop_name".to_string(), "Culture".to_string()),
            ]),
        );
        apply_static_bindings(&catalog, &mut renderer);
        assert_eq!(
            renderer.placeholder(TextSlot::FieldInput(FieldId::CropName)),
            Some("ex. Tomate")
        );
        assert_eq!(renderer.text(TextSlot::FieldInput(FieldId::CropName)), None);
        assert_eq!(
            renderer.text(TextSlot::FieldLabel(FieldId::CropName)),
            Some("Culture")
        );
    }

    #[test]
    fn shipped_languages_cover_every_binding() {
        let shipped = [
            ("en", include_str!("../../assets/languages/en.json")),
            ("fr", include_str!("../../assets/languages/fr.json")),
            ("it", include_str!("../../assets/languages/it.json")),
        ];
        for (code, body) in shipped {
            let mut catalog = LanguageCatalog::default();
            catalog.load(code, Ok(body.to_string())).unwrap();
            for binding in static_bindings() {
                assert!(catalog.get(binding.key).is_some(), "{} lacks {}", code, binding.key);
            }
            assert!(catalog.get("peak_temp_chart_title").unwrap().contains("{date}"));
            assert!(!catalog.get("peak_temp_chart_title_undated").unwrap().contains('{'));
            assert!(catalog.get("simulation_failed").unwrap().contains("{message}"));
        }
    }

    #[test]
    fn peak_temperature_title_is_not_static() {
        assert!(
            static_bindings()
                .iter()
                .all(|b| b.slot != TextSlot::ChartTitle(ChartId::PeakTemp))
        );
    }
}
