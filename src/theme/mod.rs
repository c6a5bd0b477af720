//! Light/dark theme state and the colour tokens charts are styled with.

mod store;

#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;
#[cfg(target_arch = "wasm32")]
pub use store::LocalStorage;
pub use store::{MemoryStore, PreferenceStore};

use {
    crate::{
        charts::ChartRegistry,
        config::{CHART_CONFIG, DF, PERSISTENCE},
        render::Renderer,
    },
    eframe::egui::Color32,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Default,
)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn tokens(self) -> ThemeTokens {
        let palette = match self {
            Self::Light => &CHART_CONFIG.light,
            Self::Dark => &CHART_CONFIG.dark,
        };
        ThemeTokens {
            text: palette.text,
            grid: palette.grid,
        }
    }
}

/// Colours that encode the theme on charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Ticks and legend labels
    pub text: Color32,
    pub grid: Color32,
}

pub struct ThemeState {
    mode: ThemeMode,
    store: Box<dyn PreferenceStore>,
}

impl ThemeState {
    /// Reads the persisted choice; anything unrecognised falls back to light.
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let mode = store
            .get(PERSISTENCE.prefs.theme_key)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self { mode, store }
    }

    pub fn get(&self) -> ThemeMode {
        self.mode
    }

    pub fn tokens(&self) -> ThemeTokens {
        self.mode.tokens()
    }

    /// Updates, persists, and restyles every live chart in place.
    pub fn set(&mut self, mode: ThemeMode, charts: &mut ChartRegistry, renderer: &mut dyn Renderer) {
        self.mode = mode;
        self.store
            .set(PERSISTENCE.prefs.theme_key, &mode.to_string());
        let restyled = charts.restyle_all(mode.tokens(), renderer);
        if DF.log_theme {
            log::info!("Theme set to {} ({} live charts restyled)", mode, restyled);
        }
    }

    pub fn toggle(&mut self, charts: &mut ChartRegistry, renderer: &mut dyn Renderer) {
        self.set(self.mode.toggled(), charts, renderer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{ChartData, ChartId, ChartKind, ChartOptions},
        testing::RecordingRenderer,
    };

    fn registry_with_two_charts(renderer: &mut RecordingRenderer, tokens: ThemeTokens) -> ChartRegistry {
        let mut charts = ChartRegistry::default();
        for id in [ChartId::Irradiance, ChartId::MonthlyWater] {
            charts
                .create(id, ChartKind::Line, ChartData::default(), ChartOptions::default(), tokens, renderer)
                .unwrap();
        }
        charts
    }

    #[test]
    fn load_reads_persisted_choice() {
        let mut store = MemoryStore::default();
        store.set("theme", "dark");
        assert_eq!(ThemeState::load(Box::new(store)).get(), ThemeMode::Dark);

        let mut junk = MemoryStore::default();
        junk.set("theme", "sepia");
        assert_eq!(ThemeState::load(Box::new(junk)).get(), ThemeMode::Light);
    }

    #[test]
    fn toggle_twice_restores_tokens_without_recreating_charts() {
        let mut renderer = RecordingRenderer::default();
        let mut theme = ThemeState::load(Box::new(MemoryStore::default()));
        let mut charts = registry_with_two_charts(&mut renderer, theme.tokens());

        let before: Vec<_> = charts.iter().map(|(id, c)| (*id, c.instance_id, c.options.clone())).collect();
        let draws_before = renderer.draw_count;

        theme.toggle(&mut charts, &mut renderer);
        assert_eq!(theme.get(), ThemeMode::Dark);
        let dark = ThemeMode::Dark.tokens();
        for (_, chart) in charts.iter() {
            assert_eq!(chart.options.x.tick_color, Some(dark.text));
            assert_eq!(chart.options.y.grid_color, Some(dark.grid));
            assert_eq!(chart.options.legend.label_color, Some(dark.text));
        }

        theme.toggle(&mut charts, &mut renderer);
        let after: Vec<_> = charts.iter().map(|(id, c)| (*id, c.instance_id, c.options.clone())).collect();

        assert_eq!(before, after);
        assert_eq!(renderer.draw_count, draws_before);
        assert_eq!(renderer.theme_updates, 4);
    }

    #[test]
    fn set_persists_choice() {
        let mut renderer = RecordingRenderer::default();
        let mut charts = ChartRegistry::default();
        let mut theme = ThemeState::load(Box::new(MemoryStore::default()));
        theme.set(ThemeMode::Dark, &mut charts, &mut renderer);
        assert_eq!(theme.store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn restyle_keeps_data_and_kind() {
        let mut renderer = RecordingRenderer::default();
        let mut theme = ThemeState::load(Box::new(MemoryStore::default()));
        let mut charts = registry_with_two_charts(&mut renderer, theme.tokens());
        let data_before: Vec<_> = charts.iter().map(|(_, c)| (c.kind, c.data.clone(), c.options.x.scale)).collect();
        theme.toggle(&mut charts, &mut renderer);
        let data_after: Vec<_> = charts.iter().map(|(_, c)| (c.kind, c.data.clone(), c.options.x.scale)).collect();
        assert_eq!(data_before, data_after);
    }
}
