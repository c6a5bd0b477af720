use {
    crate::{
        config::DF,
        error::DashboardError,
        models::{ChartData, ChartId, ChartKind, ChartOptions},
        render::Renderer,
        theme::ThemeTokens,
    },
    std::collections::BTreeMap,
};

/// One live chart. `options` already has the theme defaults merged in.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    /// Unique across the registry's lifetime; a recreated chart gets a new one.
    pub instance_id: u64,
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// At most one live instance per `ChartId`.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    live: BTreeMap<ChartId, ChartInstance>,
    next_instance_id: u64,
}

impl ChartRegistry {
    /// Disposes everything. Safe to call repeatedly and without a charting backend.
    pub fn destroy_all(&mut self, renderer: &mut dyn Renderer) {
        if self.live.is_empty() {
            return;
        }
        if DF.log_charts {
            log::info!("Destroying {} live charts", self.live.len());
        }
        for id in std::mem::take(&mut self.live).into_keys() {
            renderer.dispose_chart(id);
        }
    }

    /// Registers and draws a new instance under `id`.
    ///
    /// Theme defaults are applied first and `options` laid over them, so any key the
    /// caller sets wins. A still-live `id` is refused: destruction is always explicit.
    pub fn create(
        &mut self,
        id: ChartId,
        kind: ChartKind,
        data: ChartData,
        options: ChartOptions,
        tokens: ThemeTokens,
        renderer: &mut dyn Renderer,
    ) -> Result<u64, DashboardError> {
        if self.live.contains_key(&id) {
            return Err(DashboardError::ChartAlreadyLive(id));
        }
        if !renderer.charting_available() {
            return Err(DashboardError::RenderingUnavailable);
        }

        let instance_id = self.next_instance_id;
        self.next_instance_id += 1;

        let instance = ChartInstance {
            instance_id,
            kind,
            data,
            options: ChartOptions::themed(tokens).overlay(options),
        };
        renderer.draw_chart(id, &instance);
        self.live.insert(id, instance);

        if DF.log_charts {
            log::info!("Created chart {} (instance {})", id, instance_id);
        }
        Ok(instance_id)
    }

    /// Pushes new theme tokens into every live chart and redraws in place.
    /// Returns how many charts were touched.
    pub fn restyle_all(&mut self, tokens: ThemeTokens, renderer: &mut dyn Renderer) -> usize {
        for (id, chart) in self.live.iter_mut() {
            chart.options.apply_theme(tokens);
            renderer.update_chart_theme(*id, chart);
        }
        self.live.len()
    }

    pub fn get(&self, id: ChartId) -> Option<&ChartInstance> {
        self.live.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChartId, &ChartInstance)> {
        self.live.iter()
    }

    pub fn ids(&self) -> Vec<ChartId> {
        self.live.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{AxisOptions, ScaleKind},
        testing::RecordingRenderer,
        theme::ThemeMode,
    };
    use eframe::egui::Color32;

    fn light() -> ThemeTokens {
        ThemeMode::Light.tokens()
    }

    #[test]
    fn create_refuses_live_id_until_destroyed() {
        let mut renderer = RecordingRenderer::default();
        let mut charts = ChartRegistry::default();

        let first = charts
            .create(ChartId::Irradiance, ChartKind::Line, ChartData::default(), ChartOptions::default(), light(), &mut renderer)
            .unwrap();
        let err = charts
            .create(ChartId::Irradiance, ChartKind::Line, ChartData::default(), ChartOptions::default(), light(), &mut renderer)
            .unwrap_err();
        assert_eq!(err, DashboardError::ChartAlreadyLive(ChartId::Irradiance));
        assert_eq!(charts.get(ChartId::Irradiance).unwrap().instance_id, first);

        charts.destroy_all(&mut renderer);
        let second = charts
            .create(ChartId::Irradiance, ChartKind::Line, ChartData::default(), ChartOptions::default(), light(), &mut renderer)
            .unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn charts_are_independent() {
        let mut renderer = RecordingRenderer::default();
        let mut charts = ChartRegistry::default();
        charts
            .create(ChartId::PeakTemp, ChartKind::Line, ChartData::default(), ChartOptions::default(), light(), &mut renderer)
            .unwrap();
        let before = charts.get(ChartId::PeakTemp).cloned();
        charts
            .create(ChartId::MonthlyWater, ChartKind::Bar, ChartData::default(), ChartOptions::default(), light(), &mut renderer)
            .unwrap();
        assert_eq!(charts.get(ChartId::PeakTemp).cloned(), before);
        assert_eq!(charts.ids(), vec![ChartId::PeakTemp, ChartId::MonthlyWater]);
    }

    #[test]
    fn destroy_all_is_idempotent() {
        let mut renderer = RecordingRenderer::default();
        let mut charts = ChartRegistry::default();
        charts.destroy_all(&mut renderer);
        charts
            .create(ChartId::CumulativeWater, ChartKind::Line, ChartData::default(), ChartOptions::default(), light(), &mut renderer)
            .unwrap();
        charts.destroy_all(&mut renderer);
        charts.destroy_all(&mut renderer);
        assert!(charts.is_empty());
        assert_eq!(renderer.disposed, vec![ChartId::CumulativeWater]);
    }

    #[test]
    fn unavailable_backend_is_reported_and_nothing_registered() {
        let mut renderer = RecordingRenderer::without_charting();
        let mut charts = ChartRegistry::default();
        let err = charts
            .create(ChartId::Irradiance, ChartKind::Line, ChartData::default(), ChartOptions::default(), light(), &mut renderer)
            .unwrap_err();
        assert_eq!(err, DashboardError::RenderingUnavailable);
        assert!(charts.is_empty());
        charts.destroy_all(&mut renderer);
    }

    #[test]
    fn caller_options_override_theme_defaults_per_key() {
        let mut renderer = RecordingRenderer::default();
        let mut charts = ChartRegistry::default();
        let options = ChartOptions {
            y: AxisOptions {
                grid_color: Some(Color32::RED),
                scale: Some(ScaleKind::Linear),
                ..Default::default()
            },
            ..Default::default()
        };
        charts
            .create(ChartId::Optimization, ChartKind::Line, ChartData::default(), options, light(), &mut renderer)
            .unwrap();
        let chart = charts.get(ChartId::Optimization).unwrap();
        assert_eq!(chart.options.y.grid_color, Some(Color32::RED));
        assert_eq!(chart.options.y.tick_color, Some(light().text));
        assert_eq!(chart.options.x.grid_color, Some(light().grid));
        assert_eq!(chart.options.legend.display, Some(true));
    }
}
