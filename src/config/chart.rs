//! Chart visualization configuration

use eframe::egui::Color32;

/// Colour tokens for one theme. Only these channels change on a theme switch.
pub struct ThemePalette {
    /// Axis ticks and legend labels
    pub text: Color32,
    /// Axis grid lines
    pub grid: Color32,
}

pub struct ChartConfig {
    pub light: ThemePalette,
    pub dark: ThemePalette,

    /// Series colours for datasets that arrive without one
    pub series_palette: &'static [&'static str],

    // --- OPTIMAL PITCH MARKER ---
    pub marker_color: &'static str,
    pub marker_width: f32,
    /// Dash and gap length of the marker line
    pub marker_dash: [f32; 2],

    pub default_line_width: f32,
    pub default_point_radius: f32,
    /// Fraction of a category slot covered by all bars of that slot
    pub bar_group_width: f64,

    pub chart_height: f32,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
    light: ThemePalette {
        text: Color32::from_rgb(102, 102, 102),
        grid: Color32::from_rgba_premultiplied(0, 0, 0, 25), // black @ 10%
    },
    dark: ThemePalette {
        text: Color32::from_rgb(224, 224, 224),
        grid: Color32::from_rgba_premultiplied(25, 25, 25, 25), // white @ 10%
    },

    series_palette: &[
        "#36a2eb", // Blue
        "#ff6384", // Red-Pink
        "#4bc0c0", // Teal
        "#ff9f40", // Orange
        "#9966ff", // Purple
        "#ffcd56", // Yellow
    ],

    marker_color: "red",
    marker_width: 2.0,
    marker_dash: [6.0, 6.0],

    default_line_width: 2.0,
    default_point_radius: 3.0,
    bar_group_width: 0.8,

    chart_height: 220.0,
};
