use {
    crate::theme::ThemeMode,
    eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke},
};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub label_subdued: Color32,
    pub metric_value: Color32,
    pub side_panel: Color32,
    pub central_panel: Color32,
    pub card: Color32,
    pub error: Color32,
    pub location: Color32,
}

/// Accent per analysis-comment tag.
#[derive(Clone, Copy)]
pub struct CommentColors {
    pub info: Color32,
    pub ai: Color32,
    pub ai_disabled: Color32,
    pub ai_error: Color32,
    pub other: Color32,
}

pub struct UiConfig {
    pub light: UiColors,
    pub dark: UiColors,
    pub comments: CommentColors,
    pub side_panel_width: f32,
    pub input_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    light: UiColors {
        heading: Color32::from_rgb(46, 125, 50),
        subsection_heading: Color32::from_rgb(21, 101, 192),
        label_subdued: Color32::from_rgb(110, 110, 110),
        metric_value: Color32::from_rgb(30, 30, 30),
        side_panel: Color32::from_rgb(244, 246, 248),
        central_panel: Color32::from_rgb(255, 255, 255),
        card: Color32::from_rgb(248, 249, 250),
        error: Color32::from_rgb(198, 40, 40),
        location: Color32::from_rgb(21, 101, 192),
    },
    dark: UiColors {
        heading: Color32::from_rgb(129, 199, 132),
        subsection_heading: Color32::from_rgb(100, 181, 246),
        label_subdued: Color32::from_rgb(160, 160, 160),
        metric_value: Color32::from_rgb(235, 235, 235),
        side_panel: Color32::from_rgb(30, 30, 30),
        central_panel: Color32::from_rgb(18, 18, 18),
        card: Color32::from_rgb(38, 38, 38),
        error: Color32::from_rgb(239, 83, 80),
        location: Color32::from_rgb(100, 181, 246),
    },
    comments: CommentColors {
        info: Color32::from_rgb(33, 150, 243),
        ai: Color32::from_rgb(156, 39, 176),
        ai_disabled: Color32::from_rgb(158, 158, 158),
        ai_error: Color32::from_rgb(244, 67, 54),
        other: Color32::from_rgb(120, 144, 156),
    },
    side_panel_width: 300.0,
    input_width: 140.0,
};

impl UiConfig {
    pub fn colors(&self, mode: ThemeMode) -> &UiColors {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    pub fn comment_color(&self, tag: &str) -> Color32 {
        match tag {
            "info" => self.comments.info,
            "ai" => self.comments.ai,
            "ai-disabled" => self.comments.ai_disabled,
            "ai-error" => self.comments.ai_error,
            _ => self.comments.other,
        }
    }

    /// Frame for the input side panel
    pub fn side_panel_frame(&self, mode: ThemeMode) -> Frame {
        Frame {
            fill: self.colors(mode).side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(10),
            ..Default::default()
        }
    }

    /// Frame for the top bar (tighter vertically)
    pub fn top_panel_frame(&self, mode: ThemeMode) -> Frame {
        Frame {
            fill: self.colors(mode).side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(10, 6),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self, mode: ThemeMode) -> Frame {
        Frame {
            fill: self.colors(mode).central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Card around the metrics, each comment and the error text.
    pub fn card_frame(&self, mode: ThemeMode) -> Frame {
        Frame {
            fill: self.colors(mode).card,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            corner_radius: CornerRadius::same(4),
            ..Default::default()
        }
    }
}
