use eframe::egui::Color32;

/// Parses any CSS colour string the simulator sends (`"red"`, `"#36a2eb"`,
/// `"rgba(255, 99, 132, 0.2)"`, `"hsl(...)"`). Alpha is kept.
pub fn parse_css_color(css: &str) -> Option<Color32> {
    let color = colorgrad::Color::from_html(css.trim()).ok()?;
    Some(to_egui_color(color))
}

pub fn to_egui_color(color: colorgrad::Color) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// `i`-th colour of a cyclic palette, falling back to grey if an entry is unparsable.
pub fn palette_color(palette: &[&str], i: usize) -> Color32 {
    if palette.is_empty() {
        return Color32::GRAY;
    }
    parse_css_color(palette[i % palette.len()]).unwrap_or(Color32::GRAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_hex_and_rgba() {
        assert_eq!(parse_css_color("red"), Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(
            parse_css_color("#36a2eb"),
            Some(Color32::from_rgb(0x36, 0xa2, 0xeb))
        );
        let translucent = parse_css_color("rgba(255, 0, 0, 0.5)").unwrap();
        assert!(translucent.a() < 255);
        assert_eq!(parse_css_color("not-a-colour"), None);
    }

    #[test]
    fn palette_wraps() {
        let palette = ["#000000", "#ffffff"];
        assert_eq!(palette_color(&palette, 2), Color32::BLACK);
        assert_eq!(palette_color(&[], 0), Color32::GRAY);
    }
}
