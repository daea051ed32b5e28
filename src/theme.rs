// Theme colors module for the portfolio's light/dark palettes.
//
// Provides a centralized color palette (`ThemeColors`) with const LIGHT and
// DARK variants. The light palette carries the portfolio's cream/brown/pink
// scheme; the dark palette keeps the same hues on a near-black ground.
// `apply_theme_visuals()` switches egui's visual style to match.

use egui::Color32;

/// Centralized color palette for theme-critical UI elements.
///
/// Rendering code calls `ThemeColors::current(dark_mode)` to get the active
/// palette.
pub struct ThemeColors {
    // Page
    pub page_bg: Color32,
    pub heading: Color32,
    pub body_text: Color32,
    pub body_soft: Color32,
    pub divider: Color32,
    pub link: Color32,
    pub accent: Color32,
    // Inline code and quotes (markdown bodies)
    pub inline_code_bg: Color32,
    pub inline_code_fg: Color32,
    pub quote_bar: Color32,
    pub quote_text: Color32,
    // Side navigation bar
    pub nav_bg: Color32,
    pub nav_border: Color32,
    pub nav_icon: Color32,
    pub nav_active_bg: Color32,
    pub nav_hover_bg: Color32,
    pub tooltip_bg: Color32,
    pub tooltip_text: Color32,
    // Cards and buttons
    pub card_bg: Color32,
    pub card_border: Color32,
    pub chip_bg: Color32,
    pub button_grad_start: Color32,
    pub button_grad_end: Color32,
    pub button_text: Color32,
    // Status bar
    pub status_hint: Color32,
}

impl ThemeColors {
    /// Light palette — the portfolio's signature cream/brown/pink scheme.
    pub const LIGHT: Self = Self {
        page_bg: Color32::from_rgb(255, 247, 242),
        heading: Color32::from_rgb(73, 59, 50),
        body_text: Color32::from_rgb(73, 59, 50),
        body_soft: Color32::from_rgb(122, 106, 96),
        divider: Color32::from_rgb(219, 208, 200),
        link: Color32::from_rgb(0, 102, 204),
        accent: Color32::from_rgb(247, 85, 144),
        inline_code_bg: Color32::from_rgb(245, 238, 232),
        inline_code_fg: Color32::from_rgb(120, 60, 90),
        quote_bar: Color32::from_rgb(247, 85, 144),
        quote_text: Color32::from_rgb(100, 85, 75),
        nav_bg: Color32::from_rgb(255, 247, 242),
        nav_border: Color32::from_rgb(219, 208, 200),
        nav_icon: Color32::from_rgb(73, 59, 50),
        nav_active_bg: Color32::from_rgb(223, 211, 203),
        nav_hover_bg: Color32::from_rgb(237, 227, 220),
        tooltip_bg: Color32::from_rgb(73, 59, 50),
        tooltip_text: Color32::from_rgb(255, 247, 242),
        card_bg: Color32::WHITE,
        card_border: Color32::from_rgb(228, 219, 212),
        chip_bg: Color32::from_rgb(244, 236, 230),
        button_grad_start: Color32::from_rgb(247, 85, 144),
        button_grad_end: Color32::from_rgb(73, 59, 50),
        button_text: Color32::WHITE,
        status_hint: Color32::from_rgb(150, 135, 125),
    };

    /// Dark palette — same hues on a near-black ground.
    pub const DARK: Self = Self {
        page_bg: Color32::from_rgb(24, 20, 17),
        heading: Color32::from_rgb(255, 247, 242),
        body_text: Color32::from_rgb(228, 218, 210),
        body_soft: Color32::from_rgb(168, 155, 145),
        divider: Color32::from_rgb(62, 52, 45),
        link: Color32::from_rgb(120, 190, 255),
        accent: Color32::from_rgb(247, 85, 144),
        inline_code_bg: Color32::from_rgb(38, 32, 28),
        inline_code_fg: Color32::from_rgb(255, 170, 200),
        quote_bar: Color32::from_rgb(247, 85, 144),
        quote_text: Color32::from_rgb(200, 188, 178),
        nav_bg: Color32::from_rgb(38, 32, 28),
        nav_border: Color32::from_rgb(70, 58, 50),
        nav_icon: Color32::from_rgb(238, 228, 220),
        nav_active_bg: Color32::from_rgb(92, 76, 65),
        nav_hover_bg: Color32::from_rgb(62, 52, 45),
        tooltip_bg: Color32::from_rgb(255, 247, 242),
        tooltip_text: Color32::from_rgb(73, 59, 50),
        card_bg: Color32::from_rgb(34, 28, 24),
        card_border: Color32::from_rgb(62, 52, 45),
        chip_bg: Color32::from_rgb(48, 40, 34),
        button_grad_start: Color32::from_rgb(247, 85, 144),
        button_grad_end: Color32::from_rgb(120, 95, 80),
        button_text: Color32::WHITE,
        status_hint: Color32::from_rgb(140, 128, 118),
    };

    /// Returns the palette for the given mode.
    pub fn current(dark_mode: bool) -> &'static Self {
        if dark_mode {
            &Self::DARK
        } else {
            &Self::LIGHT
        }
    }
}

/// Apply light or dark visuals with the portfolio's background colors.
/// Clones the current style to preserve spacing/rounding set at startup.
pub fn apply_theme_visuals(ctx: &egui::Context, dark: bool) {
    let mut style = (*ctx.style()).clone();
    style.visuals = if dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    let colors = ThemeColors::current(dark);
    style.visuals.window_fill = colors.page_bg;
    style.visuals.panel_fill = colors.page_bg;
    style.visuals.extreme_bg_color = colors.page_bg;
    style.visuals.faint_bg_color = colors.chip_bg;
    style.visuals.hyperlink_color = colors.link;
    style.visuals.override_text_color = Some(colors.body_text);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_returns_light() {
        let tc = ThemeColors::current(false);
        assert_eq!(tc.page_bg, ThemeColors::LIGHT.page_bg);
        assert_eq!(tc.tooltip_bg, ThemeColors::LIGHT.tooltip_bg);
    }

    #[test]
    fn test_current_returns_dark() {
        let tc = ThemeColors::current(true);
        assert_eq!(tc.page_bg, ThemeColors::DARK.page_bg);
        assert_eq!(tc.tooltip_bg, ThemeColors::DARK.tooltip_bg);
    }

    #[test]
    fn test_light_palette_matches_site_scheme() {
        // Cream page, brown ink, pink accent
        assert_eq!(ThemeColors::LIGHT.page_bg, Color32::from_rgb(255, 247, 242));
        assert_eq!(ThemeColors::LIGHT.heading, Color32::from_rgb(73, 59, 50));
        assert_eq!(ThemeColors::LIGHT.accent, Color32::from_rgb(247, 85, 144));
        // The tooltip inverts the page colors
        assert_eq!(ThemeColors::LIGHT.tooltip_bg, ThemeColors::LIGHT.heading);
        assert_eq!(ThemeColors::LIGHT.tooltip_text, ThemeColors::LIGHT.page_bg);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(ThemeColors::LIGHT.page_bg, ThemeColors::DARK.page_bg);
        assert_ne!(ThemeColors::LIGHT.heading, ThemeColors::DARK.heading);
        assert_ne!(ThemeColors::LIGHT.nav_bg, ThemeColors::DARK.nav_bg);
        assert_ne!(ThemeColors::LIGHT.link, ThemeColors::DARK.link);
    }

    #[test]
    fn test_apply_theme_visuals() {
        let ctx = egui::Context::default();
        apply_theme_visuals(&ctx, true);
        assert_eq!(ctx.style().visuals.panel_fill, ThemeColors::DARK.page_bg);
        apply_theme_visuals(&ctx, false);
        assert_eq!(ctx.style().visuals.panel_fill, ThemeColors::LIGHT.page_bg);
        assert_eq!(
            ctx.style().visuals.hyperlink_color,
            ThemeColors::LIGHT.link
        );
    }
}
