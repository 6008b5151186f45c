//! Theme and styling for the Jokebox UI

use egui::{Color32, Rounding, Stroke, Visuals};

/// Application theme configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Primary accent color
    pub accent: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_muted: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Small spacing
    pub spacing_sm: f32,

    dark: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Create a dark theme
    pub fn dark() -> Self {
        Self {
            accent: Color32::from_rgb(99, 102, 241), // Indigo

            bg_primary: Color32::from_rgb(24, 24, 27),   // Near-black
            bg_secondary: Color32::from_rgb(39, 39, 42), // Dark gray

            text_primary: Color32::from_rgb(244, 244, 245), // Almost white
            text_muted: Color32::from_rgb(161, 161, 170),   // Medium gray

            button_rounding: Rounding::same(8.0),

            spacing: 16.0,
            spacing_sm: 8.0,

            dark: true,
        }
    }

    /// Create a light theme
    pub fn light() -> Self {
        Self {
            accent: Color32::from_rgb(79, 70, 229), // Indigo

            bg_primary: Color32::from_rgb(250, 250, 250),  // White
            bg_secondary: Color32::from_rgb(228, 228, 231), // Light gray

            text_primary: Color32::from_rgb(24, 24, 27),  // Dark
            text_muted: Color32::from_rgb(113, 113, 122), // Medium gray

            button_rounding: Rounding::same(8.0),

            spacing: 16.0,
            spacing_sm: 8.0,

            dark: false,
        }
    }

    /// Theme for the given dark-mode flag
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.hovered.bg_fill = self.accent.gamma_multiply(0.8);
        visuals.widgets.active.bg_fill = self.accent;

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_mode_picks_matching_palette() {
        assert!(Theme::for_mode(true).is_dark());
        assert!(!Theme::for_mode(false).is_dark());
        assert_ne!(Theme::dark().bg_primary, Theme::light().bg_primary);
    }

    #[test]
    fn apply_sets_panel_fill() {
        let ctx = egui::Context::default();
        let theme = Theme::dark();
        theme.apply(&ctx);
        assert_eq!(ctx.style().visuals.panel_fill, theme.bg_primary);
    }
}
