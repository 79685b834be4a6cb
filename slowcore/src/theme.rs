//! Slow Computer theme — e-ink optimized
//!
//! Pure black and white. No grays. 1px black outlines.
//! IBM Plex Sans when it is installed, egui's built-in fonts otherwise.

use egui::{Color32, FontData, FontDefinitions, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::path::PathBuf;

/// Only two colors exist on this machine.
pub struct SlowColors;

impl SlowColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

const PROPORTIONAL_FONT: &str = "IBMPlexSans-Text.otf";

/// Theme configuration for slow computer apps
pub struct SlowTheme {
    pub font_size_body: f32,
    pub font_size_button: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for SlowTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_button: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl SlowTheme {
    /// Theme with a larger button face, for keypad-style apps.
    pub fn with_button_size(mut self, size: f32) -> Self {
        self.font_size_button = size;
        self
    }

    /// Places a font may live: next to the executable, the cargo workspace
    /// (exe is in target/debug or target/release), then system paths.
    fn font_search_paths(font_name: &str) -> Vec<PathBuf> {
        let mut search_paths = Vec::new();

        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                search_paths.push(dir.join("fonts").join(font_name));
                search_paths.push(dir.join(font_name));
                if let Some(grandparent) = dir.parent().and_then(|p| p.parent()) {
                    search_paths.push(grandparent.join("slowcore/fonts").join(font_name));
                }
            }
        }

        search_paths.push(PathBuf::from("/usr/share/slowos/fonts").join(font_name));
        search_paths.push(PathBuf::from("/usr/share/fonts").join(font_name));
        search_paths
    }

    fn load_font(font_name: &str) -> Option<Vec<u8>> {
        let data = Self::font_search_paths(font_name)
            .into_iter()
            .find_map(|path| std::fs::read(path).ok());
        if data.is_none() {
            tracing::debug!(font = font_name, "font not found, using egui default");
        }
        data
    }

    /// Apply the slow computer theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        // --- load fonts ---
        let mut fonts = FontDefinitions::default();
        if let Some(data) = Self::load_font(PROPORTIONAL_FONT) {
            fonts.font_data.insert("IBMPlexSans".to_owned(), FontData::from_owned(data));
            fonts.families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, "IBMPlexSans".to_owned());
        }
        ctx.set_fonts(fonts);

        // --- style ---
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        // --- visuals: pure black & white ---
        let mut visuals = Visuals::light();

        visuals.window_fill = SlowColors::WHITE;
        visuals.panel_fill = SlowColors::WHITE;
        visuals.faint_bg_color = SlowColors::WHITE;
        visuals.extreme_bg_color = SlowColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, SlowColors::BLACK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = SlowColors::WHITE;
            ws.weak_bg_fill = SlowColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, SlowColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, SlowColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.open);

        // pressed buttons invert
        visuals.widgets.active.bg_fill = SlowColors::BLACK;
        visuals.widgets.active.weak_bg_fill = SlowColors::BLACK;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, SlowColors::BLACK);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, SlowColors::WHITE);
        visuals.widgets.active.rounding = Rounding::ZERO;

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        visuals.selection.bg_fill = SlowColors::BLACK;
        visuals.selection.stroke = Stroke::new(1.0, SlowColors::WHITE);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(SlowColors::WHITE)
        .stroke(Stroke::new(1.0, SlowColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}

/// Strip key events that would otherwise make egui zoom (Cmd +/-/=) or
/// cycle focus (Tab). Call at the start of `update()`.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Key { key, modifiers, .. } => {
                !(modifiers.command
                    && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
            }
            _ => true,
        });
    });
}
