//! SlowCalc application

use std::time::{Duration, Instant};

use egui::{Context, Key};
use slowcalc::keypad::{self, KEYPAD, KEYPAD_COLUMNS, KEYPAD_ROWS};
use slowcalc::operation::MINUS_GLYPH;
use slowcalc::{event_for_key, CalcConfig, CalcEvent, Calculator, KeyInput};
use slowcore::theme::{consume_special_keys, menu_bar, SlowColors};

/// How long a keypad button stays inverted after its keyboard shortcut.
const FLASH_DURATION: Duration = Duration::from_millis(150);
const DISPLAY_MARGIN: f32 = 8.0;

pub struct SlowCalcApp {
    calc: Calculator,
    font_size_display: f32,
    /// Keypad cell lit by the last shortcut, and when it was lit.
    flash: Option<((usize, usize), Instant)>,
    show_about: bool,
}

impl SlowCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &CalcConfig) -> Self {
        Self {
            calc: Calculator::new(),
            font_size_display: config.font_size_display,
            flash: None,
            show_about: false,
        }
    }

    fn press(&mut self, event: CalcEvent) {
        self.calc.dispatch(event);
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);

        let inputs: Vec<KeyInput> = ctx.input(|i| i.events.iter().filter_map(key_input).collect());
        for input in inputs {
            let Some(event) = event_for_key(input) else {
                continue;
            };
            self.press(event);
            if let Some(cell) = keypad::find(event) {
                self.flash = Some((cell, Instant::now()));
            }
        }
    }

    fn flashing(&self, cell: (usize, usize)) -> bool {
        matches!(self.flash, Some((lit, at)) if lit == cell && at.elapsed() < FLASH_DURATION)
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let display_height = self.font_size_display * 1.4;
        egui::Frame::none()
            .fill(SlowColors::WHITE)
            .stroke(egui::Stroke::new(1.0, SlowColors::BLACK))
            .inner_margin(egui::Margin::symmetric(DISPLAY_MARGIN, 4.0))
            .show(ui, |ui| {
                ui.set_min_height(display_height);
                ui.set_max_height(display_height);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.calc.display_text())
                            .font(egui::FontId::proportional(self.font_size_display))
                            .color(SlowColors::BLACK),
                    );
                });
            });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing;
        let btn_w = (ui.available_width() - spacing.x * (KEYPAD_COLUMNS - 1) as f32) / KEYPAD_COLUMNS as f32;
        let btn_h = ((ui.available_height() - spacing.y * (KEYPAD_ROWS - 1) as f32) / KEYPAD_ROWS as f32).max(24.0);

        let mut pressed = None;
        for (row, buttons) in KEYPAD.iter().enumerate() {
            ui.horizontal(|ui| {
                for (col, button) in buttons.iter().enumerate() {
                    let widget = if self.flashing((row, col)) {
                        egui::Button::new(egui::RichText::new(button.label).color(SlowColors::WHITE))
                            .fill(SlowColors::BLACK)
                    } else {
                        egui::Button::new(button.label)
                    };
                    if ui.add_sized([btn_w, btn_h], widget).clicked() {
                        pressed = Some(button.event);
                    }
                }
            });
        }
        if let Some(event) = pressed {
            self.press(event);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label("calculator for slowOS");
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("keys: 0-9 . + - * / ^ = ?");
                ui.label("Enter solve, Esc clear");
                ui.label("Backspace delete, F9 \u{00b1}");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }

    fn draw(&mut self, ctx: &Context) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("copy result").clicked() {
                        let text = self.calc.display_text().replace(MINUS_GLYPH, "-");
                        ui.ctx().output_mut(|o| o.copied_text = text);
                        ui.close_menu();
                    }
                    if ui.button("clear").clicked() {
                        self.press(CalcEvent::Clear);
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(SlowColors::WHITE).inner_margin(egui::Margin::same(10.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }

        // keep repainting only while a shortcut flash is fading
        if let Some((_, at)) = self.flash {
            match FLASH_DURATION.checked_sub(at.elapsed()) {
                Some(remaining) => ctx.request_repaint_after(remaining),
                None => self.flash = None,
            }
        }
    }
}

impl eframe::App for SlowCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        slowcore::safety::catch_or((), || self.draw(ctx));
    }
}

/// Translate an egui input event into a calculator key.
fn key_input(event: &egui::Event) -> Option<KeyInput> {
    match event {
        egui::Event::Text(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyInput::Text(c)),
                _ => None,
            }
        }
        egui::Event::Key { key, pressed: true, repeat: false, .. } => match key {
            Key::Enter => Some(KeyInput::Enter),
            Key::Escape => Some(KeyInput::Escape),
            Key::Backspace => Some(KeyInput::Backspace),
            Key::F9 => Some(KeyInput::Invert),
            _ => None,
        },
        _ => None,
    }
}
