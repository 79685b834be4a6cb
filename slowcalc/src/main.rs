//! SlowCalc - A calculator for the Slow Computer
//!
//! Four-function calculator with powers, sign change and a random operand.

mod app;

use app::SlowCalcApp;
use eframe::NativeOptions;
use slowcalc::CalcConfig;

fn main() -> eframe::Result<()> {
    let config_path = CalcConfig::default_path();
    let loaded = CalcConfig::load(&config_path);
    slowcore::logging::init(
        loaded
            .as_ref()
            .map_or(slowcore::logging::DEFAULT_FILTER, |c| c.log_filter.as_str()),
    );
    let config = CalcConfig::or_init(loaded, &config_path);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), config = %config_path.display(), "starting");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([240.0, 300.0])
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            slowcore::SlowTheme::default()
                .with_button_size(config.font_size_buttons)
                .apply(&cc.egui_ctx);
            Box::new(SlowCalcApp::new(cc, &config))
        }),
    )
}
