use webnotes_quiz::QuizApp;
use webnotes_quiz::app::Preferences;
use webnotes_quiz::config::AppConfig;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = AppConfig::discover();
    let title = config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            let preferences: Option<Preferences> = cc
                .storage
                .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));
            Ok(Box::new(QuizApp::new(config, preferences)?))
        }),
    )
}
