mod app;
mod config;
mod event;
mod fonts;
mod i18n;
mod panels;
mod router;
mod services;
mod settings;
mod speech;
#[cfg(test)]
mod test_support;
mod theme;

use anyhow::Context as _;
use app::SahayataApp;
use config::Config;
use eframe::egui;
use i18n::TranslationStore;
use services::gemini::GeminiClient;
use services::ServiceHub;
use settings::{Settings, SettingsContext};
use speech::{CommandRecognizer, CommandSynthesizer, Narrator, SpeechRecognizer, SpeechSynthesizer};
use std::sync::{mpsc, Arc};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    tracing::info!(?config, "configuration loaded");

    let store = Arc::new(TranslationStore::builtin().context("bundled locale packs")?);
    let mut settings = SettingsContext::new(store);
    if let Some(language) = config.language {
        settings.set(Settings {
            language,
            ..*settings.settings()
        });
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("sahayata-runtime")
        .build()
        .context("failed to build tokio runtime")?;

    let backend = Arc::new(GeminiClient::new(&config)?);

    let recognizer = CommandRecognizer::from_command_line(config.stt_command.as_deref())
        .map(|recognizer| Arc::new(recognizer) as Arc<dyn SpeechRecognizer>);
    let synthesizer = CommandSynthesizer::detect()
        .map(|synthesizer| Box::new(synthesizer) as Box<dyn SpeechSynthesizer>);
    tracing::info!(
        voice_input = recognizer.is_some(),
        read_aloud = synthesizer.is_some(),
        "speech capabilities detected"
    );

    let (tx, rx) = mpsc::channel();
    let hub = ServiceHub::new(runtime.handle().clone(), tx, backend, recognizer);
    let _runtime = runtime;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sahayata")
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sahayata",
        native_options,
        Box::new(move |creation_context| {
            hub.attach_repaint(creation_context.egui_ctx.clone());
            fonts::install(&creation_context.egui_ctx);
            let app = SahayataApp::new(
                rx,
                hub,
                settings,
                Narrator::new(synthesizer),
                config.start_view.as_deref(),
            );
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to open the window: {err}"))?;

    Ok(())
}
