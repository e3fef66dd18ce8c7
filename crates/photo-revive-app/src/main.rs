#![warn(missing_docs)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! # photo-revive-app binary
//!
//! Desktop shell: renders purely from [`AppState`] and forwards upload,
//! process, and download intents. The single in-flight enhancement call
//! runs on a named worker thread and settles back through an mpsc channel
//! drained at the top of each frame.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use eframe::egui;
use photo_revive_app::{
    AppError, app_version, apply_enhance_outcome, build_enhance_client, enhance_original,
    load_original_image, model_config_from_env, save_generated_image,
};
use photo_revive_client::EnhanceClient;
use photo_revive_core::EncodedImage;
use photo_revive_ui::{
    APP_TAGLINE, APP_TITLE, AppState, DOWNLOAD_FILE_NAME, DOWNLOAD_LABEL, LOADING_MESSAGE,
    ORIGINAL_PANE_TITLE, PROCESS_FAILURE_MESSAGE, ProcessingTicket, RESULT_PANE_TITLE,
    RESULT_PLACEHOLDER, ResultPane, UPLOAD_FAILURE_MESSAGE, UPLOAD_HINT,
};

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,photo_revive_app=debug".to_string()),
        )
        .init();

    tracing::info!(version = app_version(), "starting photo-revive");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(PhotoReviveApp::new(cc)))),
    )
}

/// Settle events reported by enhancement worker threads.
enum WorkerEvent {
    EnhanceSettled {
        ticket: ProcessingTicket,
        outcome: Result<EncodedImage, AppError>,
    },
}

struct PhotoReviveApp {
    state: AppState,
    client: Option<Arc<EnhanceClient>>,
    config_error: Option<String>,
    event_tx: Sender<WorkerEvent>,
    event_rx: Receiver<WorkerEvent>,
    original_texture: Option<egui::TextureHandle>,
    generated_texture: Option<egui::TextureHandle>,
    status_line: Option<String>,
}

impl PhotoReviveApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let (client, config_error) = match model_config_from_env().and_then(build_enhance_client) {
            Ok(client) => (Some(Arc::new(client)), None),
            Err(error) => {
                tracing::error!(error = %error, "enhancement client unavailable");
                (None, Some(error.to_string()))
            }
        };

        Self {
            state: AppState::new(),
            client,
            config_error,
            event_tx,
            event_rx,
            original_texture: None,
            generated_texture: None,
            status_line: None,
        }
    }

    fn drain_worker_events(&mut self, ctx: &egui::Context) {
        loop {
            match self.event_rx.try_recv() {
                Ok(WorkerEvent::EnhanceSettled { ticket, outcome }) => {
                    apply_enhance_outcome(&mut self.state, ticket, outcome);
                    self.generated_texture = self
                        .state
                        .generated()
                        .and_then(|image| texture_from_image(ctx, "generated-image", image));
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn handle_upload(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
            .pick_file()
        else {
            return;
        };

        match load_original_image(&path) {
            Ok(image) => {
                self.original_texture = texture_from_image(ctx, "original-image", &image);
                self.generated_texture = None;
                self.status_line = None;
                self.state.on_upload(image);
            }
            Err(error) => {
                tracing::warn!(error = %error, path = %path.display(), "upload failed");
                self.state.fail_upload(UPLOAD_FAILURE_MESSAGE);
            }
        }
    }

    fn handle_process(&mut self, ctx: &egui::Context) {
        let Some(client) = self.client.clone() else {
            return;
        };
        let Some(original) = self.state.original().cloned() else {
            return;
        };
        // Guarded: no-op while a request is already in flight.
        let Some(ticket) = self.state.begin_processing() else {
            return;
        };
        self.generated_texture = None;
        self.status_line = None;

        let event_tx = self.event_tx.clone();
        let repaint_ctx = ctx.clone();
        let spawned = std::thread::Builder::new()
            .name("enhance-worker".to_string())
            .spawn(move || {
                let outcome = enhance_original(&client, &original);
                if event_tx
                    .send(WorkerEvent::EnhanceSettled { ticket, outcome })
                    .is_ok()
                {
                    repaint_ctx.request_repaint();
                }
            });

        if let Err(error) = spawned {
            tracing::error!(error = %error, "failed to spawn enhancement worker");
            self.state.complete_failure(ticket, PROCESS_FAILURE_MESSAGE);
        }
    }

    fn handle_download(&mut self) {
        let Some(generated) = self.state.generated().cloned() else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(DOWNLOAD_FILE_NAME)
            .save_file()
        else {
            return;
        };

        match save_generated_image(&generated, &path) {
            Ok(()) => {
                self.status_line = Some(format!("Saved to {}", path.display()));
            }
            Err(error) => {
                tracing::error!(error = %error, "failed to save generated image");
                self.status_line = Some(format!("Could not save the image to {}", path.display()));
            }
        }
    }

    fn render_original_pane(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.strong(ORIGINAL_PANE_TITLE);
        });
        ui.separator();

        if let Some(texture) = &self.original_texture {
            ui.centered_and_justified(|ui| {
                ui.add(egui::Image::new(texture).max_size(ui.available_size()));
            });
        } else if let Some(original) = self.state.original() {
            // Preview decode failed; the encoded image is still processable.
            ui.centered_and_justified(|ui| {
                ui.label(format!("{} image selected", original.mime_type));
            });
        } else {
            ui.centered_and_justified(|ui| {
                ui.label(UPLOAD_HINT);
            });
        }
    }

    fn render_result_pane(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.strong(RESULT_PANE_TITLE);
        });
        ui.separator();

        match self.state.result_pane() {
            ResultPane::Loading => {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.add(egui::Spinner::new().size(32.0));
                    ui.add_space(8.0);
                    ui.label(LOADING_MESSAGE);
                });
            }
            ResultPane::Placeholder => {
                ui.centered_and_justified(|ui| {
                    ui.label(RESULT_PLACEHOLDER);
                });
            }
            ResultPane::Image(generated) => {
                if let Some(texture) = &self.generated_texture {
                    ui.centered_and_justified(|ui| {
                        ui.add(egui::Image::new(texture).max_size(ui.available_size()));
                    });
                } else {
                    ui.centered_and_justified(|ui| {
                        ui.label(format!("{} result ready for download", generated.mime_type));
                    });
                }
            }
        }
    }

    fn render_controls(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.add_space(6.0);

        if let Some(config_error) = &self.config_error {
            ui.colored_label(egui::Color32::LIGHT_RED, config_error.as_str());
        }
        if let Some(error) = self.state.error() {
            ui.colored_label(egui::Color32::LIGHT_RED, format!("Error: {error}"));
        }
        if let Some(status_line) = &self.status_line {
            ui.label(status_line.as_str());
        }

        ui.horizontal(|ui| {
            if ui.button("Upload Image").clicked() {
                self.handle_upload(ctx);
            }

            let process_enabled = self.state.can_process() && self.client.is_some();
            let process_clicked = ui
                .add_enabled(
                    process_enabled,
                    egui::Button::new(self.state.process_button_label()),
                )
                .clicked();
            if process_clicked {
                self.handle_process(ctx);
            }

            if self.state.can_download() && ui.button(DOWNLOAD_LABEL).clicked() {
                self.handle_download();
            }
        });

        ui.add_space(6.0);
    }
}

impl eframe::App for PhotoReviveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_worker_events(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading(APP_TITLE);
                ui.label(APP_TAGLINE);
                ui.add_space(8.0);
            });
        });

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            self.render_controls(ctx, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                self.render_original_pane(&mut columns[0]);
                self.render_result_pane(&mut columns[1]);
            });
        });
    }
}

/// Decodes an encoded image into a GPU texture for preview.
///
/// Returns `None` (and logs) when the payload or image bytes do not decode;
/// the panes fall back to a text description in that case.
fn texture_from_image(
    ctx: &egui::Context,
    name: &str,
    image: &EncodedImage,
) -> Option<egui::TextureHandle> {
    let bytes = match image.decode_bytes() {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::warn!(error = %error, "payload decode failed for preview");
            return None;
        }
    };

    let decoded = match image::load_from_memory(&bytes) {
        Ok(decoded) => decoded,
        Err(error) => {
            tracing::warn!(error = %error, "image decode failed for preview");
            return None;
        }
    };

    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Some(ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR))
}
