//! Application entry point for the Sitemap Outliner GUI.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Create a small tokio runtime for the outline pipeline.
//! 3. Create the command/result channels.
//! 4. Spawn the outline worker on the runtime.
//! 5. Run [`eframe::run_native`], which blocks the main thread until the
//!    window is closed.

mod app;

use core_smo::{logging::setup_logging, outline};
use eframe::egui;
use tokio::sync::mpsc;

use crate::app::{OutlineCommand, OutlineResult, OutlinerApp};

/// Outline worker that runs inside the tokio runtime.
///
/// Processes one [`OutlineCommand`] at a time, generating the outline for
/// every listed site in order and reporting per-site results back to the
/// UI.
async fn run_outliner(
    mut command_rx: mpsc::Receiver<OutlineCommand>,
    result_tx: mpsc::Sender<OutlineResult>,
) {
    while let Some(command) = command_rx.recv().await {
        match command {
            OutlineCommand::Generate { urls, options } => {
                for site_url in urls {
                    tracing::info!("Generating outline for {site_url}");
                    let _ = result_tx
                        .send(OutlineResult::Started {
                            site_url: site_url.clone(),
                        })
                        .await;

                    match outline(&site_url, &options).await {
                        Ok(text) => {
                            let _ = result_tx
                                .send(OutlineResult::Finished { site_url, text })
                                .await;
                        }
                        Err(e) => {
                            tracing::warn!("Outline generation failed for {site_url}: {e}");
                            let _ = result_tx
                                .send(OutlineResult::Failed {
                                    site_url,
                                    message: e.to_string(),
                                })
                                .await;
                        }
                    }
                }
                let _ = result_tx.send(OutlineResult::BatchDone).await;
            }
        }
    }
}

fn native_options() -> eframe::NativeOptions {
    let vp = egui::ViewportBuilder::default()
        .with_inner_size([600.0, 520.0])
        .with_min_inner_size([420.0, 360.0]);

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

fn main() -> eframe::Result<()> {
    setup_logging("gui_smo=info,core_smo=info");
    tracing::info!("Sitemap Outliner starting up");

    // Two workers is plenty: one batch runs at a time.
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to create tokio runtime");

    let (command_tx, command_rx) = mpsc::channel::<OutlineCommand>(16);
    let (result_tx, result_rx) = mpsc::channel::<OutlineResult>(32);

    rt.spawn(run_outliner(command_rx, result_tx));

    let app = OutlinerApp::new(command_tx, result_rx);

    eframe::run_native(
        "Sitemap Outliner",
        native_options(),
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
