//! The Sitemap Outliner window, an egui/eframe application.
//!
//! [`OutlinerApp`] owns the UI state and two channel endpoints:
//!
//! * `command_tx` sends [`OutlineCommand`] to the outline worker.
//! * `result_rx` receives [`OutlineResult`] as each site finishes.
//!
//! The window offers a URL input with an add button, the list of queued
//! sites, a generate button that runs the pipeline for every queued site on
//! the background runtime, a read-only output area, and a save row that
//! writes one markdown file per generated outline.

use std::path::Path;
use std::time::Duration;

use core_smo::{OutlineOptions, normalize_site_url, url_to_filename};
use eframe::egui;
use tokio::sync::mpsc;

/// Commands sent from the UI thread to the outline worker.
#[derive(Debug, Clone)]
pub enum OutlineCommand {
    /// Generate outlines for every listed site, in order.
    Generate {
        urls: Vec<String>,
        options: OutlineOptions,
    },
}

/// Results delivered from the outline worker back to the UI.
#[derive(Debug, Clone)]
pub enum OutlineResult {
    /// The worker started on one site.
    Started { site_url: String },
    /// One site finished successfully.
    Finished { site_url: String, text: String },
    /// One site failed.
    Failed { site_url: String, message: String },
    /// The whole batch is done.
    BatchDone,
}

/// Outcome of one site's outline generation.
#[derive(Debug, Clone)]
pub struct SiteOutline {
    pub site_url: String,
    pub outcome: Result<String, String>,
}

/// Builds the text shown in the output area from the per-site outcomes.
pub fn compose_output(outlines: &[SiteOutline]) -> String {
    let mut out = String::new();
    for outline in outlines {
        match &outline.outcome {
            Ok(text) => {
                out.push_str(&format!("Sitemap for {}:\n{}\n\n", outline.site_url, text));
            }
            Err(message) => {
                out.push_str(&format!(
                    "Error generating outline for {}: {}\n\n",
                    outline.site_url, message
                ));
            }
        }
    }
    out
}

/// One-line status feedback shown at the bottom of the window.
#[derive(Debug, Clone)]
struct StatusLine {
    text: String,
    color: egui::Color32,
}

impl StatusLine {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: egui::Color32::from_rgb(80, 200, 120),
        }
    }

    fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: egui::Color32::from_rgb(255, 136, 68),
        }
    }
}

/// eframe application state for the Sitemap Outliner window.
pub struct OutlinerApp {
    /// Contents of the URL input field.
    url_input: String,
    /// Queued website URLs.
    urls: Vec<String>,
    /// Directory the save button writes markdown files into.
    save_dir: String,
    /// True while a generate batch is running on the worker.
    generating: bool,
    /// Site currently being generated, for the progress label.
    in_flight: Option<String>,
    /// Per-site outcomes of the last batch.
    outlines: Vec<SiteOutline>,
    /// Bottom status line.
    status: Option<StatusLine>,

    /// Send commands to the background outline worker.
    command_tx: mpsc::Sender<OutlineCommand>,
    /// Receive results from the background outline worker.
    result_rx: mpsc::Receiver<OutlineResult>,
}

impl OutlinerApp {
    pub fn new(
        command_tx: mpsc::Sender<OutlineCommand>,
        result_rx: mpsc::Receiver<OutlineResult>,
    ) -> Self {
        Self {
            url_input: String::new(),
            urls: Vec::new(),
            save_dir: String::new(),
            generating: false,
            in_flight: None,
            outlines: Vec::new(),
            status: None,
            command_tx,
            result_rx,
        }
    }

    // ── Channel polling ──────────────────────────────────────────────────

    /// Drain all pending worker results (non-blocking).
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                OutlineResult::Started { site_url } => {
                    self.in_flight = Some(site_url);
                }
                OutlineResult::Finished { site_url, text } => {
                    self.outlines.push(SiteOutline {
                        site_url,
                        outcome: Ok(text),
                    });
                }
                OutlineResult::Failed { site_url, message } => {
                    self.outlines.push(SiteOutline {
                        site_url,
                        outcome: Err(message),
                    });
                }
                OutlineResult::BatchDone => {
                    self.generating = false;
                    self.in_flight = None;

                    let generated = self
                        .outlines
                        .iter()
                        .filter(|o| o.outcome.is_ok())
                        .count();
                    if generated == 0 {
                        self.status = Some(StatusLine::warning(
                            "No outlines were generated. Please check the URLs and try again.",
                        ));
                    } else {
                        let failed = self.outlines.len() - generated;
                        self.status = Some(StatusLine::info(format!(
                            "Generated {generated} outline(s), {failed} failed"
                        )));
                    }
                }
            }
        }
    }

    // ── Actions ──────────────────────────────────────────────────────────

    /// Add the current input to the URL list.
    fn add_url(&mut self) {
        let input = self.url_input.trim();
        if input.is_empty() {
            self.status = Some(StatusLine::warning("Please enter a website URL."));
            return;
        }

        self.urls.push(normalize_site_url(input));
        self.url_input.clear();
        self.status = None;
    }

    /// Kick off outline generation for every queued URL.
    fn generate(&mut self) {
        self.outlines.clear();
        self.status = None;

        let command = OutlineCommand::Generate {
            urls: self.urls.clone(),
            options: OutlineOptions::default(),
        };
        match self.command_tx.try_send(command) {
            Ok(()) => {
                self.generating = true;
            }
            Err(e) => {
                tracing::error!("Failed to send generate command: {e}");
                self.status = Some(StatusLine::warning("Worker is busy; try again."));
            }
        }
    }

    /// Write every generated outline as `<site>.md` into the save directory.
    fn save_outlines(&mut self) {
        let generated: Vec<&SiteOutline> = self
            .outlines
            .iter()
            .filter(|o| o.outcome.is_ok())
            .collect();
        if generated.is_empty() {
            self.status = Some(StatusLine::warning(
                "No outlines generated. Please generate outlines first.",
            ));
            return;
        }

        let dir = self.save_dir.trim();
        if dir.is_empty() || !Path::new(dir).is_dir() {
            self.status = Some(StatusLine::warning(
                "Please enter an existing directory to save into.",
            ));
            return;
        }

        let mut saved = 0;
        let mut failed = 0;
        for outline in generated {
            let file_name = format!("{}.md", url_to_filename(&outline.site_url));
            let path = Path::new(dir).join(file_name);
            match std::fs::write(&path, outline.outcome.as_ref().unwrap()) {
                Ok(()) => saved += 1,
                Err(e) => {
                    tracing::error!("Failed to save {}: {e}", path.display());
                    failed += 1;
                }
            }
        }

        if failed == 0 {
            self.status = Some(StatusLine::info(format!("Saved {saved} file(s) in {dir}")));
        } else {
            self.status = Some(StatusLine::warning(format!(
                "Saved {saved} file(s), {failed} failed (see log)"
            )));
        }
    }

    // ── Panels ───────────────────────────────────────────────────────────

    /// URL input row + queued URL list.
    fn draw_url_queue(&mut self, ui: &mut egui::Ui) {
        ui.label("Website URL:");
        ui.horizontal(|ui| {
            let response = ui.add_sized(
                [ui.available_width() - 80.0, 20.0],
                egui::TextEdit::singleline(&mut self.url_input),
            );
            let entered =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Add URL").clicked() || entered {
                self.add_url();
            }
        });

        let mut remove_at: Option<usize> = None;
        egui::ScrollArea::vertical()
            .id_salt("url_queue")
            .max_height(90.0)
            .auto_shrink(false)
            .show(ui, |ui| {
                for (index, url) in self.urls.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(url);
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("x").clicked() {
                                    remove_at = Some(index);
                                }
                            },
                        );
                    });
                }
            });
        if let Some(index) = remove_at {
            self.urls.remove(index);
        }
    }

    /// Generate button plus in-progress indicator.
    fn draw_generate_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let enabled = !self.urls.is_empty() && !self.generating;
            if ui
                .add_enabled(enabled, egui::Button::new("Generate outlines"))
                .clicked()
            {
                self.generate();
            }

            if self.generating {
                ui.spinner();
                let label = match &self.in_flight {
                    Some(site_url) => format!("Generating {site_url}…"),
                    None => "Generating…".to_string(),
                };
                ui.label(label);
            }
        });
    }

    /// Read-only output area with every outline of the last batch.
    fn draw_output(&mut self, ui: &mut egui::Ui) {
        let text = compose_output(&self.outlines);
        egui::ScrollArea::vertical()
            .id_salt("outline_output")
            .auto_shrink(false)
            .max_height(ui.available_height() - 70.0)
            .show(ui, |ui| {
                ui.add_sized(
                    [ui.available_width(), ui.available_height()],
                    egui::TextEdit::multiline(&mut text.as_str()).code_editor(),
                );
            });
    }

    /// Save-directory field and save button.
    fn draw_save_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Save directory:");
            ui.add_sized(
                [ui.available_width() - 170.0, 20.0],
                egui::TextEdit::singleline(&mut self.save_dir),
            );
            if ui.button("Save as markdown").clicked() {
                self.save_outlines();
            }
        });
    }
}

impl eframe::App for OutlinerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        if self.generating {
            // Keep polling worker results while a batch runs.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sitemap Outliner");
            ui.separator();

            self.draw_url_queue(ui);
            ui.separator();

            self.draw_generate_row(ui);
            self.draw_output(ui);
            self.draw_save_row(ui);

            if let Some(status) = &self.status {
                ui.label(
                    egui::RichText::new(status.text.as_str())
                        .color(status.color)
                        .size(12.0),
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_output_mixes_successes_and_failures() {
        let outlines = vec![
            SiteOutline {
                site_url: "https://example.com".to_string(),
                outcome: Ok("- ## example.com/\n".to_string()),
            },
            SiteOutline {
                site_url: "https://broken.example".to_string(),
                outcome: Err("HTTP request failed".to_string()),
            },
        ];

        let text = compose_output(&outlines);
        assert!(text.starts_with("Sitemap for https://example.com:\n- ## example.com/\n"));
        assert!(text.contains(
            "Error generating outline for https://broken.example: HTTP request failed"
        ));
    }

    #[test]
    fn test_compose_output_empty() {
        assert_eq!(compose_output(&[]), "");
    }
}
