use std::path::PathBuf;

use crate::components::CoherenceModeSelector;
use crate::settings::PanelSettings;
use crate::state::{AppState, GenerationState, Store};

pub struct CoherenceApp {
    store: Store,
    settings: PanelSettings,
    /// Where settings are written back; `None` keeps them in memory only.
    settings_path: Option<PathBuf>,
    /// Store revision the panel last reacted to.
    seen_revision: u64,
    /// Window title last sent to the viewport (follows the language).
    title: String,
}

impl CoherenceApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: PanelSettings) -> Self {
        Self::with_settings(settings, PanelSettings::settings_path())
    }

    pub fn with_settings(settings: PanelSettings, settings_path: Option<PathBuf>) -> Self {
        // Apply saved language preference (or auto-detect on first boot)
        if settings.language.is_empty() {
            let detected = crate::i18n::detect_system_language();
            crate::i18n::set_language(&detected);
        } else {
            crate::i18n::set_language(&settings.language);
        }

        let store = Store::new(AppState {
            generation: GenerationState {
                canvas_coherence_mode: settings.coherence_mode,
            },
        });
        crate::log_info!(
            "panel ready: coherence mode {:?}, language {}",
            settings.coherence_mode,
            crate::i18n::current_language()
        );

        Self {
            seen_revision: store.revision(),
            store,
            settings,
            settings_path,
            title: String::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn settings(&self) -> &PanelSettings {
        &self.settings
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn selector(&self) -> CoherenceModeSelector {
        CoherenceModeSelector {
            popovers_enabled: self.settings.enable_informational_popovers,
            translate_option_labels: self.settings.translate_option_labels,
        }
    }

    fn persist(&self) {
        let Some(ref path) = self.settings_path else { return };
        if let Err(e) = self.settings.save_to(path) {
            crate::log_err!("failed to save settings to {}: {}", path.display(), e);
        }
    }

    /// Draw one frame. Split out of `update` so it can run without a window.
    pub fn ui(&mut self, ctx: &egui::Context) {
        // --- Window title in the active language ---
        let title = t!("app.title");
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }

        let mut settings_changed = false;

        egui::SidePanel::left("generation_panel")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.heading(t!("panel.generation"));
                ui.separator();

                ui.label(egui::RichText::new(t!("panel.compositing")).strong());
                let selector = self.selector();
                selector.show(ui, &mut self.store);

                ui.horizontal(|ui| {
                    ui.label(t!("panel.current_value"));
                    let current = CoherenceModeSelector::current(&self.store)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_else(|| t!("panel.unset"));
                    ui.monospace(current);
                });

                ui.add_space(12.0);
                ui.separator();
                settings_changed |= self.show_settings(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(t!("panel.action_log"));
            ui.separator();
            if self.store.action_log().next().is_none() {
                ui.weak(t!("panel.no_actions"));
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                for action in self.store.action_log() {
                    let line = serde_json::to_string(action)
                        .unwrap_or_else(|_| action.kind().to_string());
                    ui.monospace(line);
                }
            });
        });

        if self.store.revision() != self.seen_revision {
            self.seen_revision = self.store.revision();
            self.settings.coherence_mode = CoherenceModeSelector::current(&self.store);
            settings_changed = true;
            ctx.request_repaint();
        }

        if settings_changed {
            self.persist();
        }
    }

    /// Returns `true` when a setting changed.
    fn show_settings(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label(t!("settings.language"));
            let current_code = if self.settings.language.is_empty() {
                "auto".to_string()
            } else {
                self.settings.language.clone()
            };
            let display_text = if current_code == "auto" {
                t!("settings.language_auto")
            } else {
                crate::i18n::LANGUAGES
                    .iter()
                    .find(|(c, _)| *c == current_code.as_str())
                    .map(|(_, name)| name.to_string())
                    .unwrap_or_else(|| current_code.clone())
            };
            egui::ComboBox::from_id_source("language_select")
                .selected_text(display_text)
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(current_code == "auto", t!("settings.language_auto"))
                        .clicked()
                    {
                        self.settings.language = String::new();
                        crate::i18n::set_language(&crate::i18n::detect_system_language());
                        changed = true;
                    }
                    for &(code, name) in crate::i18n::LANGUAGES {
                        if ui
                            .selectable_label(current_code.as_str() == code, format!("{} ({})", name, code))
                            .clicked()
                        {
                            self.settings.language = code.to_string();
                            crate::i18n::set_language(code);
                            changed = true;
                        }
                    }
                });
        });

        changed |= ui
            .checkbox(
                &mut self.settings.enable_informational_popovers,
                t!("settings.popovers"),
            )
            .changed();
        changed |= ui
            .checkbox(
                &mut self.settings.translate_option_labels,
                t!("settings.translate_options"),
            )
            .changed();

        changed
    }
}

impl eframe::App for CoherenceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
