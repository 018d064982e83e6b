// ============================================================================
// Informational popover — hover help attached to a parameter control
// ============================================================================

/// Help text for one feature, read from `popovers.<feature>.heading` and
/// `popovers.<feature>.paragraphs` (paragraphs separated by `|`).
#[derive(Clone, Debug, PartialEq)]
pub struct PopoverHelp {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

impl PopoverHelp {
    pub fn lookup(feature: &str) -> Option<Self> {
        let heading = crate::i18n::try_translate(&format!("popovers.{feature}.heading"))?;
        let paragraphs = crate::i18n::try_translate(&format!("popovers.{feature}.paragraphs"))
            .map(|text| {
                text.split('|')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Some(Self {
            heading,
            paragraphs,
        })
    }

    fn show(&self, ui: &mut egui::Ui) {
        ui.set_max_width(280.0);
        ui.strong(self.heading.as_str());
        for p in &self.paragraphs {
            ui.add_space(4.0);
            ui.label(p.as_str());
        }
    }
}

/// Renders `content` and, when enabled and help exists for `feature`,
/// shows that help while the content is hovered.
pub struct InformationalPopover<'a> {
    feature: &'a str,
    enabled: bool,
}

impl<'a> InformationalPopover<'a> {
    pub fn new(feature: &'a str) -> Self {
        Self {
            feature,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn feature(&self) -> &str {
        self.feature
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        content: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        let egui::InnerResponse { inner, response } = ui.scope(content);
        if !self.enabled {
            return egui::InnerResponse { inner, response };
        }
        let response = match PopoverHelp::lookup(self.feature) {
            Some(help) => response.on_hover_ui(|ui| help.show(ui)),
            None => response,
        };
        egui::InnerResponse { inner, response }
    }
}
