// ============================================================================
// Canvas coherence mode selector — binds generation.canvasCoherenceMode to a select
// ============================================================================

use crate::coherence::{COHERENCE_OPTIONS, CoherenceMode, ParseCoherenceModeError, SelectOption};
use crate::components::popover::InformationalPopover;
use crate::components::select::{SearchableSelect, SelectResponse};
use crate::state::{Action, AppStore};

/// Popover key for the coherence mode help text.
pub const COHERENCE_POPOVER_FEATURE: &str = "compositingCoherenceMode";

/// Result of feeding a candidate value through the change handler.
#[derive(Clone, Debug, PartialEq)]
pub enum ChangeOutcome {
    /// Absent or blank candidate; nothing dispatched.
    Ignored,
    Dispatched(CoherenceMode),
    /// Not one of the three modes; nothing dispatched.
    Rejected(ParseCoherenceModeError),
}

/// What one frame of the selector produced.
pub struct SelectorResponse {
    pub select: SelectResponse,
    /// Set when the user changed the control this frame.
    pub outcome: Option<ChangeOutcome>,
}

#[derive(Clone, Copy, Debug)]
pub struct CoherenceModeSelector {
    pub popovers_enabled: bool,
    pub translate_option_labels: bool,
}

impl Default for CoherenceModeSelector {
    fn default() -> Self {
        Self {
            popovers_enabled: true,
            translate_option_labels: false,
        }
    }
}

impl CoherenceModeSelector {
    pub fn options(&self) -> &'static [SelectOption] {
        &COHERENCE_OPTIONS
    }

    pub fn popover(&self) -> InformationalPopover<'static> {
        InformationalPopover::new(COHERENCE_POPOVER_FEATURE).enabled(self.popovers_enabled)
    }

    /// Current mode as held by the store.
    pub fn current<S: AppStore>(store: &S) -> Option<CoherenceMode> {
        store.select(|s| s.generation.canvas_coherence_mode)
    }

    /// Label the control shows for the current store value.
    pub fn selected_label<S: AppStore>(&self, store: &S) -> Option<String> {
        let mode = Self::current(store)?;
        self.options()
            .iter()
            .find(|o| o.value == mode.as_str())
            .map(|o| self.option_label(o))
    }

    pub fn option_label(&self, option: &SelectOption) -> String {
        if self.translate_option_labels {
            crate::i18n::try_translate(&format!("parameters.coherenceMode.{}", option.value))
                .unwrap_or_else(|| option.label.to_string())
        } else {
            option.label.to_string()
        }
    }

    /// Change handler: at most one dispatch per call.
    pub fn handle_change<S: AppStore>(store: &mut S, candidate: Option<&str>) -> ChangeOutcome {
        let Some(value) = candidate.filter(|v| !v.trim().is_empty()) else {
            return ChangeOutcome::Ignored;
        };
        match value.parse::<CoherenceMode>() {
            Ok(mode) => {
                crate::log_info!("canvas coherence mode -> {}", mode);
                store.dispatch(Action::SetCanvasCoherenceMode(mode));
                ChangeOutcome::Dispatched(mode)
            }
            Err(e) => {
                crate::log_warn!("canvas coherence mode: {}", e);
                ChangeOutcome::Rejected(e)
            }
        }
    }

    /// Draw the control and route any change through [`Self::handle_change`].
    pub fn show<S: AppStore>(&self, ui: &mut egui::Ui, store: &mut S) -> SelectorResponse {
        let current = Self::current(&*store);
        let label = t!("parameters.coherenceMode");

        let select = self
            .popover()
            .show(ui, |ui| {
                SearchableSelect::new(
                    "canvas_coherence_mode",
                    label,
                    self.options(),
                    current.map(|m| m.as_str()),
                )
                .clearable(true)
                .with_option_labels(|o| self.option_label(o))
                .show(ui)
            })
            .inner;

        let outcome = select
            .change
            .as_ref()
            .map(|change| Self::handle_change(store, change.value()));
        SelectorResponse { select, outcome }
    }
}
