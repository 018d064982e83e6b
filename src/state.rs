// ============================================================================
// Shared application state — one store, updated only through actions
// ============================================================================

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::coherence::CoherenceMode;

/// Number of dispatched actions kept for the action log.
pub const ACTION_LOG_CAPACITY: usize = 32;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationState {
    /// `None` until something sets it (fresh store, or no saved preference).
    pub canvas_coherence_mode: Option<CoherenceMode>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub generation: GenerationState,
}

/// Update requests. Serialized as `{"type": ..., "payload": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    #[serde(rename = "generation/setCanvasCoherenceMode")]
    SetCanvasCoherenceMode(CoherenceMode),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetCanvasCoherenceMode(_) => "generation/setCanvasCoherenceMode",
        }
    }
}

/// Read/dispatch seam handed to components instead of a global store.
pub trait AppStore {
    fn state(&self) -> &AppState;

    fn dispatch(&mut self, action: Action);

    /// Read one derived value from the current state.
    fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T
    where
        Self: Sized,
    {
        selector(self.state())
    }
}

/// In-process store: state, a change counter, and the recent action log.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
    revision: u64,
    log: VecDeque<Action>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            revision: 0,
            log: VecDeque::with_capacity(ACTION_LOG_CAPACITY),
        }
    }

    /// Bumped every time a dispatch actually changes the state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Most recent actions, oldest first.
    pub fn action_log(&self) -> impl Iterator<Item = &Action> {
        self.log.iter()
    }

    fn reduce(state: &mut AppState, action: &Action) -> bool {
        match action {
            Action::SetCanvasCoherenceMode(mode) => {
                let field = &mut state.generation.canvas_coherence_mode;
                if *field == Some(*mode) {
                    return false;
                }
                *field = Some(*mode);
                true
            }
        }
    }
}

impl AppStore for Store {
    fn state(&self) -> &AppState {
        &self.state
    }

    fn dispatch(&mut self, action: Action) {
        if Self::reduce(&mut self.state, &action) {
            self.revision += 1;
        }
        if self.log.len() == ACTION_LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(action);
    }
}
