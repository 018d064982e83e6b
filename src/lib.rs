//! Canvas coherence mode selector for an image-generation panel, built on egui.
//!
//! The selector reads `generation.canvas_coherence_mode` from an injected
//! [`state::AppStore`], shows the three modes in a searchable select wrapped
//! in an informational popover, and dispatches
//! `generation/setCanvasCoherenceMode` when the user picks one.

#[macro_use]
pub mod i18n;
pub mod logger;

pub mod app;
pub mod cli;
pub mod coherence;
pub mod components;
pub mod settings;
pub mod state;
