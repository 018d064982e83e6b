// ============================================================================
// Headless mode — drive the coherence selector's change path from the shell
// ============================================================================
//
// Usage examples:
//   CanvasCoherence --select edge
//   CanvasCoherence --initial mask --select unmasked "" bogus --verbose
//
// Each value goes through the same change handler the GUI uses. Dispatched
// actions are printed to stdout as JSON lines, followed by the final state.
// An empty value stands for a cleared control.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use crate::coherence::CoherenceMode;
use crate::components::{ChangeOutcome, CoherenceModeSelector};
use crate::state::{Action, AppState, AppStore, GenerationState, Store};

/// Canvas coherence selector, headless.
#[derive(Parser, Debug)]
#[command(
    name = "CanvasCoherence",
    about = "Feed coherence mode selections through the selector without opening the GUI"
)]
pub struct CliArgs {
    /// Candidate selections, applied in order. "" stands for a cleared control.
    #[arg(short, long, required = true, num_args = 1.., value_name = "VALUE")]
    pub select: Vec<String>,

    /// Coherence mode the store starts with (default: unset).
    #[arg(long, value_name = "MODE")]
    pub initial: Option<CoherenceMode>,

    /// Language for messages (en, es, fr, de).
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Echo log lines to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Returns `true` when a headless flag is present in the real process arguments.
    /// Used by `main()` to route before creating an eframe window.
    pub fn is_cli_mode() -> bool {
        std::env::args().any(|a| a == "--select" || a == "-s" || a.starts_with("--select="))
    }
}

/// Run headless mode against the process's stdout/stderr.
pub fn run(args: CliArgs) -> ExitCode {
    crate::i18n::init();
    if let Some(ref lang) = args.lang {
        crate::i18n::set_language(lang);
    }
    crate::logger::set_echo(args.verbose);

    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(&args, &mut stdout.lock(), &mut stderr.lock())
}

/// `SUCCESS` when no value was rejected, `FAILURE` otherwise (or on output errors).
pub fn run_with<W: Write, E: Write>(args: &CliArgs, out: &mut W, err: &mut E) -> ExitCode {
    let mut store = Store::new(AppState {
        generation: GenerationState {
            canvas_coherence_mode: args.initial,
        },
    });

    match apply_selections(&mut store, &args.select, out, err) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            crate::log_err!("headless output failed: {}", e);
            let _ = writeln!(err, "error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of rejected values.
fn apply_selections<W: Write, E: Write>(
    store: &mut Store,
    values: &[String],
    out: &mut W,
    err: &mut E,
) -> io::Result<usize> {
    let mut rejected = 0;
    for value in values {
        match CoherenceModeSelector::handle_change(store, Some(value.as_str())) {
            ChangeOutcome::Dispatched(mode) => {
                let action = Action::SetCanvasCoherenceMode(mode);
                writeln!(out, "{}", serde_json::to_string(&action)?)?;
            }
            ChangeOutcome::Ignored => {
                writeln!(err, "{}", t!("cli.ignored"))?;
            }
            ChangeOutcome::Rejected(e) => {
                rejected += 1;
                writeln!(err, "{}", t!("cli.rejected", value = value, error = e))?;
            }
        }
    }
    writeln!(out, "{}", serde_json::to_string_pretty(store.state())?)?;
    Ok(rejected)
}
