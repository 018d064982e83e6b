use canvas_coherence::coherence::{COHERENCE_OPTIONS, CoherenceMode};
use canvas_coherence::components::{ChangeOutcome, CoherenceModeSelector, SelectorResponse};
use canvas_coherence::state::{Action, AppState, AppStore, GenerationState, Store};

fn raw_input(events: Vec<egui::Event>) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(1024.0, 768.0),
        )),
        events,
        ..Default::default()
    }
}

fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

fn frame(
    ctx: &egui::Context,
    selector: &CoherenceModeSelector,
    store: &mut Store,
    events: Vec<egui::Event>,
) -> SelectorResponse {
    let mut out = None;
    let _ = ctx.run(raw_input(events), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            out = Some(selector.show(ui, store));
        });
    });
    out.expect("selector drawn")
}

/// Press on one frame, release on the next; returns the release frame.
fn click(
    ctx: &egui::Context,
    selector: &CoherenceModeSelector,
    store: &mut Store,
    pos: egui::Pos2,
) -> SelectorResponse {
    frame(ctx, selector, store, vec![egui::Event::PointerMoved(pos), button(pos, true)]);
    frame(ctx, selector, store, vec![button(pos, false)])
}

fn store_with(mode: Option<CoherenceMode>) -> Store {
    Store::new(AppState {
        generation: GenerationState {
            canvas_coherence_mode: mode,
        },
    })
}

#[test]
fn mask_in_state_shows_mask() {
    let store = store_with(Some(CoherenceMode::Mask));
    let selector = CoherenceModeSelector::default();
    assert_eq!(selector.selected_label(&store).as_deref(), Some("Mask"));
}

#[test]
fn picking_mask_edge_dispatches_edge_once() {
    let mut store = store_with(None);
    let edge = COHERENCE_OPTIONS
        .iter()
        .find(|o| o.label == "Mask Edge")
        .expect("Mask Edge option");

    let outcome = CoherenceModeSelector::handle_change(&mut store, Some(edge.value));

    assert_eq!(outcome, ChangeOutcome::Dispatched(CoherenceMode::Edge));
    let log: Vec<&Action> = store.action_log().collect();
    assert_eq!(log, vec![&Action::SetCanvasCoherenceMode(CoherenceMode::Edge)]);
}

#[test]
fn null_selection_leaves_state_alone() {
    let mut store = store_with(Some(CoherenceMode::Unmasked));
    let before = store.state().clone();

    assert_eq!(
        CoherenceModeSelector::handle_change(&mut store, None),
        ChangeOutcome::Ignored
    );
    assert_eq!(store.state(), &before);
    assert_eq!(store.action_log().count(), 0);
}

#[test]
fn set_then_read_round_trips_through_the_label() {
    let selector = CoherenceModeSelector::default();
    let mut store = store_with(None);
    for opt in COHERENCE_OPTIONS.iter() {
        CoherenceModeSelector::handle_change(&mut store, Some(opt.value));
        assert_eq!(selector.selected_label(&store).as_deref(), Some(opt.label));
    }
    assert_eq!(store.revision(), 3);
}

#[test]
fn uninitialized_state_renders_without_selection() {
    let selector = CoherenceModeSelector::default();
    let mut store = store_with(None);
    assert_eq!(selector.selected_label(&store), None);

    let ctx = egui::Context::default();
    let mut outcome = None;
    for _ in 0..2 {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                outcome = selector.show(ui, &mut store).outcome;
            });
        });
    }
    assert_eq!(outcome, None);
    assert_eq!(store.action_log().count(), 0);
}

#[test]
fn clicking_mask_edge_in_the_open_list_dispatches_edge() {
    let ctx = egui::Context::default();
    let selector = CoherenceModeSelector::default();
    let mut store = store_with(None);
    let edge_row = COHERENCE_OPTIONS
        .iter()
        .position(|o| o.label == "Mask Edge")
        .expect("Mask Edge option");

    let first = frame(&ctx, &selector, &mut store, vec![]);
    click(&ctx, &selector, &mut store, first.select.response.rect.center());
    let open = frame(&ctx, &selector, &mut store, vec![]);
    assert_eq!(open.select.rows.len(), COHERENCE_OPTIONS.len());
    assert_eq!(store.action_log().count(), 0);

    let picked = click(
        &ctx,
        &selector,
        &mut store,
        open.select.rows[edge_row].rect.center(),
    );
    assert_eq!(picked.outcome, Some(ChangeOutcome::Dispatched(CoherenceMode::Edge)));
    let log: Vec<&Action> = store.action_log().collect();
    assert_eq!(log, vec![&Action::SetCanvasCoherenceMode(CoherenceMode::Edge)]);

    let after = frame(&ctx, &selector, &mut store, vec![]);
    assert_eq!(after.outcome, None);
    assert_eq!(selector.selected_label(&store).as_deref(), Some("Mask Edge"));
}

#[test]
fn clear_button_leaves_the_store_untouched() {
    let ctx = egui::Context::default();
    let selector = CoherenceModeSelector::default();
    let mut store = store_with(Some(CoherenceMode::Mask));
    let before = store.state().clone();

    let first = frame(&ctx, &selector, &mut store, vec![]);
    let clear = first.select.clear.expect("clear button for a set value");
    let r = click(&ctx, &selector, &mut store, clear.rect.center());

    assert_eq!(r.outcome, Some(ChangeOutcome::Ignored));
    assert_eq!(store.state(), &before);
    assert_eq!(store.action_log().count(), 0);
}
