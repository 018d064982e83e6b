// ============================================================================
// Searchable select — labeled combo box with a filter field and optional clear
// ============================================================================

use crate::coherence::SelectOption;

/// What the user did with the control this frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectChange {
    Selected(String),
    Cleared,
}

impl SelectChange {
    /// The candidate value handed to change handlers (`None` when cleared).
    pub fn value(&self) -> Option<&str> {
        match self {
            SelectChange::Selected(v) => Some(v.as_str()),
            SelectChange::Cleared => None,
        }
    }
}

pub struct SelectResponse {
    /// The combo box button.
    pub response: egui::Response,
    /// The filter field beside the combo box.
    pub search: egui::Response,
    /// The clear button, when one was drawn.
    pub clear: Option<egui::Response>,
    /// Rows of the open popup, in display order. Empty while closed.
    pub rows: Vec<egui::Response>,
    pub change: Option<SelectChange>,
}

/// Option whose value equals `value`, if any.
pub fn selected_option<'a>(data: &'a [SelectOption], value: Option<&str>) -> Option<&'a SelectOption> {
    let value = value?;
    data.iter().find(|o| o.value == value)
}

/// Options whose label or value contains `query`, case-insensitively.
/// A blank query keeps everything.
pub fn filter_options<'a>(data: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return data.iter().collect();
    }
    data.iter()
        .filter(|o| o.label.to_lowercase().contains(&query) || o.value.to_lowercase().contains(&query))
        .collect()
}

pub struct SearchableSelect<'a> {
    id_source: &'a str,
    label: String,
    data: &'a [SelectOption],
    value: Option<&'a str>,
    clearable: bool,
    width: f32,
    search_width: f32,
    option_label: Box<dyn Fn(&SelectOption) -> String + 'a>,
}

impl<'a> SearchableSelect<'a> {
    pub fn new(
        id_source: &'a str,
        label: impl Into<String>,
        data: &'a [SelectOption],
        value: Option<&'a str>,
    ) -> Self {
        Self {
            id_source,
            label: label.into(),
            data,
            value,
            clearable: false,
            width: 140.0,
            search_width: 80.0,
            option_label: Box::new(|o| o.label.to_string()),
        }
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn search_width(mut self, width: f32) -> Self {
        self.search_width = width;
        self
    }

    /// Override how option labels are displayed (e.g. translated).
    pub fn with_option_labels(mut self, f: impl Fn(&SelectOption) -> String + 'a) -> Self {
        self.option_label = Box::new(f);
        self
    }

    /// Draws `label`, the filter field, the combo box and (when clearable and
    /// set) a clear button on one row. The filter sits outside the popup; its
    /// query survives between frames and is reset once a change is made.
    pub fn show(self, ui: &mut egui::Ui) -> SelectResponse {
        let id = ui.make_persistent_id(self.id_source);
        let search_id = id.with("search");
        let mut query = ui
            .data_mut(|d| d.get_temp::<String>(search_id))
            .unwrap_or_default();

        let selected_text = selected_option(self.data, self.value)
            .map(|o| (self.option_label)(o))
            .unwrap_or_else(|| t!("select.placeholder"));

        let mut change = None;
        let mut rows = Vec::new();
        let row = ui.horizontal(|ui| {
            ui.label(self.label.as_str());
            let search = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text(t!("select.search"))
                    .desired_width(self.search_width),
            );

            let combo = egui::ComboBox::from_id_source(id)
                .selected_text(selected_text)
                .width(self.width)
                .show_ui(ui, |ui| {
                    let matches = filter_options(self.data, &query);
                    if matches.is_empty() {
                        ui.weak(t!("select.no_matches"));
                    }
                    for opt in matches {
                        let is_selected = self.value == Some(opt.value);
                        let r = ui.selectable_label(is_selected, (self.option_label)(opt));
                        if r.clicked() {
                            change = Some(SelectChange::Selected(opt.value.to_string()));
                        }
                        rows.push(r);
                    }
                })
                .response;

            let clear = if self.clearable && self.value.is_some() {
                let r = ui.small_button(t!("select.clear"));
                if r.clicked() {
                    change = Some(SelectChange::Cleared);
                }
                Some(r)
            } else {
                None
            };
            (search, combo, clear)
        });

        if change.is_some() {
            query.clear();
        }
        ui.data_mut(|d| d.insert_temp(search_id, query));

        let (search, response, clear) = row.inner;
        SelectResponse {
            response,
            search,
            clear,
            rows,
            change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coherence::COHERENCE_OPTIONS;

    #[test]
    fn blank_query_keeps_all_options() {
        assert_eq!(filter_options(&COHERENCE_OPTIONS, "").len(), 3);
        assert_eq!(filter_options(&COHERENCE_OPTIONS, "   ").len(), 3);
    }

    #[test]
    fn query_matches_label_or_value_case_insensitively() {
        let hits: Vec<&str> = filter_options(&COHERENCE_OPTIONS, "EDGE")
            .iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(hits, vec!["edge"]);

        let hits: Vec<&str> = filter_options(&COHERENCE_OPTIONS, "mask")
            .iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(hits, vec!["unmasked", "mask", "edge"]);

        assert!(filter_options(&COHERENCE_OPTIONS, "blur").is_empty());
    }

    #[test]
    fn selected_option_lookup() {
        assert_eq!(
            selected_option(&COHERENCE_OPTIONS, Some("mask")).map(|o| o.label),
            Some("Mask")
        );
        assert_eq!(selected_option(&COHERENCE_OPTIONS, None), None);
        assert_eq!(selected_option(&COHERENCE_OPTIONS, Some("Mask")), None);
    }

    #[test]
    fn change_values() {
        assert_eq!(SelectChange::Selected("edge".into()).value(), Some("edge"));
        assert_eq!(SelectChange::Cleared.value(), None);
    }

    #[test]
    fn renders_headless_without_a_change() {
        let ctx = egui::Context::default();
        let r = frame(&ctx, None, vec![]);
        assert_eq!(r.change, None);
        assert!(r.rows.is_empty());
        assert!(r.clear.is_none());
    }

    fn raw_input(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
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

    fn frame(ctx: &egui::Context, value: Option<&str>, events: Vec<egui::Event>) -> SelectResponse {
        let mut out = None;
        let _ = ctx.run(raw_input(events), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                out = Some(
                    SearchableSelect::new("test_select", "Label", &COHERENCE_OPTIONS, value)
                        .clearable(true)
                        .width(100.0)
                        .show(ui),
                );
            });
        });
        out.expect("select drawn")
    }

    /// Press on one frame, release on the next; returns the release frame.
    fn click(ctx: &egui::Context, value: Option<&str>, pos: egui::Pos2) -> SelectResponse {
        frame(ctx, value, vec![egui::Event::PointerMoved(pos), button(pos, true)]);
        frame(ctx, value, vec![button(pos, false)])
    }

    #[test]
    fn typed_query_filters_the_popup_rows() {
        let ctx = egui::Context::default();
        let first = frame(&ctx, None, vec![]);

        let focused = click(&ctx, None, first.search.rect.center());
        assert!(focused.search.has_focus());
        assert_eq!(focused.change, None);

        frame(&ctx, None, vec![egui::Event::Text("edge".into())]);
        let idle = frame(&ctx, None, vec![]);
        assert!(idle.rows.is_empty());

        click(&ctx, None, idle.response.rect.center());
        let open = frame(&ctx, None, vec![]);
        assert_eq!(open.rows.len(), 1);

        let picked = click(&ctx, None, open.rows[0].rect.center());
        assert_eq!(picked.change, Some(SelectChange::Selected("edge".into())));

        // Query resets after a pick, so reopening lists everything again.
        let closed = frame(&ctx, Some("edge"), vec![]);
        assert!(closed.rows.is_empty());
        click(&ctx, Some("edge"), closed.response.rect.center());
        let reopened = frame(&ctx, Some("edge"), vec![]);
        assert_eq!(reopened.rows.len(), COHERENCE_OPTIONS.len());
    }

    #[test]
    fn clear_button_reports_cleared() {
        let ctx = egui::Context::default();
        let first = frame(&ctx, Some("mask"), vec![]);
        let clear = first.clear.expect("clear button for a set value");

        let r = click(&ctx, Some("mask"), clear.rect.center());
        assert_eq!(r.change, Some(SelectChange::Cleared));
        assert_eq!(r.change.as_ref().and_then(|c| c.value()), None);
    }
}
