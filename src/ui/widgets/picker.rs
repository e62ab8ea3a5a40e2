/// A filterable, scrollable list of names with one selected entry.
pub struct NamePicker;

impl NamePicker {
    /// Returns the name clicked this frame, if any.
    pub fn show(
        ui: &mut egui::Ui,
        id: &str,
        filter: Option<&mut String>,
        names: &[&str],
        selected: Option<&str>,
    ) -> Option<String> {
        if let Some(filter) = filter {
            ui.add(egui::TextEdit::singleline(filter).hint_text("Search…"));
        }

        let mut clicked = None;
        let row_height = ui.text_style_height(&egui::TextStyle::Body);
        egui::ScrollArea::vertical()
            .id_salt(id)
            .max_height(240.0)
            .show_rows(ui, row_height, names.len(), |ui, range| {
                for name in &names[range] {
                    if ui.selectable_label(selected == Some(*name), *name).clicked() {
                        clicked = Some(name.to_string());
                    }
                }
            });

        if names.is_empty() {
            ui.weak("No matches");
        }
        clicked
    }
}
