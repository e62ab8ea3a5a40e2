use crate::ui::services::DataLoader;
use crate::ui::state::{AppState, View};
use crate::ui::widgets::NamePicker;

pub struct Sidebar;

impl Sidebar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Startup Funding Analysis");
        ui.separator();

        let mut view = state.view;
        egui::ComboBox::from_id_salt("view_selector")
            .selected_text(view.label())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for option in View::all() {
                    ui.selectable_value(&mut view, option, option.label());
                }
            });
        state.select_view(view);

        ui.separator();

        match state.view {
            View::Overall => {}
            View::Startup => Self::show_startup_picker(ui, state),
            View::Investor => Self::show_investor_picker(ui, state),
        }

        ui.separator();

        ui.collapsing("Dataset", |ui| {
            Self::show_dataset_info(ui, state);
        });
    }

    fn show_startup_picker(ui: &mut egui::Ui, state: &mut AppState) {
        ui.label("Select Startup");
        let names: Vec<&str> = state.startups.iter().map(String::as_str).collect();
        let picked = NamePicker::show(ui, "startup_picker", None, &names, state.selected_startup.as_deref());
        if let Some(name) = picked {
            state.select_startup(name);
        }

        if ui.button("Find Startup Details").clicked() {
            state.request_startup_details();
        }
    }

    fn show_investor_picker(ui: &mut egui::Ui, state: &mut AppState) {
        ui.label("Select Investor");

        // Edited on a copy; the list below still borrows the state.
        let mut filter = state.investor_filter.clone();
        let names = state.filtered_investors();
        let picked = NamePicker::show(
            ui,
            "investor_picker",
            Some(&mut filter),
            &names,
            state.selected_investor.as_deref(),
        );
        state.investor_filter = filter;
        if let Some(name) = picked {
            state.select_investor(name);
        }

        let can_run = state.selected_investor.is_some();
        if ui
            .add_enabled(can_run, egui::Button::new("Find Investor Details"))
            .clicked()
        {
            state.request_investor_details();
        }
    }

    fn show_dataset_info(ui: &mut egui::Ui, state: &mut AppState) {
        let metadata = &state.metadata;
        ui.label(format!("File: {}", metadata.file_path));
        ui.label(format!("Rows: {}", metadata.num_rows));
        ui.label(format!("Columns: {}", metadata.num_columns));
        if let Some((first, last)) = metadata.date_range {
            ui.label(format!("Dates: {} to {}", first, last));
        }
        if metadata.unparsed_dates > 0 {
            ui.label(format!("Unparsed dates: {}", metadata.unparsed_dates));
        }
        if metadata.unparsed_amounts > 0 {
            ui.label(format!("Non-numeric amounts: {}", metadata.unparsed_amounts));
        }
        for (column, nulls) in &metadata.null_counts {
            ui.weak(format!("{}: {} empty", column, nulls));
        }

        if ui.button("Open CSV…").clicked() {
            if let Some(path) = DataLoader::pick_csv() {
                match DataLoader::load_csv(&path, &state.config.data.date_formats) {
                    Ok((dataset, metadata)) => state.replace_dataset(dataset, metadata),
                    Err(e) => {
                        log::error!("Failed to load {}: {}", path.display(), e);
                        state.status_message = format!("Error loading data: {}", e);
                    }
                }
            }
        }
    }
}
