//! Native control window.

mod actions;
mod icons;


pub use actions::{UiAction, apply_action};
pub use icons::{GlyphIcons, VisibilityIcons};

use std::path::PathBuf;

use eframe::egui;
use rfd::FileDialog;
use tracing::info;

use crate::controls::Tab;
use crate::range::DEFAULT_SLIDER_LENGTH;
use crate::viewer::ViewerHandle;

const WINDOW_TITLE: &str = "viewer-panel Control";
const WINDOW_MIN_SIZE: [f32; 2] = [360.0, 520.0];
const NUDGE_STEP: f64 = 1.0;

pub struct PanelApp {
    viewer: ViewerHandle,
    icons: Box<dyn VisibilityIcons>,
    status: String,
    new_group_name: String,
    single_transform: bool,
}

impl PanelApp {
    pub fn new(viewer: ViewerHandle, icons: Box<dyn VisibilityIcons>) -> Self {
        Self {
            viewer,
            icons,
            status: "Ready.".to_string(),
            new_group_name: String::new(),
            single_transform: true,
        }
    }

    pub fn viewer(&self) -> &ViewerHandle {
        &self.viewer
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Runs queued actions in order; the last outcome becomes the status.
    pub fn apply_actions(&mut self, actions: Vec<UiAction>) {
        if actions.is_empty() {
            return;
        }
        for action in actions {
            self.status = match apply_action(&mut self.viewer, action) {
                Ok(status) => status,
                Err(error) => error,
            };
        }
    }

    fn draw_tabs(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let active = self.viewer.panel().active_tab();
        ui.horizontal(|ui| {
            let tabs = [(Tab::Sources, "Source Control"), (Tab::Groups, "Group Control")];
            for (tab, label) in tabs {
                if ui.selectable_label(active == tab, label).clicked() && active != tab {
                    actions.push(UiAction::SelectTab(tab));
                }
            }
        });
    }

    fn draw_source_tab(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let state = self.viewer.state();
        let panel = self.viewer.panel();
        let tab = panel.source_tab();
        let entries = tab.entries(state, panel.names());
        let enabled = tab.is_enabled();

        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                let selected_name = tab
                    .selected()
                    .map(|source| panel.names().display_name(source))
                    .unwrap_or_else(|| "No source".to_string());
                egui::ComboBox::from_id_salt("source-selector")
                    .selected_text(selected_name)
                    .show_ui(ui, |ui| {
                        for entry in &entries {
                            let label = egui::RichText::new(format!("{} ", entry.name));
                            ui.horizontal(|ui| {
                                ui.label(self.icons.small(entry.active));
                                let is_selected = tab.selected() == Some(&entry.source);
                                if ui.selectable_label(is_selected, label).clicked() {
                                    actions.push(UiAction::SelectSource(entry.source.clone()));
                                }
                            });
                        }
                    });

                let visible = tab.is_visible();
                if ui
                    .button(self.icons.big(visible))
                    .on_hover_text(self.icons.tooltip(visible))
                    .clicked()
                {
                    actions.push(UiAction::ToggleSourceVisibility);
                }

                if let Some(argb) = tab.color() {
                    let [r, g, b] = [(argb >> 16) as u8, (argb >> 8) as u8, argb as u8];
                    let mut rgb = [r, g, b];
                    if ui.color_edit_button_srgb(&mut rgb).changed() {
                        let argb = u32::from_be_bytes([0xff, rgb[0], rgb[1], rgb[2]]);
                        actions.push(UiAction::SetColor(argb));
                    }
                }
            });

            ui.label(format!("Type: {}", tab.type_label()));

            let mut single = tab.single_source_mode();
            if ui
                .checkbox(&mut single, "Single Source Mode")
                .on_hover_text("Display only the currently selected source.")
                .changed()
            {
                actions.push(UiAction::SingleSourceMode(single));
            }
        });

        ui.separator();
        self.draw_intensity(ui, actions, enabled);
    }

    fn draw_intensity(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>, enabled: bool) {
        let sync = self.viewer.panel().source_tab().intensity().sync();
        let attached = sync.is_attached();
        let length = sync.slider_length();
        let (mut lower, mut upper) = (sync.lower_position(), sync.upper_position());
        let (lower_bound, upper_bound) = (sync.lower_bound(), sync.upper_bound());
        let mut min_value = sync.min_spinner().value();
        let mut max_value = sync.max_spinner().value();
        let step = ((upper_bound - lower_bound) / f64::from(length)).max(f64::EPSILON);

        ui.add_enabled_ui(enabled && attached, |ui| {
            ui.label("Display Range");
            let lower_changed = ui
                .add(egui::Slider::new(&mut lower, 0..=length).show_value(false))
                .changed();
            let upper_changed = ui
                .add(egui::Slider::new(&mut upper, 0..=length).show_value(false))
                .changed();
            if lower_changed || upper_changed {
                if lower_changed {
                    upper = upper.max(lower);
                } else {
                    lower = lower.min(upper);
                }
                actions.push(UiAction::SliderMoved { lower, upper });
            }

            ui.horizontal(|ui| {
                let sync = self
                    .viewer
                    .panel_mut()
                    .source_tab_mut()
                    .intensity_mut()
                    .sync_mut();
                let min =
                    ui.add(egui::TextEdit::singleline(sync.min_text_mut()).desired_width(90.0));
                if min.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    actions.push(UiAction::CommitMin(sync.min_spinner().text.clone()));
                }
                let min_drag = egui::DragValue::new(&mut min_value)
                    .speed(step)
                    .range(lower_bound..=upper_bound);
                if ui.add(min_drag).changed() {
                    actions.push(UiAction::MinStep(min_value));
                }
                let max =
                    ui.add(egui::TextEdit::singleline(sync.max_text_mut()).desired_width(90.0));
                if max.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    actions.push(UiAction::CommitMax(sync.max_spinner().text.clone()));
                }
                let max_drag = egui::DragValue::new(&mut max_value)
                    .speed(step)
                    .range(lower_bound..=upper_bound);
                if ui.add(max_drag).changed() {
                    actions.push(UiAction::MaxStep(max_value));
                }
                if ui
                    .button("Shrink")
                    .on_hover_text("Fit the slider bounds to the current range.")
                    .clicked()
                {
                    actions.push(UiAction::Shrink);
                }
            });
            ui.weak(format!("Bounds [{lower_bound}, {upper_bound}]"));
        });
    }

    fn draw_group_tab(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let state = self.viewer.state();
        let panel = self.viewer.panel();
        let tab = panel.group_tab();
        let entries = tab.entries(state);

        ui.add_enabled_ui(tab.is_enabled(), |ui| {
            ui.horizontal(|ui| {
                let selected_name = tab
                    .selected()
                    .and_then(|group| entries.iter().find(|entry| &entry.group == group))
                    .map(|entry| entry.name.clone())
                    .unwrap_or_default();
                egui::ComboBox::from_id_salt("group-selector")
                    .selected_text(selected_name)
                    .show_ui(ui, |ui| {
                        for entry in &entries {
                            ui.horizontal(|ui| {
                                ui.label(self.icons.small(entry.active));
                                let is_selected = tab.selected() == Some(&entry.group);
                                if ui.selectable_label(is_selected, entry.name.as_str()).clicked() {
                                    actions.push(UiAction::SelectGroup(entry.group.clone()));
                                }
                            });
                        }
                    });

                let visible = tab.is_visible();
                if ui
                    .button(self.icons.big(visible))
                    .on_hover_text("Show group in fused-group mode.")
                    .clicked()
                {
                    actions.push(UiAction::ToggleGroupVisibility);
                }

                if let Some(group) = tab.selected() {
                    if ui
                        .add_enabled(tab.can_remove_selected(), egui::Button::new("-"))
                        .clicked()
                    {
                        actions.push(UiAction::RemoveGroup(group.clone()));
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.new_group_name)
                        .hint_text("New group name")
                        .desired_width(160.0),
                );
                if ui.button("Add Group").clicked() {
                    actions.push(UiAction::CreateGroup(std::mem::take(
                        &mut self.new_group_name,
                    )));
                }
            });

            let mut single = tab.single_group_mode();
            if ui
                .checkbox(&mut single, "Single Group Mode")
                .on_hover_text("Display only the currently selected group.")
                .changed()
            {
                actions.push(UiAction::SingleGroupMode(single));
            }

            ui.separator();
            let membership = tab.membership();
            ui.columns(2, |columns| {
                columns[0].label("In group");
                for source in &membership.selected {
                    let name = panel.names().display_name(source);
                    if columns[0].button(name).clicked() {
                        actions.push(UiAction::ToggleMembership(source.clone()));
                    }
                }
                columns[1].label("Remaining");
                for source in &membership.remaining {
                    let name = panel.names().display_name(source);
                    if columns[1].button(name).clicked() {
                        actions.push(UiAction::ToggleMembership(source.clone()));
                    }
                }
            });
        });
    }

    fn draw_transform(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let transforms = self.viewer.transforms();
        let interpolation = self.viewer.state().interpolation();

        ui.horizontal(|ui| {
            let mut manual = transforms.is_manual_transform_active();
            if ui.checkbox(&mut manual, "Manual Transformation").changed() {
                actions.push(UiAction::ManualTransform(manual));
            }
            if ui.button(interpolation.label()).clicked() {
                actions.push(UiAction::ToggleInterpolation);
            }
        });

        ui.horizontal(|ui| {
            let mut rotation = transforms.is_rotation_enabled();
            if ui.checkbox(&mut rotation, "Rotation").changed() {
                actions.push(UiAction::EnableRotation(rotation));
            }
            let mut translation = transforms.is_translation_enabled();
            if ui.checkbox(&mut translation, "Translation").changed() {
                actions.push(UiAction::EnableTranslation(translation));
            }
        });

        if transforms.is_manual_transform_active() {
            ui.horizontal(|ui| {
                for (label, step) in [
                    ("←", [-NUDGE_STEP, 0.0, 0.0]),
                    ("→", [NUDGE_STEP, 0.0, 0.0]),
                    ("↑", [0.0, -NUDGE_STEP, 0.0]),
                    ("↓", [0.0, NUDGE_STEP, 0.0]),
                ] {
                    if ui.button(label).clicked() {
                        actions.push(UiAction::Nudge(step));
                    }
                }
            });
        }

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.single_transform, "Current source only");
            if ui.button("Reset").clicked() {
                actions.push(UiAction::Reset {
                    single: self.single_transform,
                });
            }
        });
    }

    fn draw_menu(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Session...").clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Session", &["yaml", "yml", "json"])
                        .set_title("Open Session")
                        .pick_file()
                    {
                        actions.push(UiAction::OpenSession(path));
                    }
                    ui.close_menu();
                }
                if ui.button("Save Snapshot...").clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Snapshot", &["yaml", "yml", "json"])
                        .set_title("Save Snapshot")
                        .save_file()
                    {
                        actions.push(UiAction::SaveSnapshot(path));
                    }
                    ui.close_menu();
                }
            });
        });
    }
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("panel-header").show(ctx, |ui| {
            self.draw_menu(ui, &mut actions);
            self.draw_tabs(ui, &mut actions);
        });

        egui::TopBottomPanel::bottom("panel-status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.viewer.panel().active_tab() {
                Tab::Sources => self.draw_source_tab(ui, &mut actions),
                Tab::Groups => self.draw_group_tab(ui, &mut actions),
            }
            ui.separator();
            self.draw_transform(ui, &mut actions);
        });

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().filter_map(|file| file.path).last() {
            actions.push(UiAction::OpenSession(path));
        }

        self.apply_actions(actions);
    }
}

/// Opens the control window, loading `session` first when given.
pub fn run(session: Option<PathBuf>) -> Result<(), String> {
    let viewer = match &session {
        Some(path) => crate::session::load_session(path)
            .and_then(|spec| spec.open())
            .map_err(|error| error.to_string())?,
        None => ViewerHandle::new(DEFAULT_SLIDER_LENGTH).map_err(|error| error.to_string())?,
    };
    info!(session = ?session, "opening control window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_MIN_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PanelApp::new(
                viewer,
                Box::new(GlyphIcons::default()),
            )))
        }),
    )
    .map_err(|error| error.to_string())
}
