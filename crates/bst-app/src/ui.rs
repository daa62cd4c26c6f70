// ABOUTME: egui front-end: menu bar, command bar, drawing surface and properties window.
// ABOUTME: Every control forwards to an AppState command handler.

use std::time::Duration;

use bst_app::state::key_or_dash;
use bst_app::AppState;
use bst_core::storage::format_keys;
use bst_core::{Color, ColorRole, TraversalOrder, TreeKind};
use bst_renderer::draw_tree;

use crate::painter::{color32, EguiCanvas};

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 40, 40);
/// Delay between highlighting two nodes of a search or traversal
const STEP_INTERVAL: Duration = Duration::from_millis(500);

/// A button followed by its text field. True when the button is clicked or
/// Enter is pressed in the field.
fn command_field(ui: &mut egui::Ui, label: &str, text: &mut String) -> bool {
    let clicked = ui.button(label).clicked();
    let field = ui.add(egui::TextEdit::singleline(text).desired_width(80.0));
    let entered = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    clicked || entered
}

pub struct VisualizerApp {
    state: AppState,
    insert_input: String,
    delete_input: String,
    find_input: String,
    path_input: String,
    show_properties: bool,
    saved: bool,
    /// egui time of the last playback step
    last_step: f64,
}

impl VisualizerApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            insert_input: String::new(),
            delete_input: String::new(),
            find_input: String::new(),
            path_input: String::new(),
            show_properties: false,
            saved: false,
            last_step: 0.0,
        }
    }

    /// Autosave once, however the window gets closed
    fn save_session(&mut self, ctx: &egui::Context) {
        if !self.saved {
            if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
                self.state.set_window_size(rect.width(), rect.height());
            }
            self.state.shutdown();
            self.saved = true;
        }
    }

    fn ui_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Path:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.path_input)
                                .hint_text("tree.txt or tree.png"),
                        );
                    });
                    ui.separator();
                    if ui.button("Load").clicked() {
                        self.state.load_input(&self.path_input);
                        ui.close();
                    }
                    if ui.button("Save").clicked() {
                        self.state.save_input(&self.path_input);
                        ui.close();
                    }
                    if ui.button("Reset").clicked() {
                        self.state.reset();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        self.save_session(ctx);
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Tree", |ui| {
                    let mut kind = self.state.tree().kind();
                    for option in TreeKind::all() {
                        ui.radio_value(&mut kind, *option, option.label());
                    }
                    if kind != self.state.tree().kind() {
                        self.state.set_kind(kind);
                        ui.close();
                    }
                });

                ui.menu_button("Edit", |ui| {
                    for role in ColorRole::all() {
                        let mut rgb = self.state.theme().get(*role).to_array();
                        ui.horizontal(|ui| {
                            if ui.color_edit_button_srgb(&mut rgb).changed() {
                                self.state.recolor(*role, Color::from_array(rgb));
                            }
                            ui.label(role.label());
                        });
                    }
                });
            });
        });
    }

    fn ui_command_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("command_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Properties").clicked() {
                    self.show_properties = !self.show_properties;
                }
                ui.separator();

                if command_field(ui, "Insert", &mut self.insert_input)
                    && !self.state.insert(&self.insert_input).is_error()
                {
                    self.insert_input.clear();
                }
                if command_field(ui, "Delete", &mut self.delete_input)
                    && !self.state.delete(&self.delete_input).is_error()
                {
                    self.delete_input.clear();
                }
                if command_field(ui, "Find", &mut self.find_input) {
                    self.state.find(&self.find_input);
                    self.last_step = ctx.input(|i| i.time);
                }
                ui.separator();

                let status = self.state.status().clone();
                if status.is_error() {
                    ui.colored_label(ERROR_COLOR, status.message);
                } else {
                    ui.label(status.message);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Reset Zoom").clicked() {
                        self.state.reset_zoom();
                    }
                    if ui.button("Zoom Out").clicked() {
                        self.state.zoom_out();
                    }
                    if ui.button("Zoom In").clicked() {
                        self.state.zoom_in();
                    }
                });
            });
        });
    }

    fn ui_properties(&mut self, ctx: &egui::Context) {
        if !self.show_properties {
            return;
        }
        let props = self.state.properties();
        let mut animate = None;
        egui::Window::new("Properties")
            .open(&mut self.show_properties)
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::Grid::new("properties_grid")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        let rows = [
                            ("Height", props.height.to_string()),
                            ("Node Count", props.node_count.to_string()),
                            ("Leaf Nodes", props.leaf_count.to_string()),
                            ("Internal Nodes", props.internal_count.to_string()),
                            ("Minimum", key_or_dash(props.min)),
                            ("Maximum", key_or_dash(props.max)),
                        ];
                        for (name, value) in rows {
                            ui.label(name);
                            ui.label(value);
                            ui.end_row();
                        }
                    });
                ui.separator();
                for order in TraversalOrder::all() {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(order.label()).strong());
                        if ui.small_button("Animate").clicked() {
                            animate = Some(*order);
                        }
                    });
                    ui.add(egui::Label::new(format_keys(props.traversal(*order))).wrap());
                }
            });
        if let Some(order) = animate {
            self.state.traverse(order);
            self.last_step = ctx.input(|i| i.time);
        }
    }

    /// Reveal the next highlighted node once per interval
    fn tick_playback(&mut self, ctx: &egui::Context) {
        if !self.state.is_playing() {
            return;
        }
        let now = ctx.input(|i| i.time);
        if now - self.last_step >= STEP_INTERVAL.as_secs_f64() {
            self.state.step();
            self.last_step = now;
        }
        ctx.request_repaint_after(STEP_INTERVAL);
    }

    fn ui_surface(&mut self, ctx: &egui::Context) {
        let background = color32(self.state.theme().background);
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(background))
            .show(ctx, |ui| {
                egui::ScrollArea::both()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let scale = self.state.zoom().scale() as f32;
                        let (width, height) = self.state.zoom().scaled(self.state.layout().size());
                        let (mut response, painter) =
                            ui.allocate_painter(egui::vec2(width, height), egui::Sense::click());

                        let mut canvas = EguiCanvas::new(&painter, response.rect);
                        draw_tree(
                            &mut canvas,
                            self.state.layout(),
                            self.state.theme(),
                            scale,
                            self.state.highlight(),
                        );

                        if let Some(pos) = response.hover_pos() {
                            let local = (pos - response.rect.min) / scale;
                            if let Some(node) = self.state.layout().node_at(local.x, local.y) {
                                let tip = format!("Key {} at depth {}", node.key, node.depth);
                                response = response.on_hover_text(tip);
                            }
                        }

                        if response.clicked() {
                            self.state.zoom_in();
                        } else if response.secondary_clicked() {
                            self.state.zoom_out();
                        }
                    });
            });
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.save_session(ctx);
        }
        self.tick_playback(ctx);

        self.ui_menu_bar(ctx);
        self.ui_command_bar(ctx);
        self.ui_properties(ctx);
        self.ui_surface(ctx);
    }
}
