// src/ui.rs

use fraction_shapes::{FractionError, FractionRequest, ShapeKind, MAX_PARTS};

/// Current values of the control panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPanel {
    pub shape: ShapeKind,
    pub parts: usize,
    pub shaded: usize,
    pub shade_color: [f32; 4],
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Circle,
            parts: 4,
            shaded: 1,
            shade_color: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

impl ControlPanel {
    /// Pulls `shaded` back within `parts` after the part count shrinks.
    fn clamp(&mut self) {
        self.parts = self.parts.clamp(1, MAX_PARTS);
        self.shaded = self.shaded.min(self.parts);
    }

    pub fn request(&self) -> Result<FractionRequest, FractionError> {
        FractionRequest::new(self.shape, self.parts, self.shaded)
    }
}

/// Draws the panel; returns true when the figure must be rebuilt.
pub fn build_ui(ctx: &egui::Context, panel: &mut ControlPanel) -> bool {
    let before = panel.clone();
    let mut regenerate = false;

    egui::Window::new("Fractions")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                egui::ComboBox::from_label("Shape")
                    .selected_text(panel.shape.label())
                    .show_ui(ui, |ui| {
                        for kind in ShapeKind::ALL {
                            ui.selectable_value(&mut panel.shape, kind, kind.label());
                        }
                    });

                ui.add(egui::Slider::new(&mut panel.parts, 1..=MAX_PARTS).text("Parts"));
                panel.clamp();
                ui.add(egui::Slider::new(&mut panel.shaded, 0..=panel.parts).text("Parts to shade"));

                ui.horizontal(|ui| {
                    ui.label("Shade color");
                    ui.color_edit_button_rgba_unmultiplied(&mut panel.shade_color);
                });

                ui.separator();
                ui.label(format!("{} / {} shaded", panel.shaded, panel.parts));
                regenerate = ui.button("Generate").clicked();
            });
        });

    panel.clamp();
    regenerate || *panel != before
}
