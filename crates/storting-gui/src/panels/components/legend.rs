use eframe::egui::{self, Widget};
use storting_core::AgreementBucket;

use crate::theme;

/// Color key for the agreement matrix
pub struct MatrixLegend;

impl Widget for MatrixLegend {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Enighetsgrad:").color(theme::MUTED_TEXT));
            ui.add_space(8.0);

            for bucket in AgreementBucket::all() {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 3.0, theme::matrix_fill(*bucket));
                ui.label(egui::RichText::new(bucket.label()).color(theme::MUTED_TEXT));
                ui.add_space(8.0);
            }
        })
        .response
    }
}
