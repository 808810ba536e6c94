//! Colored square with a party's short label

use eframe::egui::{self, Widget};
use storting_core::Party;

use crate::theme;

pub struct PartyBadge<'a> {
    party: &'a Party,
    size: f32,
}

impl<'a> PartyBadge<'a> {
    pub fn new(party: &'a Party) -> Self {
        Self { party, size: 40.0 }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Widget for PartyBadge<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(self.size, self.size), egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, self.size * 0.2, theme::party_color(self.party.color));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.party.short.as_str(),
                egui::FontId::proportional(self.size * 0.3),
                egui::Color32::WHITE,
            );
        }

        response.on_hover_text(self.party.name.as_str())
    }
}
