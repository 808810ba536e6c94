//! Party explorer - pick a party, see who it votes with

use eframe::egui;
use storting_core::{party_detail, percent_label, Dataset, PartyDetail, PartyId, Selection};

use crate::panels::components::PartyBadge;
use crate::theme;

/// Response from the party explorer
#[derive(Default)]
pub struct PartyPanelResponse {
    /// Party button that was clicked this frame
    pub clicked: Option<PartyId>,
}

pub struct PartyPanel<'a> {
    dataset: &'a Dataset,
    selection: &'a Selection,
}

impl<'a> PartyPanel<'a> {
    pub fn new(dataset: &'a Dataset, selection: &'a Selection) -> Self {
        Self { dataset, selection }
    }

    pub fn show(self, ui: &mut egui::Ui) -> PartyPanelResponse {
        let mut response = PartyPanelResponse::default();

        ui.heading("Utforsk et parti");
        ui.label(
            egui::RichText::new("Velg et parti for å se hvem de samarbeider med")
                .color(theme::MUTED_TEXT),
        );
        ui.add_space(16.0);

        ui.horizontal_wrapped(|ui| {
            for party in self.dataset.parties() {
                let mut button = egui::Button::new(
                    egui::RichText::new(&party.name)
                        .color(egui::Color32::WHITE)
                        .strong(),
                )
                .fill(theme::party_color(party.color))
                .min_size(egui::vec2(0.0, 36.0));

                if self.selection.is_selected(&party.id) {
                    button = button.stroke(egui::Stroke::new(2.0, egui::Color32::WHITE));
                }

                if ui.add(button).clicked() {
                    response.clicked = Some(party.id.clone());
                }
            }
        });

        ui.add_space(16.0);

        let Some(ref id) = self.selection.selected_party else {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(egui::RichText::new("👆").size(32.0));
                    ui.label(
                        egui::RichText::new("Klikk på et parti over for å se detaljer")
                            .color(theme::MUTED_TEXT),
                    );
                    ui.add_space(24.0);
                });
            });
            return response;
        };

        match party_detail(self.dataset, id) {
            Ok(detail) => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| render_detail(ui, &detail));
            }
            Err(e) => {
                // Buttons only offer parties from the dataset
                tracing::error!("Selected party is not in the dataset: {}", e);
                if cfg!(debug_assertions) {
                    panic!("selected party is not in the dataset: {e}");
                }
            }
        }

        response
    }
}

fn render_detail(ui: &mut egui::Ui, detail: &PartyDetail<'_>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.add(PartyBadge::new(detail.party).size(64.0));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&detail.party.name).heading().strong());
                ui.label(
                    egui::RichText::new("Enighet med andre partier, sortert fra høyest til lavest")
                        .color(theme::MUTED_TEXT),
                );
            });
        });

        ui.separator();
        ui.add_space(8.0);

        for row in &detail.neighbors {
            ui.horizontal(|ui| {
                ui.add(PartyBadge::new(row.party).size(44.0));
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(row.party.name.as_str());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(percent_label(row.percent))
                                    .size(18.0)
                                    .strong()
                                    .color(theme::bar_text(row.bar)),
                            );
                        });
                    });
                    ui.add(
                        egui::ProgressBar::new(row.percent as f32 / 100.0)
                            .fill(theme::bar_fill(row.bar))
                            .desired_height(12.0),
                    );
                });
            });
            ui.add_space(6.0);
        }

        ui.separator();
        ui.add_space(8.0);

        ui.columns(2, |columns| {
            statistic_card(
                &mut columns[0],
                detail.statistic.winning_side_percent,
                "på vinnersiden",
                theme::WINNING_SIDE_TEXT,
            );
            statistic_card(
                &mut columns[1],
                detail.statistic.voted_for_percent,
                "stemte for",
                theme::VOTED_FOR_TEXT,
            );
        });
    });
}

fn statistic_card(ui: &mut egui::Ui, percent: f64, caption: &str, color: egui::Color32) {
    egui::Frame::none()
        .fill(theme::CARD_FILL)
        .rounding(10.0)
        .inner_margin(egui::Margin::same(14.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(percent_label(percent))
                    .size(28.0)
                    .strong()
                    .color(color),
            );
            ui.label(egui::RichText::new(caption).color(theme::MUTED_TEXT));
        });
}
