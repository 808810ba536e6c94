//! Most and least aligned party pairs

use eframe::egui::{self, Widget};
use storting_core::{percent_label, RankingList, RankingRow, RankingView};

use crate::panels::components::PartyBadge;
use crate::theme;

pub struct RankingPanel<'a> {
    view: &'a RankingView<'a>,
}

impl<'a> RankingPanel<'a> {
    pub fn new(view: &'a RankingView<'a>) -> Self {
        Self { view }
    }
}

impl Widget for RankingPanel<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        ui.vertical(|ui| {
            ui.columns(2, |columns| {
                for (column, list) in columns.iter_mut().zip(RankingList::all()) {
                    ranking_card(column, *list, self.view.rows(*list));
                }
            });
        })
        .response
    }
}

fn accent(list: RankingList) -> egui::Color32 {
    match list {
        RankingList::MostAligned => theme::MOST_ALIGNED_ACCENT,
        RankingList::LeastAligned => theme::LEAST_ALIGNED_ACCENT,
    }
}

fn ranking_card(ui: &mut egui::Ui, list: RankingList, rows: &[RankingRow<'_>]) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(list.label()).heading());
        ui.label(egui::RichText::new(list.description()).color(theme::MUTED_TEXT));
        ui.add_space(12.0);

        // Rank is the position in the supplied list
        for row in rows {
            egui::Frame::none()
                .fill(theme::CARD_FILL)
                .rounding(10.0)
                .inner_margin(egui::Margin::same(10.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("#{}", row.rank))
                                .size(22.0)
                                .strong()
                                .color(theme::RANK_TEXT),
                        );
                        ui.add_space(8.0);
                        ui.add(PartyBadge::new(row.party_a).size(36.0));
                        ui.label(egui::RichText::new(list.joiner()).color(theme::MUTED_TEXT));
                        ui.add(PartyBadge::new(row.party_b).size(36.0));

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(percent_label(row.percent))
                                        .size(20.0)
                                        .strong()
                                        .color(accent(list)),
                                );
                                ui.label(
                                    egui::RichText::new("enighet")
                                        .small()
                                        .color(theme::MUTED_TEXT),
                                );
                            });
                        });
                    });
                });
            ui.add_space(6.0);
        }
    });
}
