use eframe::egui;
use storting_core::{matrix_view, ranking_view, update, Action, Dataset, Selection, Tab};

use crate::panels::{matrix::MatrixPanel, party::PartyPanel, ranking::RankingPanel};
use crate::theme;

const DATA_SOURCE_URL: &str = "https://data.stortinget.no";

pub struct StortingApp {
    dataset: Dataset,
    selection: Selection,
}

impl StortingApp {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            selection: Selection::new(),
        }
    }

    /// Single entry point for every state change
    pub fn dispatch(&mut self, action: Action) {
        self.selection = update(&self.selection, action);
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        ui.label(egui::RichText::new("Stortingsvotering").size(28.0).strong());
        ui.label(egui::RichText::new("Åpenhet i det norske demokratiet").color(theme::MUTED_TEXT));
        ui.add_space(6.0);
        ui.label(
            "Se hvordan partiene på Stortinget stemmer – hvem er enige, hvem er uenige, \
             og hvordan samarbeider de på tvers av politiske skillelinjer?",
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Sesjon:").color(theme::MUTED_TEXT));
            ui.label(egui::RichText::new(self.dataset.session()).strong());
            ui.add_space(24.0);
            ui.label(egui::RichText::new("Voteringer analysert:").color(theme::MUTED_TEXT));
            ui.label(
                egui::RichText::new(self.dataset.vote_count().to_string())
                    .strong()
                    .color(theme::MOST_ALIGNED_ACCENT),
            );
        });
        ui.add_space(12.0);
    }

    fn render_tabs(&self, ui: &mut egui::Ui) -> Option<Action> {
        let mut action = None;
        ui.horizontal(|ui| {
            for tab in Tab::all() {
                let text = format!("{} {}", tab.icon(), tab.label());
                if ui
                    .selectable_label(self.selection.active_tab == *tab, text)
                    .clicked()
                {
                    action = Some(Action::SelectTab(*tab));
                }
            }
        });
        action
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Data fra").color(theme::MUTED_TEXT));
            ui.hyperlink_to("Stortingets åpne API", DATA_SOURCE_URL);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new("Et åpent demokratiprosjekt 🇳🇴").color(theme::DIAGONAL_TEXT));
            });
        });
        ui.add_space(6.0);
    }

    fn render_content(&self, ui: &mut egui::Ui) -> Option<Action> {
        match self.selection.active_tab {
            Tab::Matrix => {
                let view = matrix_view(&self.dataset);
                ui.add(MatrixPanel::new(&view));
                None
            }
            Tab::Ranking => {
                let view = ranking_view(&self.dataset);
                ui.add(RankingPanel::new(&view));
                None
            }
            Tab::PartyExplorer => PartyPanel::new(&self.dataset, &self.selection)
                .show(ui)
                .clicked
                .map(Action::SelectParty),
        }
    }
}

impl eframe::App for StortingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pending = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui);
        });

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            pending.extend(self.render_tabs(ui));
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            self.render_footer(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                pending.extend(self.render_content(ui));
            });
        });

        for action in pending {
            self.dispatch(action);
        }
    }
}
