//! Agreement matrix view

use eframe::egui::{self, Widget};
use egui_extras::{Column, TableBuilder};
use storting_core::{MatrixCell, MatrixView};

use crate::panels::components::{MatrixLegend, PartyBadge};
use crate::theme;

const CELL_SIZE: f32 = 56.0;
const BADGE_SIZE: f32 = 44.0;

pub struct MatrixPanel<'a> {
    view: &'a MatrixView<'a>,
}

impl<'a> MatrixPanel<'a> {
    pub fn new(view: &'a MatrixView<'a>) -> Self {
        Self { view }
    }
}

impl Widget for MatrixPanel<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        ui.vertical(|ui| {
            ui.heading("Enighetsmatrise");
            ui.label(
                egui::RichText::new("Hvor ofte stemmer partiene likt? Fargene viser grad av enighet.")
                    .color(theme::MUTED_TEXT),
            );
            ui.add_space(16.0);

            egui::ScrollArea::horizontal().show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(false)
                    .columns(Column::exact(CELL_SIZE + 4.0), self.view.columns.len() + 1)
                    .header(CELL_SIZE, |mut header| {
                        header.col(|_| {});
                        for party in self.view.columns {
                            header.col(|ui| {
                                ui.add(PartyBadge::new(party).size(BADGE_SIZE));
                            });
                        }
                    })
                    .body(|mut body| {
                        for row in &self.view.rows {
                            body.row(CELL_SIZE + 4.0, |mut table_row| {
                                table_row.col(|ui| {
                                    ui.add(PartyBadge::new(row.party).size(BADGE_SIZE));
                                });
                                for cell in &row.cells {
                                    table_row.col(|ui| {
                                        matrix_cell(ui, cell);
                                    });
                                }
                            });
                        }
                    });
            });

            ui.add_space(12.0);
            ui.add(MatrixLegend);
        })
        .response
    }
}

fn matrix_cell(ui: &mut egui::Ui, cell: &MatrixCell<'_>) {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(CELL_SIZE, CELL_SIZE), egui::Sense::hover());

    let (fill, text_color) = match cell.bucket() {
        Some(bucket) => (theme::matrix_fill(bucket), egui::Color32::WHITE),
        None => (theme::DIAGONAL_FILL, theme::DIAGONAL_TEXT),
    };

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 10.0, fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            cell.label(),
            egui::FontId::proportional(14.0),
            text_color,
        );
    }

    response.on_hover_text(cell.tooltip());
}
