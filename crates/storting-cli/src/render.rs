//! Plain-text rendering of the three views

use std::fmt::Write;
use std::path::Path;

use storting_core::{
    matrix_view, party_detail, percent_label, ranking_view, Dataset, MatrixView, PartyDetail,
    RankingList, RankingView, Result, Selection, Tab,
};

const CELL_WIDTH: usize = 7;
const BAR_WIDTH: usize = 25;

pub fn render_matrix(view: &MatrixView<'_>) -> String {
    let mut out = String::new();

    let _ = write!(out, "{:<CELL_WIDTH$}", "");
    for party in view.columns {
        let _ = write!(out, "{:>CELL_WIDTH$}", party.short);
    }
    out.push('\n');

    for row in &view.rows {
        let _ = write!(out, "{:<CELL_WIDTH$}", row.party.short);
        for cell in &row.cells {
            let _ = write!(out, "{:>CELL_WIDTH$}", cell.label());
        }
        out.push('\n');
    }

    out
}

pub fn render_ranking(view: &RankingView<'_>) -> String {
    let mut out = String::new();

    for list in RankingList::all() {
        let _ = writeln!(out, "{} - {}", list.label(), list.description());
        let _ = writeln!(out, "{:-<40}", "");
        for row in view.rows(*list) {
            let pair = format!("{} {} {}", row.party_a.short, list.joiner(), row.party_b.short);
            let _ = writeln!(
                out,
                "  #{:<3} {:<16} {:>7}",
                row.rank,
                pair,
                percent_label(row.percent)
            );
        }
        out.push('\n');
    }

    out
}

pub fn render_party_detail(detail: &PartyDetail<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", detail.party.name, detail.party.short);
    let _ = writeln!(out, "Enighet med andre partier, sortert fra høyest til lavest");
    let _ = writeln!(out, "{:-<60}", "");

    for row in &detail.neighbors {
        let filled = ((row.percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        let _ = writeln!(
            out,
            "  {:<5} {:<28} {:>7}  {}",
            row.party.short,
            row.party.name,
            percent_label(row.percent),
            bar
        );
    }

    let _ = writeln!(out, "{:-<60}", "");
    let _ = writeln!(
        out,
        "  {} på vinnersiden   {} stemte for",
        percent_label(detail.statistic.winning_side_percent),
        percent_label(detail.statistic.voted_for_percent)
    );

    out
}

/// Summary printed by `validate`, listing ranked pairs that disagree with the matrix
pub fn render_validation(file: &Path, dataset: &Dataset) -> String {
    let mut out = String::new();
    let mismatches = dataset.ranking_mismatches();

    let status = match mismatches.is_empty() {
        true => "OK",
        false => "OK with warnings",
    };
    let _ = writeln!(out, "{}: {}", status, file.display());
    let _ = writeln!(out, "  Session:  {}", dataset.session());
    let _ = writeln!(out, "  Parties:  {}", dataset.len());
    let _ = writeln!(out, "  Votes:    {}", dataset.vote_count());
    let _ = writeln!(out, "  Ranking mismatches: {}", mismatches.len());

    for m in &mismatches {
        let _ = writeln!(
            out,
            "  warning: {} {} {} {} lists {} but the matrix records {}",
            m.list.label(),
            m.party_a,
            m.list.joiner(),
            m.party_b,
            percent_label(m.listed),
            percent_label(m.recorded)
        );
    }

    out
}

/// Whole page for a given selection
pub fn render(dataset: &Dataset, selection: &Selection) -> Result<String> {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Stortingsvotering | Sesjon: {} | Voteringer analysert: {}",
        dataset.session(),
        dataset.vote_count()
    );
    let tabs: Vec<String> = Tab::all()
        .iter()
        .map(|tab| match *tab == selection.active_tab {
            true => format!("[{}]", tab.label()),
            false => format!(" {} ", tab.label()),
        })
        .collect();
    let _ = writeln!(out, "{}\n", tabs.join(" "));

    match selection.active_tab {
        Tab::Matrix => out.push_str(&render_matrix(&matrix_view(dataset))),
        Tab::Ranking => out.push_str(&render_ranking(&ranking_view(dataset))),
        Tab::PartyExplorer => {
            let ids: Vec<&str> = dataset.parties().iter().map(|p| p.id.as_str()).collect();
            let _ = writeln!(out, "Partier: {}\n", ids.join(" "));
            match &selection.selected_party {
                Some(id) => out.push_str(&render_party_detail(&party_detail(dataset, id)?)),
                None => out.push_str("Velg et parti for å se detaljer\n"),
            }
        }
    }

    let _ = writeln!(out, "\nData fra Stortingets åpne API (https://data.stortinget.no)");
    Ok(out)
}
