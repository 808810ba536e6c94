//! Display projections derived from a [`Dataset`].
//!
//! Everything here is a pure function of the dataset (and, for the party
//! detail, of the selected party). Presentation layers render these values
//! without looking at the raw matrix.

use serde::Serialize;

use crate::bucket::{agreement_bucket, bar_bucket, AgreementBucket, BarBucket};
use crate::dataset::{Dataset, PartyStatistic, RankingList};
use crate::error::Result;
use crate::party::{Party, PartyId};

/// Shown instead of a number on the matrix diagonal
pub const DIAGONAL_GLYPH: &str = "—";

/// `89.2` -> `"89.2%"`, `47.0` -> `"47%"`. No rounding.
pub fn percent_label(percent: f64) -> String {
    format!("{}%", percent)
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Neighbor<'a> {
    pub party: &'a Party,
    pub percent: f64,
}

/// All parties except `id`, highest agreement first.
///
/// Ties keep the dataset's canonical party order (stable sort).
pub fn neighbors_sorted_by_agreement<'a>(
    dataset: &'a Dataset,
    id: &PartyId,
) -> Result<Vec<Neighbor<'a>>> {
    let own = dataset.party_index(id)?;

    let mut neighbors: Vec<Neighbor<'a>> = dataset
        .parties()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != own)
        .map(|(i, party)| Neighbor {
            party,
            percent: dataset.agreement_at(own, i),
        })
        .collect();

    neighbors.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    Ok(neighbors)
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatrixCell<'a> {
    Diagonal {
        party: &'a Party,
    },
    Value {
        row: &'a Party,
        column: &'a Party,
        percent: f64,
        bucket: AgreementBucket,
    },
}

impl MatrixCell<'_> {
    /// Cell text. The diagonal never shows its stored value.
    pub fn label(&self) -> String {
        match self {
            MatrixCell::Diagonal { .. } => DIAGONAL_GLYPH.to_string(),
            MatrixCell::Value { percent, .. } => percent_label(*percent),
        }
    }

    pub fn tooltip(&self) -> String {
        match self {
            MatrixCell::Diagonal { party } => party.name.clone(),
            MatrixCell::Value {
                row,
                column,
                percent,
                ..
            } => format!(
                "{} + {}: {} enighet",
                row.name,
                column.name,
                percent_label(*percent)
            ),
        }
    }

    pub fn bucket(&self) -> Option<AgreementBucket> {
        match self {
            MatrixCell::Diagonal { .. } => None,
            MatrixCell::Value { bucket, .. } => Some(*bucket),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatrixRow<'a> {
    pub party: &'a Party,
    pub cells: Vec<MatrixCell<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatrixView<'a> {
    pub columns: &'a [Party],
    pub rows: Vec<MatrixRow<'a>>,
}

pub fn matrix_view(dataset: &Dataset) -> MatrixView<'_> {
    let parties = dataset.parties();
    let rows = parties
        .iter()
        .enumerate()
        .map(|(a, row)| MatrixRow {
            party: row,
            cells: parties
                .iter()
                .enumerate()
                .map(|(b, column)| match a == b {
                    true => MatrixCell::Diagonal { party: row },
                    false => {
                        let percent = dataset.agreement_at(a, b);
                        MatrixCell::Value {
                            row,
                            column,
                            percent,
                            bucket: agreement_bucket(percent),
                        }
                    }
                })
                .collect(),
        })
        .collect();

    MatrixView {
        columns: parties,
        rows,
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankingRow<'a> {
    /// 1-based position in the supplied list
    pub rank: usize,
    pub party_a: &'a Party,
    pub party_b: &'a Party,
    pub percent: f64,
}

/// Number a ranking list by position. The supplied order is never changed.
pub fn ranking_rows(dataset: &Dataset, list: RankingList) -> Vec<RankingRow<'_>> {
    dataset
        .ranked(list)
        .enumerate()
        .map(|(i, (party_a, party_b, percent))| RankingRow {
            rank: i + 1,
            party_a,
            party_b,
            percent,
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingView<'a> {
    pub most_aligned: Vec<RankingRow<'a>>,
    pub least_aligned: Vec<RankingRow<'a>>,
}

impl<'a> RankingView<'a> {
    pub fn rows(&self, list: RankingList) -> &[RankingRow<'a>] {
        match list {
            RankingList::MostAligned => &self.most_aligned,
            RankingList::LeastAligned => &self.least_aligned,
        }
    }
}

pub fn ranking_view(dataset: &Dataset) -> RankingView<'_> {
    RankingView {
        most_aligned: ranking_rows(dataset, RankingList::MostAligned),
        least_aligned: ranking_rows(dataset, RankingList::LeastAligned),
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DetailRow<'a> {
    pub party: &'a Party,
    pub percent: f64,
    pub bar: BarBucket,
}

/// Drill-down for one party: sorted neighbors plus its voting statistics
#[derive(Debug, Clone, Serialize)]
pub struct PartyDetail<'a> {
    pub party: &'a Party,
    pub neighbors: Vec<DetailRow<'a>>,
    pub statistic: PartyStatistic,
}

pub fn party_detail<'a>(dataset: &'a Dataset, id: &PartyId) -> Result<PartyDetail<'a>> {
    let party = dataset.party(id)?;
    let neighbors = neighbors_sorted_by_agreement(dataset, id)?
        .into_iter()
        .map(|n| DetailRow {
            party: n.party,
            percent: n.percent,
            bar: bar_bucket(n.percent),
        })
        .collect();

    Ok(PartyDetail {
        party,
        neighbors,
        statistic: *dataset.statistic(id)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StortingError;
    use serde_json::json;

    fn sample() -> Dataset {
        Dataset::sample().unwrap()
    }

    #[test]
    fn test_neighbors_of_a() {
        let dataset = sample();
        let neighbors = neighbors_sorted_by_agreement(&dataset, &PartyId::from("A")).unwrap();

        assert_eq!(neighbors.len(), dataset.len() - 1);
        assert_eq!(neighbors[0].party.id.as_str(), "Sp");
        assert_eq!(neighbors[0].percent, 89.2);
        assert!(neighbors.iter().all(|n| n.party.id.as_str() != "A"));
        assert_eq!(neighbors.last().unwrap().party.id.as_str(), "FrP");
    }

    #[test]
    fn test_neighbors_sorted_for_every_party() {
        let dataset = sample();
        for party in dataset.parties() {
            let neighbors = neighbors_sorted_by_agreement(&dataset, &party.id).unwrap();
            assert_eq!(neighbors.len(), dataset.len() - 1);
            assert!(neighbors.iter().all(|n| n.party.id != party.id));
            assert!(neighbors.windows(2).all(|w| w[0].percent >= w[1].percent));
        }
    }

    #[test]
    fn test_neighbors_unknown_party() {
        let dataset = sample();
        let err = neighbors_sorted_by_agreement(&dataset, &PartyId::from("Pp")).unwrap_err();
        assert!(matches!(err, StortingError::UnknownParty(ref id) if id == "Pp"));
    }

    #[test]
    fn test_neighbors_ties_keep_canonical_order() {
        let value = json!({
            "session": "test",
            "vote_count": 3,
            "parties": [
                { "id": "X", "name": "X", "color": "#000000", "short": "X" },
                { "id": "C", "name": "C", "color": "#000000", "short": "C" },
                { "id": "B", "name": "B", "color": "#000000", "short": "B" },
                { "id": "A", "name": "A", "color": "#000000", "short": "A" }
            ],
            "agreement": {
                "X": { "X": 100, "C": 50, "B": 50, "A": 70 },
                "C": { "X": 50, "C": 100, "B": 10, "A": 10 },
                "B": { "X": 50, "C": 10, "B": 100, "A": 10 },
                "A": { "X": 70, "C": 10, "B": 10, "A": 100 }
            },
            "statistics": {
                "X": { "winning_side_percent": 50, "voted_for_percent": 50 },
                "C": { "winning_side_percent": 50, "voted_for_percent": 50 },
                "B": { "winning_side_percent": 50, "voted_for_percent": 50 },
                "A": { "winning_side_percent": 50, "voted_for_percent": 50 }
            }
        });
        let dataset = Dataset::from_json_str(&value.to_string()).unwrap();

        for _ in 0..3 {
            let order: Vec<_> = neighbors_sorted_by_agreement(&dataset, &PartyId::from("X"))
                .unwrap()
                .iter()
                .map(|n| n.party.id.as_str().to_string())
                .collect();
            assert_eq!(order, vec!["A", "C", "B"]);
        }
    }

    #[test]
    fn test_matrix_diagonal_uses_glyph() {
        let dataset = sample();
        let view = matrix_view(&dataset);

        assert_eq!(view.rows.len(), dataset.len());
        for (i, row) in view.rows.iter().enumerate() {
            assert_eq!(row.cells.len(), dataset.len());
            let diagonal = &row.cells[i];
            assert!(matches!(diagonal, MatrixCell::Diagonal { .. }));
            assert_eq!(diagonal.label(), DIAGONAL_GLYPH);
            assert!(!diagonal.tooltip().contains('%'));
            assert_eq!(diagonal.bucket(), None);
        }
    }

    #[test]
    fn test_matrix_diagonal_ignores_recorded_value() {
        let value = json!({
            "session": "test",
            "vote_count": 1,
            "parties": [
                { "id": "X", "name": "Xpartiet", "color": "#112233", "short": "X" },
                { "id": "Y", "name": "Ypartiet", "color": "#445566", "short": "Y" }
            ],
            "agreement": {
                "X": { "X": 55.5, "Y": 40 },
                "Y": { "X": 40, "Y": 55.5 }
            },
            "statistics": {
                "X": { "winning_side_percent": 50, "voted_for_percent": 50 },
                "Y": { "winning_side_percent": 50, "voted_for_percent": 50 }
            }
        });
        let dataset = Dataset::from_json_str(&value.to_string()).unwrap();
        let view = matrix_view(&dataset);

        for (i, row) in view.rows.iter().enumerate() {
            let diagonal = &row.cells[i];
            assert_eq!(diagonal.label(), DIAGONAL_GLYPH);
            assert!(!diagonal.tooltip().contains("55.5"));
            assert_eq!(diagonal.bucket(), None);
        }
        assert!(!serde_json::to_string(&view).unwrap().contains("55.5"));
    }

    #[test]
    fn test_matrix_cells() {
        let dataset = sample();
        let view = matrix_view(&dataset);

        // A row, Sp column
        let cell = &view.rows[0].cells[1];
        assert_eq!(cell.label(), "89.2%");
        assert_eq!(cell.bucket(), Some(AgreementBucket::VeryHigh));
        assert_eq!(cell.tooltip(), "Arbeiderpartiet + Senterpartiet: 89.2% enighet");

        // R row, FrP column
        let cell = &view.rows[3].cells[8];
        assert_eq!(cell.label(), "15.8%");
        assert_eq!(cell.bucket(), Some(AgreementBucket::VeryLow));
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(89.2), "89.2%");
        assert_eq!(percent_label(47.0), "47%");
        assert_eq!(percent_label(100.0), "100%");
    }

    #[test]
    fn test_ranking_rows_numbered_in_supplied_order() {
        let dataset = sample();
        let view = ranking_view(&dataset);

        let ranks: Vec<_> = view.most_aligned.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);

        let pairs: Vec<_> = view
            .rows(RankingList::MostAligned)
            .iter()
            .map(|r| (r.party_a.id.as_str(), r.party_b.id.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("A", "Sp"), ("SV", "R"), ("H", "V"), ("SV", "MDG"), ("R", "MDG")]
        );

        let least: Vec<_> = view.least_aligned.iter().map(|r| (r.rank, r.percent)).collect();
        assert_eq!(
            least,
            vec![(1, 15.8), (2, 18.4), (3, 19.2), (4, 21.3), (5, 28.6)]
        );
    }

    #[test]
    fn test_ranking_rows_not_resorted() {
        let mut value: serde_json::Value =
            serde_json::from_str(include_str!("../data/storting_2023_2024.json")).unwrap();
        let list = value["most_aligned"].as_array_mut().unwrap();
        list.reverse();
        let dataset = Dataset::from_json_str(&value.to_string()).unwrap();

        let rows = ranking_rows(&dataset, RankingList::MostAligned);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].percent, 74.6);
        assert_eq!(rows[4].rank, 5);
        assert_eq!(rows[4].percent, 89.2);
    }

    #[test]
    fn test_party_detail() {
        let dataset = sample();
        let detail = party_detail(&dataset, &PartyId::from("H")).unwrap();

        assert_eq!(detail.party.name, "Høyre");
        assert_eq!(detail.neighbors.len(), 8);
        assert_eq!(detail.neighbors[0].party.id.as_str(), "V");
        assert_eq!(detail.neighbors[0].bar, BarBucket::Strong);
        assert_eq!(detail.neighbors.last().unwrap().party.id.as_str(), "R");
        assert_eq!(detail.neighbors.last().unwrap().bar, BarBucket::Weak);
        assert_eq!(detail.statistic.winning_side_percent, 36.8);
        assert_eq!(detail.statistic.voted_for_percent, 35.2);
    }
}
