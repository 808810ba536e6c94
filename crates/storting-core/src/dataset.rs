//! Agreement dataset - parties, agreement matrix, party statistics and rankings
//!
//! A [`Dataset`] can only be obtained through validation: every constructor
//! goes through `TryFrom<DatasetFile>`, which rejects asymmetric or partial
//! matrices and dangling party references.

use std::collections::{btree_map::Entry, BTreeMap, HashMap};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::path::Path;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, StortingError};
use crate::party::{Party, PartyId, PartyRecord};

const SAMPLE_JSON: &str = include_str!("../data/storting_2023_2024.json");

/// Per-party voting record summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartyStatistic {
    /// Share of votes where the party ended on the winning side
    pub winning_side_percent: f64,
    /// Share of votes where the party voted in favor
    pub voted_for_percent: f64,
}

/// Ranked pair as written in the dataset file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPair {
    pub party_a: PartyId,
    pub party_b: PartyId,
    pub percent: f64,
}

/// Party-keyed JSON object; a repeated key is a parse error instead of
/// silently replacing the earlier value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PartyMap<V>(pub BTreeMap<PartyId, V>);

impl<V> Deref for PartyMap<V> {
    type Target = BTreeMap<PartyId, V>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for PartyMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct PartyMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for PartyMapVisitor<V> {
            type Value = PartyMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by party id")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut map = BTreeMap::new();
                while let Some((key, value)) = access.next_entry::<PartyId, V>()? {
                    match map.entry(key) {
                        Entry::Occupied(entry) => {
                            return Err(de::Error::custom(format!(
                                "duplicate party key `{}`",
                                entry.key()
                            )));
                        }
                        Entry::Vacant(entry) => {
                            entry.insert(value);
                        }
                    }
                }
                Ok(PartyMap(map))
            }
        }

        deserializer.deserialize_map(PartyMapVisitor(PhantomData))
    }
}

/// On-disk dataset layout (JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetFile {
    pub session: String,
    pub vote_count: u32,
    pub parties: Vec<PartyRecord>,
    pub agreement: PartyMap<PartyMap<f64>>,
    pub statistics: PartyMap<PartyStatistic>,
    #[serde(default)]
    pub most_aligned: Vec<RankedPair>,
    #[serde(default)]
    pub least_aligned: Vec<RankedPair>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingList {
    MostAligned,
    LeastAligned,
}

impl RankingList {
    pub fn label(&self) -> &'static str {
        match self {
            RankingList::MostAligned => "Mest enige",
            RankingList::LeastAligned => "Minst enige",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RankingList::MostAligned => "Partier som oftest stemmer likt",
            RankingList::LeastAligned => "Partier som oftest er uenige",
        }
    }

    /// Glyph placed between the two parties of a pair
    pub fn joiner(&self) -> &'static str {
        match self {
            RankingList::MostAligned => "+",
            RankingList::LeastAligned => "vs",
        }
    }

    pub fn all() -> &'static [RankingList] {
        &[RankingList::MostAligned, RankingList::LeastAligned]
    }
}

/// Ranked pair whose percent differs from the matrix entry for the same pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingMismatch {
    pub list: RankingList,
    pub party_a: PartyId,
    pub party_b: PartyId,
    pub listed: f64,
    pub recorded: f64,
}

#[derive(Debug, Clone, Copy)]
struct RankedIndex {
    a: usize,
    b: usize,
    percent: f64,
}

/// Validated, immutable agreement dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    session: String,
    vote_count: u32,
    parties: Vec<Party>,
    index: HashMap<PartyId, usize>,
    /// Row-major `n * n`, canonical party order on both axes
    agreement: Vec<f64>,
    statistics: Vec<PartyStatistic>,
    most_aligned: Vec<RankedIndex>,
    least_aligned: Vec<RankedIndex>,
}

impl Dataset {
    /// Bundled 2023-2024 session data
    pub fn sample() -> Result<Self> {
        Self::from_json_str(SAMPLE_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: DatasetFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&content)?;
        tracing::info!("Dataset loaded from {}", path.display());
        Ok(dataset)
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub fn vote_count(&self) -> u32 {
        self.vote_count
    }

    /// Parties in canonical order
    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }

    pub fn party_index(&self, id: &PartyId) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| StortingError::UnknownParty(id.to_string()))
    }

    pub fn party(&self, id: &PartyId) -> Result<&Party> {
        Ok(&self.parties[self.party_index(id)?])
    }

    pub fn agreement(&self, a: &PartyId, b: &PartyId) -> Result<f64> {
        Ok(self.agreement_at(self.party_index(a)?, self.party_index(b)?))
    }

    pub fn statistic(&self, id: &PartyId) -> Result<&PartyStatistic> {
        Ok(&self.statistics[self.party_index(id)?])
    }

    /// Ranked pairs in the order the data owner supplied them
    pub fn ranked(&self, list: RankingList) -> impl Iterator<Item = (&Party, &Party, f64)> + '_ {
        self.ranked_indices(list)
            .iter()
            .map(move |e| (&self.parties[e.a], &self.parties[e.b], e.percent))
    }

    /// Ranked pairs that disagree with the matrix; these load with a warning
    pub fn ranking_mismatches(&self) -> Vec<RankingMismatch> {
        let mut mismatches = Vec::new();
        for &list in RankingList::all() {
            for entry in self.ranked_indices(list) {
                let recorded = self.agreement_at(entry.a, entry.b);
                if recorded != entry.percent {
                    mismatches.push(RankingMismatch {
                        list,
                        party_a: self.parties[entry.a].id.clone(),
                        party_b: self.parties[entry.b].id.clone(),
                        listed: entry.percent,
                        recorded,
                    });
                }
            }
        }
        mismatches
    }

    fn ranked_indices(&self, list: RankingList) -> &[RankedIndex] {
        match list {
            RankingList::MostAligned => &self.most_aligned,
            RankingList::LeastAligned => &self.least_aligned,
        }
    }

    pub(crate) fn agreement_at(&self, a: usize, b: usize) -> f64 {
        self.agreement[a * self.parties.len() + b]
    }
}

impl TryFrom<DatasetFile> for Dataset {
    type Error = StortingError;

    fn try_from(file: DatasetFile) -> Result<Self> {
        if file.parties.is_empty() {
            return Err(StortingError::NoParties);
        }

        let mut parties = Vec::with_capacity(file.parties.len());
        let mut index = HashMap::with_capacity(file.parties.len());
        for record in file.parties {
            let party = Party::try_from(record)?;
            if index.insert(party.id.clone(), parties.len()).is_some() {
                return Err(StortingError::DuplicateParty(party.id.to_string()));
            }
            parties.push(party);
        }

        let lookup = |id: &PartyId| -> Result<usize> {
            index
                .get(id)
                .copied()
                .ok_or_else(|| StortingError::UnknownParty(id.to_string()))
        };

        let agreement = build_matrix(&parties, &file.agreement, &lookup)?;
        let n = parties.len();

        for a in 0..n {
            for b in (a + 1)..n {
                let ab = agreement[a * n + b];
                let ba = agreement[b * n + a];
                if ab != ba {
                    return Err(StortingError::AsymmetricAgreement {
                        a: parties[a].id.to_string(),
                        b: parties[b].id.to_string(),
                        ab,
                        ba,
                    });
                }
            }
        }

        for id in file.statistics.keys() {
            lookup(id)?;
        }
        let mut statistics = Vec::with_capacity(n);
        for party in &parties {
            let stat = file
                .statistics
                .get(&party.id)
                .copied()
                .ok_or_else(|| StortingError::MissingStatistic(party.id.to_string()))?;
            check_percent(stat.winning_side_percent, || {
                format!("winning side statistic for {}", party.id)
            })?;
            check_percent(stat.voted_for_percent, || {
                format!("voted for statistic for {}", party.id)
            })?;
            statistics.push(stat);
        }

        let resolve = |pairs: &[RankedPair]| -> Result<Vec<RankedIndex>> {
            pairs
                .iter()
                .map(|pair| {
                    let a = lookup(&pair.party_a)?;
                    let b = lookup(&pair.party_b)?;
                    if a == b {
                        return Err(StortingError::SelfPair(pair.party_a.to_string()));
                    }
                    check_percent(pair.percent, || {
                        format!("ranked pair {}/{}", pair.party_a, pair.party_b)
                    })?;

                    let recorded = agreement[a * n + b];
                    if recorded != pair.percent {
                        tracing::warn!(
                            "Ranked pair {}/{} lists {}% but the matrix records {}%",
                            pair.party_a,
                            pair.party_b,
                            pair.percent,
                            recorded
                        );
                    }

                    Ok(RankedIndex {
                        a,
                        b,
                        percent: pair.percent,
                    })
                })
                .collect()
        };
        let most_aligned = resolve(&file.most_aligned)?;
        let least_aligned = resolve(&file.least_aligned)?;

        tracing::info!(
            session = %file.session,
            parties = n,
            votes = file.vote_count,
            "Dataset validated"
        );

        Ok(Self {
            session: file.session,
            vote_count: file.vote_count,
            parties,
            index,
            agreement,
            statistics,
            most_aligned,
            least_aligned,
        })
    }
}

fn build_matrix(
    parties: &[Party],
    rows: &PartyMap<PartyMap<f64>>,
    lookup: &impl Fn(&PartyId) -> Result<usize>,
) -> Result<Vec<f64>> {
    let n = parties.len();
    let mut matrix = vec![f64::NAN; n * n];
    let mut filled = vec![false; n * n];

    for (row_id, row) in rows.iter() {
        let a = lookup(row_id)?;
        for (col_id, &percent) in row.iter() {
            let b = lookup(col_id)?;
            check_percent(percent, || format!("agreement {}/{}", row_id, col_id))?;
            matrix[a * n + b] = percent;
            filled[a * n + b] = true;
        }
    }

    if let Some(missing) = filled.iter().position(|f| !f) {
        return Err(StortingError::MissingAgreement {
            a: parties[missing / n].id.to_string(),
            b: parties[missing % n].id.to_string(),
        });
    }

    Ok(matrix)
}

fn check_percent(value: f64, context: impl FnOnce() -> String) -> Result<f64> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        return Ok(value);
    }
    Err(StortingError::PercentOutOfRange {
        context: context(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample_value() -> Value {
        serde_json::from_str(SAMPLE_JSON).unwrap()
    }

    fn from_value(value: Value) -> Result<Dataset> {
        let file: DatasetFile = serde_json::from_value(value).unwrap();
        Dataset::try_from(file)
    }

    #[test]
    fn test_sample_loads() {
        let dataset = Dataset::sample().unwrap();
        assert_eq!(dataset.session(), "2023-2024");
        assert_eq!(dataset.vote_count(), 847);
        assert_eq!(dataset.len(), 9);
        assert_eq!(dataset.parties()[0].id.as_str(), "A");
        assert_eq!(dataset.parties()[8].id.as_str(), "FrP");
    }

    #[test]
    fn test_sample_is_symmetric() {
        let dataset = Dataset::sample().unwrap();
        for a in dataset.parties() {
            for b in dataset.parties() {
                assert_eq!(
                    dataset.agreement(&a.id, &b.id).unwrap(),
                    dataset.agreement(&b.id, &a.id).unwrap(),
                    "{} / {}",
                    a.id,
                    b.id
                );
            }
        }
    }

    #[test]
    fn test_lookups() {
        let dataset = Dataset::sample().unwrap();
        let h = PartyId::from("H");
        assert_eq!(dataset.party(&h).unwrap().name, "Høyre");
        assert_eq!(dataset.agreement(&h, &PartyId::from("V")).unwrap(), 78.9);
        assert_eq!(dataset.statistic(&h).unwrap().voted_for_percent, 35.2);
        assert!(matches!(
            dataset.party(&PartyId::from("XYZ")),
            Err(StortingError::UnknownParty(ref id)) if id == "XYZ"
        ));
    }

    #[test]
    fn test_ranked_pairs_keep_supplied_order() {
        let dataset = Dataset::sample().unwrap();
        let most: Vec<_> = dataset
            .ranked(RankingList::MostAligned)
            .map(|(a, b, p)| (a.id.as_str(), b.id.as_str(), p))
            .collect();
        assert_eq!(most[0], ("A", "Sp", 89.2));
        assert_eq!(most[4], ("R", "MDG", 74.6));

        let least: Vec<_> = dataset
            .ranked(RankingList::LeastAligned)
            .map(|(_, _, p)| p)
            .collect();
        assert_eq!(least, vec![15.8, 18.4, 19.2, 21.3, 28.6]);
    }

    #[test]
    fn test_rejects_asymmetric_matrix() {
        let mut value = sample_value();
        value["agreement"]["A"]["Sp"] = json!(88.0);
        let err = from_value(value).unwrap_err();
        assert!(matches!(err, StortingError::AsymmetricAgreement { .. }));
    }

    #[test]
    fn test_rejects_missing_entry() {
        let mut value = sample_value();
        value["agreement"]["KrF"]
            .as_object_mut()
            .unwrap()
            .remove("KrF");
        let err = from_value(value).unwrap_err();
        assert!(matches!(
            err,
            StortingError::MissingAgreement { ref a, ref b } if a == "KrF" && b == "KrF"
        ));
    }

    #[test]
    fn test_rejects_missing_row() {
        let mut value = sample_value();
        value["agreement"].as_object_mut().unwrap().remove("V");
        assert!(matches!(
            from_value(value).unwrap_err(),
            StortingError::MissingAgreement { .. }
        ));
    }

    #[test]
    fn test_rejects_unknown_party_in_matrix() {
        let mut value = sample_value();
        value["agreement"]["A"]["INP"] = json!(50.0);
        assert!(matches!(
            from_value(value).unwrap_err(),
            StortingError::UnknownParty(ref id) if id == "INP"
        ));
    }

    #[test]
    fn test_rejects_unknown_matrix_row() {
        let mut value = sample_value();
        value["agreement"]["INP"] = json!({ "A": 50.0 });
        assert!(matches!(
            from_value(value).unwrap_err(),
            StortingError::UnknownParty(ref id) if id == "INP"
        ));
    }

    #[test]
    fn test_rejects_unknown_party_in_statistics() {
        let mut value = sample_value();
        value["statistics"]["PF"] = json!({ "winning_side_percent": 50.0, "voted_for_percent": 50.0 });
        assert!(matches!(
            from_value(value).unwrap_err(),
            StortingError::UnknownParty(ref id) if id == "PF"
        ));
    }

    #[test]
    fn test_rejects_malformed_color() {
        let mut value = sample_value();
        value["parties"][0]["color"] = json!("red");
        assert!(matches!(
            from_value(value).unwrap_err(),
            StortingError::InvalidColor { ref party, ref value } if party == "A" && value == "red"
        ));
    }

    #[test]
    fn test_rejects_unknown_party_in_ranking() {
        let mut value = sample_value();
        value["most_aligned"][2]["party_b"] = json!("PF");
        assert!(matches!(
            from_value(value).unwrap_err(),
            StortingError::UnknownParty(ref id) if id == "PF"
        ));
    }

    #[test]
    fn test_rejects_self_pair_in_ranking() {
        let mut value = sample_value();
        value["least_aligned"][0]["party_b"] = json!("R");
        assert!(matches!(
            from_value(value).unwrap_err(),
            StortingError::SelfPair(ref id) if id == "R"
        ));
    }

    #[test]
    fn test_rejects_duplicate_party() {
        let mut value = sample_value();
        value["parties"][1]["id"] = json!("A");
        assert!(matches!(
            from_value(value).unwrap_err(),
            StortingError::DuplicateParty(ref id) if id == "A"
        ));
    }

    #[test]
    fn test_rejects_empty_party_list() {
        let mut value = sample_value();
        value["parties"] = json!([]);
        assert!(matches!(from_value(value).unwrap_err(), StortingError::NoParties));
    }

    #[test]
    fn test_rejects_out_of_range_percent() {
        let mut value = sample_value();
        value["agreement"]["H"]["FrP"] = json!(168.3);
        value["agreement"]["FrP"]["H"] = json!(168.3);
        assert!(matches!(
            from_value(value).unwrap_err(),
            StortingError::PercentOutOfRange { .. }
        ));

        let mut value = sample_value();
        value["statistics"]["SV"]["voted_for_percent"] = json!(-1.0);
        assert!(matches!(
            from_value(value).unwrap_err(),
            StortingError::PercentOutOfRange { .. }
        ));
    }

    #[test]
    fn test_rejects_out_of_range_ranked_percent() {
        let mut value = sample_value();
        value["least_aligned"][1]["percent"] = json!(-3.0);
        assert!(matches!(
            from_value(value).unwrap_err(),
            StortingError::PercentOutOfRange { ref context, value } if context.starts_with("ranked pair") && value == -3.0
        ));
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let json = SAMPLE_JSON.replacen("\"Sp\": 89.2,", "\"Sp\": 89.2, \"Sp\": 89.2,", 1);
        assert_ne!(json, SAMPLE_JSON);
        let err = Dataset::from_json_str(&json).unwrap_err();
        assert!(matches!(err, StortingError::Json(_)));
        assert!(err.to_string().contains("duplicate party key `Sp`"));

        let json = SAMPLE_JSON.replacen("\"statistics\": {", "\"statistics\": { \"H\": { \"winning_side_percent\": 1, \"voted_for_percent\": 1 },", 1);
        assert_ne!(json, SAMPLE_JSON);
        assert!(matches!(
            Dataset::from_json_str(&json),
            Err(StortingError::Json(_))
        ));
    }

    #[test]
    fn test_rejects_missing_statistic() {
        let mut value = sample_value();
        value["statistics"].as_object_mut().unwrap().remove("MDG");
        assert!(matches!(
            from_value(value).unwrap_err(),
            StortingError::MissingStatistic(ref id) if id == "MDG"
        ));
    }

    #[test]
    fn test_accepts_ranking_that_disagrees_with_matrix() {
        let mut value = sample_value();
        value["most_aligned"][0]["percent"] = json!(90.0);
        let dataset = from_value(value).unwrap();
        let (_, _, first) = dataset.ranked(RankingList::MostAligned).next().unwrap();
        assert_eq!(first, 90.0);
    }

    #[test]
    fn test_ranking_mismatches() {
        assert!(Dataset::sample().unwrap().ranking_mismatches().is_empty());

        let mut value = sample_value();
        value["most_aligned"][0]["percent"] = json!(12.0);
        let mismatches = from_value(value).unwrap().ranking_mismatches();
        assert_eq!(
            mismatches,
            vec![RankingMismatch {
                list: RankingList::MostAligned,
                party_a: PartyId::from("A"),
                party_b: PartyId::from("Sp"),
                listed: 12.0,
                recorded: 89.2,
            }]
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(&path, SAMPLE_JSON).unwrap();
        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 9);

        let missing = dir.path().join("missing.json");
        assert!(matches!(Dataset::load(&missing), Err(StortingError::Io(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Dataset::from_json_str("{ \"session\": "),
            Err(StortingError::Json(_))
        ));
    }
}
