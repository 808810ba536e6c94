// Domain modules
pub mod bucket;
pub mod config;
pub mod dataset;
pub mod error;
pub mod party;
pub mod selection;
pub mod view;

pub use bucket::{agreement_bucket, bar_bucket, AgreementBucket, BarBucket};
pub use config::{DatasetConfig, LoggingConfig, StortingConfig, WindowConfig};
pub use dataset::{
    Dataset, DatasetFile, PartyMap, PartyStatistic, RankedPair, RankingList, RankingMismatch,
};
pub use error::{Result, StortingError};
pub use party::{Party, PartyColor, PartyId, PartyRecord};
pub use selection::{update, Action, Selection, Tab};
pub use view::{
    matrix_view, neighbors_sorted_by_agreement, party_detail, percent_label, ranking_rows,
    ranking_view, DetailRow, MatrixCell, MatrixRow, MatrixView, Neighbor, PartyDetail,
    RankingRow, RankingView, DIAGONAL_GLYPH,
};
