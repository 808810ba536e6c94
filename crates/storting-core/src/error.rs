use thiserror::Error;

#[derive(Error, Debug)]
pub enum StortingError {
    #[error("Unknown party: {0}")]
    UnknownParty(String),

    #[error("Duplicate party: {0}")]
    DuplicateParty(String),

    #[error("Dataset has no parties")]
    NoParties,

    #[error("Invalid color for party {party}: {value}")]
    InvalidColor { party: String, value: String },

    #[error("Missing agreement entry: {a} / {b}")]
    MissingAgreement { a: String, b: String },

    #[error("Asymmetric agreement: {a}/{b} = {ab}, {b}/{a} = {ba}")]
    AsymmetricAgreement {
        a: String,
        b: String,
        ab: f64,
        ba: f64,
    },

    #[error("Percent out of range in {context}: {value}")]
    PercentOutOfRange { context: String, value: f64 },

    #[error("Missing statistic for party: {0}")]
    MissingStatistic(String),

    #[error("Ranked pair pairs {0} with itself")]
    SelfPair(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StortingError>;
