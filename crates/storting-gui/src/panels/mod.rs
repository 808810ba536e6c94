pub mod components;
pub mod matrix;
pub mod party;
pub mod ranking;
