mod legend;
mod party_badge;

pub use legend::MatrixLegend;
pub use party_badge::PartyBadge;
