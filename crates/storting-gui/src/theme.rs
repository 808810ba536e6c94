//! Colors for the agreement scales and fixed page elements

use eframe::egui::Color32;
use storting_core::{AgreementBucket, BarBucket, PartyColor};

pub const DIAGONAL_FILL: Color32 = Color32::from_rgb(0x1E, 0x29, 0x3B);
pub const DIAGONAL_TEXT: Color32 = Color32::from_rgb(0x64, 0x74, 0x8B);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(0x94, 0xA3, 0xB8);
pub const RANK_TEXT: Color32 = Color32::from_rgb(0x47, 0x55, 0x69);
pub const CARD_FILL: Color32 = Color32::from_rgb(0x1E, 0x29, 0x3B);

pub const MOST_ALIGNED_ACCENT: Color32 = Color32::from_rgb(0x34, 0xD3, 0x99);
pub const LEAST_ALIGNED_ACCENT: Color32 = Color32::from_rgb(0xF8, 0x71, 0x71);

pub const WINNING_SIDE_TEXT: Color32 = Color32::from_rgb(0x34, 0xD3, 0x99);
pub const VOTED_FOR_TEXT: Color32 = Color32::from_rgb(0x60, 0xA5, 0xFA);

pub fn party_color(color: PartyColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Matrix cell background
pub fn matrix_fill(bucket: AgreementBucket) -> Color32 {
    match bucket {
        AgreementBucket::VeryHigh => Color32::from_rgba_unmultiplied(16, 185, 129, 230),
        AgreementBucket::High => Color32::from_rgba_unmultiplied(52, 211, 153, 204),
        AgreementBucket::Medium => Color32::from_rgba_unmultiplied(251, 191, 36, 179),
        AgreementBucket::Low => Color32::from_rgba_unmultiplied(251, 146, 60, 179),
        AgreementBucket::VeryLow => Color32::from_rgba_unmultiplied(248, 113, 113, 204),
    }
}

/// Fill of the bar in the party detail panel
pub fn bar_fill(bucket: BarBucket) -> Color32 {
    match bucket {
        BarBucket::Strong => Color32::from_rgb(0x10, 0xB9, 0x81),
        BarBucket::Moderate => Color32::from_rgb(0xF5, 0x9E, 0x0B),
        BarBucket::Weak => Color32::from_rgb(0xEF, 0x44, 0x44),
    }
}

/// Percent text next to the bar
pub fn bar_text(bucket: BarBucket) -> Color32 {
    match bucket {
        BarBucket::Strong => Color32::from_rgb(0x34, 0xD3, 0x99),
        BarBucket::Moderate => Color32::from_rgb(0xFB, 0xBF, 0x24),
        BarBucket::Weak => Color32::from_rgb(0xF8, 0x71, 0x71),
    }
}
