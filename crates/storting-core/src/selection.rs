//! View state and its update function.
//!
//! The active tab and the selected party are independent: leaving the party
//! explorer keeps the selection, so coming back restores the detail panel.

use serde::Serialize;

use crate::party::PartyId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Matrix,
    Ranking,
    PartyExplorer,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Matrix => "Enighetsmatrise",
            Tab::Ranking => "Mest & minst enige",
            Tab::PartyExplorer => "Velg parti",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Matrix => "📊",
            Tab::Ranking => "🏆",
            Tab::PartyExplorer => "🔍",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Matrix, Tab::Ranking, Tab::PartyExplorer]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SelectTab(Tab),
    /// Toggles: selecting the already-selected party clears the selection
    SelectParty(PartyId),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub active_tab: Tab,
    pub selected_party: Option<PartyId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &PartyId) -> bool {
        self.selected_party.as_ref() == Some(id)
    }

    pub fn on_tab_select(&mut self, tab: Tab) {
        *self = update(self, Action::SelectTab(tab));
    }

    pub fn on_party_select(&mut self, id: PartyId) {
        *self = update(self, Action::SelectParty(id));
    }
}

/// Pure transition function: `(state, action) -> state`
pub fn update(state: &Selection, action: Action) -> Selection {
    let next = match action {
        Action::SelectTab(tab) => Selection {
            active_tab: tab,
            selected_party: state.selected_party.clone(),
        },
        Action::SelectParty(id) => {
            let selected_party = match state.is_selected(&id) {
                true => None,
                false => Some(id),
            };
            Selection {
                active_tab: state.active_tab,
                selected_party,
            }
        }
    };

    if next != *state {
        tracing::debug!(
            tab = ?next.active_tab,
            party = ?next.selected_party.as_ref().map(PartyId::as_str),
            "Selection changed"
        );
    }
    next
}
