use crate::ThemeMode;

use super::{AvailabilitySlot, FieldEdit, SearchCriteria, SearchError, ValidationError};

/// What the results panel shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Error(String),
    Empty,
    Populated(Vec<AvailabilitySlot>),
}

#[derive(Debug)]
pub enum Action {
    Edit(FieldEdit),
    /// The form was submitted and a request is about to be sent.
    Submit,
    /// The form could not be turned into a request; nothing was sent.
    Rejected(ValidationError),
    Resolved(Result<Vec<AvailabilitySlot>, SearchError>),
    ToggleTheme,
}

/// Everything the search page renders from.
///
/// Never mutated in place: every action produces the next state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    criteria: SearchCriteria,
    phase: Phase,
    theme: ThemeMode,
}

impl SearchState {
    pub fn new(criteria: SearchCriteria, theme: ThemeMode) -> Self {
        Self { criteria, phase: Phase::Idle, theme }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::Edit(edit) => Self {
                criteria: self.criteria.apply(edit),
                ..self
            },
            // one search in flight at a time
            Action::Submit if self.is_loading() => self,
            Action::Submit => Self { phase: Phase::Loading, ..self },
            Action::Rejected(e) if !self.is_loading() => Self {
                phase: Phase::Error(e.to_string()),
                ..self
            },
            Action::Rejected(_) => self,
            Action::Resolved(_) if !self.is_loading() => {
                tracing::warn!("dropping search result that arrived without a pending search");
                self
            },
            Action::Resolved(Ok(slots)) if slots.is_empty() => Self { phase: Phase::Empty, ..self },
            Action::Resolved(Ok(slots)) => Self { phase: Phase::Populated(slots), ..self },
            Action::Resolved(Err(e)) => Self { phase: Phase::Error(e.to_string()), ..self },
            Action::ToggleTheme => Self { theme: self.theme.toggle(), ..self },
        }
    }
}
