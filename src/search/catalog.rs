//! Venues, courts and hours known to the search form.

use std::{borrow::Cow, ops::RangeInclusive};

/// How a venue's court names are shown on result cards.
///
/// Only the label changes; the court name sent to and received from the
/// search service stays as it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourtLabel {
    Verbatim,
    /// `Cancha Tenis N` is shown as `Cancha de Tenis N`.
    LongForm,
}

impl CourtLabel {
    pub fn apply<'a>(&self, court: &'a str) -> Cow<'a, str> {
        match self {
            CourtLabel::Verbatim => Cow::Borrowed(court),
            CourtLabel::LongForm => match court.strip_prefix("Cancha Tenis ") {
                Some(number) => Cow::Owned(format!("Cancha de Tenis {number}")),
                None => Cow::Borrowed(court),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Venue {
    pub code: &'static str,
    pub name: &'static str,
    pub court_label: CourtLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Court {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const VENUES: &[Venue] = &[
    Venue { code: "804", name: "Germán Becker", court_label: CourtLabel::Verbatim },
    Venue { code: "855", name: "Labranza", court_label: CourtLabel::LongForm },
];

pub const COURTS: &[Court] = &[
    Court { name: "Cancha Tenis 1", icon: "🎾" },
    Court { name: "Cancha Tenis 2", icon: "🥎" },
    Court { name: "Cancha Tenis 3", icon: "🏸" },
    Court { name: "Cancha Tenis 4", icon: "🏓" },
];

pub const DEFAULT_COURT_ICON: &str = "🎾";

pub const HOURS: RangeInclusive<u8> = 8..=20;

pub fn venue(code: &str) -> Option<&'static Venue> {
    VENUES.iter().find(|venue| venue.code == code.trim())
}

pub fn court(name: &str) -> Option<&'static Court> {
    COURTS.iter().find(|court| court.name == name.trim())
}

/// Label for a court as reported by the given venue; unknown venues show it verbatim.
pub fn court_label<'a>(venue_code: &str, court: &'a str) -> Cow<'a, str> {
    match venue(venue_code) {
        Some(venue) => venue.court_label.apply(court),
        None => Cow::Borrowed(court),
    }
}

pub fn court_icon(name: &str) -> &'static str {
    court(name).map(|court| court.icon).unwrap_or(DEFAULT_COURT_ICON)
}
