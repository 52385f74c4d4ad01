use chrono::NaiveDate;
use maud::{html, Markup, Render};

use crate::{CourtTheme, Theme};

use super::{
    catalog::{self, COURTS, HOURS, VENUES},
    criteria::DATE_FORMAT,
    AvailabilitySlot, Phase, SearchCriteria, SearchState,
};

pub const EMPTY_MESSAGE: &str = "No se encontraron resultados para la búsqueda realizada.";
pub const LOADING_MESSAGE: &str = "Cargando...";

/// The results panel for whatever phase the search is in.
pub struct ResultsPanel<'a> {
    pub state: &'a SearchState,
}

/// One available slot.
pub struct SlotCard<'a> {
    pub slot: &'a AvailabilitySlot,
}

/// The filter form, prefilled from the criteria.
pub struct SearchForm<'a> {
    pub criteria: &'a SearchCriteria,
}

/// Form and results together, as served for full page loads.
pub struct SearchPage<'a> {
    pub state: &'a SearchState,
}

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

impl Render for SlotCard<'_> {
    fn render(&self) -> Markup {
        let theme = CourtTheme;
        let slot = self.slot;

        html! {
            article class={"slot-card rounded-lg p-4 mb-5 " (theme.surface().classes())} {
                h2 class={"text-xl font-semibold mb-2 " (theme.heading().classes())} {
                    (slot.recinto_name) " (" (slot.recinto_code) ")"
                }
                p class=(theme.muted().classes()) {
                    "Fecha: " (slot.date) " (" (slot.day_of_week) ")"
                }
                p class=(theme.muted().classes()) {
                    "Hora: " (slot.hour)
                }
                p class=(theme.muted().classes()) {
                    "Canchas: "
                    @for (index, court) in slot.canchas.iter().enumerate() {
                        @if index > 0 { ", " }
                        span class="court whitespace-nowrap" {
                            span aria-hidden="true" { (catalog::court_icon(court)) " " }
                            (&*catalog::court_label(&slot.recinto_code, court))
                        }
                    }
                }
                a class={"booking-link inline-block mt-3 px-4 py-2 rounded-md no-underline " (theme.primary().classes())}
                    href=(slot.booking_url)
                    target="_blank"
                    rel="noopener noreferrer" {
                    "Reservar"
                }
            }
        }
    }
}

impl Render for ResultsPanel<'_> {
    fn render(&self) -> Markup {
        let theme = CourtTheme;

        html! {
            @match self.state.phase() {
                Phase::Idle => {},
                Phase::Loading => {
                    p { (LOADING_MESSAGE) }
                },
                Phase::Error(message) => {
                    p role="alert" class=(theme.error().classes()) {
                        "Error: " (message)
                    }
                },
                Phase::Empty => {
                    p class="empty-state" { (EMPTY_MESSAGE) }
                },
                Phase::Populated(slots) => {
                    @for slot in slots {
                        (SlotCard { slot })
                    }
                },
            }
        }
    }
}

// stale results go away while the indicator is up
const CLEAR_RESULTS: &str = "htmx:beforeRequest: document.getElementById('results').innerHTML = ''";

impl Render for SearchForm<'_> {
    fn render(&self) -> Markup {
        let theme = CourtTheme;
        let criteria = self.criteria;
        let input = format!("p-1 rounded {}", theme.input().classes());
        let clear = format!("self-start px-2 py-1 text-sm rounded {}", theme.danger().classes());

        html! {
            form #search-form
                class="flex flex-col gap-4 mb-5"
                method="post"
                action="/search"
                hx-post="/search"
                hx-target="#results"
                hx-swap="innerHTML"
                hx-indicator="#loading"
                hx-disabled-elt="#search-submit"
                hx-sync="this:drop"
                hx-on=(CLEAR_RESULTS) {

                label class="flex flex-col gap-1" {
                    "Fecha inicial:"
                    input type="date" name="startDate" class=(input)
                        value=(date_value(criteria.start_date));
                }
                label class="flex flex-col gap-1" {
                    "Fecha final (opcional):"
                    input type="date" name="endDate" class=(input)
                        value=(date_value(criteria.end_date));
                }
                label class="flex flex-col gap-1" {
                    "Cantidad de días a buscar (sin fecha final):"
                    input type="number" name="daysToIterate" min="1" class=(input)
                        value=(criteria.days_to_iterate);
                }
                label class="flex flex-col gap-1" {
                    "Recintos:"
                    select #venues name="selectedRecintos" multiple class=(input) {
                        @for venue in VENUES {
                            option value=(venue.code) selected[criteria.venues.contains(venue.code)] {
                                (venue.name)
                            }
                        }
                    }
                    button type="button" class=(clear)
                        onclick="document.getElementById('venues').selectedIndex = -1" {
                        "Limpiar"
                    }
                }
                label class="flex flex-col gap-1" {
                    "Canchas:"
                    select #courts name="selectedCanchas" multiple class=(input) {
                        @for court in COURTS {
                            option value=(court.name) selected[criteria.courts.contains(court.name)] {
                                (court.icon) " " (court.name)
                            }
                        }
                    }
                    button type="button" class=(clear)
                        onclick="document.getElementById('courts').selectedIndex = -1" {
                        "Limpiar"
                    }
                }
                div class="flex flex-row gap-3 items-center" {
                    (hour_select("startHour", "Desde", criteria.start_hour, &input))
                    (hour_select("endHour", "Hasta", criteria.end_hour, &input))
                }
                button #search-submit type="submit"
                    class={"px-4 py-2 rounded-md " (theme.primary().classes())} {
                    "Buscar"
                }
            }
        }
    }
}

fn hour_select(name: &str, label: &str, current: Option<u8>, class: &str) -> Markup {
    html! {
        label class="flex flex-col gap-1" {
            (label) ":"
            select name=(name) class=(class) {
                option value="" selected[current.is_none()] { "Cualquiera" }
                @for hour in HOURS {
                    option value=(hour) selected[current == Some(hour)] {
                        (format!("{hour:02}:00"))
                    }
                }
            }
        }
    }
}

impl Render for SearchPage<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="flex flex-col w-full" {
                (SearchForm { criteria: self.state.criteria() })
                p #loading class="htmx-indicator" { (LOADING_MESSAGE) }
                div #results {
                    (ResultsPanel { state: self.state })
                }
            }
        }
    }
}
