//! Court availability search: form criteria in, slot cards out.

pub mod catalog;
mod client;
mod criteria;
mod error;
mod feature;
pub mod render;
mod request;
mod slot;
mod state;

pub use client::{HttpSearchClient, SlotSource};
pub use criteria::{FieldEdit, SearchCriteria};
pub use error::{SearchError, ValidationError};
pub use feature::{run_search, CourtSearchFeature};
pub use request::{day_count, SearchRequest};
pub use slot::AvailabilitySlot;
pub use state::{Action, Phase, SearchState};
