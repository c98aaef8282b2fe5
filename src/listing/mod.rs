//! Item listing: query state, filter drafting, fetch dispatch and presentation.

pub mod dispatcher;
pub mod draft;
pub mod model;
pub mod navigation;
pub mod presenter;
pub mod query;
pub mod request;

pub use dispatcher::{ApplyOutcome, FetchDispatcher, FetchFailure, FetchTicket, Page, execute};
pub use draft::{DraftField, FieldError, FilterDraft, FilterPanel};
pub use model::{FilterEdit, ListEvent, ListState};
pub use navigation::{NavigationPayload, interpret};
pub use presenter::{Pagination, SortOption, ViewMode, present};
pub use query::{FilterFields, ListQuery, Mode, RadiusBand};
pub use request::{FetchRequest, Refinements};
