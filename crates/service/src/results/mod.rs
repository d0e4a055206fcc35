//! Result store: existence check, submission, and per-user listing.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{ResultSummary, SubmitInput};
pub use repository::{ResultRepository, SeaOrmResultRepository};
pub use service::ResultService;
