//! Data models for the casebridge connector

pub mod candidate;
pub mod filter;
pub mod remote;

pub use candidate::CandidateRecord;
pub use filter::{Filter, FilterKind, FilterSelection, FilterValue};
pub use remote::{ListViewDescribe, ListViewRecord, QueryResult, RawAttributes, RawCaseRecord};
