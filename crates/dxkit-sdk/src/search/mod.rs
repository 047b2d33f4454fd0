//! Find queries against the four search endpoints.

mod builder;
mod cursor;
mod fields;
mod filter;

pub use builder::QueryBuilder;
pub use cursor::PageCursor;
pub use fields::{Fallback, FieldRule, SearchKind, Transform};
pub use filter::{AppFilter, DataObjectFilter, JobFilter, Params, ProjectFilter, SearchFilter};
