pub mod describe;
pub mod link;
pub mod page;
pub mod query;
pub mod spec;
mod time;

pub use describe::Describe;
pub use link::{LINK_KEY, Link, is_link, object_class};
pub use page::FindPage;
pub use query::Query;
pub use spec::InputSpecEntry;
pub use time::resolve_timestamp;
