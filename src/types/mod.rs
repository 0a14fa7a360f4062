pub mod observation;
pub mod schema;
pub mod verdict;
