pub mod error;
pub mod series;
pub mod store;
pub mod table;
pub mod tenor;
