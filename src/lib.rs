pub mod categories;
pub mod cleaning;
pub mod corpus;
pub mod download;
pub mod error;
pub mod pdf;
