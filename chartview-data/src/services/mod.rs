//! Transport clients for the two upstream services

pub mod catalog_client;
pub mod lra_client;

pub use catalog_client::{CatalogClient, MediaRecord, RankRecord};
pub use lra_client::{Binding, LraClient, QueryResponse, QueryTable};
