//! Stockroom inventory and sales domain, persistence and analysis delegate.

pub mod analysis;
pub mod context;
pub mod database;
pub mod domain;
pub mod timestamps;

#[cfg(test)]
mod test;

mod ids;

pub use ids::TypedId;
