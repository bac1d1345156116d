//! CivicWatch core: the issue collection, its mutation contract, and the
//! prompt gateway that forwards report text to a generative model.
//!
//! The library owns everything with behavior; the `civicwatch` binary is a
//! thin consumer that maps one subcommand to each page of the original
//! reporting flow.

pub mod gateway;
pub mod models;
pub mod repo;
pub mod seed;
pub mod store;
pub mod validate;
