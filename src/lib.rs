//! brugen Core Library
//!
//! This library provides the core functionality for generating Bruno
//! API-client collections from a web application's route table.

pub mod bru;
pub mod config;
pub mod error;
pub mod generation;
pub mod prompt;
pub mod routes;
pub mod utils;

pub use crate::{
    bru::{BruFile, Collection, TagRegistry},
    config::Config,
    error::{Error, Result},
    generation::Generator,
    routes::RouteTable,
};
