//! Async source retrieval
//! Fetches the exports of a snapshot before the synchronous pipeline runs

pub mod loader;

pub use loader::*;
