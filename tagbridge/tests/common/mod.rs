// Shared helpers for integration tests. Each test module pulls this in
// with `#[path]`, so not every item is used everywhere.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
