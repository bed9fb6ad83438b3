//! A two-panel terminal front end over a read-only books/authors API.

pub mod client;
pub mod config;
pub mod controllers;
pub mod datamodel;
pub mod error;
pub mod ui;
pub mod view_state;

#[cfg(test)]
mod tests;
