mod fetch_controller;
mod fetcher_rest;

pub use fetch_controller::*;
pub use fetcher_rest::*;
