pub(crate) mod api;
pub(crate) mod components;

pub mod app;
