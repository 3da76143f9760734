//! Domain logic

pub mod filters;
