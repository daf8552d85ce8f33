//! Backend services

pub mod api;
