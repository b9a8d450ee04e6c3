// ABOUTME: Library crate for slide-picker exposing the wizard, catalogs and UI for testing and the binary

#![allow(missing_docs)]

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod export;
pub mod models;
pub mod upload;
