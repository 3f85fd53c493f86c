//! Homebase Console UI Library
//!
//! This crate provides the browser console for managing a tenant's managed
//! telegraf inputs: regional inputs that run in one region and assigned
//! inputs that run on agents carrying matching tags.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`client`]: Config API gateway and its transports
//! - [`components`]: Pages, dialogs and overlays
//! - [`config`]: Client settings
//! - [`controller`]: Add dialog state and list orchestration
//! - [`state`]: Session, notifications and shared app state

pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod controller;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use app::App;
