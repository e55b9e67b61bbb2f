//! Shared UI crate for the Launchpad landing page: localization, widget
//! state machines and the Dioxus components that render them.

pub mod components;
pub mod config;
pub mod core;
pub mod i18n;
pub mod regions;
pub mod views;
pub mod widgets;
