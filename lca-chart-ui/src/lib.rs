//! Shared Dioxus components and D3.js bridge for the LCA dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `request`: Tickets for dropping replies to superseded fetches
//! - `components`: Reusable RSX components (selectors, containers, messages)

pub mod components;
pub mod js_bridge;
pub mod request;
pub mod state;
