//! Shared Dioxus components and D3.js bridge for the launch dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js pie and scatter charts via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (site dropdown, payload slider, containers)

pub mod js_bridge;
pub mod state;
pub mod components;
