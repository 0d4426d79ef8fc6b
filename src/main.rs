//! Estoque Dashboard
//!
//! Inventory analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - ABC curve, profit and stock stat cards
//! - Canvas charts (curve distribution, top products, monthly evolution)
//! - Product table with client-side filter, search and sort
//! - 30s auto-refresh plus an optional live product feed
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All business metrics are computed by the backend; this client
//! fetches JSON over HTTP and projects it into views.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
