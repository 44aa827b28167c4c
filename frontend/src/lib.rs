//! OrbitX Music - Frontend Rust/Leptos Application
//!
//! A WebAssembly client for the OrbitX artist dashboard: a public landing
//! page, a simulated sign-in, and the distribution workspace.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  AppServices (context)                                       │
//! │  ├── GeminiClient        AI gateway                          │
//! │  ├── BrowserClock        simulated delays                    │
//! │  └── ProviderStore       localStorage + connected signal     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (Shell)                                         │
//! │  ├── Landing  or  Dashboard (sidebar, header, active tab)    │
//! │  └── AuthModal (when open)                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Shared handles and errors
//! - [`components`] - UI components (Landing, Dashboard, tabs)
//! - [`services`] - Browser implementations of the core seams

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use orbitx::{ProviderStore, Shell, View};
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, AppServices, SharedStore};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

/// Build the shared handles and keep `connected` in step with the store.
fn create_services() -> AppServices {
    let store = Rc::new(ProviderStore::load(LocalStorage));
    let connected = create_rw_signal(store.connected());
    store.subscribe(move |providers| connected.set(providers.clone()));

    log::info!("🔗 {} provider(s) linked", store.connected().len());

    AppServices {
        gateway: Rc::new(gemini_client()),
        clock: BrowserClock,
        store,
        connected,
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(create_services());

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let shell = create_rw_signal(Shell::new());
    let current = create_memo(move |_| shell.with(|s| s.view));

    let on_enter_dashboard = move |_: ()| shell.update(Shell::enter_dashboard);
    let on_start_distributing = move |_: ()| shell.update(Shell::start_distributing);
    let on_logout = move |_: ()| shell.update(Shell::logout);

    view! {
        {move || match current.get() {
            View::Landing => view! {
                <Landing on_enter_dashboard=on_enter_dashboard on_start_distributing=on_start_distributing/>
            }
            .into_view(),
            View::Dashboard => view! { <Dashboard on_logout=on_logout/> }.into_view(),
        }}

        <Show when=move || shell.with(|s| s.modal_open) fallback=|| view! { }>
            <AuthModal shell=shell/>
        </Show>
    }
}
