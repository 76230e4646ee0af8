// UI crate for solcheck
//
// This crate is organized into several modules:
// - app: Contains the App state, key handling and the TUI entry point
// - models: Contains the result-region state and the input/result capabilities
// - components: Contains reusable UI elements
// - handlers: Contains the input controller and command-line handlers
// - scheduler: Contains the cancelable deferred validation task
// - views: Contains UI rendering code

pub mod app;
pub mod components;
pub mod handlers;
pub mod models;
pub mod scheduler;
pub mod views;

// Re-export main entry points
pub use app::run_solcheck_tui;
pub use handlers::address::{copy_address, print_samples, read_candidates, validate_addresses};
pub use scheduler::DEFAULT_VALIDATION_DELAY;
