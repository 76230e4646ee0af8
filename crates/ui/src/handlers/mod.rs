// Handlers for user actions, interactive and command-line
pub mod address;
pub mod controller;
