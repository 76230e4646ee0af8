// UI Components
mod button;
mod spinner;
mod text_input;

// Re-export components for easier access
pub use button::Button;
pub use spinner::Spinner;
pub use text_input::TextInput;
