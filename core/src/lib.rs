//! Slide deck state machines and the outline generator seam.

pub mod client;
pub mod config;
pub mod deck;
pub mod editor;
pub mod error;
pub mod keymap;
pub mod layout;
pub mod presentation;

pub use client::{generator_from_config, OutlineGenerator, SharedGenerator, StubGenerator};
pub use config::Config;
pub use deck::Deck;
pub use editor::Editor;
