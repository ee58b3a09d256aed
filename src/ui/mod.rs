//! UI rendering module for the Little Lemon client
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components.

pub mod help_overlay;
pub mod menu_list;
pub mod onboarding_view;
pub mod profile_view;

pub use help_overlay::render as render_help_overlay;
pub use menu_list::render_menu_list;
pub use onboarding_view::render as render_onboarding;
pub use profile_view::render as render_profile;
