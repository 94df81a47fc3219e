//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, scroll and form
//!   focus, intersection-sample delivery
//! - **[`sections`]** — per-section render functions plus the navigation
//!   and status bars
//! - **[`effects`]** — entrance-transition styling applied to revealed
//!   sections
//! - **[`theme`]** — centralized color palette used everywhere
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`AppConfig`] and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod effects;
pub mod form;
pub mod sections;
pub mod theme;

pub use app::{App, AppConfig};
