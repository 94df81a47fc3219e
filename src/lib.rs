//! # Introduction
//!
//! folioterm renders a single-page personal portfolio in the terminal: one
//! tall virtual page of stacked sections, scrolled with the keyboard and
//! drawn with [ratatui](https://docs.rs/ratatui).  Each section is revealed
//! by a one-way latch the first time enough of it scrolls into the
//! viewport, then slides and fades into place.
//!
//! ## Frame pipeline
//!
//! ```text
//! Content → Section lines → Page layout → Intersection samples → Latches → Draw
//! ```
//!
//! 1. [`content`] — the build-time content tables (profile, education,
//!    experience, skills, certificates, competencies, projects).
//! 2. [`page`] — the virtual page: section order, heights, clamped scroll,
//!    and per-section intersection ratios.
//! 3. [`reveal`] — one-way visibility latches fed by intersection samples;
//!    subscriptions release on drop.
//! 4. [`backdrop`] — the decorative particle field behind the hero.
//! 5. [`launch`] — outbound platform delegation: profile links, the
//!    pre-filled `mailto:` composer, and the resume export.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Interactions
//!
//! Scrolling: arrows, PgUp/PgDn, Space, Home/End, `1`–`9` section jumps.
//! Quick links: `g` GitHub, `l` LinkedIn, `m` email, `r` resume export.
//! The contact form is entered with Enter while the contact section is on
//! screen, and submits through the platform mail composer.

pub mod backdrop;
pub mod content;
pub mod launch;
pub mod page;
pub mod reveal;
pub mod ui;
