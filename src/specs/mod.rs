// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows how to read one page of the wiki: which elements carry the
//! data, and how to turn their attributes into domain types.
//!
//! ## What lives here
//! - Tag predicates for the page (`is_set_heading`, `is_gallery_img`, …) built
//!   from the generic helpers in `core::html`.
//! - Parsing into [`crate::emotes::EmoteSet`]s.
//! - Fetching the page itself, since each page module decides what "the page" is.
//!
//! ## What does not live here
//! - Downloading or converting images (`download`, `sticker`).
//! - Scheduling (`runner`, `pool`).
//!
//! ## Conventions
//! - Predicates match on attributes, not on position in the document; the wiki
//!   reshuffles layout more often than it renames attributes.
//! - The caption heuristic (gallery entries carry `data-caption`, set previews
//!   do not) is tied to the wiki's current markup. If the parse suddenly finds
//!   zero emotes, check that first.
//! - Specs must be testable offline against inline or saved markup.
pub mod gallery;
