//! Core types for the lingualog project.
//!
//! This crate defines the shared translation-record schema and the storage
//! seam (`TranslationRepository`) that concrete backends implement. It has
//! no knowledge of any particular store.

pub mod storage;
pub mod translation;
