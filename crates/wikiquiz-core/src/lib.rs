//! # wikiquiz-core
//!
//! Core types, URL validation, scoring, and error types for wikiquiz.
//!
//! This crate provides the foundational types shared across all wikiquiz crates:
//! - Entity structs for quizzes, questions, and history rows
//! - Observable state enums for generation, history polling, and detail views
//! - The Wikipedia URL validator
//! - The scoring engine (selections, scores, per-question review)
//! - Cross-cutting error types and the user-facing failure taxonomy
//! - Wire envelopes for the quiz backend's JSON API
//! - Lenient timestamp adapters for chrono types

pub mod entities;
pub mod errors;
pub mod responses;
pub mod scoring;
pub mod state;
pub mod timestamp;
pub mod validation;
