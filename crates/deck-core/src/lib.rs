//! # deck-core
//!
//! Core types and the task view-model pipeline for taskdeck.
//!
//! - Entity structs for tasks, categories (task types), and projects
//! - Status and priority enums with their wire strings
//! - Time classification, filtering, sorting, section grouping, and stats
//! - Calendar layouts, date formatting, and status transitions
//! - Cross-cutting error types and CLI response types

pub mod calendar;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod format;
pub mod identity;
pub mod pipeline;
pub mod progress;
pub mod responses;
pub mod schedule;
pub mod sections;
pub mod sort;
pub mod stats;
pub mod transition;
pub mod validation;
