//! core
//!
//! Core domain types and configuration for Rollbook.
//!
//! # Modules
//!
//! - [`types`] - Strong types: ids, non-blank strings, week durations
//! - [`student`] - The student entity
//! - [`course`] - The course entity and its roster
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Validation happens at construction and in every setter
//! - Identity is the id; equality and hashing ignore every other field
//! - Entities do no I/O and know nothing about stores

pub mod config;
pub mod course;
pub mod student;
pub mod types;
