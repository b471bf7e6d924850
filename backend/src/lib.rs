//! # Cleandash Rust Backend
//!
//! Core logic for a cleaning-service operations dashboard.
//!
//! This crate holds the record model, the in-memory record store and the
//! computations behind each dashboard screen: job filtering, job metrics,
//! calendar grouping and record intake. Rendering and network I/O live
//! outside the crate; everything here returns plain serialisable values.
//!
//! ## Features
//!
//! - **Filtering**: Cleaner, status and date-range criteria combined with AND
//! - **Metrics**: Completion rate, average rating, spend and active workers
//! - **Intake**: Dialog drafts validated into new jobs, cleaners and clients
//! - **Calendar**: Day and week views with Monday-start weeks
//! - **Seed Data**: JSON seed loading with id and rating validation
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Re-exported DTO types handed to the renderer
//! - [`config`]: `dashboard.toml` loading
//! - [`db`]: Record store trait, local repository and factory
//! - [`models`]: Jobs, cleaners, clients, notifications and seed data
//! - [`services`]: Filter, metrics, calendar, intake and notification logic
//! - [`screens`]: Per-screen view state built on the services
//!

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;

pub mod db;
pub mod models;

pub mod screens;

pub mod services;
