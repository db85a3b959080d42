//! # Unit Components
//!
//! This module serves as the central hub for the component tests, organized
//! to mirror the crate layout.
