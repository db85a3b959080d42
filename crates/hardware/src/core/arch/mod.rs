//! Architectural state components.
//!
//! This module contains the architecturally visible storage of the LS-8 core.
//! Currently that is the general-purpose register file; memory lives in
//! [`soc::memory`](crate::soc::memory).

/// General-Purpose Register file implementation.
pub mod gpr;
