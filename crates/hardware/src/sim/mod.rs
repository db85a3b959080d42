//! Simulation utilities and program loading.
//!
//! Provides the text program loader and the `Simulator` wrapper that
//! pairs a CPU with its output sink.

pub mod loader;

pub mod simulator;

pub use simulator::Simulator;
