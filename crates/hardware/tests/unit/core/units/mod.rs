//! # Execution Units
