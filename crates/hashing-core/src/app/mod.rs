//! Application layer - Use case implementations
//!
//! This module pairs problem inputs with the domain routines and runs batches
//! of sample cases.

pub mod cases;
pub mod problem;
pub mod runner;
