//! Direct train finder.
//!
//! Answers: "which trains run directly between these two stations, and
//! which are the best three by price, arrival time or departure time?"

pub mod cli;
pub mod data;
pub mod domain;
pub mod finder;
