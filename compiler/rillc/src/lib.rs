//! Library surface of the Rill command-line driver.
//!
//! The `rill` binary is a thin argument dispatcher over
//! [`commands`]; keeping the command implementations in the library
//! lets tests drive them against in-memory readers and writers.

pub mod commands;
