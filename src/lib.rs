//! drive-sync: command-line front end for a directory synchronization engine.
//!
//! Turns the process arguments into validated [`config::SyncOptions`].

pub mod config;
