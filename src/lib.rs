// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod model;
pub mod types;

pub mod catalog;
pub mod export;
pub mod fetch;
pub mod gui;
pub mod net;
pub mod roster;
pub mod session;
pub mod stats;
pub mod store;
