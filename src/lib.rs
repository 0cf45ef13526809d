//! Stop Dither - Small-Purchase Decision Assistant
//!
//! A three-step wizard (input, commitment, result) that turns an item, its
//! price, a motive and a yes/no commitment answer into a fixed verdict.
//! Amounts above the small-amount limit never receive a plain "buy it".

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
