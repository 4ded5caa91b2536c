//! # IO Module
//!
//! Provides the interface layer between clients and the domain logic.
//!
//! This module translates HTTP requests into domain operations and formats
//! domain responses for consumption over the wire. It owns the communication
//! protocol (REST API) and keeps the boundary between transport and business
//! logic.

pub mod rest;

pub use rest::*;
