//! Driven adapters reaching out of the hexagon.

pub mod persistence;
