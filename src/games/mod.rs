//! Game implementations.

pub mod chess;
