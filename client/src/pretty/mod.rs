//! Helpers for pretty-printing failed wish list transactions in a readable, colorized format.

pub mod instruction_error;
