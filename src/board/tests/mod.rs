//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `make_unmake.rs` - Apply/undo round trips
//! - `checks.rs` - Check, double check and pin handling
//! - `edge_cases.rs` - Castling, en passant and terminal positions
//! - `search.rs` - Negamax/alpha-beta behaviour
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod make_unmake;
