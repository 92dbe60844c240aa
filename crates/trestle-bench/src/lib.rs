//! Benchmarks for the Trestle building-placement framework.
//!
//! This crate exists for its `benches/` directory; run with
//! `cargo bench -p trestle-bench`. Inputs are precomputed and
//! deterministic so runs are comparable across machines.
