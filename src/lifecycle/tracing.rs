//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the order desk.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Every container operation runs inside a span named after the operation, so a single
//! action in the console shows up as one short chain of events.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable (errors only when unset)
//! - **Compact format** with module paths hidden (`with_target(false)`)
//! - **stderr output** so log lines never interleave with the console menu on stdout
//!
//! ## Usage Examples
//!
//! ```bash
//! # Warnings such as "Queue is empty" or skipped menu records
//! RUST_LOG=warn cargo run
//!
//! # Every add/delete/enqueue/dequeue with sizes and capacities
//! RUST_LOG=info cargo run
//!
//! # Full payloads at function entry
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! Placing and processing one order with `RUST_LOG=info`:
//!
//! ```text
//! INFO place_order:enqueue: Enqueued order_id=1
//! INFO place_order: Order placed order_id=1 items=2
//! INFO process_next_order:dequeue: Dequeued order_id=1
//! INFO process_next_order:push: Pushed order_id=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
