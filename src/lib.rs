//! # Order Desk
//!
//! > **Menu, pending orders and completed orders for a single restaurant counter.**
//!
//! This crate keeps three containers for the lifetime of the process:
//!
//! - a **catalog** of menu items (a growable array, looked up by id),
//! - a **pending queue** of accepted orders (first in, first out),
//! - a **completed history** of processed orders (last in, first out, summed for revenue).
//!
//! The menu is read from a flat text file at startup and written back at shutdown.
//! Completed orders can be exported to a dated text file at any time.
//!
//! ## 🏗️ Design Notes
//!
//! ### 1. Generic engine, domain wrappers
//! The container mechanics (doubling growth, linked FIFO, linked LIFO) are written once in
//! [`framework`], against the [`Entity`](framework::Entity) trait. The domain modules wrap
//! them with the restaurant semantics: dequeuing completes an order, the history sums
//! revenue, the catalog reads and writes `menu.txt`.
//!
//! ### 2. Soft failures vs. contract violations
//! Lookups that can miss return `Option`. Removals, empty-container access and file I/O
//! return a `Result` with a per-module error type (`CatalogError`, `OrderError`,
//! `HistoryError`) and emit a `tracing` event. Reading past the end of an order's item list
//! is a programming error and panics.
//!
//! ### 3. Normalization at one boundary
//! Negative ids and non-positive prices are never rejected; they are clamped to safe values.
//! All of those rules live in [`model::normalize`].
//!
//! ### 4. Swappable file formats
//! Containers hand records to a [`RecordEncoder`](framework::RecordEncoder) /
//! [`RecordDecoder`](framework::RecordDecoder). The default catalog codec is the historical
//! comma-separated layout; [`MenuJsonLines`](catalog::MenuJsonLines) shows the same catalog
//! written as JSON lines.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Key items**: [`GrowableBuffer`](framework::GrowableBuffer),
//!   [`LinkedQueue`](framework::LinkedQueue), [`LinkedStack`](framework::LinkedStack).
//!
//! ### 2. The Values ([`model`])
//! - **Key items**: [`MenuItem`](model::MenuItem), [`Order`](model::Order),
//!   [`OrderStatus`](model::OrderStatus).
//!
//! ### 3. The Containers ([`catalog`], [`order_queue`], [`order_history`])
//! - **Key items**: [`Catalog`](catalog::Catalog), [`PendingQueue`](order_queue::PendingQueue),
//!   [`CompletedHistory`](order_history::CompletedHistory).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Owns the three containers, assigns ids, moves orders between them, loads and
//!   saves files.
//! - **Key items**: [`OrderSystem`](lifecycle::OrderSystem), [`SystemConfig`](lifecycle::SystemConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Interactive console, warnings on stderr
//! RUST_LOG=warn cargo run
//!
//! # Point at a different menu file
//! ORDER_DESK_MENU_FILE=/tmp/menu.txt cargo run
//! ```

pub mod catalog;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_history;
pub mod order_queue;
