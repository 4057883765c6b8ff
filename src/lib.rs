//! # Live State
//!
//! > **Mirror a view-model's fields into a host's observable state.**
//!
//! This crate lets an imperative view-model keep its own copy of a few state slots while
//! every write is pushed, as a partial update, into the state container of the component
//! that hosts it. Rendering code reads the host's state; business logic talks to the
//! view-model.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Descriptors, not strings
//!
//! Each slot is described by a [`LiveData<T>`](framework::LiveData): a unique key minted by
//! the crate, a default value and an optional debug label. Keys can't be forged or built
//! from text, so two view-models authored independently never collide inside one host.
//!
//! ### One capability from the host
//!
//! A host only has to implement [`StateHost`](framework::StateHost): merge a partial
//! key → value update. Anything can be a host, from a no-op test double to the
//! actor-backed [`StateHandle`](store::StateHandle).
//!
//! ### Tolerant by default
//!
//! Entries without a key are skipped during initialization. Labels that aren't text
//! become empty. Reading a slot that was never written yields `None`. The only errors a
//! view-model returns are the host's own.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Descriptors, the host seam and the [`ViewModel`](framework::ViewModel) base.
//! - **Testing**: [`framework::mock`] has a no-op host and a recording host.
//!
//! ### 2. The Container ([`store`])
//! - **Role**: An observable state container running in its own Tokio task. Writes are
//!   queued and applied in order; readers can snapshot or subscribe to changes.
//!
//! ### 3. The Implementation ([`form_view_model`])
//! - **Role**: A concrete view-model built on the base, with module-scope descriptors.
//!
//! ### 4. The Orchestrator ([`runtime`])
//! - **Role**: Spawns the store, binds the form to it, sets up tracing.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Every set and merge
//! RUST_LOG=debug cargo run
//! ```

pub mod form_view_model;
pub mod framework;
pub mod runtime;
pub mod store;
