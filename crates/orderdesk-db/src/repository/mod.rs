//! # Repository Module
//!
//! Entity repositories over the generic record mapper.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Each repository fixes the statement text and the Record mapping for   │
//! │  exactly one record type and forwards execution to Mapper<T>.          │
//! │                                                                         │
//! │  Presentation call                                                     │
//! │       │                                                                 │
//! │       │  db.clients().find_all()                                       │
//! │       ▼                                                                 │
//! │  ClientRepository ──► Mapper<Client> ──► SQLite                        │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place per entity                             │
//! │  • The generic statements are written once, in the mapper              │
//! │  • Repositories own no shared mutable cache; the store is the          │
//! │    single source of truth                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`client::ClientRepository`] - Client CRUD
//! - [`product::ProductRepository`] - Product CRUD plus the stock update
//! - [`order::OrderRepository`] - Order CRUD (delete never touches stock)

pub mod client;
pub mod order;
pub mod product;
