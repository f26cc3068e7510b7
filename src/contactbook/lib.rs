//! # Contactbook Architecture
//!
//! Contactbook is an address book library with a small interactive shell on top.
//! The library keeps contacts, each a name with zero or more ten-digit phone
//! numbers, and persists them to a plain text file between sessions.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Reads lines from stdin, prints results and errors        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Tokenizes a line, checks argument counts                 │
//! │  - Dispatch table: keyword → handler                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + Commands (commands/*.rs)                    │
//! │  - One pure function per command, returns CmdResult         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: model.rs (Name, PhoneNumber, Record), book.rs        │
//! │  Storage: store/ (BookStore, FileStore, InMemoryStore)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the core
//!
//! `model` and `book` never print or log. Every operation returns
//! `Result<T, ContactsError>` and leaves its target unchanged on failure.
//!
//! ## Module Overview
//!
//! - [`model`]: `Name`, `PhoneNumber` and `Record`
//! - [`book`]: `AddressBook`, the ordered, name-unique collection
//! - [`store`]: persistence trait, flat-file codec and stores
//! - [`commands`]: business logic for each shell command
//! - [`api`]: the facade a UI talks to
//! - [`session`]: line parsing and command dispatch
//! - [`config`]: configuration file
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
