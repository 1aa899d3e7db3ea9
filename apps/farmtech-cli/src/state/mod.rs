//! # State Module
//!
//! Application state for the menu binary.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                           Session                                │  │
//! │  │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐   │  │
//! │  │  │ RecordStore  │  │   ConfigState    │  │     Console      │   │  │
//! │  │  │ (owned, no   │  │  clear / pause   │  │  stdin + stdout  │   │  │
//! │  │  │  locking)    │  │  decimals, token │  │  prompts         │   │  │
//! │  │  └──────────────┘  └──────────────────┘  └──────────────────┘   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ConfigState is read-only after startup.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigState, MAX_DECIMALS};
pub use session::Session;
