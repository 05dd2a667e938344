//! # parlance-core
//!
//! Locale/intent-keyed registry of natural-language response templates.
//!
//! ## Usage
//!
//! ```rust
//! use parlance_core::{Intent, Locale, ResponseStore};
//!
//! let mut store = ResponseStore::new();
//! let (en, greet) = (Locale::from("en"), Intent::from("greet"));
//! store.add(&en, &greet, "(Hi|Hello) there");
//! if let Some(text) = store.run(&en, &greet) {
//!     assert!(text == "Hi there" || text == "Hello there");
//! }
//! ```

pub mod store;
pub mod types;

pub use store::ResponseStore;
pub use types::{Intent, Locale};
