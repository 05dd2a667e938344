//! # parlance-renderer
//!
//! Alternation-pattern renderer: expands `(opt1|opt2)` groups embedded in
//! response templates into one concrete string, with one uniform random
//! choice per group.
//!
//! ## Usage
//!
//! ```rust
//! use parlance_renderer::render;
//!
//! let text = render("(Hi|Hello) there");
//! assert!(text == "Hi there" || text == "Hello there");
//! ```

pub mod error;
pub mod render;
pub mod rng;

pub use error::TemplateError;
pub use render::{check_template, render, render_with};
pub use rng::{RandomSource, ScriptedRandom, ThreadRandom};
