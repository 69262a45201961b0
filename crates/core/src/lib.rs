//! # Greeter Core
//!
//! A railway-style result convention and the welcome-greeting rules built
//! on top of it.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Outcome` or `Result` instead
//! - No `expect()` - returns `Outcome` or `Result` instead
//! - No `panic!()` - a panicking transform becomes a failure
//! - No `unsafe` - safe Rust only
//!
//! ## Outcomes
//!
//! Every fallible operation returns an [`Outcome`]:
//! - [`Maybe`] when the reason does not matter
//! - [`Either`] for one reason, first failure wins
//! - [`Validation`] to collect every reason
//!
//! Chain with `map` and `bind`, glue stages with [`kleisli`], and thread
//! plain values with [`pipe!`] and [`compose!`].
//!
//! ```
//! use greeter_core::{Outcome, validate_name, validate_name_all};
//!
//! let alice = validate_name("  alice  ").map(|name| format!("Welcome, {name}!"));
//! assert_eq!(alice, Outcome::success("Welcome, Alice!".to_owned()));
//!
//! assert_eq!(
//!     validate_name_all("").errors(),
//!     ["Name cannot be empty", "Name must be at least 2 characters"]
//! );
//! ```

pub mod batch;
pub mod compose;
pub mod config;
mod error;
pub mod fault;
pub mod features;
pub mod greeting;
pub mod name;
pub mod outcome;
mod result;
pub mod sanitize;
pub mod session;
pub mod validation;

pub use batch::{BatchReport, Rejection, welcome_batch};
pub use compose::{apply_all, compose, kleisli, pipe};
pub use config::{GreeterConfig, LogLevel};
pub use error::Error;
pub use fault::{Fault, Stage};
pub use features::FeatureFlags;
pub use greeting::{GreetingStyle, Language, StyleRegistry, TimeOfDay, welcome_message};
pub use name::{
    NameRules, RuleViolation, ValidatedName, title_case, validate_name, validate_name_all,
    validate_name_maybe,
};
pub use outcome::{Either, Maybe, Outcome, Validation, failure, fallback, success};
pub use result::{OptionExt, Result, ResultExt};
pub use session::Session;
pub use validation::ensure;

#[doc(hidden)]
pub mod __private {
    pub use tap::Pipe;
}
