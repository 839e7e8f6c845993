//! Workflow activity exposing zipguard extraction.
//!
//! A workflow engine hands the activity an untyped JSON object with an
//! `action`, a `sourceFile` and a `targetDirectory`. This crate turns that
//! object into a typed [`ActivityInput`] once, dispatches on the closed
//! [`Action`] enum, and reports the outcome as `{"result": ...}`:
//!
//! | Outcome | `result` |
//! |---------|----------|
//! | extraction succeeded | `"OK"` |
//! | action not supported | `"NOK"` |
//! | extraction failed | the error message |
//!
//! # Examples
//!
//! ```no_run
//! use serde_json::json;
//! use zipguard_activity::Activity;
//! use zipguard_activity::ActivityOutput;
//!
//! let activity = Activity::default();
//! let outcome = activity.eval_json(json!({
//!     "action": "unzip",
//!     "sourceFile": "bundle.zip",
//!     "targetDirectory": "/tmp/out",
//! }));
//! let output = ActivityOutput::from_outcome(&outcome);
//! println!("{}", output.result);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod activity;
mod config;
mod error;

pub use action::Action;
pub use action::UnsupportedAction;
pub use activity::Activity;
pub use activity::ActivityOutput;
pub use activity::RESULT_NOK;
pub use activity::RESULT_OK;
pub use config::ActivityInput;
pub use error::ActivityError;
pub use error::Result;
