//! Journal thought-loop detection.
//!
//! Entries are reduced to topic keys, each entry's sentiment is attributed to
//! its topics, and the first topic that recurs with a low enough mean becomes
//! the detected loop. A single reflective suggestion is then produced from
//! redacted features by the first strategy that succeeds.

pub mod analysis;
pub mod clients;
pub mod compose;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod http;
pub mod nlp;
pub mod service;
pub mod suggest;

pub use analysis::Entry;
pub use compose::LoopResponse;
pub use config::Config;
pub use error::{Result, ThoughtLoopsError};
pub use service::{LoopRequest, ThoughtLoopService};
