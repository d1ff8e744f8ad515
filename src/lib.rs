//! Diagnostic message resolution for SBML validation errors.
//!
//! Given a validation error code, an optional phrasing variant, a target
//! locale and SBML Level/Version, and a list of positional arguments, this
//! crate resolves four message fragments (short label, pre disclaimer,
//! generic rule text, post detail) through a most-specific-first fallback
//! chain and composes them into one human-readable diagnostic.

pub mod catalog;
pub mod cli;
pub mod codes;
pub mod compose;
pub mod error;
pub mod resolve;
pub mod template;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{
        Context, FragmentKind, FragmentStore, LevelVersion, MessageKey, Scope, Variant,
    };
    pub use crate::codes::ErrorCode;
    pub use crate::compose::{ComposedMessage, MessageComposer};
    pub use crate::error::MessageError;
    pub use crate::resolve::FragmentResolver;
}
