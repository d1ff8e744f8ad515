//! Error taxonomy for template formatting and catalog loading
//!
//! Missing optional fragments are not errors anywhere in this crate; they
//! resolve to the empty string. The variants below cover template authoring
//! bugs (caught per call) and malformed catalog data (caught at startup).

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{FragmentKind, MessageKey};

/// Errors surfaced by the formatter, the bundle loader, and the composer.
#[derive(Debug, Error)]
pub enum MessageError {
    /// A template references a positional index beyond the supplied
    /// argument list.
    #[error("template references argument {{{index}}} but only {supplied} argument(s) were supplied")]
    MissingArgument { index: usize, supplied: usize },

    /// Two templates were registered under the same key in one store.
    #[error("duplicate template for '{key}' in a {kind} bundle")]
    DuplicateKey { kind: FragmentKind, key: MessageKey },

    /// No universal default generic template is available, so the "always
    /// produce a body" guarantee cannot be honored.
    #[error("no universal default template registered for the generic bundle")]
    UnresolvedGeneric,

    /// An error code string did not parse as `NAMESPACE_NNNNN`.
    #[error("invalid error code '{0}'")]
    InvalidCode(String),

    /// An unrecognized variant tag or key suffix.
    #[error("unknown variant '{0}'")]
    InvalidVariant(String),

    /// A bundle declared a kind other than short/pre/generic/post.
    #[error("unknown fragment kind '{0}'")]
    InvalidKind(String),

    /// A bundle declared `level` without `version`, or vice versa.
    #[error("bundle '{name}' must declare 'level' and 'version' together")]
    BundleScope { name: String },

    /// Only generic bundles may carry the universal default template.
    #[error("bundle '{name}' declares a default template but its kind is '{kind}', not 'generic'")]
    DefaultOnNonGeneric { name: String, kind: FragmentKind },

    /// A bundle file or directory could not be read.
    #[error("failed to read bundle path '{}'", path.display())]
    BundleIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A bundle file is not valid TOML or has the wrong shape.
    #[error("failed to parse bundle '{name}'")]
    BundleParse {
        name: String,
        #[source]
        source: toml::de::Error,
    },
}
