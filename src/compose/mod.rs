//! Assembly of the final diagnostic from resolved fragments
//!
//! Body order is fixed: Pre, Generic, Post, joined by single spaces with
//! separators omitted next to empty fragments. The short label is kept out
//! of the body so callers can use it independently, e.g. for a summary
//! table.

use serde::Serialize;

use crate::catalog::loader::{self, Bundle};
use crate::catalog::{Context, FragmentKind, Variant};
use crate::codes::ErrorCode;
use crate::error::MessageError;
use crate::resolve::FragmentResolver;
use crate::template;

/// Separator placed between non-empty body fragments.
const SEPARATOR: &str = " ";

/// English bundles shipped with the crate, embedded at compile time.
/// Narrow (Level/Version) bundles precede the locale-wide ones so they win
/// within their specificity tier.
const BUNDLED_EN: [(&str, &str); 5] = [
    ("generic_l3v1.toml", include_str!("../../data/en/generic_l3v1.toml")),
    ("pre_l3v1.toml", include_str!("../../data/en/pre_l3v1.toml")),
    ("short.toml", include_str!("../../data/en/short.toml")),
    ("generic.toml", include_str!("../../data/en/generic.toml")),
    ("post.toml", include_str!("../../data/en/post.toml")),
];

/// A fully composed diagnostic with no remaining template syntax.
#[derive(Debug, Clone, Serialize)]
pub struct ComposedMessage {
    /// The error code, e.g. `CORE_20906`.
    pub code: String,
    /// One-line category label.
    pub short: String,
    /// The composed body: pre + generic + post.
    pub message: String,
}

/// Orchestrates resolution and formatting of all four fragment kinds.
///
/// Immutable after construction; a single composer can serve unsynchronized
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct MessageComposer {
    resolver: FragmentResolver,
}

impl MessageComposer {
    pub fn new(resolver: FragmentResolver) -> Self {
        Self { resolver }
    }

    /// Build a composer over the English catalogs bundled with the crate.
    pub fn english() -> Result<Self, MessageError> {
        Self::from_bundles(english_bundles()?)
    }

    /// Build a composer from parsed bundles. One of them must carry the
    /// universal default generic template.
    pub fn from_bundles(bundles: impl IntoIterator<Item = Bundle>) -> Result<Self, MessageError> {
        let resolver = FragmentResolver::builder().bundles(bundles).build()?;
        Ok(Self::new(resolver))
    }

    pub fn resolver(&self) -> &FragmentResolver {
        &self.resolver
    }

    /// Compose the diagnostic for `(code, variant)` under `ctx`.
    ///
    /// Every fragment is formatted with the same argument list; fragments
    /// are free to reference any subset of it. An index out of range in any
    /// referenced fragment fails the whole composition.
    pub fn compose<S: AsRef<str>>(
        &self,
        code: &ErrorCode,
        variant: Option<Variant>,
        ctx: &Context,
        args: &[S],
    ) -> Result<ComposedMessage, MessageError> {
        // The short label is variant-insensitive.
        let short = template::format(
            self.resolver.resolve(FragmentKind::Short, code, None, ctx),
            args,
        )?;
        let pre = template::format(
            self.resolver.resolve(FragmentKind::Pre, code, variant, ctx),
            args,
        )?;
        let generic = template::format(
            self.resolver.resolve(FragmentKind::Generic, code, variant, ctx),
            args,
        )?;
        let post = template::format(
            self.resolver.resolve(FragmentKind::Post, code, variant, ctx),
            args,
        )?;

        let mut message = String::with_capacity(pre.len() + generic.len() + post.len() + 2);
        for part in [pre.as_str(), generic.as_str(), post.as_str()] {
            if part.is_empty() {
                continue;
            }
            if !message.is_empty() {
                message.push_str(SEPARATOR);
            }
            message.push_str(part);
        }

        Ok(ComposedMessage {
            code: code.to_string(),
            short,
            message,
        })
    }

    /// The short category label alone, for tabular display.
    pub fn short_label(&self, code: &ErrorCode, ctx: &Context) -> Result<String, MessageError> {
        let template = self.resolver.resolve(FragmentKind::Short, code, None, ctx);
        template::format(template, &[] as &[&str])
    }
}

/// Parse the embedded English bundles.
pub fn english_bundles() -> Result<Vec<Bundle>, MessageError> {
    let mut bundles = Vec::with_capacity(BUNDLED_EN.len());
    for (name, text) in BUNDLED_EN {
        bundles.push(loader::parse_bundle(name, text)?);
    }
    Ok(bundles)
}
