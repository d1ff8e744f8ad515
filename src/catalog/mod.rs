//! Immutable fragment stores and the message catalog data model
//!
//! A diagnostic is assembled from four fragment kinds, each held in one or
//! more stores. A store covers one (kind, locale, Level/Version) cell and
//! is populated once at startup; after construction all types here are
//! read-only and safe to share across threads.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::codes::ErrorCode;
use crate::error::MessageError;

pub mod loader;

/// The four fragment kinds a diagnostic is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// One-line category label, variant-insensitive.
    Short,
    /// Optional disclaimer prepended to the body. Populated only for codes
    /// whose semantics differ across SBML Levels/Versions.
    Pre,
    /// The canonical rule text. Always resolvable.
    Generic,
    /// The detailed, parameterized explanation appended after the rule
    /// text. Empty for categories that defer entirely to the rule text.
    Post,
}

impl FragmentKind {
    pub const ALL: [FragmentKind; 4] = [Self::Short, Self::Pre, Self::Generic, Self::Post];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Pre => "pre",
            Self::Generic => "generic",
            Self::Post => "post",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FragmentKind {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "pre" => Ok(Self::Pre),
            "generic" => Ok(Self::Generic),
            "post" => Ok(Self::Post),
            _ => Err(MessageError::InvalidKind(s.to_string())),
        }
    }
}

/// Phrasing variant attached to a code when the generic wording is not
/// specific enough for the exact offending construct.
///
/// Variants appear in bundle keys as suffixes (`CORE_10311_MATH`). Lookup
/// always tries the variant key first and falls back to the plain key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// The construct refers to itself (`_SELF`).
    SelfRef,
    /// The offence runs through a chain of compartments (`_COMP`).
    Comp,
    /// The offence sits inside MathML content (`_MATH`).
    Math,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Self::SelfRef, Self::Comp, Self::Math];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SelfRef => "SELF",
            Self::Comp => "COMP",
            Self::Math => "MATH",
        }
    }

    /// The key suffix used in bundle files, e.g. `_SELF`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::SelfRef => "_SELF",
            Self::Comp => "_COMP",
            Self::Math => "_MATH",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.strip_prefix('_').unwrap_or(s);
        match tag.to_ascii_uppercase().as_str() {
            "SELF" => Ok(Self::SelfRef),
            "COMP" => Ok(Self::Comp),
            "MATH" => Ok(Self::Math),
            _ => Err(MessageError::InvalidVariant(s.to_string())),
        }
    }
}

/// The (code, variant) pair a template is registered under. Absence of a
/// variant is the default key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageKey {
    pub code: ErrorCode,
    pub variant: Option<Variant>,
}

impl MessageKey {
    pub fn new(code: ErrorCode, variant: Option<Variant>) -> Self {
        Self { code, variant }
    }

    pub fn plain(code: ErrorCode) -> Self {
        Self::new(code, None)
    }

    /// Parse a bundle key such as `CORE_20906` or `CORE_10311_MATH`.
    pub fn parse(raw: &str) -> Result<Self, MessageError> {
        for variant in Variant::ALL {
            if let Some(stem) = raw.strip_suffix(variant.suffix()) {
                return Ok(Self::new(stem.parse()?, Some(variant)));
            }
        }
        Ok(Self::plain(raw.parse()?))
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(variant) = self.variant {
            f.write_str(variant.suffix())?;
        }
        Ok(())
    }
}

/// An SBML Level and Version pair, e.g. `L3V1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelVersion {
    pub level: u8,
    pub version: u8,
}

impl LevelVersion {
    pub fn new(level: u8, version: u8) -> Self {
        Self { level, version }
    }
}

impl fmt::Display for LevelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}V{}", self.level, self.version)
    }
}

/// The (locale, Level/Version) cell a store applies to. A store without a
/// Level/Version is the locale-wide default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub locale: String,
    pub level_version: Option<LevelVersion>,
}

impl Scope {
    /// A locale-wide scope.
    pub fn locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            level_version: None,
        }
    }

    /// A scope narrowed to one Level/Version of the schema.
    pub fn for_level_version(locale: impl Into<String>, level_version: LevelVersion) -> Self {
        Self {
            locale: locale.into(),
            level_version: Some(level_version),
        }
    }

    /// Whether a store with this scope may serve a lookup made under `ctx`.
    pub fn applies_to(&self, ctx: &Context) -> bool {
        self.locale == ctx.locale
            && self
                .level_version
                .map_or(true, |lv| Some(lv) == ctx.level_version)
    }

    /// Narrower scopes are consulted first during resolution.
    pub fn specificity(&self) -> usize {
        usize::from(self.level_version.is_some())
    }
}

/// The locale and schema Level/Version a caller resolves under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub locale: String,
    pub level_version: Option<LevelVersion>,
}

impl Context {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            level_version: None,
        }
    }

    pub fn with_level_version(mut self, level_version: LevelVersion) -> Self {
        self.level_version = Some(level_version);
        self
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new("en")
    }
}

/// An immutable key-to-template mapping for one (kind, scope) cell.
///
/// Built once from an entry list; duplicate keys are rejected eagerly so
/// ambiguity never reaches lookup time.
#[derive(Debug, Clone)]
pub struct FragmentStore {
    kind: FragmentKind,
    scope: Scope,
    templates: HashMap<MessageKey, String>,
}

impl FragmentStore {
    pub fn from_entries(
        kind: FragmentKind,
        scope: Scope,
        entries: impl IntoIterator<Item = (MessageKey, String)>,
    ) -> Result<Self, MessageError> {
        let mut templates = HashMap::new();
        for (key, template) in entries {
            if templates.insert(key.clone(), template).is_some() {
                return Err(MessageError::DuplicateKey { kind, key });
            }
        }
        Ok(Self {
            kind,
            scope,
            templates,
        })
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Exact-match lookup; never partial or prefix matching.
    pub fn lookup(&self, key: &MessageKey) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    /// The codes registered in this store, ignoring variants.
    pub fn codes(&self) -> impl Iterator<Item = &ErrorCode> {
        self.templates.keys().map(|key| &key.code)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
