//! TOML bundle parsing and directory loading
//!
//! Each bundle file carries one fragment store plus its scope:
//!
//! ```toml
//! kind = "post"
//! locale = "en"
//! level = 3      # optional, declared together with `version`
//! version = 1
//! default = "…"  # generic bundles only: the universal fallback template
//!
//! [templates]
//! CORE_20906 = "…"
//! CORE_20906_SELF = "…"
//! ```
//!
//! Malformed bundles fail loudly at load time; nothing is deferred to
//! lookup.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{FragmentKind, FragmentStore, LevelVersion, MessageKey, Scope};
use crate::error::MessageError;

/// One parsed bundle: a fragment store plus, for generic bundles, the
/// optional universal default template.
#[derive(Debug, Clone)]
pub struct Bundle {
    pub store: FragmentStore,
    pub default_generic: Option<String>,
}

#[derive(Deserialize)]
struct BundleFile {
    kind: String,
    locale: String,
    level: Option<u8>,
    version: Option<u8>,
    default: Option<String>,
    #[serde(default)]
    templates: BTreeMap<String, String>,
}

/// Parse a single bundle from TOML text. `name` only labels errors.
pub fn parse_bundle(name: &str, text: &str) -> Result<Bundle, MessageError> {
    let file: BundleFile = toml::from_str(text).map_err(|source| MessageError::BundleParse {
        name: name.to_string(),
        source,
    })?;

    let kind: FragmentKind = file.kind.parse()?;
    if file.default.is_some() && kind != FragmentKind::Generic {
        return Err(MessageError::DefaultOnNonGeneric {
            name: name.to_string(),
            kind,
        });
    }

    let level_version = match (file.level, file.version) {
        (Some(level), Some(version)) => Some(LevelVersion::new(level, version)),
        (None, None) => None,
        _ => {
            return Err(MessageError::BundleScope {
                name: name.to_string(),
            })
        }
    };
    let scope = Scope {
        locale: file.locale,
        level_version,
    };

    let mut entries = Vec::with_capacity(file.templates.len());
    for (raw, template) in file.templates {
        entries.push((MessageKey::parse(&raw)?, template));
    }

    Ok(Bundle {
        store: FragmentStore::from_entries(kind, scope, entries)?,
        default_generic: file.default,
    })
}

/// Load every `*.toml` bundle in a directory, sorted by file name so store
/// registration order is deterministic.
pub fn load_dir(dir: &Path) -> Result<Vec<Bundle>, MessageError> {
    let read = fs::read_dir(dir).map_err(|source| MessageError::BundleIo {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut paths: Vec<_> = read
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();

    let mut bundles = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path).map_err(|source| MessageError::BundleIo {
            path: path.clone(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        bundles.push(parse_bundle(&name, &text)?);
    }
    Ok(bundles)
}
