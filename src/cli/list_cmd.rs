//! Handler for the `sbmlmsg list` subcommand.

use std::error::Error;
use std::path::Path;

use crate::catalog::{Context, FragmentKind};

pub fn run(
    namespace: Option<&str>,
    data_dir: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let composer = super::load_composer(data_dir)?;
    let resolver = composer.resolver();
    let ctx = Context::default();

    let mut rows = Vec::new();
    for code in resolver.known_codes() {
        if let Some(ns) = namespace {
            if !code.namespace().eq_ignore_ascii_case(ns) {
                continue;
            }
        }
        let short = resolver.resolve(FragmentKind::Short, &code, None, &ctx);
        rows.push((code.to_string(), short.to_string()));
    }

    if json {
        let values: Vec<_> = rows
            .iter()
            .map(|(code, short)| serde_json::json!({ "code": code, "short": short }))
            .collect();
        println!("{}", serde_json::Value::Array(values));
    } else {
        for (code, short) in rows {
            println!("{}  {}", code, short);
        }
    }
    Ok(())
}
