//! Handler for the `sbmlmsg explain` subcommand.

use std::error::Error;
use std::path::Path;

use crate::catalog::{Context, FragmentKind};
use crate::codes::ErrorCode;

pub fn run(code: &str, data_dir: Option<&Path>, json: bool) -> Result<(), Box<dyn Error>> {
    let code: ErrorCode = code.parse()?;
    let composer = super::load_composer(data_dir)?;
    let resolver = composer.resolver();
    let ctx = Context::default();

    if !resolver.known_codes().contains(&code) {
        eprintln!("Unknown error code: {}", code);
        eprintln!();
        eprintln!("Use `sbmlmsg list` to see the codes in the loaded catalogs.");
        std::process::exit(1);
    }

    let short = resolver.resolve(FragmentKind::Short, &code, None, &ctx);
    let generic = resolver.resolve(FragmentKind::Generic, &code, None, &ctx);
    // Raw template: the {N} slots show which arguments the validator must
    // supply for this code.
    let post = resolver.resolve(FragmentKind::Post, &code, None, &ctx);

    if json {
        let value = serde_json::json!({
            "code": code.to_string(),
            "short": short,
            "generic": generic,
            "post": post,
        });
        println!("{}", value);
    } else {
        println!("{}: {}", code, short);
        println!();
        println!("{}", generic);
        if !post.is_empty() {
            println!();
            println!("Detail template: {}", post);
        }
    }
    Ok(())
}
