//! Handler for the `sbmlmsg compose` subcommand.

use std::error::Error;
use std::path::Path;

use crate::catalog::{Context, LevelVersion, Variant};
use crate::codes::ErrorCode;

#[allow(clippy::too_many_arguments)]
pub fn run(
    code: &str,
    args: &[String],
    variant: Option<&str>,
    locale: &str,
    level: Option<u8>,
    version: Option<u8>,
    data_dir: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let code: ErrorCode = code.parse()?;
    let variant = variant.map(|v| v.parse::<Variant>()).transpose()?;

    let mut ctx = Context::new(locale);
    if let (Some(level), Some(version)) = (level, version) {
        ctx = ctx.with_level_version(LevelVersion::new(level, version));
    }

    let composer = super::load_composer(data_dir)?;
    let composed = composer.compose(&code, variant, &ctx, args)?;

    if json {
        println!("{}", serde_json::to_string(&composed)?);
    } else {
        println!("{} ({})", composed.short, composed.code);
        println!("{}", composed.message);
    }
    Ok(())
}
