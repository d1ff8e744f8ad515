//! Positional template formatting
//!
//! Templates use 0-based `{N}` placeholders and double a single quote to
//! produce a literal quote in the output (`''` becomes `'`). Everything
//! else passes through untouched, so a template with no placeholders or
//! escapes survives formatting byte-for-byte no matter how many arguments
//! are supplied.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::MessageError;

/// Replace every `{N}` placeholder in `template` with `args[N]`.
///
/// Extra arguments are ignored; a placeholder index with no matching
/// argument is a hard error, since it indicates a template authoring bug
/// rather than a runtime condition to mask.
pub fn format<S: AsRef<str>>(template: &str, args: &[S]) -> Result<String, MessageError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' if chars.peek() == Some(&'\'') => {
                chars.next();
                out.push('\'');
            }
            '{' => match take_placeholder(&mut chars) {
                Some(index) => {
                    let arg = args.get(index).ok_or(MessageError::MissingArgument {
                        index,
                        supplied: args.len(),
                    })?;
                    out.push_str(arg.as_ref());
                }
                None => out.push('{'),
            },
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Consume `N}` from the iterator if it completes a placeholder, returning
/// the index. Leaves the iterator untouched otherwise, so a stray `{` is
/// treated as literal text.
fn take_placeholder(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut probe = chars.clone();
    let mut digits = String::new();
    while let Some(d) = probe.peek().copied() {
        if d.is_ascii_digit() {
            digits.push(d);
            probe.next();
        } else {
            break;
        }
    }
    if digits.is_empty() || probe.peek() != Some(&'}') {
        return None;
    }
    probe.next();
    // A digit run too long for usize cannot name a real argument slot.
    let index = digits.parse().ok()?;
    *chars = probe;
    Some(index)
}

#[cfg(test)]
mod tests;
