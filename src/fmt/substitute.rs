//! Positional substitution of [`Arg`]s into catalog texts and ad-hoc format strings.
//!
//! Supported tokens:
//! - `%s` `%d` `%f` `%x` `%X` `%b`, optionally indexed (`%2$s`) and with precision (`%.2f`, `%.3s`)
//! - `%%` for a literal percent sign and `%n` for a line break
//! - `{0}`, `{1}`, ... zero-based placeholders that accept any argument type
//!
//! Unindexed conversions consume arguments left to right. Surplus arguments are ignored.

use super::Arg;
use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

/// Largest `%.N` precision accepted.
pub const MAX_PRECISION: usize = 64;

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)%(?:(\d+)\$)?(?:\.(\d+))?(.?)|\{(\d+)\}").expect("Invalid token regex")
});

/// Why a template could not be formatted with the given arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The template refers to an argument position that was not supplied (zero-based).
    MissingArg { index: usize },
    /// The argument at `index` cannot be rendered by `conversion`.
    TypeMismatch {
        index: usize,
        conversion: char,
        found: &'static str,
    },
    /// `%` followed by a character that is not a known conversion.
    UnknownConversion(char),
    /// Template ends with a bare `%`.
    Unterminated,
    /// `%0$`: explicit positions start at 1.
    ZeroPosition,
    /// A `%.N` precision above [`MAX_PRECISION`].
    PrecisionTooLarge,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArg { index } => write!(f, "missing argument at position {index}"),
            Self::TypeMismatch {
                index,
                conversion,
                found,
            } => write!(
                f,
                "argument {index} is a {found}, which %{conversion} cannot format"
            ),
            Self::UnknownConversion(c) => write!(f, "unknown conversion %{c}"),
            Self::Unterminated => write!(f, "template ends with a bare %"),
            Self::ZeroPosition => write!(f, "explicit argument positions start at 1, not 0"),
            Self::PrecisionTooLarge => write!(f, "precision exceeds {MAX_PRECISION}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders `template` with `args`.
///
/// # Errors
/// Returns the first [`FormatError`] encountered; nothing is partially rendered.
pub fn substitute(template: &str, args: &[Arg]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut last = 0;
    let mut next_arg = 0;

    for caps in TOKEN_REGEX.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&template[last..whole.start()]);
        last = whole.end();

        if let Some(index) = caps.get(4) {
            let index = parse_index(index.as_str())?;
            let arg = args.get(index).ok_or(FormatError::MissingArg { index })?;
            out.push_str(&arg.to_string());
            continue;
        }

        render_conversion(&caps, args, &mut next_arg, &mut out)?;
    }

    out.push_str(&template[last..]);
    Ok(out)
}

/// Number of arguments `template` consumes, without formatting anything.
///
/// # Errors
/// Reports unknown conversions and a trailing bare `%`.
pub fn arity(template: &str) -> Result<usize, FormatError> {
    let mut needed = 0;
    let mut next_arg = 0;

    for caps in TOKEN_REGEX.captures_iter(template) {
        let position = if let Some(index) = caps.get(4) {
            parse_index(index.as_str())?
        } else {
            let conversion = caps
                .get(3)
                .and_then(|m| m.as_str().chars().next())
                .ok_or(FormatError::Unterminated)?;
            match conversion {
                '%' | 'n' => continue,
                's' | 'd' | 'f' | 'x' | 'X' | 'b' => {}
                other => return Err(FormatError::UnknownConversion(other)),
            }
            parse_precision(&caps)?;
            match caps.get(1) {
                Some(m) => parse_position(m.as_str())?,
                None => {
                    next_arg += 1;
                    next_arg - 1
                }
            }
        };
        needed = needed.max(position.saturating_add(1));
    }

    Ok(needed)
}

fn parse_index(digits: &str) -> Result<usize, FormatError> {
    // Digits that overflow usize can never name a real argument.
    digits
        .parse()
        .map_err(|_| FormatError::MissingArg { index: usize::MAX })
}

/// One-based `%N$` position to a zero-based index.
fn parse_position(digits: &str) -> Result<usize, FormatError> {
    parse_index(digits)?
        .checked_sub(1)
        .ok_or(FormatError::ZeroPosition)
}

fn parse_precision(caps: &Captures<'_>) -> Result<Option<usize>, FormatError> {
    let Some(digits) = caps.get(2) else {
        return Ok(None);
    };
    match digits.as_str().parse::<usize>() {
        Ok(p) if p <= MAX_PRECISION => Ok(Some(p)),
        _ => Err(FormatError::PrecisionTooLarge),
    }
}

fn render_conversion(
    caps: &Captures<'_>,
    args: &[Arg],
    next_arg: &mut usize,
    out: &mut String,
) -> Result<(), FormatError> {
    let conversion = caps
        .get(3)
        .and_then(|m| m.as_str().chars().next())
        .ok_or(FormatError::Unterminated)?;

    match conversion {
        '%' => {
            out.push('%');
            return Ok(());
        }
        'n' => {
            out.push('\n');
            return Ok(());
        }
        's' | 'd' | 'f' | 'x' | 'X' | 'b' => {}
        other => return Err(FormatError::UnknownConversion(other)),
    }

    let index = match caps.get(1) {
        Some(m) => parse_position(m.as_str())?,
        None => {
            let index = *next_arg;
            *next_arg += 1;
            index
        }
    };
    let precision = parse_precision(caps)?;

    let arg = args.get(index).ok_or(FormatError::MissingArg { index })?;
    let mismatch = || FormatError::TypeMismatch {
        index,
        conversion,
        found: arg.kind(),
    };

    let rendered = match (conversion, arg) {
        ('s', _) => {
            let text = arg.to_string();
            match precision {
                Some(p) => text.chars().take(p).collect(),
                None => text,
            }
        }
        ('d', Arg::Int(n)) => n.to_string(),
        ('d', Arg::UInt(n)) => n.to_string(),
        ('f', Arg::Float(x)) => format!("{:.*}", precision.unwrap_or(6), x),
        ('x', Arg::Int(n)) => format!("{n:x}"),
        ('x', Arg::UInt(n)) => format!("{n:x}"),
        ('X', Arg::Int(n)) => format!("{n:X}"),
        ('X', Arg::UInt(n)) => format!("{n:X}"),
        ('b', Arg::Bool(b)) => b.to_string(),
        ('b', _) => "true".to_string(),
        _ => return Err(mismatch()),
    };
    out.push_str(&rendered);
    Ok(())
}
