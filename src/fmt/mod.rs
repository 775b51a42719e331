//! Text production: typed arguments, positional substitution into message texts,
//! and the per-target line templates and colors used when rendering.

mod arg;
mod color;
mod substitute;
mod template;

pub use arg::Arg;
pub use color::{Color, colorize};
pub use substitute::{FormatError, MAX_PRECISION, arity, substitute};
pub use template::{LineTemplate, LineValues, Placeholder, TemplateSegment};
