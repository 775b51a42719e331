//! Different targets need different line layouts. The console wants `{level} {category}: {msg}`,
//! a file wants the timestamp and thread too. Templates make that configurable per target
//! instead of hardcoded.

/// Closed set of known substitution tokens. Unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Timestamp,
    Level,
    Category,
    Thread,
    Source,
    Id,
    Msg,
    Year,
    Month,
    Day,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Level => "level",
            Self::Category => "category",
            Self::Thread => "thread",
            Self::Source => "source",
            Self::Id => "id",
            Self::Msg => "msg",
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Timestamp,
        Self::Level,
        Self::Category,
        Self::Thread,
        Self::Source,
        Self::Id,
        Self::Msg,
        Self::Year,
        Self::Month,
        Self::Day,
    ];
}

/// Parsing into segments once avoids re-scanning the template on every message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Pre-parsed line template: parse once, render many.
#[derive(Debug, Clone)]
pub struct LineTemplate {
    segments: Vec<TemplateSegment>,
}

impl LineTemplate {
    /// Turns `"{level} {category}: {msg}"` into a segment list.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|c| open + c) else {
                break;
            };
            let name = &rest[open + 1..close];
            literal.push_str(&rest[..open]);

            if let Some(ph) = Placeholder::ALL.iter().find(|ph| ph.as_str() == name) {
                if !literal.is_empty() {
                    segments.push(TemplateSegment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(TemplateSegment::Placeholder(*ph));
            } else {
                literal.push_str(&rest[open..=close]);
            }
            rest = &rest[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(TemplateSegment::Literal(literal));
        }

        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    /// Substitutes values into the pre-parsed segments.
    #[must_use]
    pub fn render(&self, values: &LineValues) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(s) => result.push_str(s),
                TemplateSegment::Placeholder(ph) => {
                    let value = match ph {
                        Placeholder::Timestamp => &values.timestamp,
                        Placeholder::Level => &values.level,
                        Placeholder::Category => &values.category,
                        Placeholder::Thread => &values.thread,
                        Placeholder::Source => &values.source,
                        Placeholder::Id => &values.id,
                        Placeholder::Msg => &values.msg,
                        Placeholder::Year => &values.year,
                        Placeholder::Month => &values.month,
                        Placeholder::Day => &values.day,
                    };
                    result.push_str(value);
                }
            }
        }

        result
    }
}

impl Default for LineTemplate {
    fn default() -> Self {
        Self::parse("{level} {category}: {msg}")
    }
}

/// Typed value bag: every placeholder has a field, so there are no key typos at runtime.
#[derive(Debug, Clone, Default)]
pub struct LineValues {
    pub timestamp: String,
    pub level: String,
    pub category: String,
    pub thread: String,
    pub source: String,
    pub id: String,
    pub msg: String,
    pub year: String,
    pub month: String,
    pub day: String,
}

impl LineValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn thread(mut self, thread: impl Into<String>) -> Self {
        self.thread = thread.into();
        self
    }

    /// Messages without a source tag render it as an empty string.
    #[must_use]
    pub fn source(mut self, source: Option<&str>) -> Self {
        self.source = source.unwrap_or_default().to_string();
        self
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Path templates use `{year}/{month}/{day}` for date-based directory hierarchies.
    #[must_use]
    pub fn date(mut self, year: &str, month: &str, day: &str) -> Self {
        self.year = year.to_string();
        self.month = month.to_string();
        self.day = day.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_placeholders_stay_literal() {
        let template = LineTemplate::parse("{level} {bogus} {msg");
        assert_eq!(
            template.segments(),
            &[
                TemplateSegment::Placeholder(Placeholder::Level),
                TemplateSegment::Literal(" {bogus} {msg".to_string()),
            ]
        );
    }
}
