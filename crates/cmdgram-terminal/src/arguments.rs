//! Argument types: pluggable parsers that turn input at the cursor into an
//! [`ArgValue`].
//!
//! Every type follows the same contract: skip leading whitespace, read one
//! value, advance the cursor past it, or return `None` and leave the cursor
//! exactly where it was.

use std::fmt;

use regex::Regex;

use cmdgram_types::diagnostic::Diagnostic;

use crate::context::{ArgValue, ParseContext};

/// A stateless value parser used by argument nodes.
pub trait ArgumentType {
    /// Parse a value at the cursor. On `None` the cursor must be unchanged.
    fn parse(&self, ctx: &mut ParseContext<'_>) -> Option<ArgValue>;
}

// ---------------------------------------------------------------------------
// Integer
// ---------------------------------------------------------------------------

/// A run of ASCII decimal digits, optionally bounded (inclusive).
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerArgumentType {
    min: Option<i64>,
    max: Option<i64>,
}

impl IntegerArgumentType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values outside `min..=max`.
    pub fn with_bounds(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

impl ArgumentType for IntegerArgumentType {
    fn parse(&self, ctx: &mut ParseContext<'_>) -> Option<ArgValue> {
        let skip = ctx.whitespace_len();
        let rest = &ctx.remaining()[skip..];
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        // Overflowing runs are not a match.
        let value: i64 = rest[..digits].parse().ok()?;

        if let Some(min) = self.min
            && value < min
        {
            ctx.report(&Diagnostic::BelowMinimum(min));
            return None;
        }
        if let Some(max) = self.max
            && value > max
        {
            ctx.report(&Diagnostic::AboveMaximum(max));
            return None;
        }

        ctx.set_pos(ctx.pos() + skip + digits);
        Some(ArgValue::Integer(value))
    }
}

// ---------------------------------------------------------------------------
// String
// ---------------------------------------------------------------------------

/// Which values a [`StringArgumentType`] accepts.
pub enum Allows {
    /// Value must contain a match for the regex.
    Pattern(Regex),
    /// Value must be one of these.
    List(Vec<String>),
    /// Value must satisfy the predicate.
    Predicate(Box<dyn Fn(&str) -> bool>),
    /// Value must name a top-level command registered on the dispatcher,
    /// checked at parse time.
    Commands,
}

impl fmt::Debug for Allows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Self::List(list) => f.debug_tuple("List").field(list).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Commands => f.write_str("Commands"),
        }
    }
}

/// A single word, or a double-quoted span that may contain whitespace.
#[derive(Debug, Default)]
pub struct StringArgumentType {
    allows: Option<Allows>,
    min_length: usize,
    max_length: Option<usize>,
}

impl StringArgumentType {
    /// Accepts any word.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_pattern(mut self, pattern: Regex) -> Self {
        self.allows = Some(Allows::Pattern(pattern));
        self
    }

    pub fn allow_list<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allows = Some(Allows::List(values.into_iter().map(Into::into).collect()));
        self
    }

    pub fn allow_if<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        self.allows = Some(Allows::Predicate(Box::new(predicate)));
        self
    }

    /// Only accept names of registered top-level commands.
    pub fn allow_commands(mut self) -> Self {
        self.allows = Some(Allows::Commands);
        self
    }

    /// Minimum length in characters.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    /// Maximum length in characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// First failing check, in order: allow rule, minimum, maximum.
    fn check(&self, value: &str, ctx: &ParseContext<'_>) -> Option<Diagnostic> {
        match &self.allows {
            Some(Allows::Pattern(re)) if !re.is_match(value) => {
                return Some(Diagnostic::PatternMismatch(re.as_str().to_string()));
            },
            Some(Allows::List(list)) if !list.iter().any(|v| v == value) => {
                return Some(Diagnostic::not_in_list(list.as_slice()));
            },
            Some(Allows::Predicate(pred)) if !pred(value) => {
                return Some(Diagnostic::RejectedByPredicate);
            },
            Some(Allows::Commands) => {
                let commands = ctx.dispatcher().commands();
                if !commands.iter().any(|c| c == value) {
                    return Some(Diagnostic::not_in_list(commands));
                }
            },
            _ => {},
        }

        let len = value.chars().count();
        if self.min_length > 0 && len < self.min_length {
            return Some(Diagnostic::TooShort(self.min_length));
        }
        if let Some(max) = self.max_length
            && len > max
        {
            return Some(Diagnostic::TooLong(max));
        }
        None
    }
}

/// Split the next token off `rest`: `(value, consumed_bytes)`.
///
/// A leading `"` with a closing `"` later yields the text between them. An
/// unterminated quote is read as an ordinary word.
fn scan_token(rest: &str) -> Option<(&str, usize)> {
    if rest.is_empty() {
        return None;
    }
    if let Some(inner) = rest.strip_prefix('"')
        && let Some(end) = inner.find('"')
    {
        return Some((&inner[..end], end + 2));
    }
    let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
    Some((&rest[..len], len))
}

impl ArgumentType for StringArgumentType {
    fn parse(&self, ctx: &mut ParseContext<'_>) -> Option<ArgValue> {
        let skip = ctx.whitespace_len();
        let (value, consumed) = scan_token(&ctx.remaining()[skip..])?;

        if let Some(diagnostic) = self.check(value, ctx) {
            ctx.report(&diagnostic);
            return None;
        }

        let value = value.to_string();
        ctx.set_pos(ctx.pos() + skip + consumed);
        Some(ArgValue::String(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeBuilder;
    use crate::test_utils::capturing;
    use proptest::prelude::*;

    #[test]
    fn integer_skips_whitespace_and_advances() {
        let (d, sink) = capturing("");
        let mut ctx = ParseContext::new("  42 rest", &d);
        let value = IntegerArgumentType::new().parse(&mut ctx);
        assert_eq!(value, Some(ArgValue::Integer(42)));
        assert_eq!(ctx.remaining(), " rest");
        assert!(sink.is_empty());
    }

    #[test]
    fn integer_no_digits_is_no_match() {
        let (d, _) = capturing("");
        let mut ctx = ParseContext::new("  abc", &d);
        assert_eq!(IntegerArgumentType::new().parse(&mut ctx), None);
        assert_eq!(ctx.pos(), 0);
    }

    #[test]
    fn integer_overflow_is_no_match() {
        let (d, _) = capturing("");
        let mut ctx = ParseContext::new("99999999999999999999999", &d);
        assert_eq!(IntegerArgumentType::new().parse(&mut ctx), None);
        assert_eq!(ctx.pos(), 0);
    }

    #[test]
    fn integer_bounds_report_and_fail() {
        let (d, sink) = capturing("");
        let month = IntegerArgumentType::with_bounds(1, 12);

        let mut ctx = ParseContext::new("13", &d);
        assert_eq!(month.parse(&mut ctx), None);
        assert_eq!(ctx.pos(), 0);

        let mut ctx = ParseContext::new("0", &d);
        assert_eq!(month.parse(&mut ctx), None);

        let mut ctx = ParseContext::new("7", &d);
        assert_eq!(month.parse(&mut ctx), Some(ArgValue::Integer(7)));

        assert_eq!(
            sink.errors(),
            vec![
                "integer is too large. Maximum is 12.",
                "integer is too small. Minimum is 1.",
            ]
        );
    }

    #[test]
    fn string_reads_one_word() {
        let (d, _) = capturing("");
        let mut ctx = ParseContext::new(" discord extra", &d);
        let value = StringArgumentType::new().parse(&mut ctx);
        assert_eq!(value, Some(ArgValue::String("discord".into())));
        assert_eq!(ctx.remaining(), " extra");
    }

    #[test]
    fn string_quoted_span_keeps_inner_space() {
        let (d, _) = capturing("");
        let mut ctx = ParseContext::new(" \"foo bar\" tail", &d);
        let value = StringArgumentType::new().parse(&mut ctx);
        assert_eq!(value, Some(ArgValue::String("foo bar".into())));
        assert_eq!(ctx.remaining(), " tail");
    }

    #[test]
    fn string_quoted_single_word_is_stripped() {
        let (d, _) = capturing("");
        let mut ctx = ParseContext::new("\"foo\"", &d);
        let value = StringArgumentType::new().parse(&mut ctx);
        assert_eq!(value, Some(ArgValue::String("foo".into())));
        assert!(ctx.is_at_end());
    }

    #[test]
    fn string_unterminated_quote_is_a_word() {
        let (d, _) = capturing("");
        let mut ctx = ParseContext::new("\"foo bar", &d);
        let value = StringArgumentType::new().parse(&mut ctx);
        assert_eq!(value, Some(ArgValue::String("\"foo".into())));
        assert_eq!(ctx.remaining(), " bar");
    }

    #[test]
    fn string_empty_input_is_no_match() {
        let (d, sink) = capturing("");
        let mut ctx = ParseContext::new("   ", &d);
        assert_eq!(StringArgumentType::new().parse(&mut ctx), None);
        assert_eq!(ctx.pos(), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn allow_list_rejects_and_restores_cursor() {
        let (d, sink) = capturing("");
        let ty = StringArgumentType::new().allow_list(["discord", "github"]);
        let mut ctx = ParseContext::new(" twitter", &d);
        assert_eq!(ty.parse(&mut ctx), None);
        assert_eq!(ctx.pos(), 0);
        assert_eq!(
            sink.errors(),
            vec!["string is not in the allowed list \"discord,github\"."]
        );
    }

    #[test]
    fn pattern_rule() {
        let (d, sink) = capturing("");
        let ty = StringArgumentType::new().allow_pattern(Regex::new("^[a-z]+$").unwrap());
        let mut ctx = ParseContext::new("abc", &d);
        assert_eq!(ty.parse(&mut ctx), Some(ArgValue::String("abc".into())));
        let mut ctx = ParseContext::new("ab1", &d);
        assert_eq!(ty.parse(&mut ctx), None);
        assert_eq!(
            sink.errors(),
            vec!["Input does not match the allowed pattern \"^[a-z]+$\"."]
        );
    }

    #[test]
    fn predicate_rule() {
        let (d, sink) = capturing("");
        let ty = StringArgumentType::new().allow_if(|s| s.starts_with('@'));
        let mut ctx = ParseContext::new("@me", &d);
        assert!(ty.parse(&mut ctx).is_some());
        let mut ctx = ParseContext::new("me", &d);
        assert!(ty.parse(&mut ctx).is_none());
        assert_eq!(
            sink.errors(),
            vec!["string is not allowed by allows function"]
        );
    }

    #[test]
    fn length_rules_count_chars() {
        let (d, sink) = capturing("");
        let ty = StringArgumentType::new().min_length(3).max_length(4);
        let mut ctx = ParseContext::new("ab", &d);
        assert!(ty.parse(&mut ctx).is_none());
        let mut ctx = ParseContext::new("abcde", &d);
        assert!(ty.parse(&mut ctx).is_none());
        // Four chars, more than four bytes.
        let mut ctx = ParseContext::new("äöüß", &d);
        assert!(ty.parse(&mut ctx).is_some());
        assert_eq!(
            sink.errors(),
            vec![
                "string is too short. Minimum length is 3.",
                "string is too long. Maximum length is 4.",
            ]
        );
    }

    #[test]
    fn allow_rule_is_checked_before_length() {
        let (d, sink) = capturing("");
        let ty = StringArgumentType::new()
            .allow_list(["ab"])
            .min_length(5);
        let mut ctx = ParseContext::new("xy", &d);
        assert!(ty.parse(&mut ctx).is_none());
        assert_eq!(sink.errors().len(), 1);
        assert!(sink.errors()[0].starts_with("string is not in the allowed list"));
    }

    #[test]
    fn commands_rule_reads_dispatcher_at_parse_time() {
        let (mut d, sink) = capturing("");
        d.register(NodeBuilder::literal("whoami")).unwrap();
        d.register(NodeBuilder::literal("socials")).unwrap();
        let ty = StringArgumentType::new().allow_commands();

        let mut ctx = ParseContext::new("socials", &d);
        assert_eq!(ty.parse(&mut ctx), Some(ArgValue::String("socials".into())));

        let mut ctx = ParseContext::new("nope", &d);
        assert_eq!(ty.parse(&mut ctx), None);
        assert_eq!(
            sink.errors(),
            vec!["string is not in the allowed list \"whoami,socials\"."]
        );
    }

    proptest! {
        #[test]
        fn integer_roundtrips_any_u32(n in any::<u32>(), ws in "[ \t]{0,4}") {
            let (d, _) = capturing("");
            let input = format!("{ws}{n} tail");
            let mut ctx = ParseContext::new(&input, &d);
            let value = IntegerArgumentType::new().parse(&mut ctx);
            prop_assert_eq!(value, Some(ArgValue::Integer(i64::from(n))));
            prop_assert_eq!(ctx.remaining(), " tail");
        }

        #[test]
        fn failed_string_parse_never_moves_cursor(word in "[a-z]{1,8}") {
            let (d, _) = capturing("");
            let ty = StringArgumentType::new().allow_list(["discord", "github"]);
            let input = format!("  {word}");
            let mut ctx = ParseContext::new(&input, &d);
            let start = ctx.pos();
            if ty.parse(&mut ctx).is_none() {
                prop_assert_eq!(ctx.pos(), start);
            }
        }
    }
}
