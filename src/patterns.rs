//! Named matchers for the parts of a list line.
//!
//! A list line reads `prefix + separator + content`, e.g. `(3) text` or
//! `12。text`. Each matcher returns a structured result instead of raw
//! indices so callers never slice strings by hand.
use regex::Regex;

/// Period-equivalent, colon, or whitespace, plus any trailing whitespace.
const SEPARATOR_PATTERN: &str = r"[。:.\s]\s*";
/// Optional opening bracket, a digit run, optional closing bracket.
const PREFIX_PATTERN: &str = r"[(（]?([0-9]+)[）)]?";

/// Punctuation used to estimate how "prose-like" a line is.
pub const SYMBOL_CLASS: [char; 17] = [
    '.', '。', '，', '！', '…', '（', '）', '~', '“', '”', '：', '；', '、', '《', '》', '*', '&',
];

/// First separator found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorMatch {
    /// Byte offset of the separator character.
    pub start: usize,
    /// The separator character itself.
    pub splitter: char,
}

/// A line split at its first separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineParts<'a> {
    /// Everything before the separator.
    pub prefix: &'a str,
    /// Everything after the separator character, trimmed.
    pub content: &'a str,
}

/// A recognized numbering prefix such as `3`, `(3)` or `（3）`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch<'a> {
    /// The digit run, brackets excluded.
    pub number: &'a str,
}

#[derive(Debug, Clone)]
pub struct SeparatorMatcher {
    regex: Regex,
}

impl SeparatorMatcher {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(SEPARATOR_PATTERN).expect("regex for list separators"),
        }
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    pub fn find(&self, line: &str) -> Option<SeparatorMatch> {
        let found = self.regex.find(line)?;
        let splitter = found.as_str().chars().next()?;
        Some(SeparatorMatch {
            start: found.start(),
            splitter,
        })
    }

    /// Split `line` into prefix and content at the first separator.
    ///
    /// Content starts one character past the separator; whatever whitespace
    /// follows is trimmed away. Returns `None` when there is no separator.
    pub fn split<'a>(&self, line: &'a str) -> Option<LineParts<'a>> {
        let found = self.find(line)?;
        let content_start = found.start + found.splitter.len_utf8();
        Some(LineParts {
            prefix: &line[..found.start],
            content: line[content_start..].trim(),
        })
    }
}

impl Default for SeparatorMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    regex: Regex,
}

impl PrefixMatcher {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(PREFIX_PATTERN).expect("regex for numbering prefixes"),
        }
    }

    /// Search anywhere in `text` for a numbering prefix.
    pub fn find<'a>(&self, text: &'a str) -> Option<PrefixMatch<'a>> {
        let caps = self.regex.captures(text)?;
        Some(PrefixMatch {
            number: caps.get(1)?.as_str(),
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl Default for PrefixMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts characters from [`SYMBOL_CLASS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolClass;

impl SymbolClass {
    pub fn count(&self, line: &str) -> usize {
        line.chars().filter(|ch| SYMBOL_CLASS.contains(ch)).count()
    }
}

/// The three matchers the classifier needs, compiled once per run.
#[derive(Debug, Clone, Default)]
pub struct ListPatterns {
    pub separator: SeparatorMatcher,
    pub prefix: PrefixMatcher,
    pub symbols: SymbolClass,
}

impl ListPatterns {
    pub fn new() -> Self {
        Self::default()
    }
}
