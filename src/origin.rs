use crate::result::ValidationError;
use regex_automata::meta::{BuildError, Regex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

const MAX_PATTERN_LENGTH: usize = 50_000;

/// A single glob origin pattern compiled into an anchored regex.
///
/// `*` matches any run of characters (including none), `?` matches exactly one
/// character, and everything else matches literally. Matching is case-sensitive
/// and must cover the whole origin.
#[derive(Clone, Debug)]
pub struct OriginPattern {
    glob: String,
    regex: Regex,
}

impl OriginPattern {
    pub fn new<S: Into<String>>(glob: S) -> Result<Self, PatternError> {
        let glob = glob.into();
        if glob.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: glob.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let regex = Regex::new(&glob_to_regex(&glob))
            .map_err(|err| PatternError::Build(Box::new(err)))?;

        Ok(Self { glob, regex })
    }

    pub fn glob(&self) -> &str {
        &self.glob
    }

    pub fn matches(&self, origin: &str) -> bool {
        self.regex.is_match(origin.as_bytes())
    }
}

/// Escapes every regex metacharacter, then expands `*` and `?`.
pub(crate) fn glob_to_regex(glob: &str) -> String {
    let mut body = String::with_capacity(glob.len() * 2);
    let mut utf8 = [0u8; 4];
    for ch in glob.chars() {
        match ch {
            '*' => body.push_str(".*"),
            '?' => body.push('.'),
            other => regex_syntax::escape_into(other.encode_utf8(&mut utf8), &mut body),
        }
    }
    format!("^(?:{body})$")
}

/// Ordered origin patterns, compiled once per policy.
#[derive(Clone, Debug, Default)]
pub struct OriginMatcher {
    patterns: Vec<OriginPattern>,
}

impl OriginMatcher {
    pub fn compile<I, S>(globs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = globs
            .into_iter()
            .map(|glob| {
                let glob = glob.as_ref();
                OriginPattern::new(glob).map_err(|source| ValidationError::InvalidOriginPattern {
                    pattern: glob.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// True on the first pattern that matches; false when nothing matches or the list is empty.
    pub fn matches(&self, origin: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(origin))
    }

    pub fn patterns(&self) -> &[OriginPattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
