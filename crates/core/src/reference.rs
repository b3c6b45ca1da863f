//! Reference string parsing and generation.
//!
//! This module turns caller input into a [`ReferenceSequence`]. It performs:
//! 1. **Text parsing:** Tokens separated by commas and/or whitespace, e.g. `"7, 0 1,2"`.
//! 2. **Structured input:** Arrays of integers or of integer strings ([`ReferenceInput`]).
//! 3. **Generation:** Deterministic pseudo-random reference strings for experiments.
//!
//! Parsing is strict per token: anything that is not an integer after trimming
//! is a [`ParseError`]. Empty input is valid and yields an empty sequence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::PageId;
use crate::common::error::ParseError;
use crate::config::defaults;

/// Ordered, immutable list of page references.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceSequence(Vec<PageId>);

impl ReferenceSequence {
    /// Wraps an already-parsed list of pages.
    pub const fn new(pages: Vec<PageId>) -> Self {
        Self(pages)
    }

    /// Parses a textual reference string.
    ///
    /// Tokens are separated by commas, whitespace or any mix of the two.
    /// Consecutive separators do not produce empty tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagesim_core::ReferenceSequence;
    ///
    /// let refs = ReferenceSequence::parse("7, 0 1,,2\n0").unwrap();
    /// assert_eq!(refs.pages(), &[7, 0, 1, 2, 0]);
    ///
    /// let err = ReferenceSequence::parse("1, two, 3").unwrap_err();
    /// assert_eq!(err.token, "two");
    /// assert_eq!(err.position, 1);
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::from_tokens(
            text.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty()),
        )
    }

    /// Parses every token of an already-split sequence.
    ///
    /// Unlike [`parse`](Self::parse), an empty token is an error: structured
    /// input has no separators that could have produced it.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .enumerate()
            .map(|(position, token)| parse_token(token.as_ref(), position))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Generates `len` references uniformly drawn from `0..page_range`.
    ///
    /// The generator is a xorshift64 sequence, so equal seeds always give equal
    /// strings. A zero seed is replaced by [`defaults::RANDOM_SEED`] and a zero
    /// range behaves like a range of one.
    pub fn random(len: usize, page_range: u32, seed: u64) -> Self {
        let mut rng = XorShift64::new(seed);
        let range = u64::from(page_range.max(1));
        let pages = (0..len)
            .map(|_| PageId::try_from(rng.next_u64() % range).unwrap_or_default())
            .collect();
        Self(pages)
    }

    /// Number of references.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the empty reference string.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The references in order.
    #[inline]
    pub fn pages(&self) -> &[PageId] {
        &self.0
    }

    /// Reference at position `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<PageId> {
        self.0.get(index).copied()
    }

    /// Iterates over the references in order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.0.iter().copied()
    }

    /// Number of distinct pages; a lower bound on the fault count of any policy.
    pub fn distinct_pages(&self) -> usize {
        let mut pages = self.0.clone();
        pages.sort_unstable();
        pages.dedup();
        pages.len()
    }
}

impl FromStr for ReferenceSequence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<PageId>> for ReferenceSequence {
    fn from(pages: Vec<PageId>) -> Self {
        Self(pages)
    }
}

impl AsRef<[PageId]> for ReferenceSequence {
    fn as_ref(&self) -> &[PageId] {
        &self.0
    }
}

impl fmt::Display for ReferenceSequence {
    /// Formats as a comma-separated list, e.g. `7, 0, 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{page}")?;
        }
        Ok(())
    }
}

/// One element of a structured reference array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReferenceToken {
    /// A page number given as a number.
    Page(PageId),
    /// A page number given as a string, parsed after trimming.
    Text(String),
    /// Any other JSON value (float, boolean, null, nested array or object).
    /// Always rejected by [`ReferenceInput::resolve`] with its position.
    Other(serde_json::Value),
}

/// Reference input as supplied by a caller, before parsing.
///
/// Deserializes from a JSON string (`"1 2 3"`), an integer array (`[1, 2, 3]`)
/// or a mixed array (`[1, "2", " 3 "]`). Arrays holding any other element
/// still deserialize; the offending element is reported when resolving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReferenceInput {
    /// Comma- and/or whitespace-separated text.
    Text(String),
    /// Already-numeric pages.
    Pages(Vec<PageId>),
    /// Array whose elements may be numbers or numeric strings.
    Tokens(Vec<ReferenceToken>),
}

impl ReferenceInput {
    /// Normalizes the input into a [`ReferenceSequence`].
    pub fn resolve(&self) -> Result<ReferenceSequence, ParseError> {
        match self {
            Self::Text(text) => ReferenceSequence::parse(text),
            Self::Pages(pages) => Ok(ReferenceSequence::new(pages.clone())),
            Self::Tokens(tokens) => tokens
                .iter()
                .enumerate()
                .map(|(position, token)| match token {
                    ReferenceToken::Page(page) => Ok(*page),
                    ReferenceToken::Text(text) => parse_token(text, position),
                    ReferenceToken::Other(value) => Err(ParseError {
                        token: value.to_string(),
                        position,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ReferenceSequence::new),
        }
    }
}

impl Default for ReferenceInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for ReferenceInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ReferenceInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<PageId>> for ReferenceInput {
    fn from(pages: Vec<PageId>) -> Self {
        Self::Pages(pages)
    }
}

/// Parses a single trimmed token.
fn parse_token(token: &str, position: usize) -> Result<PageId, ParseError> {
    let token = token.trim();
    token.parse::<PageId>().map_err(|_| ParseError {
        token: token.to_string(),
        position,
    })
}

/// Xorshift64 pseudo-random generator.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    const fn new(seed: u64) -> Self {
        let state = if seed == 0 {
            defaults::RANDOM_SEED
        } else {
            seed
        };
        Self { state }
    }

    const fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}
