//! Text as a sequence of characters.
//!
//! `String` and `&str` project to their `char`s in order and rebuild by
//! concatenation. Any element convertible into a `String` can be
//! concatenated, so mapping characters to strings still yields text.

use super::{Reshape, Retain, SequenceLike, Shape};
use crate::combinator::canonical;
use crate::error::Result;

fn concatenate<B: Into<String>>(items: Vec<B>) -> String {
    items.into_iter().map(Into::into).collect()
}

impl SequenceLike for String {
    type Item = char;
    const SHAPE: Shape = Shape::Text;

    fn into_canonical(self) -> Result<Vec<char>> {
        Ok(self.chars().collect())
    }

    fn into_canonical_prefix(self, length: usize) -> Result<Vec<char>> {
        Ok(self.chars().take(length).collect())
    }
}

impl<B: Into<String>> Reshape<B> for String {
    type Rebuilt = Self;
    type Mapped = Self;

    fn rebuild(items: Vec<B>) -> Result<Self> {
        Ok(concatenate(items))
    }

    fn map_elements<F>(self, function: F) -> Result<Self>
    where
        F: FnMut(char) -> B + 'static,
    {
        Ok(concatenate(canonical::map(function, chars(&self))))
    }
}

impl Retain for String {
    type Filtered = Self;

    fn retain_elements<P>(self, mut predicate: P) -> Result<Self>
    where
        P: FnMut(&char) -> bool + 'static,
    {
        Ok(self.chars().filter(|character| predicate(character)).collect())
    }
}

impl SequenceLike for &str {
    type Item = char;
    const SHAPE: Shape = Shape::Text;

    fn into_canonical(self) -> Result<Vec<char>> {
        Ok(chars(self))
    }

    fn into_canonical_prefix(self, length: usize) -> Result<Vec<char>> {
        Ok(self.chars().take(length).collect())
    }
}

impl<B: Into<String>> Reshape<B> for &str {
    type Rebuilt = String;
    type Mapped = String;

    fn rebuild(items: Vec<B>) -> Result<String> {
        Ok(concatenate(items))
    }

    fn map_elements<F>(self, function: F) -> Result<String>
    where
        F: FnMut(char) -> B + 'static,
    {
        Ok(concatenate(canonical::map(function, chars(self))))
    }
}

impl Retain for &str {
    type Filtered = String;

    fn retain_elements<P>(self, mut predicate: P) -> Result<String>
    where
        P: FnMut(&char) -> bool + 'static,
    {
        Ok(self.chars().filter(|character| predicate(character)).collect())
    }
}

impl super::Indexable<usize> for String {
    type Value = char;

    fn lookup(&self, key: &usize) -> Option<char> {
        self.chars().nth(*key)
    }

    fn size(&self) -> usize {
        self.chars().count()
    }
}

impl super::Indexable<usize> for str {
    type Value = char;

    fn lookup(&self, key: &usize) -> Option<char> {
        self.chars().nth(*key)
    }

    fn size(&self) -> usize {
        self.chars().count()
    }
}

/// Splits text into its characters.
///
/// # Examples
///
/// ```rust
/// use fprelude::sequence::chars;
///
/// assert_eq!(chars("abc"), vec!['a', 'b', 'c']);
/// ```
pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Joins characters back into text.
pub fn unchars<I: IntoIterator<Item = char>>(characters: I) -> String {
    characters.into_iter().collect()
}

/// Splits text on single spaces.
///
/// Consecutive spaces produce empty words, so `unwords(words(s)) == s`.
///
/// # Examples
///
/// ```rust
/// use fprelude::sequence::{unwords, words};
///
/// let split = words("to be  or");
/// assert_eq!(split, vec!["to", "be", "", "or"]);
/// assert_eq!(unwords(split), "to be  or");
/// ```
pub fn words(text: &str) -> Vec<String> {
    text.split(' ').map(String::from).collect()
}

/// Joins words with single spaces.
pub fn unwords<I>(words: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    join(words, " ")
}

/// Splits text on line feeds.
pub fn lines(text: &str) -> Vec<String> {
    text.split('\n').map(String::from).collect()
}

/// Joins lines with line feeds.
pub fn unlines<I>(lines: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    join(lines, "\n")
}

fn join<I>(parts: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    for (position, part) in parts.into_iter().enumerate() {
        if position > 0 {
            joined.push_str(separator);
        }
        joined.push_str(part.as_ref());
    }
    joined
}
