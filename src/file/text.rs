//! Whitespace-delimited token reader for the text formats.
//!
//! Both the region-wise input format of [`crate::MultiStack`] and the line-oriented
//! format of the single-region collections are sequences of whitespace-separated tokens:
//! counts first, then elements. [`crate::file::text::Tokens`] walks such input and parses
//! each token with [`std::str::FromStr`], reporting failures as
//! [`crate::Error::Malformed`] with the token position.

use std::{fmt::Display, str::FromStr};

use crate::Result;

/// Cursor over the whitespace-separated tokens of a string.
///
/// # Examples
///
/// ```rust
/// use multistack::file::text::Tokens;
///
/// let mut tokens = Tokens::new("2  a\n b");
/// assert_eq!(tokens.count("count")?, 2);
/// assert_eq!(tokens.next::<char>("element")?, 'a');
/// assert_eq!(tokens.next::<char>("element")?, 'b');
/// assert!(tokens.finish().is_ok());
/// # Ok::<(), multistack::Error>(())
/// ```
pub struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    /// Creates a token cursor over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Tokens {
            inner: input.split_whitespace(),
            consumed: 0,
        }
    }

    /// Number of tokens consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of tokens not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inner.clone().count()
    }

    /// Parses the next token as `T`.
    ///
    /// `what` names the expected field in error messages.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] when the input is exhausted or the token
    /// does not parse.
    pub fn next<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let index = self.consumed;
        let Some(token) = self.inner.next() else {
            return Err(malformed_error!(
                "Unexpected end of input, expected {} at token {}",
                what,
                index
            ));
        };
        self.consumed += 1;

        token
            .parse::<T>()
            .map_err(|error| malformed_error!("Invalid {} '{}' at token {}: {}", what, token, index, error))
    }

    /// Parses the next token as a non-negative count.
    ///
    /// # Errors
    /// Same as [`Tokens::next`].
    pub fn count(&mut self, what: &str) -> Result<usize> {
        self.next::<usize>(what)
    }

    /// Verifies that no tokens are left.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] naming the first unexpected token.
    pub fn finish(mut self) -> Result<()> {
        match self.inner.next() {
            None => Ok(()),
            Some(token) => Err(malformed_error!(
                "Trailing token '{}' at token {}",
                token,
                self.consumed
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn parses_mixed_tokens() {
        let mut tokens = Tokens::new(" 3\t-4\n\n2.5 x ");
        assert_eq!(tokens.remaining(), 4);
        assert_eq!(tokens.count("count").unwrap(), 3);
        assert_eq!(tokens.next::<i32>("element").unwrap(), -4);
        assert_eq!(tokens.next::<f64>("element").unwrap(), 2.5);
        assert_eq!(tokens.next::<char>("element").unwrap(), 'x');
        assert_eq!(tokens.consumed(), 4);
        assert_eq!(tokens.remaining(), 0);
        assert!(tokens.finish().is_ok());
    }

    #[test]
    fn reports_end_of_input() {
        let mut tokens = Tokens::new("1");
        tokens.count("count").unwrap();

        match tokens.next::<u8>("element") {
            Err(Error::Malformed { message, .. }) => {
                assert!(message.contains("expected element at token 1"));
            }
            other => panic!("Expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn reports_bad_token() {
        let mut tokens = Tokens::new("-1");
        match tokens.count("region count") {
            Err(Error::Malformed { message, .. }) => {
                assert!(message.contains("Invalid region count '-1' at token 0"));
            }
            other => panic!("Expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn reports_trailing_token() {
        let mut tokens = Tokens::new("1 2");
        tokens.count("count").unwrap();
        assert!(matches!(tokens.finish(), Err(Error::Malformed { .. })));
    }
}
