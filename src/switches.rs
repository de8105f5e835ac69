//! Detect whether an option was explicitly supplied on the command line by
//! scanning the raw argument vector.
//!
//! This is an approximation of a parser, not a parser. It recognizes:
//!
//! - a token that starts with one of the option's switches (`--apple`,
//!   `--apple=9`, `-a`, `-a9`);
//! - a clustered short-flag group (`-BcDa`) containing the option's letter,
//!   provided every letter before it belongs to the [`ShortAlphabet`].
//!
//! The cluster walk stops at the first letter outside the alphabet, since the
//! rest of the token is presumed to be an attached value. It does not mark the
//! token as consumed, so a value that happens to begin with alphabet letters
//! (`-Bad` when `a` and `B` are both short switches) reports a match. Known
//! false positive; callers with a parser that reports value sources should
//! prefer that.

use std::collections::BTreeSet;

use crate::types::{OptionSpec, short_letter};

/// The set of single-letter switches in use across a command's options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortAlphabet(BTreeSet<char>);

impl ShortAlphabet {
    pub fn from_options<'a, I>(options: I) -> Self
    where
        I: IntoIterator<Item = &'a OptionSpec>,
    {
        Self(options.into_iter().flat_map(|o| o.short_switches()).collect())
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<char> for ShortAlphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&str> for ShortAlphabet {
    fn from(letters: &str) -> Self {
        letters.chars().collect()
    }
}

/// Return `true` if any of `switches` appears in `args`.
pub fn was_explicitly_supplied<S, A>(switches: &[S], alphabet: &ShortAlphabet, args: &[A]) -> bool
where
    S: AsRef<str>,
    A: AsRef<str>,
{
    args.iter()
        .map(A::as_ref)
        .filter(|arg| arg.starts_with('-'))
        .any(|arg| {
            switches
                .iter()
                .any(|switch| token_matches(arg, switch.as_ref(), alphabet))
        })
}

fn token_matches(arg: &str, switch: &str, alphabet: &ShortAlphabet) -> bool {
    if switch.is_empty() {
        return false;
    }
    if arg.starts_with(switch) {
        return true;
    }

    let Some(letter) = short_letter(switch) else {
        return false;
    };

    let mut cluster = arg.chars().skip(1).peekable();
    if matches!(cluster.peek(), None | Some('-')) {
        return false;
    }
    for c in cluster {
        if !alphabet.contains(c) {
            break;
        }
        if c == letter {
            return true;
        }
    }
    false
}
