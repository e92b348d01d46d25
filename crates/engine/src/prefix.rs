//! Prefix expansion
//!
//! The autocomplete fan-out: a stored word is indexed under every prefix
//! from the configured minimum length up to the full word, so a user
//! typing "ca", "cat", "cats" against a stored "cats" walks the same
//! progressively revealed bucket chain.

/// Iterator over the bucket prefixes of a word
///
/// Finite and restartable: call [`prefixes`] again for a fresh pass.
pub struct Prefixes<'a> {
    word: &'a str,
    ends: std::vec::IntoIter<usize>,
}

/// Expand a word into its bucket prefixes
///
/// A word shorter than `min_len` characters yields only itself.
/// Otherwise every prefix of character length `min_len..len(word)` is
/// yielded, followed by the full word. Prefixes respect char boundaries.
/// A `min_len` of zero is treated as one; the empty prefix is never a
/// bucket.
pub fn prefixes(word: &str, min_len: usize) -> Prefixes<'_> {
    let min_len = min_len.max(1);
    // Byte offset at which the prefix of k+1 chars ends
    let mut bounds: Vec<usize> = word.char_indices().skip(1).map(|(i, _)| i).collect();
    if !word.is_empty() {
        bounds.push(word.len());
    }
    let char_count = bounds.len();

    let ends: Vec<usize> = if char_count < min_len {
        vec![word.len()]
    } else {
        (min_len..char_count)
            .map(|len| bounds[len - 1])
            .chain(std::iter::once(word.len()))
            .collect()
    };

    Prefixes {
        word,
        ends: ends.into_iter(),
    }
}

impl<'a> Iterator for Prefixes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.ends.next().map(|end| &self.word[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(word: &str, min_len: usize) -> Vec<&str> {
        prefixes(word, min_len).collect()
    }

    #[test]
    fn test_expansion() {
        assert_eq!(collect("cats", 2), vec!["ca", "cat", "cats"]);
        assert_eq!(collect("hello", 2), vec!["he", "hel", "hell", "hello"]);
    }

    #[test]
    fn test_short_word_yields_itself() {
        assert_eq!(collect("ok", 3), vec!["ok"]);
        assert_eq!(collect("a", 2), vec!["a"]);
    }

    #[test]
    fn test_word_at_min_length() {
        assert_eq!(collect("ok", 2), vec!["ok"]);
    }

    #[test]
    fn test_zero_min_length_treated_as_one() {
        assert_eq!(collect("cats", 0), vec!["c", "ca", "cat", "cats"]);
        assert_eq!(collect("a", 0), vec!["a"]);
    }

    #[test]
    fn test_restartable() {
        assert_eq!(collect("cats", 2), collect("cats", 2));
    }

    #[test]
    fn test_multibyte_boundaries() {
        assert_eq!(collect("übt", 2), vec!["üb", "übt"]);
    }
}
