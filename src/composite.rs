use core::fmt;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

/// A word composed of multiple borrowed fragments, such as a root and an
/// ending, which is compared and displayed as if it were one string.
#[derive(Clone)]
pub struct Composite<'a, const N: usize> {
    storage: ArrayVec<&'a str, N>,
}

impl<'a, const N: usize> Composite<'a, N> {
    /// Concatenate the given fragments together into a single composite word.
    ///
    /// # Panics
    ///
    /// Panics if more than `N` fragments are provided.
    pub fn new<I>(iter: I) -> Composite<'a, N>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Composite {
            storage: iter.into_iter().collect(),
        }
    }

    /// Iterate over fragments.
    pub fn strings(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.storage.iter().copied()
    }

    /// Iterate over characters in the composite word.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.storage.iter().flat_map(|s| s.chars())
    }

    /// The length of the composite word in bytes.
    pub fn len(&self) -> usize {
        self.storage.iter().map(|s| s.len()).sum()
    }

    /// Test if the composite word is empty.
    pub fn is_empty(&self) -> bool {
        self.storage.iter().all(|s| s.is_empty())
    }
}

impl<'a, const A: usize, const B: usize> PartialEq<Composite<'a, A>> for Composite<'_, B> {
    fn eq(&self, other: &Composite<'a, A>) -> bool {
        let a = self.chars();
        let b = other.chars();
        a.eq(b)
    }
}

impl<const N: usize> PartialEq<str> for Composite<'_, N> {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<const N: usize> PartialEq<&str> for Composite<'_, N> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl<const N: usize> Eq for Composite<'_, N> {}

impl<const N: usize> Hash for Composite<'_, N> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        for c in self.chars() {
            c.hash(state);
        }
    }
}

impl<const N: usize> fmt::Display for Composite<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for string in &self.storage {
            f.write_str(string)?;
        }

        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Composite<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.strings()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Composite;

    #[test]
    fn test_composite() {
        let a = Composite::<2>::new(["am", "at"]);
        let b = Composite::<3>::new(["a", "ma", "t"]);

        assert_eq!(a.to_string(), "amat");
        assert_eq!(a, b);
        assert_eq!(a, "amat");
        assert_eq!(a.len(), 4);
        assert_eq!(a.strings().collect::<Vec<_>>(), ["am", "at"]);
        assert!(Composite::<2>::new(["", ""]).is_empty());
    }
}
