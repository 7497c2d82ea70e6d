//! Source of the titles shown by the bar

/// Supplies the title for each page of a paged view.
///
/// The bar only borrows titles. Implementations hand out `&str` views of
/// data they own and the bar never copies or stores them between frames.
pub trait TextProvider {
    /// Number of titles available
    fn count(&self) -> usize;

    /// Title of the page at `index`. Callers guarantee
    /// `index < self.count()`.
    fn text_at(&self, index: usize) -> &str;
}

impl<T: TextProvider + ?Sized> TextProvider for &T {
    fn count(&self) -> usize {
        (**self).count()
    }

    fn text_at(&self, index: usize) -> &str {
        (**self).text_at(index)
    }
}

impl TextProvider for [String] {
    fn count(&self) -> usize {
        self.len()
    }

    fn text_at(&self, index: usize) -> &str {
        self[index].as_str()
    }
}

impl TextProvider for [&str] {
    fn count(&self) -> usize {
        self.len()
    }

    fn text_at(&self, index: usize) -> &str {
        self[index]
    }
}

impl TextProvider for Vec<String> {
    fn count(&self) -> usize {
        self.len()
    }

    fn text_at(&self, index: usize) -> &str {
        self[index].as_str()
    }
}

impl TextProvider for Vec<&str> {
    fn count(&self) -> usize {
        self.len()
    }

    fn text_at(&self, index: usize) -> &str {
        self[index]
    }
}

impl<const N: usize> TextProvider for [&str; N] {
    fn count(&self) -> usize {
        N
    }

    fn text_at(&self, index: usize) -> &str {
        self[index]
    }
}

#[cfg(test)]
#[path = "./text_tests.rs"]
mod tests;
