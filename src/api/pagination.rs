// Page-number pagination as a lazy sequence. Pages are requested from 1
// upwards and the first empty page ends the collection. There is no page
// cap; bound an unbounded search with `Iterator::take`.

use std::iter::FusedIterator;

use super::error::ApiError;

type Fetch<'a, T> = Box<dyn FnMut(u32) -> Result<Vec<T>, ApiError> + 'a>;

/// Iterator over the pages of a collection, fetched on demand.
///
/// Yields each non-empty page, stops at the first empty page and stops after
/// yielding an error. To start over, build a new `Pages`.
pub struct Pages<'a, T> {
    fetch: Fetch<'a, T>,
    next_page: u32,
    done: bool,
}

impl<'a, T> Pages<'a, T> {
    /// Paginate with `fetch`, which receives the 1-based page number.
    pub fn new(fetch: impl FnMut(u32) -> Result<Vec<T>, ApiError> + 'a) -> Self {
        Self::starting_at(1, fetch)
    }

    pub fn starting_at(page: u32, fetch: impl FnMut(u32) -> Result<Vec<T>, ApiError> + 'a) -> Self {
        Self {
            fetch: Box::new(fetch),
            next_page: page,
            done: false,
        }
    }

    /// The page number the next call to `next` will request.
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    /// Flatten pages into individual items.
    pub fn items(self) -> Items<'a, T> {
        Items {
            pages: self,
            current: Vec::new().into_iter(),
        }
    }
}

impl<T> Iterator for Pages<'_, T> {
    type Item = Result<Vec<T>, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match (self.fetch)(self.next_page) {
            Ok(page) if page.is_empty() => {
                self.done = true;
                None
            }
            Ok(page) => {
                self.next_page += 1;
                Some(Ok(page))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<T> FusedIterator for Pages<'_, T> {}

/// Item-by-item view over [`Pages`].
pub struct Items<'a, T> {
    pages: Pages<'a, T>,
    current: std::vec::IntoIter<T>,
}

impl<T> Iterator for Items<'_, T> {
    type Item = Result<T, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(Ok(item));
            }
            match self.pages.next()? {
                Ok(page) => self.current = page.into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl<T> FusedIterator for Items<'_, T> {}
