//! Fixed-size paging over an already fetched question list
//!
//! Paging happens in memory after the whole matching set has been loaded, so
//! totals and pages always come from the same snapshot.
//!
//! # Example
//!
//! ```rust
//! use trivia_service::trivia::pagination::{paginate, Page};
//!
//! let items: Vec<u32> = (1..=25).collect();
//! assert_eq!(paginate(&items, Page::new(3)), vec![21, 22, 23, 24, 25]);
//! assert!(paginate(&items, Page::new(4)).is_empty());
//! ```

/// Number of questions on every page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    number: usize,
}

impl Page {
    /// Page `number`, where 0 is treated as the first page
    #[must_use]
    pub const fn new(number: usize) -> Self {
        Self {
            number: if number == 0 { 1 } else { number },
        }
    }

    #[must_use]
    pub const fn first() -> Self {
        Self { number: 1 }
    }

    /// Interpret a raw `page` query value
    ///
    /// Missing or non-integer values select the first page, as do zero and
    /// negative numbers. Integers too large for `usize` select the last
    /// possible page, which is always past the data.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(value) = raw.map(str::trim) else {
            return Self::first();
        };
        let digits = value.strip_prefix('+').unwrap_or(value);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Self::first();
        }

        Self::new(digits.parse::<usize>().unwrap_or(usize::MAX))
    }

    pub const fn number(&self) -> usize {
        self.number
    }

    /// Index of the first item on this page
    pub const fn offset(&self) -> usize {
        (self.number - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }

    pub const fn limit(&self) -> usize {
        QUESTIONS_PER_PAGE
    }

    /// The part of `items` that falls on this page, empty past the end
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.limit()).min(items.len());
        &items[start..end]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}

/// Copy the items of `page` out of `items`
pub fn paginate<T: Clone>(items: &[T], page: Page) -> Vec<T> {
    page.slice(items).to_vec()
}
