//! List-building helpers for describing content and page lists declaratively.
//!
//! Each helper only concatenates; author order is always kept.
//!
//! ```
//! use folio_document::compose::{self, Compose};
//! use folio_document::Content;
//! use folio_types::Point;
//!
//! let show_footer = false;
//! let content: Content = compose::block([
//!     Content::text("Title", Point::new(72.0, 72.0)),
//!     compose::when(show_footer, || Content::text("Footer", Point::new(72.0, 760.0))),
//!     compose::each(1..=3, |i| Content::text(format!("Row {i}"), Point::new(72.0, 100.0 + 14.0 * i as f64))),
//! ]);
//! assert_eq!(content.len(), 4);
//! ```

use crate::content::Content;
use crate::page::Page;

/// A value that can be concatenated onto another of its kind.
pub trait Compose: Default {
    fn concat(self, next: Self) -> Self;
}

impl Compose for Content {
    fn concat(self, next: Self) -> Self {
        self.then(next)
    }
}

impl Compose for Vec<Page> {
    fn concat(mut self, next: Self) -> Self {
        self.extend(next);
        self
    }
}

/// Sequential parts, in written order.
pub fn block<T: Compose>(parts: impl IntoIterator<Item = T>) -> T {
    parts.into_iter().fold(T::default(), T::concat)
}

/// Contributes nothing when absent.
pub fn optional<T: Compose>(part: Option<T>) -> T {
    part.unwrap_or_default()
}

/// Builds the part only when `condition` holds.
pub fn when<T: Compose>(condition: bool, part: impl FnOnce() -> T) -> T {
    optional(condition.then(part))
}

/// Exactly one of the two branches.
pub fn either<T: Compose>(
    condition: bool,
    first: impl FnOnce() -> T,
    second: impl FnOnce() -> T,
) -> T {
    if condition { first() } else { second() }
}

/// The concatenation of each iteration's part, in iteration order.
pub fn each<I, T, F>(items: I, mut part: F) -> T
where
    I: IntoIterator,
    T: Compose,
    F: FnMut(I::Item) -> T,
{
    block(items.into_iter().map(|item| part(item)))
}
