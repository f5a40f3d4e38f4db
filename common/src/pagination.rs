//! Abstractions for page-number pagination.

use std::{fmt, num::NonZeroUsize, str::FromStr};

use derive_more::{Display, Error};

/// A page of items.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page<I> {
    /// Items on this [`Page`].
    pub items: Vec<I>,

    /// Total number of items across all the pages.
    pub total: usize,

    /// [`Arguments`] this [`Page`] was selected with.
    pub arguments: Arguments,
}

impl<I> Page<I> {
    /// Cuts a [`Page`] requested by the provided [`Arguments`] out of the
    /// provided items.
    ///
    /// Requesting a page past the last one results in an empty [`Page`].
    #[must_use]
    pub fn paginate(items: Vec<I>, arguments: Arguments) -> Self {
        let total = items.len();
        let items = items
            .into_iter()
            .skip(arguments.offset())
            .take(arguments.size().get())
            .collect();
        Self {
            items,
            total,
            arguments,
        }
    }

    /// Returns the number of pages the [`Page::total`] items span.
    ///
    /// Always at least `1`, even when there are no items at all.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.arguments.size())
    }

    /// Returns [`PageInfo`] of this [`Page`].
    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        let current = self.arguments.page().get();
        let total_pages = self.total_pages();
        PageInfo {
            current,
            total_pages,
            has_next_page: current < total_pages,
            has_previous_page: current > 1,
        }
    }

    /// Returns the pager [`window()`] around this [`Page`].
    #[must_use]
    pub fn window(&self) -> Vec<Token> {
        window(self.arguments.page().get(), self.total_pages())
    }
}

/// Information about a [`Page`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageInfo {
    /// Number of the current page, starting from `1`.
    pub current: usize,

    /// Number of all the pages.
    pub total_pages: usize,

    /// Indicator whether there is a page after the current one.
    pub has_next_page: bool,

    /// Indicator whether there is a page before the current one.
    pub has_previous_page: bool,
}

/// Pagination arguments.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Arguments {
    /// Number of the requested page, starting from `1`.
    page: Option<NonZeroUsize>,

    /// [`Size`] of the requested page.
    size: Size,
}

impl Arguments {
    /// Creates new [`Arguments`].
    ///
    /// Page `0` is clamped to the first one.
    #[must_use]
    pub fn new(page: usize, size: Size) -> Self {
        Self {
            page: NonZeroUsize::new(page),
            size,
        }
    }

    /// Returns the requested page number.
    #[must_use]
    pub fn page(&self) -> NonZeroUsize {
        self.page.unwrap_or(NonZeroUsize::MIN)
    }

    /// Returns the requested page [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the number of items preceding the requested page.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page().get() - 1).saturating_mul(self.size.get())
    }
}

/// Allowed number of items on a single [`Page`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Size {
    /// 10 items.
    #[default]
    Ten,

    /// 20 items.
    Twenty,

    /// 50 items.
    Fifty,

    /// 100 items.
    Hundred,
}

impl Size {
    /// All the allowed [`Size`]s, in ascending order.
    pub const ALL: [Self; 4] =
        [Self::Ten, Self::Twenty, Self::Fifty, Self::Hundred];

    /// Returns the number of items this [`Size`] stands for.
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl TryFrom<usize> for Size {
    type Error = UnsupportedSize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.get() == value)
            .ok_or(UnsupportedSize(value))
    }
}

impl FromStr for Size {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .ok()
            .and_then(|n| Self::try_from(n).ok())
            .ok_or("page size must be one of 10, 20, 50, 100")
    }
}

/// Error of converting a number into a [`Size`].
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("unsupported page size: {_0}")]
pub struct UnsupportedSize(#[error(not(source))] pub usize);

/// Single token of a pager [`window()`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    /// Page number.
    Page(usize),

    /// Skipped range of pages.
    Ellipsis,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

/// Returns the number of pages `total` items span with the provided [`Size`].
#[must_use]
pub fn total_pages(total: usize, size: Size) -> usize {
    total.div_ceil(size.get()).max(1)
}

/// Builds a compact pager window for the `current` page out of `total`
/// pages.
///
/// The window never exceeds 7 [`Token`]s and always contains the first and
/// the last pages.
#[must_use]
pub fn window(current: usize, total: usize) -> Vec<Token> {
    use Token::{Ellipsis, Page};

    let last = total.max(1);
    if last <= 7 {
        return (1..=last).map(Page).collect();
    }
    if current <= 3 {
        return vec![
            Page(1),
            Page(2),
            Page(3),
            Ellipsis,
            Page(last - 1),
            Page(last),
        ];
    }
    if current >= last - 2 {
        return vec![
            Page(1),
            Ellipsis,
            Page(last - 2),
            Page(last - 1),
            Page(last),
        ];
    }
    vec![
        Page(1),
        Ellipsis,
        Page(current - 1),
        Page(current),
        Page(current + 1),
        Ellipsis,
        Page(last),
    ]
}

#[cfg(test)]
mod spec {
    use proptest::prelude::*;

    use super::{total_pages, window, Arguments, Page, Size, Token};

    fn pages(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn window_lists_all_pages_when_few() {
        assert_eq!(pages(&window(1, 1)), ["1"]);
        assert_eq!(pages(&window(4, 7)), ["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn window_near_start() {
        assert_eq!(pages(&window(1, 50)), ["1", "2", "3", "…", "49", "50"]);
        assert_eq!(pages(&window(3, 50)), ["1", "2", "3", "…", "49", "50"]);
    }

    #[test]
    fn window_near_end() {
        assert_eq!(pages(&window(48, 50)), ["1", "…", "48", "49", "50"]);
        assert_eq!(pages(&window(50, 50)), ["1", "…", "48", "49", "50"]);
    }

    #[test]
    fn window_in_the_middle() {
        assert_eq!(
            pages(&window(4, 50)),
            ["1", "…", "3", "4", "5", "…", "50"],
        );
        assert_eq!(
            pages(&window(25, 50)),
            ["1", "…", "24", "25", "26", "…", "50"],
        );
    }

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, Size::Ten), 1);
        assert_eq!(total_pages(10, Size::Ten), 1);
        assert_eq!(total_pages(11, Size::Ten), 2);
        assert_eq!(total_pages(500, Size::Twenty), 25);
    }

    #[test]
    fn paginates_and_clips() {
        let items = (1..=25).collect::<Vec<_>>();

        let page = Page::paginate(items.clone(), Arguments::new(3, Size::Ten));
        assert_eq!(page.items, [21, 22, 23, 24, 25]);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages(), 3);
        assert!(!page.page_info().has_next_page);
        assert!(page.page_info().has_previous_page);

        let page = Page::paginate(items, Arguments::new(999, Size::Ten));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 25);
    }

    #[test]
    fn clamps_page_numbers() {
        let args = Arguments::new(0, Size::Ten);
        assert_eq!(args.page().get(), 1);
        assert_eq!(args.offset(), 0);

        let args = Arguments::new(3, Size::Fifty);
        assert_eq!(args.page().get(), 3);
        assert_eq!(args.offset(), 100);
    }

    #[test]
    fn parses_sizes() {
        assert_eq!("20".parse::<Size>().unwrap(), Size::Twenty);
        assert_eq!(Size::try_from(100).unwrap(), Size::Hundred);
        assert!("15".parse::<Size>().is_err());
        assert!(Size::try_from(0).is_err());
        assert_eq!(Size::default(), Size::Ten);
    }

    fn size() -> impl Strategy<Value = Size> {
        prop_oneof![
            Just(Size::Ten),
            Just(Size::Twenty),
            Just(Size::Fifty),
            Just(Size::Hundred),
        ]
    }

    proptest! {
        #[test]
        fn window_is_bounded(total in 1usize..10_000, seed in any::<usize>()) {
            let current = seed % total + 1;
            let tokens = window(current, total);

            prop_assert!(tokens.len() <= 7);
            prop_assert_eq!(tokens.first(), Some(&Token::Page(1)));
            prop_assert_eq!(tokens.last(), Some(&Token::Page(total)));
        }

        #[test]
        fn pages_cover_all_items(len in 0usize..450, size in size()) {
            let items = (0..len).collect::<Vec<_>>();
            let last = total_pages(len, size);

            let collected = (1..=last)
                .flat_map(|n| {
                    Page::paginate(items.clone(), Arguments::new(n, size)).items
                })
                .collect::<Vec<_>>();

            prop_assert_eq!(collected, items);
        }
    }
}
