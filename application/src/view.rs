//! Plain-text views of the user directory.

use std::fmt::Write as _;

use common::{pagination::Token, DateTimeOf};
use itertools::Itertools as _;
use service::{
    command::ensure_seeded::Outcome,
    domain::User,
    read::user::{list, summary::Counts},
};
use time::{format_description::BorrowedFormatItem, macros::format_description};

/// Format of [`User`] joining dates.
const JOINED_AT: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:short] [day padding:none] [year], [hour repr:12 padding:none]:[minute] [period]"
);

/// Column headers of the [`users()`] table.
const HEADERS: [&str; 6] = [
    "ORGANIZATION",
    "USERNAME",
    "EMAIL",
    "PHONE NUMBER",
    "DATE JOINED",
    "STATUS",
];

/// Renders the table of the listed [`User`]s, followed by the page counter
/// and the [`pager()`].
#[must_use]
pub fn users(listing: &list::Listing) -> String {
    let rows = listing
        .page
        .items
        .iter()
        .map(|u| {
            [
                u.organization.to_string(),
                u.name.to_string(),
                u.email.to_string(),
                u.phone.to_string(),
                joined_at(&u.joined_at),
                u.status.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let widths = HEADERS.map(str::len);
    let widths = rows.iter().fold(widths, |mut widths, row| {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
        widths
    });

    let mut out = line(HEADERS, widths);
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row.iter().map(String::as_str), widths));
        out.push('\n');
    }
    if rows.is_empty() {
        out.push_str("No users found\n");
    }
    let info = listing.page.page_info();
    _ = writeln!(
        out,
        "\nShowing {} out of {} (page {} of {})",
        listing.page.items.len(),
        listing.page.total,
        info.current,
        info.total_pages,
    );
    out.push_str(&pager(&listing.page));
    out
}

/// Renders a single table line of the provided cells padded to the provided
/// column widths.
fn line<'a>(
    cells: impl IntoIterator<Item = &'a str>,
    widths: [usize; HEADERS.len()],
) -> String {
    cells
        .into_iter()
        .zip(widths)
        .map(|(cell, w)| format!("{cell:<w$}"))
        .join("  ")
        .trim_end()
        .to_owned()
}

/// Renders the pager window of the provided [`list::Page`], with the current
/// page number in brackets and arrows towards the adjacent pages.
#[must_use]
pub fn pager(page: &list::Page) -> String {
    let info = page.page_info();
    let window = page.window().into_iter().map(|t| match t {
        Token::Page(n) if n == info.current => format!("[{n}]"),
        Token::Page(_) | Token::Ellipsis => t.to_string(),
    });

    info.has_previous_page
        .then(|| "‹".to_owned())
        .into_iter()
        .chain(window)
        .chain(info.has_next_page.then(|| "›".to_owned()))
        .join(" ")
}

/// Renders the provided seeding [`Outcome`].
#[must_use]
pub fn seeded(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Seeded(n) => format!("Seeded {n} users"),
        Outcome::Unchanged => "Users are seeded already".to_owned(),
        Outcome::Skipped => {
            "Seeding skipped: storage is unavailable".to_owned()
        }
    }
}

/// Renders the summary cards of the provided [`Counts`].
#[must_use]
pub fn summary(counts: &Counts) -> String {
    let Counts {
        total,
        active,
        with_loans,
        with_savings,
    } = counts;

    format!(
        "USERS                {total}\n\
         ACTIVE USERS         {active}\n\
         USERS WITH LOANS     {with_loans} (estimate)\n\
         USERS WITH SAVINGS   {with_savings} (estimate)",
    )
}

/// Renders details of the provided [`User`].
#[must_use]
pub fn user(user: &User) -> String {
    [
        ("User ID", user.id.to_string()),
        ("Full Name", user.name.to_string()),
        ("Phone Number", user.phone.to_string()),
        ("Email Address", user.email.to_string()),
        ("Organization", user.organization.to_string()),
        ("Date Joined", joined_at(&user.joined_at)),
        ("Status", user.status.to_string()),
    ]
    .into_iter()
    .format_with("\n", |(label, value), f| {
        f(&format_args!("{label:<15}{value}"))
    })
    .to_string()
}

/// Renders the provided joining [`DateTimeOf`] in UTC.
fn joined_at<Of: ?Sized>(at: &DateTimeOf<Of>) -> String {
    time::OffsetDateTime::from(*at)
        .format(JOINED_AT)
        .unwrap_or_else(|_| at.to_rfc3339())
}
