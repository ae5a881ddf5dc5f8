//! Filter construction for transaction queries.
//!
//! Query parameters arrive as raw strings and are never rejected. They are parsed
//! leniently (leading numeric prefix, the rest ignored) and turned into `SeaORM`
//! conditions built from four kinds of clause: equality, price range, case-insensitive
//! text containment and month-of-sale. A parameter that does not parse produces a
//! clause that matches nothing rather than an error.

use crate::entities::transaction;
use sea_orm::{
    Condition,
    prelude::*,
    sea_query::{Expr, LikeExpr, SimpleExpr},
};

/// Escape character used in LIKE patterns built from user input.
const LIKE_ESCAPE: char = '\\';

/// Parses the leading integer of `raw`, skipping leading whitespace.
///
/// `"3"`, `" 03"` and `"3rd"` all give `Some(3)`; `"march"` and `""` give `None`.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

/// Parses the leading decimal number of `raw`, skipping leading whitespace.
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent. `"12.5kg"` gives `Some(12.5)`, `".5"` gives `Some(0.5)`,
/// `"abc"` gives `None`. Never returns a non-finite value.
#[must_use]
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let bytes = raw.trim_start().as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    std::str::from_utf8(&bytes[..end])
        .ok()?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parses a `month` query parameter. Missing or non-numeric values give `None`.
#[must_use]
pub fn parse_month(raw: Option<&str>) -> Option<i64> {
    raw.and_then(parse_leading_int)
}

/// A clause that matches no rows.
fn match_nothing() -> SimpleExpr {
    Expr::val(1).eq(0)
}

/// Records whose `date_of_sale` falls in calendar month `month` (1-12) of any year.
///
/// `None` matches nothing, as does any number outside 1-12.
#[must_use]
pub fn sold_in_month(month: Option<i64>) -> SimpleExpr {
    month.map_or_else(match_nothing, |m| {
        Expr::cust_with_values(
            r#"CAST(strftime('%m', "date_of_sale") AS INTEGER) = ?"#,
            [m],
        )
    })
}

/// Records with the given `sold` flag.
#[must_use]
pub fn sold(flag: bool) -> SimpleExpr {
    transaction::Column::Sold.eq(flag)
}

/// Records priced in `[min, max)`, or `[min, ∞)` when `max` is `None`.
#[must_use]
pub fn price_in_range(min: f64, max: Option<f64>) -> Condition {
    Condition::all()
        .add(transaction::Column::Price.gte(min))
        .add_option(max.map(|max| transaction::Column::Price.lt(max)))
}

/// Case-insensitive substring match on `folded_column`, a lowercase copy of a text
/// field. LIKE wildcards in `needle` match literally.
fn contains_ignore_case(folded_column: transaction::Column, needle: &str) -> SimpleExpr {
    let escaped = needle
        .to_lowercase()
        .replace(LIKE_ESCAPE, "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    folded_column.like(LikeExpr::new(format!("%{escaped}%")).escape(LIKE_ESCAPE))
}

/// Free-text search over title, description and price.
///
/// An empty term matches every record. Otherwise a record matches when its title or
/// description contains the term, or its price equals the term's leading number.
/// Text matching goes through the lowercase copies of title and description, so
/// case folding covers non-ASCII letters too.
#[must_use]
pub fn search(term: &str) -> Condition {
    if term.is_empty() {
        return Condition::all();
    }

    Condition::any()
        .add(contains_ignore_case(transaction::Column::TitleFolded, term))
        .add(contains_ignore_case(
            transaction::Column::DescriptionFolded,
            term,
        ))
        .add_option(parse_leading_float(term).map(|price| transaction::Column::Price.eq(price)))
}
