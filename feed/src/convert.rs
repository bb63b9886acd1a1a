use crate::{Error, Result};

/// Count reported for the ">10" overflow sentinel.
const OVERFLOW_COUNT: i64 = 100;

/// Turns a raw feed quantity into a stock count.
///
/// The supplier writes ">10" when there is plenty in stock and "1" when the
/// last unit is on display and should not be sold; anything else is a literal
/// count.
pub fn normalize_quantity(quantity: &str) -> Result<i64> {
    match quantity {
        ">10" => Ok(OVERFLOW_COUNT),
        "1" => Ok(0),
        other => other
            .parse()
            .map_err(|err| Error::Quantity(other.to_string(), err)),
    }
}

/// Reduces a locale-formatted price like "5'990.00 руб." to its digit-only
/// integer part, "5990".
pub fn price_conversion(price: &str) -> String {
    price
        .split('.')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

/// Splits a slice into contiguous chunks of at most `size`, in order. Lazy
/// and finite; only the last chunk may be shorter.
pub fn divide<T>(items: &[T], size: usize) -> impl Iterator<Item = &[T]> {
    items.chunks(size)
}
