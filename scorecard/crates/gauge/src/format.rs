//! Compact formatters for profile statistics.

const MILLION: u64 = 1_000_000;
const THOUSAND: u64 = 1_000;
const ADDRESS_MAX_UNSHORTENED: usize = 12;
const ADDRESS_HEAD: usize = 6;
const ADDRESS_TAIL: usize = 4;

/// Format a follower-style count with a `K`/`M` suffix.
///
/// The suffixed forms keep one decimal, rounding halves up.
///
/// # Examples
///
/// ```
/// use gauge::format_count;
///
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1_500), "1.5K");
/// assert_eq!(format_count(1_250), "1.3K");
/// assert_eq!(format_count(2_500_000), "2.5M");
/// ```
#[must_use]
pub fn format_count(count: u64) -> String {
    if count >= MILLION {
        with_suffix(count, MILLION, 'M')
    } else if count >= THOUSAND {
        with_suffix(count, THOUSAND, 'K')
    } else {
        count.to_string()
    }
}

fn with_suffix(count: u64, unit: u64, suffix: char) -> String {
    let tenth = u128::from(unit.div_euclid(10));
    let tenths = (u128::from(count) + tenth.div_euclid(2)).div_euclid(tenth);
    format!(
        "{whole}.{fraction}{suffix}",
        whole = tenths.div_euclid(10),
        fraction = tenths.rem_euclid(10)
    )
}

/// Shorten a long address to its first six and last four characters.
///
/// Addresses of twelve characters or fewer are returned unchanged. Lengths
/// are counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use gauge::format_address;
///
/// assert_eq!(format_address("0x1234567890abcdef"), "0x1234...cdef");
/// assert_eq!(format_address("0xabc"), "0xabc");
/// ```
#[must_use]
pub fn format_address(address: &str) -> String {
    let length = address.chars().count();
    if length <= ADDRESS_MAX_UNSHORTENED {
        return address.to_owned();
    }
    let head: String = address.chars().take(ADDRESS_HEAD).collect();
    let tail: String = address
        .chars()
        .skip(length.saturating_sub(ADDRESS_TAIL))
        .collect();
    format!("{head}...{tail}")
}
