//! Class-string helpers.

/// Remove the excluded classes from a whitespace-separated class string and
/// prepend the given class.
///
/// The prepended class is also filtered from the current string first, so
/// applying the same call twice yields the same result.
pub fn filtered_and_prepended(current: &str, excluded: &[&str], prepend: &str) -> String {
    let mut classes = vec![prepend];

    classes.extend(
        current
            .split_whitespace()
            .filter(|class| *class != prepend && !excluded.contains(class)),
    );

    classes.join(" ")
}
