//! Title normalization used to detect re-runs of the same production.
//!
//! The catalog has no series entity, so two runs belong together exactly
//! when their normalized titles are equal. The key is a heuristic: distinct
//! shows can collide and divergently entered re-runs can stay apart.

/// Characters removed from a title after lowercasing.
const STRIPPED_PUNCTUATION: &[char] = &[
    '(', ')', '[', ']', '{', '}', '~', '-', '_', '.', '·', ':', '–', '—',
];

/// Derive the grouping key for a production title.
///
/// Lowercases, then drops brackets, all whitespace, ASCII digits, the marks
/// `~ - _ . · :` and the long dashes `–` and `—`.
///
/// Diacritics are not folded: `"Les Misérables"` keys to `lesmisérables`
/// and does not group with an unaccented `"Les Miserables"`.
///
/// # Examples
///
/// ```
/// use myot_core::ticketbook::normalize::normalize_title;
///
/// assert_eq!(normalize_title("Les Miserables (2016)"), "lesmiserables");
/// assert_eq!(normalize_title("Hamlet : Season 2"), "hamletseason");
/// ```
pub fn normalize_title(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| !is_stripped(*c))
        .collect()
}

/// The substring used to pre-filter catalog candidates for `title`.
///
/// Leading and trailing characters that normalization would drop anyway
/// (whitespace, digits, brackets, marks) are trimmed, so
/// `"Les Miserables (2023)"` searches for `"Les Miserables"` and finds the
/// undecorated run as well.
pub fn search_fragment(title: &str) -> &str {
    title.trim_matches(is_stripped)
}

/// Whether two titles fall into the same series.
pub fn same_series(a: &str, b: &str) -> bool {
    normalize_title(a) == normalize_title(b)
}

fn is_stripped(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_digit() || STRIPPED_PUNCTUATION.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_year_suffix_and_brackets() {
        assert_eq!(normalize_title("Les Miserables [2023]"), "lesmiserables");
        assert_eq!(normalize_title("{Wicked} (10th)"), "wickedth");
    }

    #[test]
    fn removes_all_whitespace() {
        assert_eq!(normalize_title("  The   Phantom\tof the\nOpera "), "thephantomoftheopera");
    }

    #[test]
    fn strips_marks_and_long_dashes() {
        assert_eq!(normalize_title("Rebecca ~ 10th Anniversary ~"), "rebeccathanniversary");
        assert_eq!(normalize_title("Elisabeth – Seoul — Tour"), "elisabethseoultour");
        assert_eq!(normalize_title("mozart_l'opera.rock·2"), "mozartl'operarock");
    }

    #[test]
    fn keeps_non_ascii_letters() {
        assert_eq!(normalize_title("Les Misérables"), "lesmisérables");
        assert_eq!(normalize_title("레베카 2019"), "레베카");
        assert!(!same_series("Les Misérables", "Les Miserables"));
    }

    #[test]
    fn normalization_is_idempotent() {
        let titles = [
            "Les Misérables (2016)",
            "HAMLET : Season 2",
            "  spaced   out  ",
            "Elisabeth – 10th — Anniversary",
            "",
            "İstanbul 1",
        ];
        for title in titles {
            let once = normalize_title(title);
            assert_eq!(normalize_title(&once), once, "not idempotent for {title:?}");
        }
    }

    #[test]
    fn search_fragment_trims_decoration_only() {
        assert_eq!(search_fragment("  Les Miserables (2023) "), "Les Miserables");
        assert_eq!(search_fragment("[Revival] Rent 20th"), "Revival] Rent 20th");
        assert_eq!(search_fragment("2016"), "");
    }

    #[test]
    fn same_series_is_symmetric() {
        let pairs = [
            ("Les Miserables", "Les Miserables (2023)"),
            ("Hamlet", "Macbeth"),
            ("Rent 2024", "RENT"),
        ];
        for (a, b) in pairs {
            assert_eq!(same_series(a, b), same_series(b, a));
        }
        assert!(same_series("Rent 2024", "RENT"));
        assert!(!same_series("Hamlet", "Macbeth"));
    }
}
