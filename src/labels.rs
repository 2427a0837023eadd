//! Label Color Assignment
//!
//! Project labels get a stable display color by hashing the label text
//! into a small palette, so "Work" renders the same color everywhere
//! without storing a color on the record.

/// The label palette, in bucket order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColor {
    Blue,
    Purple,
    Red,
    Orange,
    Green,
}

pub const PALETTE: [LabelColor; 5] = [
    LabelColor::Blue,
    LabelColor::Purple,
    LabelColor::Red,
    LabelColor::Orange,
    LabelColor::Green,
];

/// Hash a label into a palette bucket.
///
/// Uses the classic `h = unit + 31*h` string hash over the label's UTF-16
/// code units with 32-bit wrapping arithmetic, so a label keeps its bucket
/// across sessions and platforms. Hashing code units rather than chars
/// means a non-BMP character contributes its surrogate pair, same as the
/// dashboard UIs this core was extracted from.
pub fn label_bucket(label: &str) -> usize {
    let mut hash: i32 = 0;
    for unit in label.encode_utf16() {
        hash = i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash.unsigned_abs() as usize % PALETTE.len()
}

/// The display color for a label
pub fn label_color(label: &str) -> LabelColor {
    PALETTE[label_bucket(label)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_label_same_color() {
        assert_eq!(label_color("Work"), label_color("Work"));
        assert_eq!(label_bucket("errands"), label_bucket("errands"));
    }

    #[test]
    fn test_known_bucket() {
        // h("Work") = 2702129, 2702129 % 5 = 4
        assert_eq!(label_bucket("Work"), 4);
        assert_eq!(label_color("Work"), LabelColor::Green);
    }

    #[test]
    fn test_non_bmp_hashes_surrogate_pair() {
        // U+1F980 is the code units 0xD83E 0xDD80:
        // h = 0xDD80 + 31*0xD83E = 1772802, 1772802 % 5 = 2
        assert_eq!(label_bucket("🦀"), 2);
    }

    #[test]
    fn test_bucket_in_range() {
        for label in ["", "a", "Work", "🦀", "a longer label with spaces"] {
            assert!(label_bucket(label) < PALETTE.len());
        }
    }
}
