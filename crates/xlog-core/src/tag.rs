//! Short random tags for anonymous loggers

use rand::seq::SliceRandom;
use rand::Rng;

/// Length of generated tags
pub const TAG_LENGTH: usize = 8;

const CHAR_CLASSES: [&[u8]; 4] = [
    b"!-_$*+",
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    b"0123456789",
    b"abcdefghijklmnopqrstuvwxyz",
];

/// Generate a tag of [`TAG_LENGTH`] characters using the thread RNG
pub fn short_uid() -> String {
    short_uid_with(&mut rand::thread_rng(), TAG_LENGTH)
}

/// Generate a tag of `length` characters from `rng`
///
/// Each position first picks one of four classes (symbols, uppercase,
/// digits, lowercase) uniformly, then one character of that class.
/// Uniqueness is not guaranteed.
pub fn short_uid_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .filter_map(|_| {
            let class = CHAR_CLASSES.choose(rng)?;
            class.choose(rng).map(|b| *b as char)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_some_class(c: char) -> bool {
        CHAR_CLASSES.iter().any(|class| class.contains(&(c as u8)))
    }

    #[test]
    fn test_default_length() {
        let tag = short_uid();
        assert_eq!(tag.chars().count(), TAG_LENGTH);
        assert!(tag.chars().all(in_some_class));
    }

    #[test]
    fn test_custom_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(short_uid_with(&mut rng, 3).len(), 3);
        assert_eq!(short_uid_with(&mut rng, 0), "");
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = short_uid_with(&mut StdRng::seed_from_u64(42), 16);
        let b = short_uid_with(&mut StdRng::seed_from_u64(42), 16);
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_classes_appear() {
        let mut rng = StdRng::seed_from_u64(1);
        let tag = short_uid_with(&mut rng, 400);

        assert!(tag.chars().any(|c| c.is_ascii_uppercase()));
        assert!(tag.chars().any(|c| c.is_ascii_lowercase()));
        assert!(tag.chars().any(|c| c.is_ascii_digit()));
        assert!(tag.chars().any(|c| "!-_$*+".contains(c)));
    }
}
