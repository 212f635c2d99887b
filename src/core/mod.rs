pub mod normalize;
pub mod unicode;

pub use normalize::{elide_trailing_e, normalize_word};
pub use unicode::is_vowel;
