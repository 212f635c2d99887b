//! 음절 수 보정 패턴
//!
//! 모음군 개수만으로는 틀리는 영어 철자 패턴(이중모음, 묵음 자음군 등)을
//! 정규식으로 찾아 음절 수를 보정합니다.

mod rules;
mod table;

pub use table::{Pattern, PatternTable, ADDITIVE_PATTERNS, SUBTRACTIVE_PATTERNS};
