//! 규칙 기반 영어 음절 수 추정
//!
//! 사전이나 학습 모델 없이 모음군 개수, 철자 패턴 보정, 불규칙 단어 예외 테이블로
//! 단어 하나의 음절 수를 추정합니다.
//!
//! ```
//! use syllable_counter::{SyllableCounter, Syllables};
//!
//! let counter = SyllableCounter::with_defaults();
//! assert_eq!(counter.count("happier"), 3);
//! assert_eq!("little".syllables(), 2);
//! ```

pub mod config;
pub mod core;
pub mod counter;
pub mod error;
pub mod exceptions;
pub mod patterns;

pub use config::SyllableConfig;
pub use counter::{shared, SyllableCounter, Syllables};
pub use error::SetupError;
pub use exceptions::ExceptionTable;
pub use patterns::PatternTable;
