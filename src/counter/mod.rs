//! 음절 수 추정
//!
//! 예외 테이블 조회, 모음군 계산, 패턴 보정을 묶어 최종 음절 수를 계산합니다.

mod estimator;
mod shared;

pub use estimator::SyllableCounter;
pub use shared::{shared, Syllables};
