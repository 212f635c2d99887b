//! 불규칙 단어 예외 테이블
//!
//! 휴리스틱이 틀리는 단어의 정확한 음절 수를 제공하며,
//! 조회에 성공하면 휴리스틱 계산을 완전히 건너뜁니다.

mod table;

pub use table::ExceptionTable;
