//! 프로세스 전역 공유 인스턴스와 문자열 확장
//!
//! 최초 사용 시 한 번만 내장 데이터셋으로 초기화되며 이후 불변입니다.

use std::sync::LazyLock;

use super::estimator::SyllableCounter;

static SHARED: LazyLock<SyllableCounter> = LazyLock::new(SyllableCounter::with_defaults);

/// 공유 계산기
pub fn shared() -> &'static SyllableCounter {
    &SHARED
}

/// 문자열에서 바로 음절 수를 얻기 위한 확장 트레이트
///
/// ```
/// use syllable_counter::Syllables;
///
/// assert_eq!("table".syllables(), 2);
/// assert_eq!(String::from("cat").syllables(), 1);
/// ```
pub trait Syllables {
    fn syllables(&self) -> usize;
}

impl Syllables for str {
    fn syllables(&self) -> usize {
        shared().count(self)
    }
}
