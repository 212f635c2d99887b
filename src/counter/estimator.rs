//! 음절 수 추정기
//!
//! 파이프라인:
//! 1. 길이 0/1 단축 처리
//! 2. 정규화 (소문자, 양 끝 구두점 제거)
//! 3. 예외 테이블 조회 (성공 시 즉시 반환)
//! 4. 끝 'e' 제거
//! 5. 모음군 개수
//! 6. 가산/감산 패턴 보정
//! 7. 최소 1로 보정

use std::path::Path;

use crate::config::SyllableConfig;
use crate::core::{elide_trailing_e, is_vowel, normalize_word};
use crate::error::SetupError;
use crate::exceptions::ExceptionTable;
use crate::patterns::PatternTable;

/// 규칙 기반 영어 음절 수 추정기
///
/// 두 테이블은 생성 후 불변이므로 `&SyllableCounter`를 여러 스레드에서 그대로 공유할 수 있습니다.
///
/// # Examples
/// ```
/// use syllable_counter::SyllableCounter;
///
/// let counter = SyllableCounter::with_defaults();
/// assert_eq!(counter.count(""), 0);
/// assert_eq!(counter.count("cat"), 1);
/// assert_eq!(counter.count("table"), 2);
/// assert_eq!(counter.count("Queue!"), 1); // 예외 테이블
/// ```
#[derive(Debug, Clone)]
pub struct SyllableCounter {
    patterns: PatternTable,
    exceptions: ExceptionTable,
}

impl Default for SyllableCounter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl SyllableCounter {
    /// 이미 구성된 테이블로 생성
    pub fn with_tables(patterns: PatternTable, exceptions: ExceptionTable) -> Self {
        Self {
            patterns,
            exceptions,
        }
    }

    /// 설정에 따라 생성 (실패 시 에러 반환)
    pub fn build(config: &SyllableConfig) -> Result<Self, SetupError> {
        let patterns = PatternTable::compile()?;
        let exceptions = load_exceptions(config)?;
        Ok(Self::with_tables(patterns, exceptions))
    }

    /// 설정에 따라 생성 (실패 시 로그를 남기고 축소된 테이블로 계속)
    ///
    /// - 패턴 컴파일 실패: 빈 패턴 테이블 (모음군 개수만 사용)
    /// - 데이터셋 누락/형식 오류: 빈 예외 테이블
    pub fn new(config: &SyllableConfig) -> Self {
        let patterns = PatternTable::compile().unwrap_or_else(|e| {
            log::error!("패턴 테이블 초기화 실패: {}", e);
            PatternTable::empty()
        });

        let exceptions = load_exceptions(config).unwrap_or_else(|e| {
            match e {
                SetupError::MissingExceptionDataset { .. } => {
                    log::warn!("{}, 예외 테이블 없이 계속합니다", e)
                }
                _ => log::error!("{}, 예외 테이블 없이 계속합니다", e),
            }
            ExceptionTable::empty()
        });

        Self::with_tables(patterns, exceptions)
    }

    /// JSON 설정 파일을 읽어 생성 (실패 시 에러 반환)
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let config = SyllableConfig::from_file(path)?;
        Self::build(&config)
    }

    /// 기본 설정(내장 데이터셋)으로 생성
    pub fn with_defaults() -> Self {
        Self::new(&SyllableConfig::default())
    }

    /// 단어의 음절 수 추정
    ///
    /// 빈 문자열은 0, 한 글자는 1을 반환합니다.
    /// 그 외에는 예외 테이블 값이 있으면 그 값을, 없으면 휴리스틱 결과(최소 1)를 반환합니다.
    pub fn count(&self, word: &str) -> usize {
        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (None, _) => return 0,
            (Some(_), None) => return 1,
            _ => {}
        }

        let normalized = normalize_word(word);

        // 예외 조회는 끝 'e' 제거 전에
        if let Some(count) = self.exceptions.lookup(&normalized) {
            return count;
        }

        let stem = elide_trailing_e(&normalized);
        let estimate = vowel_groups(stem) as i64 + self.patterns.adjustment(stem);
        log::trace!("{} -> {}", word, estimate);

        if estimate > 0 {
            estimate as usize
        } else {
            1
        }
    }
}

fn load_exceptions(config: &SyllableConfig) -> Result<ExceptionTable, SetupError> {
    if !config.use_exceptions {
        return Ok(ExceptionTable::empty());
    }

    match &config.exceptions_path {
        Some(path) => ExceptionTable::load(path),
        None => ExceptionTable::bundled(),
    }
}

/// 연속된 모음 구간의 개수
fn vowel_groups(word: &str) -> usize {
    let mut count = 0;
    let mut previous_is_vowel = false;

    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_is_vowel {
            count += 1;
        }
        previous_is_vowel = vowel;
    }

    count
}
