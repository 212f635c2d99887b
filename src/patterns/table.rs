//! 음절 보정 패턴 테이블
//!
//! 매칭되면 음절 수를 1 늘리는 가산 패턴과 1 줄이는 감산 패턴을 컴파일하여 보관합니다.
//! 각 패턴은 단어 안에서 몇 번 매칭되든 최대 1만 기여합니다.

use regex::{Regex, RegexBuilder};

use super::rules::{rule_for, RuleFn};
use crate::error::SetupError;

/// 가산 패턴 (매칭 시 +1)
#[rustfmt::skip]
pub const ADDITIVE_PATTERNS: &[&str] = &[
    "ia", "riet", "dien", "iu", "io", "ii",
    "[aeiouy]bl$", "mbl$", "tl$", "sl$", "[aeiou]{3}",
    "^mc", "ism$", r"(.)(?!\1)([aeiouy])\2l$", "[^l]llien", "^coad.",
    "^coag.", "^coal.", "^coax.", r"(.)(?!\1)[gq]ua(.)(?!\2)[aeiou]", "dnt$",
    "thm$", "ier$", "iest$", "[^aeiou][aeiouy]ing$",
];

/// 감산 패턴 (매칭 시 -1)
#[rustfmt::skip]
pub const SUBTRACTIVE_PATTERNS: &[&str] = &[
    "cial", "cian", "tia", "cius", "cious",
    "gui", "ion", "iou", "sia$", ".ely$",
    "ves$", "geous$", "gious$", "[^aeiou]eful$", ".red$",
];

#[derive(Clone)]
enum Matcher {
    Regex(Regex),
    Rule(RuleFn),
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Matcher::Regex(regex) => f.debug_tuple("Regex").field(regex).finish(),
            Matcher::Rule(_) => f.write_str("Rule"),
        }
    }
}

/// 컴파일된 패턴과 원문
#[derive(Debug, Clone)]
pub struct Pattern {
    /// 진단 로그용 원문
    source: String,
    matcher: Matcher,
}

impl Pattern {
    /// 대소문자 무시 + 줄 단위 앵커 모드로 컴파일
    ///
    /// 정규식 엔진이 거부한 패턴은 수동 구현이 있으면 그것으로 대체하고,
    /// 없으면 `SetupError::BadPattern`을 반환합니다.
    pub fn compile(source: &str) -> Result<Self, SetupError> {
        let matcher = match RegexBuilder::new(source)
            .case_insensitive(true)
            .multi_line(true)
            .build()
        {
            Ok(regex) => Matcher::Regex(regex),
            Err(e) => {
                let rule = rule_for(source).ok_or_else(|| SetupError::BadPattern(source.to_string()))?;
                log::debug!("정규식 대신 수동 구현 사용: {} ({})", source, e);
                Matcher::Rule(rule)
            }
        };

        Ok(Self {
            source: source.to_string(),
            matcher,
        })
    }

    /// 패턴 원문
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 단어 어딘가에서 매칭되는지 확인
    pub fn is_match(&self, word: &str) -> bool {
        match &self.matcher {
            Matcher::Regex(regex) => regex.is_match(word),
            Matcher::Rule(rule) => rule(word),
        }
    }
}

/// 가산/감산 패턴 테이블
///
/// 생성 후 불변이며 여러 스레드에서 잠금 없이 공유할 수 있습니다.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    additive: Vec<Pattern>,
    subtractive: Vec<Pattern>,
}

impl PatternTable {
    /// 고정 패턴 목록으로 테이블 생성
    pub fn compile() -> Result<Self, SetupError> {
        Self::from_sources(ADDITIVE_PATTERNS, SUBTRACTIVE_PATTERNS)
    }

    pub(crate) fn from_sources(additive: &[&str], subtractive: &[&str]) -> Result<Self, SetupError> {
        let additive = additive
            .iter()
            .map(|source| Pattern::compile(source))
            .collect::<Result<Vec<_>, _>>()?;
        let subtractive = subtractive
            .iter()
            .map(|source| Pattern::compile(source))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            additive,
            subtractive,
        })
    }

    /// 빈 테이블 (패턴 컴파일 실패 시 모음군 계산만 수행)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn additive(&self) -> &[Pattern] {
        &self.additive
    }

    pub fn subtractive(&self) -> &[Pattern] {
        &self.subtractive
    }

    pub fn is_empty(&self) -> bool {
        self.additive.is_empty() && self.subtractive.is_empty()
    }

    /// 가산 매칭 수 - 감산 매칭 수
    pub fn adjustment(&self, word: &str) -> i64 {
        let mut delta = 0;

        for pattern in &self.additive {
            if pattern.is_match(word) {
                log::trace!("{}: +1 ({})", word, pattern.source());
                delta += 1;
            }
        }

        for pattern in &self.subtractive {
            if pattern.is_match(word) {
                log::trace!("{}: -1 ({})", word, pattern.source());
                delta -= 1;
            }
        }

        delta
    }
}
