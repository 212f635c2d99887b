//! 단어 정규화
//!
//! 예외 조회와 모음군 계산 전에 적용되는 변환입니다.

use std::sync::LazyLock;

use regex::Regex;

/// 양 끝의 유니코드 구두점(P 범주)과 공백
static EDGE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{P}\s]+|[\p{P}\s]+$").unwrap());

/// 소문자 변환 후 양 끝의 구두점/공백 제거
///
/// 예외 테이블 키도 같은 함수로 정규화되므로 조회 키와 저장 키가 항상 일치합니다.
pub fn normalize_word(word: &str) -> String {
    let lowered = word.to_lowercase();
    EDGE_PUNCTUATION.replace_all(&lowered, "").into_owned()
}

/// 마지막 글자가 'e'이면 제거 (묵음 e)
///
/// 휴리스틱 경로에서만 사용합니다. 예외 조회 키에는 적용하지 않습니다.
pub fn elide_trailing_e(word: &str) -> &str {
    word.strip_suffix('e').unwrap_or(word)
}
