//! 정규식 엔진이 지원하지 않는 패턴의 수동 구현
//!
//! `regex` 크레이트는 역참조(`\1`)와 부정 전방탐색(`(?!...)`)을 지원하지 않으므로
//! 아래 두 패턴은 문자 비교로 직접 판정합니다.
//! 대소문자 무시, 줄 단위 앵커(`$`는 각 줄의 끝) 의미를 그대로 따릅니다.

use crate::core::is_vowel;

/// 역참조 패턴을 대체하는 문자 비교 함수
pub type RuleFn = fn(&str) -> bool;

/// `(.)(?!\1)([aeiouy])\2l$`
pub const DOUBLED_VOWEL_L: &str = r"(.)(?!\1)([aeiouy])\2l$";

/// `(.)(?!\1)[gq]ua(.)(?!\2)[aeiou]`
pub const GUA_QUA_VOWEL: &str = r"(.)(?!\1)[gq]ua(.)(?!\2)[aeiou]";

/// 패턴 원문에 대응하는 수동 구현 조회
pub fn rule_for(source: &str) -> Option<RuleFn> {
    match source {
        DOUBLED_VOWEL_L => Some(doubled_vowel_l),
        GUA_QUA_VOWEL => Some(gua_qua_vowel),
        _ => None,
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn same(a: char, b: char) -> bool {
    fold(a) == fold(b)
}

fn is_plain_vowel(c: char) -> bool {
    matches!(fold(c), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// 줄 끝이 `X V V l` 이고 X != V (V는 y 포함 모음)
///
/// 예: "wool", "feel", "cool" (X=w/f/c)
fn doubled_vowel_l(text: &str) -> bool {
    text.split('\n').any(|line| {
        let chars: Vec<char> = line.chars().collect();
        let n = chars.len();
        if n < 4 {
            return false;
        }
        let (x, v, v2, l) = (chars[n - 4], chars[n - 3], chars[n - 2], chars[n - 1]);
        is_vowel(v) && same(v, v2) && same(l, 'l') && !same(x, v)
    })
}

/// 어딘가에 `X [gq] u a Y V` 가 있고 X != [gq], Y != V (V는 y 제외 모음)
///
/// 예: "equate", "aguabo"
fn gua_qua_vowel(text: &str) -> bool {
    text.split('\n').any(|line| {
        let chars: Vec<char> = line.chars().collect();
        chars.windows(6).any(|w| {
            let gq = fold(w[1]);
            (gq == 'g' || gq == 'q')
                && !same(w[0], w[1])
                && same(w[2], 'u')
                && same(w[3], 'a')
                && is_plain_vowel(w[5])
                && !same(w[4], w[5])
        })
    })
}
