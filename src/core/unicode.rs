//! 문자 분류 유틸리티

/// 영어 모음(a, e, i, o, u, y)인지 확인 (대소문자 무시)
pub fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'A' | 'E' | 'I' | 'O' | 'U' | 'Y'
    )
}
