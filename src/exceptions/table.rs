//! 예외 테이블 로드 및 조회
//!
//! 줄 단위 텍스트 데이터셋을 읽어 정규화된 단어 -> 음절 수 매핑을 만듭니다.
//!
//! # 파일 형식
//! ```text
//! # 주석
//! 3 beautiful
//! 1 queue
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::normalize_word;
use crate::error::SetupError;

/// 크레이트에 포함된 기본 데이터셋
const BUNDLED_DATASET: &str = include_str!("../../data/exceptions.txt");

/// 불규칙 단어의 음절 수 테이블
///
/// 로드 후 불변입니다. 키는 `normalize_word`로 정규화되어 저장됩니다.
#[derive(Debug, Clone, Default)]
pub struct ExceptionTable {
    entries: HashMap<String, usize>,
}

impl ExceptionTable {
    /// 빈 테이블 (조회는 항상 실패)
    pub fn empty() -> Self {
        Self::default()
    }

    /// 크레이트에 포함된 데이터셋으로 테이블 생성
    pub fn bundled() -> Result<Self, SetupError> {
        Self::parse(BUNDLED_DATASET)
    }

    /// 파일에서 데이터셋 로드
    ///
    /// 파일을 한 번에 읽고 닫은 뒤 파싱합니다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| SetupError::MissingExceptionDataset {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_bytes(&bytes)?;
        log::debug!("예외 데이터셋 로드: {} ({}개)", path.display(), table.len());
        Ok(table)
    }

    /// 바이트 데이터에서 테이블 생성 (UTF-8 필수)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SetupError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| SetupError::MalformedExceptionData(format!("UTF-8 인코딩이 아닙니다: {}", e)))?;
        Self::parse(text)
    }

    /// 텍스트 데이터셋 파싱
    ///
    /// 음절 수는 1 이상의 정수여야 합니다.
    /// 형식이 잘못된 줄을 만나면 즉시 중단하고, 이번 로드에서 읽은 항목은 모두 버립니다.
    /// 같은 단어가 여러 번 나오면 마지막 값을 사용합니다.
    pub fn parse(text: &str) -> Result<Self, SetupError> {
        let mut entries = HashMap::new();

        for (index, line) in text.lines().enumerate() {
            // 빈 줄과 주석 건너뜀
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split(' ').collect();
            if parts.len() != 2 {
                return Err(SetupError::MalformedExceptionData(format!(
                    "{}행: 예상치 못한 형식: {}",
                    index + 1,
                    line
                )));
            }

            let count = parts[0].parse::<usize>().map_err(|_| {
                SetupError::MalformedExceptionData(format!(
                    "{}행: 음절 수가 정수가 아닙니다: {}",
                    index + 1,
                    line
                ))
            })?;

            // 비어 있지 않은 단어는 최소 1음절
            if count == 0 {
                return Err(SetupError::MalformedExceptionData(format!(
                    "{}행: 음절 수는 1 이상이어야 합니다: {}",
                    index + 1,
                    line
                )));
            }

            let word = normalize_word(parts[1]);
            if word.is_empty() {
                return Err(SetupError::MalformedExceptionData(format!(
                    "{}행: 빈 단어: {}",
                    index + 1,
                    line
                )));
            }

            entries.insert(word, count);
        }

        Ok(Self { entries })
    }

    /// 정규화된 단어의 음절 수 조회 (정확히 일치하는 경우만)
    pub fn lookup(&self, normalized_word: &str) -> Option<usize> {
        self.entries.get(normalized_word).copied()
    }

    /// 항목 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic() {
        let table = ExceptionTable::parse("3 oreo\n1 queue\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("oreo"), Some(3));
        assert_eq!(table.lookup("queue"), Some(1));
        assert_eq!(table.lookup("ore"), None);
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let data = "# 주석\n\n3 oreo\n   \n# 2 skipped\n";
        let table = ExceptionTable::parse(data).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("skipped"), None);
    }

    #[test]
    fn test_parse_crlf() {
        let table = ExceptionTable::parse("3 oreo\r\n1 queue\r\n").unwrap();
        assert_eq!(table.lookup("oreo"), Some(3));
        assert_eq!(table.lookup("queue"), Some(1));
    }

    #[test]
    fn test_keys_are_normalized() {
        let table = ExceptionTable::parse("3 Oreo!\n").unwrap();
        assert_eq!(table.lookup("oreo"), Some(3));
        assert_eq!(table.lookup("Oreo!"), None);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let table = ExceptionTable::parse("2 poem\n3 poem\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("poem"), Some(3));
    }

    #[test]
    fn test_malformed_count_discards_whole_load() {
        let data = "3 oreo\nnotanumber apple\n1 queue\n";
        let result = ExceptionTable::parse(data);
        match result {
            Err(SetupError::MalformedExceptionData(detail)) => {
                assert!(detail.contains("notanumber apple"));
                assert!(detail.starts_with("2행"));
            }
            other => panic!("MalformedExceptionData 기대, 실제: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_arity() {
        for line in ["3", "3 two words", "3  oreo", "3\toreo"] {
            let result = ExceptionTable::parse(line);
            assert!(
                matches!(result, Err(SetupError::MalformedExceptionData(_))),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_negative_count_rejected() {
        let result = ExceptionTable::parse("-1 oreo");
        assert!(matches!(result, Err(SetupError::MalformedExceptionData(_))));
    }

    #[test]
    fn test_zero_count_rejected() {
        let result = ExceptionTable::parse("3 oreo\n0 word\n");
        match result {
            Err(SetupError::MalformedExceptionData(detail)) => {
                assert!(detail.starts_with("2행"));
                assert!(detail.contains("0 word"));
            }
            other => panic!("MalformedExceptionData 기대, 실제: {:?}", other),
        }
    }

    #[test]
    fn test_empty_word_rejected() {
        let result = ExceptionTable::parse("3 ");
        assert!(matches!(result, Err(SetupError::MalformedExceptionData(_))));
    }

    #[test]
    fn test_non_utf8_rejected() {
        let result = ExceptionTable::from_bytes(&[b'3', b' ', 0xFF, 0xFE]);
        assert!(matches!(result, Err(SetupError::MalformedExceptionData(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "# test\n3 oreo\n2 poem\n").unwrap();

        let table = ExceptionTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("poem"), Some(2));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        match ExceptionTable::load(&path) {
            Err(SetupError::MissingExceptionDataset { path: reported, .. }) => {
                assert_eq!(reported, path);
            }
            other => panic!("MissingExceptionDataset 기대, 실제: {:?}", other),
        }
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let table = ExceptionTable::bundled().unwrap();
        assert!(!table.is_empty());
        assert_eq!(table.lookup("queue"), Some(1));
        assert_eq!(table.lookup("beautiful"), Some(3));
        assert_eq!(table.lookup("oreo"), Some(3));
    }

    #[test]
    fn test_empty_table() {
        let table = ExceptionTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.lookup("oreo"), None);
    }
}
