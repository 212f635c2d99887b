//! 설정 파일 로드 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SetupError;

/// 음절 계산기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SyllableConfig {
    /// 외부 예외 데이터셋 경로 (없으면 내장 데이터셋 사용)
    #[serde(default)]
    pub exceptions_path: Option<PathBuf>,
    /// 예외 테이블 사용 여부 (false면 휴리스틱만 사용)
    #[serde(default = "default_use_exceptions")]
    pub use_exceptions: bool,
}

fn default_use_exceptions() -> bool {
    true
}

impl Default for SyllableConfig {
    fn default() -> Self {
        Self {
            exceptions_path: None,
            use_exceptions: default_use_exceptions(),
        }
    }
}

impl SyllableConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 외부 예외 데이터셋 경로 설정
    pub fn with_exceptions_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.exceptions_path = Some(path.into());
        self
    }

    /// 예외 테이블 없이 휴리스틱만 사용
    pub fn without_exceptions(mut self) -> Self {
        self.use_exceptions = false;
        self
    }

    /// JSON 설정 파일 로드
    ///
    /// 없는 필드는 기본값으로 채웁니다. 파일을 읽을 수 없거나 JSON이 아니면 `InvalidConfig`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let invalid = |detail: String| SetupError::InvalidConfig {
            path: path.to_path_buf(),
            detail,
        };

        let content = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let config: Self = serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
        log::debug!("설정 로드: {} ({:?})", path.display(), config);
        Ok(config)
    }
}
