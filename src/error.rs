//! 초기화 에러 정의

use std::path::PathBuf;

use thiserror::Error;

/// 설정 / 패턴 테이블 / 예외 테이블 구성 중 발생하는 에러
///
/// `count`는 절대 실패하지 않으며, 이 에러는 초기화 단계에서만 발생합니다.
#[derive(Debug, Error)]
pub enum SetupError {
    /// 내장 정규식 컴파일 실패 (고정 패턴 목록의 결함)
    #[error("잘못된 정규식 패턴: {0}")]
    BadPattern(String),

    /// 예외 데이터셋 파일을 열거나 읽을 수 없음
    #[error("예외 데이터셋을 찾을 수 없습니다: {}", .path.display())]
    MissingExceptionDataset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 예외 데이터셋 형식 오류 (필드 수, 정수 아님, UTF-8 아님)
    #[error("예외 데이터셋 파싱 오류: {0}")]
    MalformedExceptionData(String),

    /// 설정 파일을 읽을 수 없거나 JSON 형식이 아님
    #[error("설정 파일 오류: {} ({detail})", .path.display())]
    InvalidConfig { path: PathBuf, detail: String },
}
