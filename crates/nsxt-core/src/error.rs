//! NSXPORTER 핵심 에러 타입.
//!
//! 모든 어댑터 crate는 자체 에러 대신 `CoreError`로 수렴한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// API 통신, 직렬화, 설정 등 도메인 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 인증 실패 (자격증명 오류, 401/403)
    #[error("인증 에러: {0}")]
    Auth(String),

    /// 리소스를 찾을 수 없음 (404)
    #[error("{resource_type} 미발견: {id}")]
    NotFound {
        /// 리소스 종류 (예: "service", "cluster")
        resource_type: String,
        /// 리소스 식별자
        id: String,
    },

    /// 네트워크 에러 (연결 실패, 타임아웃)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// NSX Manager 일시 불가 (503)
    #[error("서비스 일시 불가: {0}")]
    ServiceUnavailable(String),

    /// 기타 API 에러 (5xx 등)
    #[error("API 에러 ({status}): {message}")]
    Api {
        /// HTTP 상태 코드
        status: u16,
        /// 응답 본문 (있으면)
        message: String,
    },

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}
