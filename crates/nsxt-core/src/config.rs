//! 애플리케이션 설정 구조체.
//!
//! NSX Manager 접속 정보, 익스포터 리슨 설정 등 런타임 설정을 정의한다.
//! JSON 파일/CLI 플래그에서 로드 — [`crate::config_manager`] 참조.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// NSX Manager 접속 설정
    pub manager: ManagerConfig,
    /// 익스포터 리슨 설정
    #[serde(default)]
    pub exporter: ExporterConfig,
}

// ============================================================
// NSX Manager 접속 설정
// ============================================================

/// NSX Manager 접속 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Manager 기본 URL (예: "https://nsx-mgr.example.com")
    pub base_url: String,
    /// Basic 인증 사용자명
    #[serde(default = "default_username")]
    pub username: String,
    /// Basic 인증 비밀번호
    #[serde(default)]
    pub password: String,
    /// 요청 타임아웃 (밀리초)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// TLS 인증서 검증 생략 (자체 서명 인증서 랩 환경용)
    #[serde(default)]
    pub insecure_skip_verify: bool,
}

impl ManagerConfig {
    /// 요청 타임아웃을 Duration으로 반환
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

// ============================================================
// 익스포터 리슨 설정
// ============================================================

/// 익스포터 리슨 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// 스크레이프 서버 포트 (기본: 9744)
    #[serde(default = "default_exporter_port")]
    pub port: u16,
    /// 외부 접근 허용 여부 (false: 127.0.0.1 only)
    #[serde(default)]
    pub allow_external: bool,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            port: default_exporter_port(),
            allow_external: false,
        }
    }
}

// ============================================================
// AppConfig impl
// ============================================================

impl AppConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self {
            manager: ManagerConfig {
                base_url: "https://localhost".to_string(),
                username: default_username(),
                password: String::new(),
                request_timeout_ms: default_request_timeout_ms(),
                insecure_skip_verify: false,
            },
            exporter: ExporterConfig::default(),
        }
    }
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_username() -> String {
    "admin".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_exporter_port() -> u16 {
    9744
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let json = r#"{ "manager": { "base_url": "https://nsx.lab" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.manager.base_url, "https://nsx.lab");
        assert_eq!(config.manager.username, "admin");
        assert_eq!(config.manager.request_timeout_ms, 30_000);
        assert_eq!(config.exporter.port, 9744);
    }

    #[test]
    fn request_timeout_duration() {
        let mut config = AppConfig::default_config();
        config.manager.request_timeout_ms = 5_000;
        assert_eq!(config.manager.request_timeout(), Duration::from_secs(5));
    }
}
