//! 노드 서비스 상태 API 응답 모델.
//!
//! `GET /api/v1/node/services/<service>/status` 응답 공통 구조.

use serde::{Deserialize, Serialize};

/// 노드 서비스 상태 속성
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeServiceStatusProperties {
    /// 런타임 원시 상태 (예: "running", "STOPPED") — 대소문자 보장 없음
    #[serde(default)]
    pub runtime_state: String,
}
