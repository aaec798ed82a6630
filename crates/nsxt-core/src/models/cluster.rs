//! 클러스터 상태 API 응답 모델.
//!
//! `GET /api/v1/cluster/status` 응답. 컨트롤 클러스터와 관리 클러스터의
//! 안정성 상태 문자열을 중첩 구조로 담는다.

use serde::{Deserialize, Serialize};

/// 클러스터 전체 상태 응답
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterStatus {
    /// 컨트롤 클러스터 상태
    #[serde(default)]
    pub control_cluster_status: Option<ControllerClusterStatus>,
    /// 관리 클러스터 상태
    #[serde(default)]
    pub mgmt_cluster_status: Option<ManagementClusterStatus>,
}

/// 컨트롤 클러스터 상태
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControllerClusterStatus {
    /// 원시 상태 문자열 (예: "STABLE", "DEGRADED") — 대소문자 보장 없음
    #[serde(default)]
    pub status: String,
}

/// 관리 클러스터 상태
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManagementClusterStatus {
    /// 원시 상태 문자열 — 대소문자 보장 없음
    #[serde(default)]
    pub status: String,
}
