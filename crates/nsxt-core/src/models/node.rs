//! 클러스터 노드 집계 API 응답 모델.
//!
//! `GET /api/v1/cluster/nodes/status` 응답. 컨트롤러/관리 노드별
//! 접속 상태와 (관리 노드는) 리소스 사용량 블록을 담는다.

use serde::{Deserialize, Serialize};

/// 클러스터 노드 집계 응답
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClustersAggregateInfo {
    /// 컨트롤러 노드 목록
    #[serde(default)]
    pub controller_cluster: Vec<ControllerNodeAggregateInfo>,
    /// 관리 노드 목록
    #[serde(default)]
    pub management_cluster: Vec<ManagementNodeAggregateInfo>,
}

// ============================================================
// 컨트롤러 노드
// ============================================================

/// 컨트롤러 노드 집계 정보
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControllerNodeAggregateInfo {
    /// 노드 역할 설정 (리슨 주소 포함)
    #[serde(default)]
    pub role_config: Option<ControllerClusterRoleConfig>,
    /// 노드 상태
    #[serde(default)]
    pub node_status: Option<ClusterNodeStatus>,
}

/// 컨트롤러 노드 역할 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControllerClusterRoleConfig {
    /// 컨트롤 플레인 리슨 주소
    #[serde(default)]
    pub control_plane_listen_addr: Option<ServiceEndpoint>,
}

// ============================================================
// 관리 노드
// ============================================================

/// 관리 노드 집계 정보
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManagementNodeAggregateInfo {
    /// 노드 역할 설정 (리슨 주소 포함)
    #[serde(default)]
    pub role_config: Option<ManagementClusterRoleConfig>,
    /// 노드 상태
    #[serde(default)]
    pub node_status: Option<ClusterNodeStatus>,
    /// 노드 리소스 사용량 블록 (CPU/로드/메모리/스왑/파일시스템)
    #[serde(default)]
    pub node_status_properties: Vec<NodeStatusProperties>,
}

/// 관리 노드 역할 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManagementClusterRoleConfig {
    /// 관리 플레인 리슨 주소
    #[serde(default)]
    pub mgmt_plane_listen_addr: Option<ServiceEndpoint>,
}

// ============================================================
// 공통 중첩 구조
// ============================================================

/// 서비스 엔드포인트 (리슨 주소)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    /// IP 주소 — 노드 메트릭의 키
    #[serde(default)]
    pub ip_address: String,
}

/// 노드 상태 (컨트롤/관리 하위 상태 중첩)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterNodeStatus {
    /// 컨트롤 클러스터 관점 상태 (컨트롤러 노드)
    #[serde(default)]
    pub control_cluster_status: Option<ControlClusterNodeStatus>,
    /// 관리 클러스터 관점 상태 (관리 노드)
    #[serde(default)]
    pub mgmt_cluster_status: Option<ManagementClusterNodeStatus>,
}

/// 컨트롤러 노드의 컨트롤 클러스터 상태
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControlClusterNodeStatus {
    /// 컨트롤 클러스터 접속 원시 상태 (CONNECTED/DISCONNECTED/UNKNOWN)
    #[serde(default)]
    pub control_cluster_status: String,
    /// 관리 플레인 연결 상태
    #[serde(default)]
    pub mgmt_connection_status: Option<MgmtConnStatus>,
}

/// 관리 플레인 연결 상태
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MgmtConnStatus {
    /// 연결 원시 상태 문자열
    #[serde(default)]
    pub connectivity_status: String,
}

/// 관리 노드의 관리 클러스터 상태
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManagementClusterNodeStatus {
    /// 관리 클러스터 접속 원시 상태
    #[serde(default)]
    pub mgmt_cluster_status: String,
}

// ============================================================
// 리소스 사용량
// ============================================================

/// 노드 리소스 사용량
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeStatusProperties {
    /// CPU 코어 수
    #[serde(default)]
    pub cpu_cores: i64,
    /// 로드 평균 [1분, 5분, 15분]
    #[serde(default)]
    pub load_average: Vec<f32>,
    /// 사용 중 메모리 (KB)
    #[serde(default)]
    pub mem_used: i64,
    /// 전체 메모리 (KB)
    #[serde(default)]
    pub mem_total: i64,
    /// 캐시 메모리 (KB)
    #[serde(default)]
    pub mem_cache: i64,
    /// 사용 중 스왑 (KB)
    #[serde(default)]
    pub swap_used: i64,
    /// 전체 스왑 (KB)
    #[serde(default)]
    pub swap_total: i64,
    /// 파일시스템 목록
    #[serde(default)]
    pub file_systems: Vec<NodeFileSystemProperties>,
}

/// 노드 파일시스템 사용량
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeFileSystemProperties {
    /// 마운트 경로 — 노드 내 유일 키
    #[serde(default)]
    pub mount: String,
    /// 사용량
    #[serde(default)]
    pub used: i64,
    /// 전체 용량
    #[serde(default)]
    pub total: i64,
}
