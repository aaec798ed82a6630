//! 스크레이프 메트릭 레코드.
//!
//! 수집 1회(스크레이프 사이클)마다 새로 조립되는 평탄화 레코드.
//! 사이클 간 상태를 갖지 않으며, 키(IP 주소/서비스 이름) 외의
//! 아이덴티티를 갖지 않는 순수 스냅샷이다.

use serde::Serialize;
use std::collections::BTreeMap;

/// 상태 상세 — 정규 상태 이름 → 0.0/1.0 원-핫 매핑
///
/// 키 집합과 순서는 상태 도메인 열거가 고정하며, 활성(1.0) 엔트리는
/// 최대 1개다 (미인식 상태면 전부 0.0).
pub type StatusDetail = BTreeMap<&'static str, f64>;

/// 클러스터 상태 메트릭 — 컨트롤/관리 양쪽이 STABLE일 때만 1.0
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClusterStatusMetric {
    /// 1.0 = 완전 안정, 0.0 = 그 외
    pub status: f64,
}

/// 컨트롤러 노드 상태 메트릭
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ControllerNodeStatusMetric {
    /// 노드 컨트롤 플레인 리슨 IP
    pub ip_address: String,
    /// 접속 상태 상세 (CONNECTED/DISCONNECTED/UNKNOWN)
    pub status_detail: StatusDetail,
}

/// 관리 노드 메트릭 — 상태 + 리소스 게이지
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ManagementNodeMetric {
    /// 노드 관리 플레인 리슨 IP
    pub ip_address: String,
    /// 접속 상태 상세 (CONNECTED/DISCONNECTED/UNKNOWN)
    pub status_detail: StatusDetail,
    /// CPU 코어 수
    pub cpu_cores: f64,
    /// 1분 로드 평균
    pub load_average_one_minute: f64,
    /// 5분 로드 평균
    pub load_average_five_minutes: f64,
    /// 15분 로드 평균
    pub load_average_fifteen_minutes: f64,
    /// 사용 중 메모리
    pub memory_use: f64,
    /// 전체 메모리
    pub memory_total: f64,
    /// 캐시 메모리
    pub memory_cached: f64,
    /// 사용 중 스왑
    pub swap_use: f64,
    /// 전체 스왑
    pub swap_total: f64,
    /// 마운트 경로 → 사용량 (보고된 파일시스템당 1개)
    pub disk_use: BTreeMap<String, f64>,
    /// 마운트 경로 → 전체 용량
    pub disk_total: BTreeMap<String, f64>,
}

/// 서비스 상태 메트릭
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceStatusMetric {
    /// 고정 서비스 이름 (예: "ntp", "rabbitmq")
    pub name: &'static str,
    /// 런타임 상태 상세 (RUNNING/STOPPED)
    pub status_detail: StatusDetail,
}

/// 스크레이프 1회분 메트릭 배치
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetricBatch {
    /// 클러스터 상태 (fetch 실패 시 빈 목록)
    pub cluster_status: Vec<ClusterStatusMetric>,
    /// 컨트롤러 노드별 상태
    pub controller_nodes: Vec<ControllerNodeStatusMetric>,
    /// 관리 노드별 상태 + 리소스
    pub management_nodes: Vec<ManagementNodeMetric>,
    /// 서비스별 상태 (실패한 서비스는 생략)
    pub services: Vec<ServiceStatusMetric>,
}
