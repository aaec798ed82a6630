//! NSX Manager 시스템 API 포트.
//!
//! 폴링 대상 엔티티(클러스터/노드/서비스)당 메서드 하나.
//! 구현: `nsxt-client` crate (reqwest)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::cluster::ClusterStatus;
use crate::models::node::ClustersAggregateInfo;
use crate::models::service::NodeServiceStatusProperties;

/// NSX Manager 시스템 API 클라이언트
#[async_trait]
pub trait SystemApiClient: Send + Sync {
    /// 클러스터 전체 상태 조회
    async fn read_cluster_status(&self) -> Result<ClusterStatus, CoreError>;

    /// 클러스터 노드 집계 상태 조회
    async fn read_cluster_nodes_aggregate_status(
        &self,
    ) -> Result<ClustersAggregateInfo, CoreError>;

    /// 어플라이언스 관리 서비스 상태 조회
    async fn read_appliance_management_service_status(
        &self,
    ) -> Result<NodeServiceStatusProperties, CoreError>;

    /// NSX 메시지 버스 서비스 상태 조회
    async fn read_message_bus_service_status(
        &self,
    ) -> Result<NodeServiceStatusProperties, CoreError>;

    /// NTP 서비스 상태 조회
    async fn read_ntp_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError>;

    /// 업그레이드 에이전트 서비스 상태 조회
    async fn read_upgrade_agent_service_status(
        &self,
    ) -> Result<NodeServiceStatusProperties, CoreError>;

    /// Proton(manager) 서비스 상태 조회
    async fn read_proton_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError>;

    /// HTTP 프록시 서비스 상태 조회
    async fn read_proxy_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError>;

    /// RabbitMQ 서비스 상태 조회
    async fn read_rabbitmq_service_status(
        &self,
    ) -> Result<NodeServiceStatusProperties, CoreError>;

    /// 저장소(repository) 서비스 상태 조회
    async fn read_repository_service_status(
        &self,
    ) -> Result<NodeServiceStatusProperties, CoreError>;

    /// SNMP 서비스 상태 조회
    async fn read_snmp_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError>;

    /// SSH 서비스 상태 조회
    async fn read_ssh_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError>;

    /// 검색(search) 서비스 상태 조회
    async fn read_search_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError>;

    /// Syslog 서비스 상태 조회
    async fn read_syslog_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError>;
}
