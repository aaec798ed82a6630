//! 시스템 메트릭 수집기.
//!
//! 엔티티(클러스터/노드/서비스)별 빌더와 스크레이프 1회분 오케스트레이터.
//!
//! 실패 처리 규약 (의도된 비대칭 — 통일하지 말 것):
//! - 클러스터/노드 빌더: fetch 실패 시 로그 후 빈 결과. 0.0 메트릭을
//!   내보내지 않으므로 소비자는 "데이터 없음"과 "다운"을 구분할 수 있다.
//! - 서비스 빌더: fetch 실패 시 에러를 호출자에게 그대로 반환.
//!   오케스트레이터가 로그하고 해당 서비스만 생략한다.

use std::sync::Arc;

use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use nsxt_core::error::CoreError;
use nsxt_core::models::metrics::{
    ClusterStatusMetric, ControllerNodeStatusMetric, ManagementNodeMetric, MetricBatch,
    ServiceStatusMetric,
};
use nsxt_core::models::node::{ControllerNodeAggregateInfo, ManagementNodeAggregateInfo};
use nsxt_core::models::service::NodeServiceStatusProperties;
use nsxt_core::ports::system_api::SystemApiClient;
use tracing::{debug, warn};

use crate::status::{is_stable, CONNECTIVITY, DISCONNECTED, RUNTIME};

/// 시스템 메트릭 수집기
///
/// `SystemApiClient` 포트만 소비하며 사이클 간 상태를 갖지 않는다.
pub struct SystemCollector {
    client: Arc<dyn SystemApiClient>,
}

impl SystemCollector {
    /// 새 수집기 생성
    pub fn new(client: Arc<dyn SystemApiClient>) -> Self {
        Self { client }
    }

    // ============================================================
    // 오케스트레이터
    // ============================================================

    /// 스크레이프 1회분 수집
    ///
    /// 클러스터 상태, 노드 집계, 12개 서비스 조회는 서로 데이터 의존이
    /// 없으므로 동시 실행한다. 엔티티 하나의 실패는 로그 후 생략될 뿐
    /// 나머지 수집을 중단시키지 않으며, 사이클 내 재시도도 없다.
    pub async fn collect(&self) -> MetricBatch {
        let (cluster_status, (controller_nodes, management_nodes), services) = tokio::join!(
            self.collect_cluster_status_metrics(),
            self.collect_cluster_node_metrics(),
            self.collect_service_metrics(),
        );

        MetricBatch {
            cluster_status,
            controller_nodes,
            management_nodes,
            services,
        }
    }

    /// 12개 서비스 상태를 동시 조회하고 실패한 서비스는 생략
    async fn collect_service_metrics(&self) -> Vec<ServiceStatusMetric> {
        let fetches: Vec<(
            &'static str,
            BoxFuture<'_, Result<ServiceStatusMetric, CoreError>>,
        )> = vec![
            ("appliance", self.collect_appliance_service_metric().boxed()),
            ("message_bus", self.collect_message_bus_service_metric().boxed()),
            ("ntp", self.collect_ntp_service_metric().boxed()),
            ("upgrade_agent", self.collect_upgrade_agent_service_metric().boxed()),
            ("proton", self.collect_proton_service_metric().boxed()),
            ("proxy", self.collect_proxy_service_metric().boxed()),
            ("rabbitmq", self.collect_rabbitmq_service_metric().boxed()),
            ("repository", self.collect_repository_service_metric().boxed()),
            ("snmp", self.collect_snmp_service_metric().boxed()),
            ("ssh", self.collect_ssh_service_metric().boxed()),
            ("search", self.collect_search_service_metric().boxed()),
            ("syslog", self.collect_syslog_service_metric().boxed()),
        ];

        let (names, futures): (Vec<_>, Vec<_>) = fetches.into_iter().unzip();
        let results = join_all(futures).await;

        let mut services = Vec::with_capacity(results.len());
        for (name, result) in names.into_iter().zip(results) {
            match result {
                Ok(metric) => services.push(metric),
                // 이번 사이클에서 생략 — 다음 스크레이프가 새로 조회한다
                Err(e) => warn!("서비스 상태 수집 실패: {name}: {e}"),
            }
        }
        services
    }

    // ============================================================
    // 클러스터 상태 빌더
    // ============================================================

    /// 클러스터 상태 메트릭 수집
    ///
    /// 컨트롤/관리 클러스터가 모두 STABLE일 때만 1.0. fetch 실패 시
    /// 0.0 메트릭이 아니라 빈 목록을 반환한다.
    pub async fn collect_cluster_status_metrics(&self) -> Vec<ClusterStatusMetric> {
        let cluster_status = match self.client.read_cluster_status().await {
            Ok(status) => status,
            Err(e) => {
                warn!("클러스터 상태 조회 실패: {e}");
                return Vec::new();
            }
        };

        let controller_status = cluster_status
            .control_cluster_status
            .map(|s| s.status)
            .unwrap_or_default();
        let management_status = cluster_status
            .mgmt_cluster_status
            .map(|s| s.status)
            .unwrap_or_default();

        let stable = is_stable(&controller_status) && is_stable(&management_status);
        debug!(
            "클러스터 상태: controller={controller_status}, management={management_status}, stable={stable}"
        );

        vec![ClusterStatusMetric {
            status: if stable { 1.0 } else { 0.0 },
        }]
    }

    // ============================================================
    // 노드 빌더
    // ============================================================

    /// 컨트롤러/관리 노드 메트릭 수집
    ///
    /// 노드 집계 호출 1회로 두 목록을 만든다. fetch 실패 시 부분 결과
    /// 없이 둘 다 빈 목록 — 단, 클러스터/서비스 수집은 독립 호출이라
    /// 영향받지 않는다.
    pub async fn collect_cluster_node_metrics(
        &self,
    ) -> (Vec<ControllerNodeStatusMetric>, Vec<ManagementNodeMetric>) {
        let aggregate = match self.client.read_cluster_nodes_aggregate_status().await {
            Ok(info) => info,
            Err(e) => {
                warn!("클러스터 노드 상태 조회 실패: {e}");
                return (Vec::new(), Vec::new());
            }
        };

        let controller_nodes = aggregate
            .controller_cluster
            .iter()
            .map(Self::build_controller_node_metric)
            .collect();
        let management_nodes = aggregate
            .management_cluster
            .iter()
            .map(Self::build_management_node_metric)
            .collect();

        (controller_nodes, management_nodes)
    }

    /// 컨트롤러 노드 1개의 상태 메트릭 조립
    fn build_controller_node_metric(
        node: &ControllerNodeAggregateInfo,
    ) -> ControllerNodeStatusMetric {
        let ip_address = node
            .role_config
            .as_ref()
            .and_then(|r| r.control_plane_listen_addr.as_ref())
            .map(|e| e.ip_address.clone())
            .unwrap_or_default();

        let control_status = node
            .node_status
            .as_ref()
            .and_then(|n| n.control_cluster_status.as_ref());
        let raw_status = control_status
            .map(|c| c.control_cluster_status.clone())
            .unwrap_or_default();
        let connectivity = control_status
            .and_then(|c| c.mgmt_connection_status.as_ref())
            .map(|m| m.connectivity_status.as_str())
            .unwrap_or_default();

        // 관리 플레인 연결이 CONNECTED가 아니면 접속 상태와 무관하게
        // DISCONNECTED로 강등한다
        let effective = if connectivity.eq_ignore_ascii_case("CONNECTED") {
            raw_status
        } else {
            DISCONNECTED.to_string()
        };

        ControllerNodeStatusMetric {
            ip_address,
            status_detail: CONNECTIVITY.normalize(&effective),
        }
    }

    /// 관리 노드 1개의 상태 + 리소스 메트릭 조립
    fn build_management_node_metric(node: &ManagementNodeAggregateInfo) -> ManagementNodeMetric {
        let ip_address = node
            .role_config
            .as_ref()
            .and_then(|r| r.mgmt_plane_listen_addr.as_ref())
            .map(|e| e.ip_address.clone())
            .unwrap_or_default();

        let raw_status = node
            .node_status
            .as_ref()
            .and_then(|n| n.mgmt_cluster_status.as_ref())
            .map(|m| m.mgmt_cluster_status.clone())
            .unwrap_or_default();

        let mut metric = ManagementNodeMetric {
            ip_address,
            status_detail: CONNECTIVITY.normalize(&raw_status),
            ..Default::default()
        };

        if let Some(props) = node.node_status_properties.first() {
            let load = |i: usize| props.load_average.get(i).copied().unwrap_or(0.0) as f64;
            metric.cpu_cores = props.cpu_cores as f64;
            metric.load_average_one_minute = load(0);
            metric.load_average_five_minutes = load(1);
            metric.load_average_fifteen_minutes = load(2);
            metric.memory_use = props.mem_used as f64;
            metric.memory_total = props.mem_total as f64;
            metric.memory_cached = props.mem_cache as f64;
            metric.swap_use = props.swap_used as f64;
            metric.swap_total = props.swap_total as f64;
            for fs in &props.file_systems {
                // 마운트 경로가 유일 키 — 중복 보고는 뒤의 값이 덮어쓴다
                metric.disk_use.insert(fs.mount.clone(), fs.used as f64);
                metric.disk_total.insert(fs.mount.clone(), fs.total as f64);
            }
        }

        metric
    }

    // ============================================================
    // 서비스 빌더 — 실패 시 에러를 호출자에게 반환 (생략은 오케스트레이터 몫)
    // ============================================================

    /// 서비스 런타임 상태를 메트릭으로 조립
    fn build_service_metric(
        name: &'static str,
        status: &NodeServiceStatusProperties,
    ) -> ServiceStatusMetric {
        ServiceStatusMetric {
            name,
            status_detail: RUNTIME.normalize(&status.runtime_state),
        }
    }

    /// 어플라이언스 관리 서비스 상태 메트릭
    pub async fn collect_appliance_service_metric(
        &self,
    ) -> Result<ServiceStatusMetric, CoreError> {
        let status = self.client.read_appliance_management_service_status().await?;
        Ok(Self::build_service_metric("appliance", &status))
    }

    /// NSX 메시지 버스 서비스 상태 메트릭
    pub async fn collect_message_bus_service_metric(
        &self,
    ) -> Result<ServiceStatusMetric, CoreError> {
        let status = self.client.read_message_bus_service_status().await?;
        Ok(Self::build_service_metric("message_bus", &status))
    }

    /// NTP 서비스 상태 메트릭
    pub async fn collect_ntp_service_metric(&self) -> Result<ServiceStatusMetric, CoreError> {
        let status = self.client.read_ntp_service_status().await?;
        Ok(Self::build_service_metric("ntp", &status))
    }

    /// 업그레이드 에이전트 서비스 상태 메트릭
    pub async fn collect_upgrade_agent_service_metric(
        &self,
    ) -> Result<ServiceStatusMetric, CoreError> {
        let status = self.client.read_upgrade_agent_service_status().await?;
        Ok(Self::build_service_metric("upgrade_agent", &status))
    }

    /// Proton 서비스 상태 메트릭
    pub async fn collect_proton_service_metric(&self) -> Result<ServiceStatusMetric, CoreError> {
        let status = self.client.read_proton_service_status().await?;
        Ok(Self::build_service_metric("proton", &status))
    }

    /// HTTP 프록시 서비스 상태 메트릭
    pub async fn collect_proxy_service_metric(&self) -> Result<ServiceStatusMetric, CoreError> {
        let status = self.client.read_proxy_service_status().await?;
        Ok(Self::build_service_metric("proxy", &status))
    }

    /// RabbitMQ 서비스 상태 메트릭
    pub async fn collect_rabbitmq_service_metric(
        &self,
    ) -> Result<ServiceStatusMetric, CoreError> {
        let status = self.client.read_rabbitmq_service_status().await?;
        Ok(Self::build_service_metric("rabbitmq", &status))
    }

    /// 저장소 서비스 상태 메트릭
    pub async fn collect_repository_service_metric(
        &self,
    ) -> Result<ServiceStatusMetric, CoreError> {
        let status = self.client.read_repository_service_status().await?;
        Ok(Self::build_service_metric("repository", &status))
    }

    /// SNMP 서비스 상태 메트릭
    pub async fn collect_snmp_service_metric(&self) -> Result<ServiceStatusMetric, CoreError> {
        let status = self.client.read_snmp_service_status().await?;
        Ok(Self::build_service_metric("snmp", &status))
    }

    /// SSH 서비스 상태 메트릭
    pub async fn collect_ssh_service_metric(&self) -> Result<ServiceStatusMetric, CoreError> {
        let status = self.client.read_ssh_service_status().await?;
        Ok(Self::build_service_metric("ssh", &status))
    }

    /// 검색 서비스 상태 메트릭
    pub async fn collect_search_service_metric(&self) -> Result<ServiceStatusMetric, CoreError> {
        let status = self.client.read_search_service_status().await?;
        Ok(Self::build_service_metric("search", &status))
    }

    /// Syslog 서비스 상태 메트릭
    pub async fn collect_syslog_service_metric(&self) -> Result<ServiceStatusMetric, CoreError> {
        let status = self.client.read_syslog_service_status().await?;
        Ok(Self::build_service_metric("syslog", &status))
    }
}
