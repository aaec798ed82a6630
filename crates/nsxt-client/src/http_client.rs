//! NSX Manager REST API 클라이언트.
//!
//! `SystemApiClient` 포트 구현. Basic 인증 헤더를 요청마다 주입하며,
//! `insecure_skip_verify`가 켜진 경우 자체 서명 인증서를 허용한다.

use async_trait::async_trait;
use nsxt_core::config::ManagerConfig;
use nsxt_core::error::CoreError;
use nsxt_core::models::cluster::ClusterStatus;
use nsxt_core::models::node::ClustersAggregateInfo;
use nsxt_core::models::service::NodeServiceStatusProperties;
use nsxt_core::ports::system_api::SystemApiClient;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// NSX Manager REST API 클라이언트 — `SystemApiClient` 포트 구현
pub struct NsxtHttpClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl NsxtHttpClient {
    /// Manager 접속 설정으로 새 클라이언트 생성
    pub fn new(config: &ManagerConfig) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .danger_accept_invalid_certs(config.insecure_skip_verify)
            .build()
            .map_err(|e| CoreError::Network(format!("HTTP 클라이언트 빌드 실패: {}", e)))?;

        if config.insecure_skip_verify {
            warn!("TLS 인증서 검증이 꺼져 있음 — 랩 환경 전용 설정");
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// 응답 상태 코드 확인 및 에러 매핑
    async fn check_response(
        &self,
        resp: reqwest::Response,
    ) -> Result<reqwest::Response, CoreError> {
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }

        let status_code = status.as_u16();
        let text = resp.text().await.unwrap_or_else(|e| {
            warn!("응답 본문 읽기 실패: {e}");
            String::new()
        });

        match status_code {
            401 | 403 => Err(CoreError::Auth(format!("인증 실패: {text}"))),
            404 => Err(CoreError::NotFound {
                resource_type: "API".to_string(),
                id: text,
            }),
            503 => Err(CoreError::ServiceUnavailable(text)),
            _ => Err(CoreError::Api {
                status: status_code,
                message: text,
            }),
        }
    }

    /// GET 요청 후 JSON 응답 역직렬화
    ///
    /// 사이클 모델에 맞춰 요청 단위 재시도는 하지 않는다 — 실패한
    /// 조회는 다음 스크레이프가 새로 수행한다.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| CoreError::Network(format!("요청 실패 ({path}): {e}")))?;

        let resp = self.check_response(resp).await?;
        resp.json()
            .await
            .map_err(|e| CoreError::Internal(format!("응답 파싱 실패 ({path}): {e}")))
    }

    /// 노드 서비스 상태 조회 (`/api/v1/node/services/{service}/status`)
    async fn read_service_status(
        &self,
        service: &str,
    ) -> Result<NodeServiceStatusProperties, CoreError> {
        self.get_json(&format!("/api/v1/node/services/{service}/status"))
            .await
    }
}

#[async_trait]
impl SystemApiClient for NsxtHttpClient {
    async fn read_cluster_status(&self) -> Result<ClusterStatus, CoreError> {
        self.get_json("/api/v1/cluster/status").await
    }

    async fn read_cluster_nodes_aggregate_status(
        &self,
    ) -> Result<ClustersAggregateInfo, CoreError> {
        self.get_json("/api/v1/cluster/nodes/status").await
    }

    async fn read_appliance_management_service_status(
        &self,
    ) -> Result<NodeServiceStatusProperties, CoreError> {
        self.read_service_status("node-mgmt").await
    }

    async fn read_message_bus_service_status(
        &self,
    ) -> Result<NodeServiceStatusProperties, CoreError> {
        self.read_service_status("mgmt-plane-bus").await
    }

    async fn read_ntp_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError> {
        self.read_service_status("ntp").await
    }

    async fn read_upgrade_agent_service_status(
        &self,
    ) -> Result<NodeServiceStatusProperties, CoreError> {
        self.read_service_status("install-upgrade").await
    }

    async fn read_proton_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError> {
        self.read_service_status("manager").await
    }

    async fn read_proxy_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError> {
        self.read_service_status("http").await
    }

    async fn read_rabbitmq_service_status(
        &self,
    ) -> Result<NodeServiceStatusProperties, CoreError> {
        self.read_service_status("rabbitmq-server").await
    }

    async fn read_repository_service_status(
        &self,
    ) -> Result<NodeServiceStatusProperties, CoreError> {
        self.read_service_status("repository").await
    }

    async fn read_snmp_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError> {
        self.read_service_status("snmp").await
    }

    async fn read_ssh_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError> {
        self.read_service_status("ssh").await
    }

    async fn read_search_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError> {
        self.read_service_status("search").await
    }

    async fn read_syslog_service_status(&self) -> Result<NodeServiceStatusProperties, CoreError> {
        self.read_service_status("syslog").await
    }
}
