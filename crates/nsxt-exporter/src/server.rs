//! 스크레이프 HTTP 서버.
//!
//! `/metrics` 요청마다 수집 사이클 1회를 새로 실행한다 — 캐시 없음.
//! 기본 포트가 사용 중이면 다음 포트를 순서대로 시도한다.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use nsxt_collector::SystemCollector;
use nsxt_core::config::ExporterConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::render;

/// 포트 바인드 최대 시도 횟수
const MAX_PORT_ATTEMPTS: u16 = 10;

/// 스크레이프 서버 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    /// 시스템 메트릭 수집기
    pub collector: Arc<SystemCollector>,
}

/// 스크레이프 엔드포인트 서버
pub struct ExporterServer {
    config: ExporterConfig,
    state: AppState,
}

/// 라우터 구성
fn router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/healthz", get(healthz_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 스크레이프 요청 처리 — 수집 1회 + 텍스트 포맷 렌더링
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let batch = state.collector.collect().await;
    let body = render::render(&batch, start.elapsed().as_secs_f64());

    (
        [(header::CONTENT_TYPE, render::TEXT_FORMAT_CONTENT_TYPE)],
        body,
    )
}

/// 프로세스 생존 확인 — Manager 접속 여부와 무관
async fn healthz_handler() -> &'static str {
    "ok"
}

impl ExporterServer {
    /// 새 스크레이프 서버 생성
    pub fn new(collector: Arc<SystemCollector>, config: ExporterConfig) -> Self {
        Self {
            config,
            state: AppState { collector },
        }
    }

    /// 서버 실행
    ///
    /// 기본 포트에서 시작하여, 포트가 이미 사용 중이면 다음 포트를
    /// 시도한다. 최대 10개 포트를 시도한 후 실패하면 에러를 반환한다.
    pub async fn run(self, mut shutdown_rx: watch::Receiver<bool>) -> Result<(), std::io::Error> {
        let host = if self.config.allow_external {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        let app = router(self.state);

        let base_port = self.config.port;
        let mut last_error = None;

        for attempt in 0..MAX_PORT_ATTEMPTS {
            let port = base_port.saturating_add(attempt);

            // 포트 오버플로우 체크
            if port < base_port && attempt > 0 {
                break;
            }

            let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
                Ok(a) => a,
                Err(e) => {
                    error!("잘못된 주소 {}:{} — {}", host, port, e);
                    continue;
                }
            };

            match TcpListener::bind(addr).await {
                Ok(listener) => {
                    if attempt > 0 {
                        warn!("포트 {} 사용 불가, 대체 포트 {} 사용", base_port, port);
                    }
                    info!("스크레이프 서버 시작: http://{}/metrics", addr);

                    axum::serve(listener, app)
                        .with_graceful_shutdown(async move {
                            loop {
                                if *shutdown_rx.borrow() {
                                    info!("스크레이프 서버 종료 신호 수신");
                                    break;
                                }
                                if shutdown_rx.changed().await.is_err() {
                                    break;
                                }
                            }
                        })
                        .await?;

                    info!("스크레이프 서버 종료");
                    return Ok(());
                }
                Err(e) => {
                    if e.kind() == std::io::ErrorKind::AddrInUse {
                        warn!("포트 {} 이미 사용 중, 다음 포트 시도...", port);
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::AddrInUse,
                format!(
                    "포트 {}-{} 모두 사용 불가",
                    base_port,
                    base_port.saturating_add(MAX_PORT_ATTEMPTS - 1)
                ),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use nsxt_core::error::CoreError;
    use nsxt_core::models::cluster::{
        ClusterStatus, ControllerClusterStatus, ManagementClusterStatus,
    };
    use nsxt_core::models::node::ClustersAggregateInfo;
    use nsxt_core::models::service::NodeServiceStatusProperties;
    use nsxt_core::ports::system_api::SystemApiClient;
    use tower::ServiceExt;

    /// 고정 응답 스텁 — 안정 클러스터 + 실행 중 서비스
    struct StubClient;

    impl StubClient {
        fn running() -> Result<NodeServiceStatusProperties, CoreError> {
            Ok(NodeServiceStatusProperties {
                runtime_state: "RUNNING".to_string(),
            })
        }
    }

    #[async_trait]
    impl SystemApiClient for StubClient {
        async fn read_cluster_status(&self) -> Result<ClusterStatus, CoreError> {
            Ok(ClusterStatus {
                control_cluster_status: Some(ControllerClusterStatus {
                    status: "STABLE".to_string(),
                }),
                mgmt_cluster_status: Some(ManagementClusterStatus {
                    status: "STABLE".to_string(),
                }),
            })
        }

        async fn read_cluster_nodes_aggregate_status(
            &self,
        ) -> Result<ClustersAggregateInfo, CoreError> {
            Ok(ClustersAggregateInfo::default())
        }

        async fn read_appliance_management_service_status(
            &self,
        ) -> Result<NodeServiceStatusProperties, CoreError> {
            Self::running()
        }

        async fn read_message_bus_service_status(
            &self,
        ) -> Result<NodeServiceStatusProperties, CoreError> {
            Self::running()
        }

        async fn read_ntp_service_status(
            &self,
        ) -> Result<NodeServiceStatusProperties, CoreError> {
            Self::running()
        }

        async fn read_upgrade_agent_service_status(
            &self,
        ) -> Result<NodeServiceStatusProperties, CoreError> {
            Self::running()
        }

        async fn read_proton_service_status(
            &self,
        ) -> Result<NodeServiceStatusProperties, CoreError> {
            Self::running()
        }

        async fn read_proxy_service_status(
            &self,
        ) -> Result<NodeServiceStatusProperties, CoreError> {
            Self::running()
        }

        async fn read_rabbitmq_service_status(
            &self,
        ) -> Result<NodeServiceStatusProperties, CoreError> {
            Self::running()
        }

        async fn read_repository_service_status(
            &self,
        ) -> Result<NodeServiceStatusProperties, CoreError> {
            Self::running()
        }

        async fn read_snmp_service_status(
            &self,
        ) -> Result<NodeServiceStatusProperties, CoreError> {
            Self::running()
        }

        async fn read_ssh_service_status(
            &self,
        ) -> Result<NodeServiceStatusProperties, CoreError> {
            Self::running()
        }

        async fn read_search_service_status(
            &self,
        ) -> Result<NodeServiceStatusProperties, CoreError> {
            Self::running()
        }

        async fn read_syslog_service_status(
            &self,
        ) -> Result<NodeServiceStatusProperties, CoreError> {
            Self::running()
        }
    }

    fn test_router() -> Router {
        let collector = Arc::new(SystemCollector::new(Arc::new(StubClient)));
        router(AppState { collector })
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let resp = test_router()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn metrics_scrape_renders_text_format() {
        let resp = test_router()
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            render::TEXT_FORMAT_CONTENT_TYPE
        );

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("\nnsxt_cluster_status 1\n"));
        assert!(text.contains("nsxt_service_status{name=\"ntp\",status=\"RUNNING\"} 1\n"));
        assert!(text.contains("nsxt_scrape_duration_seconds "));
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let resp = test_router()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn max_port_attempts_is_reasonable() {
        // 최소 1번, 최대 100번 사이
        assert!(MAX_PORT_ATTEMPTS >= 1);
        assert!(MAX_PORT_ATTEMPTS <= 100);
    }
}
