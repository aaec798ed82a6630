//! # nsxt-exporter
//!
//! NSX-T 시스템 메트릭 익스포터 바이너리 진입점.
//! 설정 로드 → 어댑터 와이어링 → 스크레이프 서버 실행.

mod render;
mod server;

use anyhow::{Context, Result};
use clap::Parser;
use nsxt_client::NsxtHttpClient;
use nsxt_collector::SystemCollector;
use nsxt_core::config_manager::ConfigManager;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::server::ExporterServer;

/// NSX-T 시스템 메트릭 익스포터
///
/// NSX Manager의 클러스터/노드/서비스 상태를 Prometheus 메트릭으로 노출
#[derive(Parser, Debug)]
#[command(name = "nsxt-exporter")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼별 설정 디렉토리)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 스크레이프 서버 포트 (기본: 9744)
    #[arg(long)]
    listen_port: Option<u16>,

    /// NSX Manager URL (예: https://nsx-mgr.example.com)
    #[arg(long)]
    nsxt_host: Option<String>,

    /// TLS 인증서 검증 생략 (자체 서명 인증서 랩 환경용)
    #[arg(long)]
    insecure: bool,

    /// 로그 필터 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_filter: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // tracing 초기화
    let log_filter = format!(
        "nsxt_exporter={0},nsxt_collector={0},nsxt_client={0},nsxt_core={0}",
        args.log_filter
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    info!("NSX-T 익스포터 시작");

    // 설정 로드
    let config_manager = match args.config {
        Some(path) => ConfigManager::with_path(path)?,
        None => ConfigManager::new()?,
    };
    info!("설정 파일: {:?}", config_manager.config_path());

    let mut config = config_manager.get();

    // CLI 인자로 설정 오버라이드
    if let Some(host) = args.nsxt_host {
        config.manager.base_url = host;
    }
    if let Some(port) = args.listen_port {
        config.exporter.port = port;
    }
    if args.insecure {
        config.manager.insecure_skip_verify = true;
    }

    // 자격 증명은 환경변수가 설정 파일보다 우선한다
    if let Ok(username) = std::env::var("NSXT_USERNAME") {
        config.manager.username = username;
    }
    if let Ok(password) = std::env::var("NSXT_PASSWORD") {
        config.manager.password = password;
    }

    if config.manager.password.is_empty() {
        warn!("NSX Manager 비밀번호가 비어 있음 — NSXT_PASSWORD 환경변수를 설정하세요");
    }

    info!("NSX Manager: {}", config.manager.base_url);

    // ── 어댑터 생성 (DI 와이어링) ──
    let api_client = Arc::new(
        NsxtHttpClient::new(&config.manager).context("NSX Manager 클라이언트 생성 실패")?,
    );
    let collector = Arc::new(SystemCollector::new(api_client));
    let exporter = ExporterServer::new(collector, config.exporter.clone());

    // Ctrl+C → 종료 신호
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("종료 신호 대기 실패: {e}");
        }
        let _ = shutdown_tx.send(true);
    });

    exporter
        .run(shutdown_rx)
        .await
        .context("스크레이프 서버 실행 실패")?;

    info!("NSX-T 익스포터 종료");
    Ok(())
}
