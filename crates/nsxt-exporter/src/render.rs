//! Prometheus 텍스트 포맷 렌더링.
//!
//! 수집된 [`MetricBatch`]를 스크레이프 응답 본문으로 직렬화한다.
//! 게이지만 사용하며, 패밀리/샘플 순서는 배치 순서를 따라 결정적이다.

use nsxt_core::models::metrics::{ManagementNodeMetric, MetricBatch};

/// 스크레이프 응답 Content-Type
pub const TEXT_FORMAT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// 텍스트 포맷 출력 버퍼
struct TextWriter {
    buf: String,
}

impl TextWriter {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(4096),
        }
    }

    /// 패밀리 헤더 (# HELP + # TYPE gauge) 출력
    fn family(&mut self, name: &str, help: &str) {
        self.buf.push_str("# HELP ");
        self.buf.push_str(name);
        self.buf.push(' ');
        self.buf.push_str(help);
        self.buf.push('\n');
        self.buf.push_str("# TYPE ");
        self.buf.push_str(name);
        self.buf.push_str(" gauge\n");
    }

    /// 샘플 1줄 출력
    fn sample(&mut self, name: &str, labels: &[(&str, &str)], value: f64) {
        self.buf.push_str(name);
        if !labels.is_empty() {
            self.buf.push('{');
            for (i, (key, val)) in labels.iter().enumerate() {
                if i > 0 {
                    self.buf.push(',');
                }
                self.buf.push_str(key);
                self.buf.push_str("=\"");
                self.buf.push_str(&escape_label_value(val));
                self.buf.push('"');
            }
            self.buf.push('}');
        }
        self.buf.push(' ');
        self.buf.push_str(&value.to_string());
        self.buf.push('\n');
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// 라벨 값 이스케이프 (백슬래시, 큰따옴표, 개행)
fn escape_label_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// 관리 노드 리소스 게이지 1종 출력
fn node_gauge(
    w: &mut TextWriter,
    name: &str,
    help: &str,
    nodes: &[ManagementNodeMetric],
    value: impl Fn(&ManagementNodeMetric) -> f64,
) {
    w.family(name, help);
    for node in nodes {
        w.sample(name, &[("ip_address", &node.ip_address)], value(node));
    }
}

/// 메트릭 배치를 Prometheus 텍스트 포맷으로 렌더링
///
/// 빈 배치여도 스크레이프 소요 시간은 항상 출력한다 — fetch 실패로
/// 비어 있는 패밀리는 샘플 없이 헤더만 남는다.
pub fn render(batch: &MetricBatch, scrape_duration_secs: f64) -> String {
    let mut w = TextWriter::new();

    // 클러스터 상태
    w.family(
        "nsxt_cluster_status",
        "Whether both control and management clusters are stable (1 = stable).",
    );
    for metric in &batch.cluster_status {
        w.sample("nsxt_cluster_status", &[], metric.status);
    }

    // 노드 접속 상태 — 컨트롤러/관리 노드 공통 패밀리
    w.family(
        "nsxt_cluster_node_status",
        "Connectivity status of a cluster node (1 = node is in this status).",
    );
    for node in &batch.controller_nodes {
        for (status, value) in &node.status_detail {
            w.sample(
                "nsxt_cluster_node_status",
                &[("ip_address", &node.ip_address), ("status", status)],
                *value,
            );
        }
    }
    for node in &batch.management_nodes {
        for (status, value) in &node.status_detail {
            w.sample(
                "nsxt_cluster_node_status",
                &[("ip_address", &node.ip_address), ("status", status)],
                *value,
            );
        }
    }

    // 관리 노드 리소스 게이지
    node_gauge(
        &mut w,
        "nsxt_cluster_node_cpu_cores",
        "Number of CPU cores on a management node.",
        &batch.management_nodes,
        |n| n.cpu_cores,
    );
    node_gauge(
        &mut w,
        "nsxt_cluster_node_load_average_one_minute",
        "One-minute load average of a management node.",
        &batch.management_nodes,
        |n| n.load_average_one_minute,
    );
    node_gauge(
        &mut w,
        "nsxt_cluster_node_load_average_five_minutes",
        "Five-minute load average of a management node.",
        &batch.management_nodes,
        |n| n.load_average_five_minutes,
    );
    node_gauge(
        &mut w,
        "nsxt_cluster_node_load_average_fifteen_minutes",
        "Fifteen-minute load average of a management node.",
        &batch.management_nodes,
        |n| n.load_average_fifteen_minutes,
    );
    node_gauge(
        &mut w,
        "nsxt_cluster_node_memory_use_kilobytes",
        "Memory in use on a management node, in kilobytes.",
        &batch.management_nodes,
        |n| n.memory_use,
    );
    node_gauge(
        &mut w,
        "nsxt_cluster_node_memory_total_kilobytes",
        "Total memory of a management node, in kilobytes.",
        &batch.management_nodes,
        |n| n.memory_total,
    );
    node_gauge(
        &mut w,
        "nsxt_cluster_node_memory_cached_kilobytes",
        "Cached memory on a management node, in kilobytes.",
        &batch.management_nodes,
        |n| n.memory_cached,
    );
    node_gauge(
        &mut w,
        "nsxt_cluster_node_swap_use_kilobytes",
        "Swap in use on a management node, in kilobytes.",
        &batch.management_nodes,
        |n| n.swap_use,
    );
    node_gauge(
        &mut w,
        "nsxt_cluster_node_swap_total_kilobytes",
        "Total swap of a management node, in kilobytes.",
        &batch.management_nodes,
        |n| n.swap_total,
    );

    // 파일시스템 사용량
    w.family(
        "nsxt_cluster_node_disk_use_bytes",
        "Disk space in use on a management node filesystem, in bytes.",
    );
    for node in &batch.management_nodes {
        for (mount, value) in &node.disk_use {
            w.sample(
                "nsxt_cluster_node_disk_use_bytes",
                &[("ip_address", &node.ip_address), ("filesystem", mount)],
                *value,
            );
        }
    }
    w.family(
        "nsxt_cluster_node_disk_total_bytes",
        "Total disk space of a management node filesystem, in bytes.",
    );
    for node in &batch.management_nodes {
        for (mount, value) in &node.disk_total {
            w.sample(
                "nsxt_cluster_node_disk_total_bytes",
                &[("ip_address", &node.ip_address), ("filesystem", mount)],
                *value,
            );
        }
    }

    // 서비스 런타임 상태
    w.family(
        "nsxt_service_status",
        "Runtime status of an NSX Manager node service (1 = service is in this status).",
    );
    for service in &batch.services {
        for (status, value) in &service.status_detail {
            w.sample(
                "nsxt_service_status",
                &[("name", service.name), ("status", status)],
                *value,
            );
        }
    }

    // 스크레이프 소요 시간
    w.family(
        "nsxt_scrape_duration_seconds",
        "Duration of the NSX Manager collection for this scrape, in seconds.",
    );
    w.sample("nsxt_scrape_duration_seconds", &[], scrape_duration_secs);

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nsxt_core::models::metrics::{
        ClusterStatusMetric, ControllerNodeStatusMetric, ServiceStatusMetric, StatusDetail,
    };

    fn detail(pairs: &[(&'static str, f64)]) -> StatusDetail {
        pairs.iter().copied().collect()
    }

    #[test]
    fn renders_cluster_status() {
        let batch = MetricBatch {
            cluster_status: vec![ClusterStatusMetric { status: 1.0 }],
            ..Default::default()
        };

        let out = render(&batch, 0.1);
        assert!(out.contains("# HELP nsxt_cluster_status "));
        assert!(out.contains("# TYPE nsxt_cluster_status gauge\n"));
        assert!(out.contains("\nnsxt_cluster_status 1\n"));
    }

    #[test]
    fn renders_node_status_with_labels() {
        let batch = MetricBatch {
            controller_nodes: vec![ControllerNodeStatusMetric {
                ip_address: "10.0.0.1".to_string(),
                status_detail: detail(&[
                    ("CONNECTED", 1.0),
                    ("DISCONNECTED", 0.0),
                    ("UNKNOWN", 0.0),
                ]),
            }],
            ..Default::default()
        };

        let out = render(&batch, 0.1);
        assert!(out.contains(
            "nsxt_cluster_node_status{ip_address=\"10.0.0.1\",status=\"CONNECTED\"} 1\n"
        ));
        assert!(out.contains(
            "nsxt_cluster_node_status{ip_address=\"10.0.0.1\",status=\"DISCONNECTED\"} 0\n"
        ));
        assert!(out.contains(
            "nsxt_cluster_node_status{ip_address=\"10.0.0.1\",status=\"UNKNOWN\"} 0\n"
        ));
    }

    #[test]
    fn renders_management_node_gauges_and_disks() {
        let batch = MetricBatch {
            management_nodes: vec![ManagementNodeMetric {
                ip_address: "10.0.0.2".to_string(),
                status_detail: detail(&[
                    ("CONNECTED", 1.0),
                    ("DISCONNECTED", 0.0),
                    ("UNKNOWN", 0.0),
                ]),
                cpu_cores: 4.0,
                load_average_one_minute: 0.5,
                load_average_five_minutes: 0.4,
                load_average_fifteen_minutes: 0.3,
                memory_use: 100.0,
                memory_total: 200.0,
                memory_cached: 50.0,
                swap_use: 10.0,
                swap_total: 20.0,
                disk_use: [("/".to_string(), 30.0)].into_iter().collect(),
                disk_total: [("/".to_string(), 60.0)].into_iter().collect(),
            }],
            ..Default::default()
        };

        let out = render(&batch, 0.1);
        assert!(out.contains("nsxt_cluster_node_cpu_cores{ip_address=\"10.0.0.2\"} 4\n"));
        assert!(out
            .contains("nsxt_cluster_node_load_average_one_minute{ip_address=\"10.0.0.2\"} 0.5\n"));
        assert!(
            out.contains("nsxt_cluster_node_memory_use_kilobytes{ip_address=\"10.0.0.2\"} 100\n")
        );
        assert!(out.contains(
            "nsxt_cluster_node_disk_use_bytes{ip_address=\"10.0.0.2\",filesystem=\"/\"} 30\n"
        ));
        assert!(out.contains(
            "nsxt_cluster_node_disk_total_bytes{ip_address=\"10.0.0.2\",filesystem=\"/\"} 60\n"
        ));
    }

    #[test]
    fn renders_service_status() {
        let batch = MetricBatch {
            services: vec![ServiceStatusMetric {
                name: "ntp",
                status_detail: detail(&[("RUNNING", 1.0), ("STOPPED", 0.0)]),
            }],
            ..Default::default()
        };

        let out = render(&batch, 0.1);
        assert!(out.contains("nsxt_service_status{name=\"ntp\",status=\"RUNNING\"} 1\n"));
        assert!(out.contains("nsxt_service_status{name=\"ntp\",status=\"STOPPED\"} 0\n"));
    }

    #[test]
    fn empty_batch_still_reports_scrape_duration() {
        let out = render(&MetricBatch::default(), 0.25);
        // fetch 실패로 비어도 헤더는 남고 샘플만 없다
        assert!(out.contains("# TYPE nsxt_cluster_status gauge\n"));
        assert!(!out.contains("\nnsxt_cluster_status 0"));
        assert!(out.contains("nsxt_scrape_duration_seconds 0.25\n"));
    }

    #[test]
    fn escapes_label_values() {
        assert_eq!(escape_label_value(r#"a"b"#), r#"a\"b"#);
        assert_eq!(escape_label_value(r"a\b"), r"a\\b");
        assert_eq!(escape_label_value("a\nb"), "a\\nb");
    }

    #[test]
    fn sample_order_is_deterministic() {
        let batch = MetricBatch {
            cluster_status: vec![ClusterStatusMetric { status: 0.0 }],
            ..Default::default()
        };
        assert_eq!(render(&batch, 0.1), render(&batch, 0.1));
    }
}
