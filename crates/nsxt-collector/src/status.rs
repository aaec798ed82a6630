//! 상태 도메인 열거 + 원-핫 정규화.
//!
//! NSX API가 돌려주는 원시 상태 문자열은 대소문자가 보장되지 않는다.
//! 도메인(접속/런타임)별 고정 열거에 대해 대소문자 무시 매칭으로
//! [`StatusDetail`] 원-핫 매핑을 만든다. 미인식 값은 에러가 아니라
//! "활성 플래그 없음"(전부 0.0)으로 표현한다.

use nsxt_core::models::metrics::StatusDetail;

/// 안정 상태 정규 이름 — 클러스터 안정성 판정 기준
pub const STABLE: &str = "STABLE";

/// 노드 접속 상태 도메인
pub const CONNECTIVITY: StatusDomain =
    StatusDomain::new(&["CONNECTED", "DISCONNECTED", "UNKNOWN"]);

/// 서비스 런타임 상태 도메인
pub const RUNTIME: StatusDomain = StatusDomain::new(&["RUNNING", "STOPPED"]);

/// 접속 끊김 정규 이름 — 컨트롤러 노드의 유효 상태 강등에 사용
pub const DISCONNECTED: &str = "DISCONNECTED";

/// 상태 도메인 — 컴파일 타임에 고정된 정규 상태 이름 집합
#[derive(Debug, Clone, Copy)]
pub struct StatusDomain {
    members: &'static [&'static str],
}

impl StatusDomain {
    /// 새 상태 도메인 정의
    pub const fn new(members: &'static [&'static str]) -> Self {
        Self { members }
    }

    /// 도메인 멤버 목록
    pub fn members(&self) -> &'static [&'static str] {
        self.members
    }

    /// 원시 상태 문자열을 원-핫 [`StatusDetail`]로 정규화
    ///
    /// 대문자화한 원시 값이 멤버와 일치하면 해당 엔트리만 1.0,
    /// 일치하는 멤버가 없으면 전 엔트리 0.0. 키 집합/순서는 입력이
    /// 아니라 도메인이 고정한다 (순수 함수).
    pub fn normalize(&self, raw: &str) -> StatusDetail {
        let upper = raw.to_ascii_uppercase();
        self.members
            .iter()
            .map(|member| (*member, if *member == upper { 1.0 } else { 0.0 }))
            .collect()
    }
}

/// 원시 상태가 (대소문자 무시) STABLE인지 판정
pub fn is_stable(raw: &str) -> bool {
    raw.eq_ignore_ascii_case(STABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_exact_match() {
        let detail = CONNECTIVITY.normalize("CONNECTED");
        assert_eq!(detail["CONNECTED"], 1.0);
        assert_eq!(detail["DISCONNECTED"], 0.0);
        assert_eq!(detail["UNKNOWN"], 0.0);
    }

    #[test]
    fn normalize_is_case_insensitive() {
        for raw in ["stable", "sTaBLe", "Stable", "STABLE"] {
            assert!(is_stable(raw), "{raw} 은 STABLE로 인식되어야 함");
        }

        let lower = RUNTIME.normalize("running");
        let mixed = RUNTIME.normalize("RunNinG");
        let upper = RUNTIME.normalize("RUNNING");
        assert_eq!(lower, mixed);
        assert_eq!(mixed, upper);
        assert_eq!(upper["RUNNING"], 1.0);
        assert_eq!(upper["STOPPED"], 0.0);
    }

    #[test]
    fn normalize_unknown_value_is_all_zero() {
        let detail = RUNTIME.normalize("CRASHED");
        assert_eq!(detail.len(), 2);
        assert!(detail.values().all(|v| *v == 0.0));

        let empty = CONNECTIVITY.normalize("");
        assert_eq!(empty.len(), 3);
        assert!(empty.values().all(|v| *v == 0.0));
    }

    #[test]
    fn normalize_at_most_one_active() {
        for raw in ["CONNECTED", "DISCONNECTED", "UNKNOWN", "garbage"] {
            let detail = CONNECTIVITY.normalize(raw);
            let active = detail.values().filter(|v| **v == 1.0).count();
            assert!(active <= 1, "{raw}: 활성 플래그는 최대 1개");
        }
    }

    #[test]
    fn normalize_key_set_fixed_by_domain() {
        let a = CONNECTIVITY.normalize("CONNECTED");
        let b = CONNECTIVITY.normalize("whatever");
        let keys_a: Vec<_> = a.keys().collect();
        let keys_b: Vec<_> = b.keys().collect();
        assert_eq!(keys_a, keys_b);
        assert_eq!(keys_a.len(), CONNECTIVITY.members().len());
    }

    #[test]
    fn stability_rejects_non_stable() {
        for raw in ["UNSTABLE", "DEGRADED", "UNKNOWN", "NO_CONTROLLERS", ""] {
            assert!(!is_stable(raw));
        }
    }
}
