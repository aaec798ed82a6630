//! # nsxt-collector
//!
//! NSX Manager 폴링 결과를 정규화 메트릭 레코드로 변환하는 수집 코어.
//! `SystemApiClient` 포트만 바라보며 전송/인증/익스포트와 무관하다.
//!
//! ## 구조
//!
//! - [`status`] — 상태 도메인 열거 + 원-핫 정규화 (순수 함수)
//! - [`system`] — 엔티티별 메트릭 빌더 + 수집 오케스트레이터
//!
//! ## 수집 사이클
//!
//! 스크레이프 1회 = 무상태 수집 1회. 사이클 간 캐시/재시도 상태가 없고,
//! 실패한 엔티티는 해당 사이클에서 생략될 뿐 다음 사이클에서 새로 조회된다.

pub mod status;
pub mod system;

pub use system::SystemCollector;
