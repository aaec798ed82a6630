//! NSXPORTER 도메인 모델.
//!
//! NSX Manager API 응답 구조체와 스크레이프 1회분 메트릭 레코드를 정의한다.
//! API 응답 모델은 `serde` Deserialize, 메트릭 레코드는 Serialize를 구현한다.

pub mod cluster;
pub mod metrics;
pub mod node;
pub mod service;
