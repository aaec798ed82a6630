//! # nsxt-client
//!
//! `SystemApiClient` 포트의 NSX Manager REST API 어댑터.
//! Basic 인증 + (선택) TLS 검증 생략을 지원하며, 수집 사이클 모델에
//! 맞춰 요청 단위 재시도는 하지 않는다 — 실패는 다음 스크레이프가
//! 새로 조회한다.

pub mod http_client;

pub use http_client::NsxtHttpClient;
