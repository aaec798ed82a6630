//! 포트 인터페이스 (trait).
//!
//! Hexagonal Architecture의 포트 레이어.
//! `nsxt-client`가 구현하고 `nsxt-collector`/`nsxt-exporter`가
//! `Arc<dyn T>`로 소비한다.
//!
//! 모든 async trait은 `async_trait` 매크로를 사용하여
//! object safety를 보장한다.

pub mod system_api;
