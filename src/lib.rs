//! 예약 관리 서비스 백엔드
//!
//! 사용자, 여행지, 예약을 JWT 접근 가드 뒤의 REST API로 관리합니다.
//!
//! # Features
//!
//! - **인증**: bcrypt 자격 증명 확인, HS256 토큰 발급 (1시간 만료)
//! - **토큰 갱신**: 인증된 모든 응답의 `token` 헤더에 만료가 연장된 새 토큰
//! - **역할 기반 인가**: `ADMIN` / `USER` 역할별 라우트 정책
//! - **엔티티 검증**: 필드별 규칙 스키마, 위반 목록을 400 응답으로 반환
//! - **SQLite**: `sqlx` 기반 영구 저장, 시작 시 스키마 동기화와 기본 관리자 생성
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AccessGuard
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증-저장 파이프라인, 인증/인가
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     SQLite      │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use booking_service_backend::config::AppConfig;
//! use booking_service_backend::core::AppContext;
//!
//! let context = AppContext::in_memory(&AppConfig::for_tests()).await?;
//! let token = context.auth.login(request).await?;
//! let destinations = context.destinations.list().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod validation;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
