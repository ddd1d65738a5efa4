//! # CareerLog ドメイン層
//!
//! 求人応募記録（Application）のドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）に一切依存しない。
//! 永続化の都合（ObjectId、BSON 日時など）はインフラ層に閉じ込め、
//! このクレートは ID を不透明な文字列として扱う。
//!
//! ## モジュール構成
//!
//! - [`application`] - 応募記録エンティティと入力型
//! - [`error`] - ドメイン層で発生するエラーの定義

pub mod application;
pub mod error;

pub use application::{Application, ApplicationId, ApplicationPatch, NewApplication, applied_date};
pub use error::DomainError;
