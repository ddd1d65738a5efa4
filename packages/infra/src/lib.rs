//! # CareerLog インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: MongoDB への接続管理
//! - **リポジトリ実装**: 応募記録の永続化操作の具体実装
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層は ID を不透明な文字列として扱い、ObjectId や BSON 日時と
//! いった永続化の都合はこのクレートに閉じ込める。
//!
//! ## モジュール構成
//!
//! - [`db`] - MongoDB データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと MongoDB 実装
//! - [`mock`] - テスト用インメモリリポジトリ（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use careerlog_infra::{db, repository::MongoApplicationRepository};
//!
//! async fn setup() -> Result<(), careerlog_infra::InfraError> {
//!     let database = db::connect("mongodb://localhost/careerlog").await?;
//!     let repository = MongoApplicationRepository::new(&database);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::InfraError;
