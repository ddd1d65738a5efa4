//! # リポジトリ実装
//!
//! ドメイン操作（一覧・作成・更新・削除）をストアのクエリに対応付ける。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: トレイトを定義し、MongoDB 固有の処理を実装側に隠蔽
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod application_repository;

pub use application_repository::{ApplicationRepository, MongoApplicationRepository};
