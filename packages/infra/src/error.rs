//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: `mongodb::error::Error` を `#[from]` でラップ
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **一様な報告**: 一時的な障害と恒久的な障害を区別しない。
//!   すべてのストア障害は API 層で 500 として同一に報告される

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// データベースクエリや接続で発生するエラーの種別。
/// API 層でこのエラーを受け取り、500 レスポンスに変換する。
#[derive(Debug, Error)]
pub enum InfraError {
   /// データベースエラー
   ///
   /// クエリの実行失敗、接続エラーなど。
   #[error("database error: {0}")]
   Database(#[from] mongodb::error::Error),

   /// 予期しないエラー
   ///
   /// 上記に分類できない予期しないエラー。
   #[error("unexpected error: {0}")]
   Unexpected(String),
}

impl InfraError {
   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self::Unexpected(msg.into())
   }
}
