//! # ドメイン層エラー定義
//!
//! 入力検証の失敗やエンティティの不在を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//!
//! API 層（`careerlog-api`）がこのエラーを受け取り、
//! `{"message": ...}` 形式のレスポンスに変換する。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// エラーメッセージはそのままクライアントに返すため、
/// API の契約に合わせて英語で記述する。
#[derive(Debug, Error)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 入力値が要件を満たしていない場合に使用する。
   #[error("{0}")]
   Validation(String),

   /// エンティティが見つからない
   #[error("{entity_type} not found")]
   NotFound {
      /// エンティティ名（例: "Application"）
      entity_type: &'static str,
      /// 検索に使用した ID
      id:          String,
   },
}
