//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス |
//! |-----------|----------------|
//! | `MissingFields` / `Validation` | 400 Bad Request |
//! | `ApplicationNotFound` | 404 Not Found |
//! | `Store` | 500 Internal Server Error |
//!
//! すべてのエラーレスポンスは `{"message": <text>}` 形式の JSON。
//! ストア障害はリトライせず、一時的・恒久的の区別なく 500 で報告する。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use careerlog_domain::DomainError;
use careerlog_infra::InfraError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API 層で発生するエラー
///
/// `IntoResponse` を実装しているため、axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum ApiError {
   /// 作成時の必須フィールド欠落（400 Bad Request）
   ///
   /// どのフィールドが欠けていても同一の固定メッセージを返す。
   #[error("Company, appliedDate and status are required")]
   MissingFields,

   /// バリデーションエラー（400 Bad Request）
   #[error("{0}")]
   Validation(String),

   /// 応募記録が見つからない（404 Not Found）
   #[error("Application not found")]
   ApplicationNotFound,

   /// ストア障害（500 Internal Server Error）
   #[error(transparent)]
   Store(#[from] InfraError),
}

/// エラーレスポンスボディ
///
/// 成功・失敗を問わず API のエラーはこの形式で返す。
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub message: String,
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let status = match &self {
         ApiError::MissingFields | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
         ApiError::ApplicationNotFound => StatusCode::NOT_FOUND,
         ApiError::Store(err) => {
            tracing::error!("store error: {err:?}");
            StatusCode::INTERNAL_SERVER_ERROR
         }
      };

      let body = ErrorResponse {
         message: self.to_string(),
      };
      (status, Json(body)).into_response()
   }
}

impl From<DomainError> for ApiError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(message) => ApiError::Validation(message),
         DomainError::NotFound { .. } => ApiError::ApplicationNotFound,
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   fn status_of(err: ApiError) -> StatusCode {
      err.into_response().status()
   }

   #[test]
   fn test_missing_fieldsは400になる() {
      assert_eq!(status_of(ApiError::MissingFields), StatusCode::BAD_REQUEST);
   }

   #[test]
   fn test_not_foundは404になる() {
      assert_eq!(status_of(ApiError::ApplicationNotFound), StatusCode::NOT_FOUND);
   }

   #[test]
   fn test_ストア障害は500になる() {
      let err = ApiError::Store(InfraError::unexpected("boom"));
      assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
   }

   #[test]
   fn test_missing_fieldsのメッセージは固定() {
      assert_eq!(
         ApiError::MissingFields.to_string(),
         "Company, appliedDate and status are required"
      );
   }

   #[test]
   fn test_domainのnot_foundはapplication_not_foundに変換される() {
      let err: ApiError = DomainError::NotFound {
         entity_type: "Application",
         id:          "x".to_string(),
      }
      .into();
      assert_eq!(err.to_string(), "Application not found");
   }
}
