//! # 応募記録 API ハンドラ
//!
//! 応募記録の CRUD エンドポイントを実装する。
//!
//! | エンドポイント | 成功 | 失敗 |
//! |---|---|---|
//! | `GET /applications` | 200（応募日昇順の配列） | 500 |
//! | `POST /applications` | 201（作成された記録） | 400 / 500 |
//! | `PUT /applications/{id}` | 200（更新後の記録） | 400 / 404 / 500 |
//! | `DELETE /applications/{id}` | 204（空ボディ） | 500 |
//!
//! 各ハンドラは入力を検証し、リポジトリを呼び出し、結果を
//! HTTP レスポンスに変換するだけの薄い層に保つ。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use careerlog_domain::{Application, ApplicationId, ApplicationPatch, NewApplication, applied_date};
use careerlog_infra::repository::ApplicationRepository;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// 応募記録ハンドラの State
pub struct ApplicationState<R> {
   pub repository: R,
}

/// 応募記録 DTO（レスポンス表現）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
   pub id:           String,
   pub company:      String,
   pub applied_date: String,
   pub status:       String,
}

impl ApplicationDto {
   fn from_application(application: &Application) -> Self {
      Self {
         id:           application.id().to_string(),
         company:      application.company().to_string(),
         applied_date: applied_date::format(application.applied_date()),
         status:       application.status().to_string(),
      }
   }
}

/// 新規作成リクエストボディ
///
/// 全フィールドを `Option` で受け、存在チェックはハンドラで行う
/// （欠落時は固定メッセージの 400 を返すため）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
   pub company:      Option<String>,
   pub applied_date: Option<String>,
   pub status:       Option<String>,
}

/// 部分更新リクエストボディ
///
/// 欠落フィールドと空文字列はいずれも「変更しない」を意味する。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationRequest {
   pub company:      Option<String>,
   pub applied_date: Option<String>,
   pub status:       Option<String>,
}

/// 値が存在しかつ空文字列でない場合のみ `Some` を返す
fn present(value: Option<String>) -> Option<String> {
   value.filter(|v| !v.is_empty())
}

/// 応募記録の一覧を取得する
///
/// ## エンドポイント
/// GET /applications
pub async fn list_applications<R: ApplicationRepository>(
   State(state): State<Arc<ApplicationState<R>>>,
) -> Result<Response, ApiError> {
   let applications = state.repository.find_all_sorted().await?;

   let response: Vec<ApplicationDto> = applications
      .iter()
      .map(ApplicationDto::from_application)
      .collect();

   Ok((StatusCode::OK, Json(response)).into_response())
}

/// 応募記録を新規作成する
///
/// ## エンドポイント
/// POST /applications
pub async fn create_application<R: ApplicationRepository>(
   State(state): State<Arc<ApplicationState<R>>>,
   Json(body): Json<CreateApplicationRequest>,
) -> Result<Response, ApiError> {
   let (Some(company), Some(raw_date), Some(status)) = (
      present(body.company),
      present(body.applied_date),
      present(body.status),
   ) else {
      return Err(ApiError::MissingFields);
   };

   let parsed_date = applied_date::parse(&raw_date)?;
   let new_application = NewApplication::new(company, parsed_date, status)?;

   let created = state.repository.insert(&new_application).await?;

   Ok((
      StatusCode::CREATED,
      Json(ApplicationDto::from_application(&created)),
   )
      .into_response())
}

/// 応募記録を部分更新する
///
/// ボディに含まれる（かつ空でない）フィールドのみ上書きする。
/// 空のボディでも 200 で現在の記録を返す。
///
/// ## エンドポイント
/// PUT /applications/{id}
pub async fn update_application<R: ApplicationRepository>(
   State(state): State<Arc<ApplicationState<R>>>,
   Path(id): Path<String>,
   Json(body): Json<UpdateApplicationRequest>,
) -> Result<Response, ApiError> {
   let parsed_date = match present(body.applied_date) {
      Some(raw) => Some(applied_date::parse(&raw)?),
      None => None,
   };
   let patch = ApplicationPatch::new(body.company, parsed_date, body.status);

   let updated = state
      .repository
      .update(&ApplicationId::new(id), &patch)
      .await?
      .ok_or(ApiError::ApplicationNotFound)?;

   Ok((
      StatusCode::OK,
      Json(ApplicationDto::from_application(&updated)),
   )
      .into_response())
}

/// 応募記録を削除する
///
/// 冪等な操作。該当する記録が存在しなくても 204 を返す。
///
/// ## エンドポイント
/// DELETE /applications/{id}
pub async fn delete_application<R: ApplicationRepository>(
   State(state): State<Arc<ApplicationState<R>>>,
   Path(id): Path<String>,
) -> Result<Response, ApiError> {
   state.repository.delete(&ApplicationId::new(id)).await?;

   Ok(StatusCode::NO_CONTENT.into_response())
}

#[cfg(test)]
mod tests {
   use axum::{
      Router,
      body::Body,
      http::{Method, Request, header},
   };
   use careerlog_infra::mock::MockApplicationRepository;
   use pretty_assertions::assert_eq;
   use tower::ServiceExt;

   use super::*;
   use crate::app_builder::build_app;

   fn app(repository: MockApplicationRepository) -> Router {
      build_app(Arc::new(ApplicationState { repository }))
   }

   fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
      Request::builder()
         .method(method)
         .uri(uri)
         .header(header::CONTENT_TYPE, "application/json")
         .body(Body::from(body.to_string()))
         .unwrap()
   }

   async fn body_json(response: axum::response::Response) -> serde_json::Value {
      let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      serde_json::from_slice(&bytes).unwrap()
   }

   // ===== バリデーション =====

   #[tokio::test]
   async fn test_createはフィールド欠落で400と固定メッセージを返す() {
      let response = app(MockApplicationRepository::new())
         .oneshot(json_request(
            Method::POST,
            "/applications",
            r#"{"company":"Acme"}"#,
         ))
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      let body = body_json(response).await;
      assert_eq!(
         body["message"],
         "Company, appliedDate and status are required"
      );
   }

   #[tokio::test]
   async fn test_createは空文字列のフィールドも欠落として扱う() {
      let response = app(MockApplicationRepository::new())
         .oneshot(json_request(
            Method::POST,
            "/applications",
            r#"{"company":"Acme","appliedDate":"","status":"applied"}"#,
         ))
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   }

   #[tokio::test]
   async fn test_createは解釈できない日付で400を返す() {
      let response = app(MockApplicationRepository::new())
         .oneshot(json_request(
            Method::POST,
            "/applications",
            r#"{"company":"Acme","appliedDate":"not-a-date","status":"applied"}"#,
         ))
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      let body = body_json(response).await;
      assert_eq!(body["message"], "appliedDate must be a valid date");
   }

   // ===== 404 と冪等な削除 =====

   #[tokio::test]
   async fn test_updateは未知のidで404を返す() {
      let response = app(MockApplicationRepository::new())
         .oneshot(json_request(
            Method::PUT,
            "/applications/65b2f0a1c9e77f0012345678",
            r#"{"status":"rejected"}"#,
         ))
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::NOT_FOUND);
      let body = body_json(response).await;
      assert_eq!(body["message"], "Application not found");
   }

   #[tokio::test]
   async fn test_updateは不正な形式のidも404として扱う() {
      let repository = MockApplicationRepository::new();
      let response = app(repository)
         .oneshot(json_request(
            Method::PUT,
            "/applications/not-an-object-id",
            r#"{"status":"rejected"}"#,
         ))
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::NOT_FOUND);
   }

   #[tokio::test]
   async fn test_deleteは存在しないidでも204を返す() {
      let response = app(MockApplicationRepository::new())
         .oneshot(
            Request::builder()
               .method(Method::DELETE)
               .uri("/applications/65b2f0a1c9e77f0012345678")
               .body(Body::empty())
               .unwrap(),
         )
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::NO_CONTENT);
   }

   // ===== ストア障害 =====

   #[tokio::test]
   async fn test_listはストア障害で500とメッセージを返す() {
      let repository = MockApplicationRepository::new();
      repository.set_fail(true);

      let response = app(repository)
         .oneshot(
            Request::builder()
               .method(Method::GET)
               .uri("/applications")
               .body(Body::empty())
               .unwrap(),
         )
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
      let body = body_json(response).await;
      assert!(body["message"].as_str().unwrap().contains("store failure"));
   }

   #[tokio::test]
   async fn test_createはストア障害で500を返す() {
      let repository = MockApplicationRepository::new();
      repository.set_fail(true);

      let response = app(repository)
         .oneshot(json_request(
            Method::POST,
            "/applications",
            r#"{"company":"Acme","appliedDate":"2024-01-01","status":"applied"}"#,
         ))
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
   }
}
