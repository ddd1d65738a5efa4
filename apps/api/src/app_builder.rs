//! # アプリケーション構築
//!
//! ルーター定義とミドルウェア（CORS・トレース）の組み立てを担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
   Router,
   http::{HeaderValue, Method, header},
   routing::{get, put},
};
use careerlog_infra::repository::ApplicationRepository;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
   config,
   handler::{
      ApplicationState,
      create_application,
      delete_application,
      health_check,
      list_applications,
      update_application,
   },
};

/// ルーターを組み立てる
///
/// リポジトリ実装をジェネリクスで受け取り、本番（MongoDB）と
/// テスト（インメモリモック）で同じルーターを共有する。
pub fn build_app<R>(state: Arc<ApplicationState<R>>) -> Router
where
   R: ApplicationRepository + 'static,
{
   // 許可するオリジンは 1 つに固定
   let cors = CorsLayer::new()
      .allow_origin(
         config::ALLOWED_ORIGIN
            .parse::<HeaderValue>()
            .expect("ALLOWED_ORIGIN は有効なオリジンである必要があります"),
      )
      .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
      .allow_headers([header::CONTENT_TYPE]);

   Router::new()
      .route("/health", get(health_check))
      .route(
         "/applications",
         get(list_applications::<R>).post(create_application::<R>),
      )
      .route(
         "/applications/{id}",
         put(update_application::<R>).delete(delete_application::<R>),
      )
      .with_state(state)
      .layer(cors)
      .layer(TraceLayer::new_for_http())
}
