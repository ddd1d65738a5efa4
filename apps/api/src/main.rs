//! # CareerLog API サーバー
//!
//! 求人応募記録の CRUD を提供する HTTP サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |---------|------|------|
//! | GET | `/applications` | 応募記録の一覧（応募日昇順） |
//! | POST | `/applications` | 応募記録の新規作成 |
//! | PUT | `/applications/{id}` | 応募記録の部分更新 |
//! | DELETE | `/applications/{id}` | 応募記録の削除（冪等） |
//! | GET | `/health` | ヘルスチェック |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `MONGO_URI` | **Yes** | MongoDB 接続 URI |
//! | `PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! MONGO_URI=mongodb://localhost/careerlog cargo run -p careerlog-api
//!
//! # 本番環境
//! PORT=5000 MONGO_URI=mongodb+srv://... cargo run -p careerlog-api --release
//! ```
//!
//! ## 起動時のストア接続
//!
//! 起動時の疎通確認（ping）が失敗してもプロセスは起動を続ける。
//! ストアが到達可能になるまで、各リクエストは個別に 500 で失敗する。
//! 明示的な再接続・リトライは行わない（ドライバのプール管理に任せる）。

use std::{net::SocketAddr, sync::Arc};

use careerlog_api::{app_builder::build_app, config::ApiConfig, handler::ApplicationState};
use careerlog_infra::{db, repository::MongoApplicationRepository};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   tracing_subscriber::registry()
      .with(
         tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,careerlog=debug".into()),
      )
      .with(tracing_subscriber::fmt::layer())
      .init();

   // 設定読み込み
   let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!(
      "CareerLog API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベースハンドルを作成（失敗するのは URI が不正な場合のみ）
   let database = db::connect(&config.mongo_uri).await?;

   // 疎通確認の失敗は致命的ではない
   match db::ping(&database).await {
      Ok(()) => tracing::info!("MongoDB connected"),
      Err(err) => tracing::error!("MongoDB connection error: {err}"),
   }

   // 依存コンポーネントを初期化
   let repository = MongoApplicationRepository::new(&database);
   let state = Arc::new(ApplicationState { repository });

   // ルーター構築
   let app = build_app(state);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("CareerLog API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
