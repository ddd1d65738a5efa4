//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - 各ハンドラはリクエスト間で状態を持たない単発のトランザクションで、
//!   ストアへの往復は 1 回のみ

pub mod application;
pub mod health;

pub use application::{
   ApplicationState,
   create_application,
   delete_application,
   list_applications,
   update_application,
};
pub use health::health_check;
