//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `MONGO_URI` | **Yes** | MongoDB 接続 URI |
//! | `PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |

use std::env;

/// API の呼び出しを許可する唯一のオリジン
///
/// フロントエンドのデプロイ先に固定する。環境変数では変更できない
/// （設定項目は接続文字列とポートのみ）。
pub const ALLOWED_ORIGIN: &str = "https://mycareerlogfrontend.vercel.app";

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host:      String,
   /// ポート番号
   pub port:      u16,
   /// MongoDB 接続 URI
   pub mongo_uri: String,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, env::VarError> {
      Ok(Self {
         host:      env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port:      env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .expect("PORT は有効なポート番号である必要があります"),
         mongo_uri: env::var("MONGO_URI")?,
      })
   }
}
