//! # ApplicationRepository
//!
//! 応募記録の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **単一コレクション**: `applications` コレクションのみを使用し、
//!   セカンダリインデックスは持たない（`_id` のデフォルトのみ）
//! - **ID はストアが採番**: 挿入時に MongoDB が `_id` を割り当てる
//! - **ObjectId の解釈はこの層に閉じる**: ドメイン層の [`ApplicationId`] は
//!   不透明な文字列。解釈できない ID は「存在しない記録」として扱う
//!   （更新は `None`、削除は no-op）
//! - **楽観的ロックなし**: 同一 ID への並行更新はストア到達順で
//!   後勝ちになる（last-writer-wins）

use async_trait::async_trait;
use bson::{DateTime as BsonDateTime, Document, doc, oid::ObjectId};
use careerlog_domain::{Application, ApplicationId, ApplicationPatch, NewApplication};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{Collection, Database, options::ReturnDocument};
use serde::{Deserialize, Serialize};

use crate::error::InfraError;

/// 応募記録を格納するコレクション名
const COLLECTION: &str = "applications";

/// 応募日を格納するフィールド名（ワイヤ形式と同じ camelCase）
const APPLIED_DATE_FIELD: &str = "appliedDate";

/// 応募記録リポジトリトレイト
///
/// 応募記録の永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、API 層から利用する。
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
   /// 全応募記録を応募日の昇順で取得する
   ///
   /// ページネーションは行わず、全件を返す。
   async fn find_all_sorted(&self) -> Result<Vec<Application>, InfraError>;

   /// 応募記録を新規作成する
   ///
   /// ストアが採番した ID を含む、永続化済みの記録を返す。
   async fn insert(&self, new_application: &NewApplication) -> Result<Application, InfraError>;

   /// 応募記録を部分更新する
   ///
   /// パッチに含まれるフィールドのみ適用する。空のパッチは何も変更せず
   /// 現在の記録を返す。
   ///
   /// # 戻り値
   ///
   /// - `Ok(Some(application))`: 更新後の記録
   /// - `Ok(None)`: ID に該当する記録が存在しない
   /// - `Err(_)`: ストアへのアクセス失敗
   async fn update(
      &self,
      id: &ApplicationId,
      patch: &ApplicationPatch,
   ) -> Result<Option<Application>, InfraError>;

   /// 応募記録を削除する
   ///
   /// 冪等な操作。記録が存在しない場合も成功（no-op）とし、
   /// ストアへのアクセス失敗のみエラーを返す。
   async fn delete(&self, id: &ApplicationId) -> Result<(), InfraError>;
}

/// MongoDB に格納するドキュメント表現
///
/// `_id` は挿入時には持たず（ストアが採番）、読み出し時には必ず持つ。
/// `appliedDate` は BSON 日時（ミリ秒精度）で格納する。
#[derive(Debug, Serialize, Deserialize)]
struct ApplicationDocument {
   #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
   id:           Option<ObjectId>,
   company:      String,
   #[serde(
      rename = "appliedDate",
      with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
   )]
   applied_date: DateTime<Utc>,
   status:       String,
}

impl ApplicationDocument {
   fn from_new(new_application: &NewApplication) -> Self {
      Self {
         id:           None,
         company:      new_application.company().to_string(),
         applied_date: *new_application.applied_date(),
         status:       new_application.status().to_string(),
      }
   }

   /// ドキュメントをドメインエンティティに変換する
   ///
   /// 読み出したドキュメントに `_id` が無いことは無いはずだが、
   /// その場合はパニックせずエラーとして報告する。
   fn into_application(self) -> Result<Application, InfraError> {
      let id = self
         .id
         .ok_or_else(|| InfraError::unexpected("application document is missing _id"))?;
      Ok(Application::new(
         ApplicationId::new(id.to_hex()),
         self.company,
         self.applied_date,
         self.status,
      ))
   }
}

/// MongoDB 実装の ApplicationRepository
#[derive(Debug, Clone)]
pub struct MongoApplicationRepository {
   collection: Collection<ApplicationDocument>,
}

impl MongoApplicationRepository {
   pub fn new(database: &Database) -> Self {
      Self {
         collection: database.collection(COLLECTION),
      }
   }
}

#[async_trait]
impl ApplicationRepository for MongoApplicationRepository {
   async fn find_all_sorted(&self) -> Result<Vec<Application>, InfraError> {
      let cursor = self
         .collection
         .find(doc! {})
         .sort(doc! { APPLIED_DATE_FIELD: 1 })
         .await?;
      let documents: Vec<ApplicationDocument> = cursor.try_collect().await?;

      documents
         .into_iter()
         .map(ApplicationDocument::into_application)
         .collect()
   }

   async fn insert(&self, new_application: &NewApplication) -> Result<Application, InfraError> {
      let document = ApplicationDocument::from_new(new_application);
      let result = self.collection.insert_one(&document).await?;

      let id = result
         .inserted_id
         .as_object_id()
         .ok_or_else(|| InfraError::unexpected("store did not assign an ObjectId"))?;

      Ok(Application::new(
         ApplicationId::new(id.to_hex()),
         document.company,
         document.applied_date,
         document.status,
      ))
   }

   async fn update(
      &self,
      id: &ApplicationId,
      patch: &ApplicationPatch,
   ) -> Result<Option<Application>, InfraError> {
      let Ok(object_id) = ObjectId::parse_str(id.as_str()) else {
         // 解釈できない ID に該当する記録は存在しない
         return Ok(None);
      };
      let filter = doc! { "_id": object_id };

      let updated = if patch.is_empty() {
         // `$set: {}` は無効なため、空のパッチは読み出しのみ行う
         self.collection.find_one(filter).await?
      } else {
         self
            .collection
            .find_one_and_update(filter, doc! { "$set": set_document(patch) })
            .return_document(ReturnDocument::After)
            .await?
      };

      updated.map(ApplicationDocument::into_application).transpose()
   }

   async fn delete(&self, id: &ApplicationId) -> Result<(), InfraError> {
      let Ok(object_id) = ObjectId::parse_str(id.as_str()) else {
         return Ok(());
      };

      // 削除対象が存在しない場合も成功（冪等）
      self.collection.delete_one(doc! { "_id": object_id }).await?;
      Ok(())
   }
}

/// パッチから `$set` に渡すドキュメントを組み立てる
///
/// パッチに含まれるフィールドのみをキーに持つ。
fn set_document(patch: &ApplicationPatch) -> Document {
   let mut set = Document::new();
   if let Some(company) = patch.company() {
      set.insert("company", company);
   }
   if let Some(applied_date) = patch.applied_date() {
      set.insert(APPLIED_DATE_FIELD, BsonDateTime::from_chrono(*applied_date));
   }
   if let Some(status) = patch.status() {
      set.insert("status", status);
   }
   set
}
