//! # 応募記録（Application）
//!
//! 求人応募の履歴を表現するドメインモデル。
//!
//! ## エンティティの構成
//!
//! - [`Application`] - 永続化済みの応募記録（ID 付き）
//! - [`NewApplication`] - 新規作成の入力（ID はストアが採番する）
//! - [`ApplicationPatch`] - 部分更新の入力（指定されたフィールドのみ適用）
//!
//! ## 不変条件
//!
//! - `company` と `status` は空文字列ではない
//! - `id` はストアが採番した一意な識別子で、作成後に変更されない
//!
//! ## 使用例
//!
//! ```rust
//! use careerlog_domain::{NewApplication, applied_date};
//!
//! # fn main() -> Result<(), careerlog_domain::DomainError> {
//! let date = applied_date::parse("2024-01-01")?;
//! let new = NewApplication::new("Acme", date, "applied")?;
//! assert_eq!(new.company(), "Acme");
//! # Ok(())
//! # }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DomainError;

// =========================================================================
// ApplicationId
// =========================================================================

/// 応募記録の一意識別子
///
/// ストアが採番する不透明な文字列（MongoDB なら ObjectId の 16 進表現）。
/// ドメイン層では形式を解釈せず、そのまま持ち回る。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
   pub fn new(value: impl Into<String>) -> Self {
      Self(value.into())
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl fmt::Display for ApplicationId {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

// =========================================================================
// applied_date（応募日の解析と整形）
// =========================================================================

/// 応募日（`appliedDate`）の解析と整形
///
/// クライアントは RFC 3339 の日時（`2024-01-01T09:30:00Z`）か
/// 日付のみ（`2024-01-01`、UTC の 0 時と解釈）を送信できる。
/// レスポンスではミリ秒精度の UTC（`2024-01-01T00:00:00.000Z`）に整形する。
/// ストアの BSON 日時がミリ秒精度のため、これ以上の精度は保持しない。
pub mod applied_date {
   use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

   use crate::DomainError;

   /// 応募日文字列を UTC 日時に解析する
   ///
   /// # エラー
   ///
   /// RFC 3339 としても `YYYY-MM-DD` としても解釈できない場合は
   /// `DomainError::Validation` を返す。
   pub fn parse(value: &str) -> Result<DateTime<Utc>, DomainError> {
      if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
         return Ok(datetime.with_timezone(&Utc));
      }

      if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
         // NaiveDate からの 0 時は常に存在する
         if let Some(datetime) = date.and_hms_opt(0, 0, 0) {
            return Ok(datetime.and_utc());
         }
      }

      Err(DomainError::Validation(
         "appliedDate must be a valid date".to_string(),
      ))
   }

   /// UTC 日時をレスポンス用の文字列に整形する
   pub fn format(value: &DateTime<Utc>) -> String {
      value.to_rfc3339_opts(SecondsFormat::Millis, true)
   }
}

// =========================================================================
// Application（エンティティ）
// =========================================================================

/// 永続化済みの応募記録
///
/// ストアから読み出した、ID 付きの応募記録。
/// フィールドの書き換えは [`Application::apply`] 経由でのみ行う。
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
   id:           ApplicationId,
   company:      String,
   applied_date: DateTime<Utc>,
   status:       String,
}

impl Application {
   /// ストアから復元した値でエンティティを組み立てる
   ///
   /// 永続化層からの復元専用。新規作成は [`NewApplication`] を経由し、
   /// ID の採番をストアに委ねる。
   pub fn new(
      id: ApplicationId,
      company: impl Into<String>,
      applied_date: DateTime<Utc>,
      status: impl Into<String>,
   ) -> Self {
      Self {
         id,
         company: company.into(),
         applied_date,
         status: status.into(),
      }
   }

   pub fn id(&self) -> &ApplicationId {
      &self.id
   }

   pub fn company(&self) -> &str {
      &self.company
   }

   pub fn applied_date(&self) -> &DateTime<Utc> {
      &self.applied_date
   }

   pub fn status(&self) -> &str {
      &self.status
   }

   /// 部分更新を適用する
   ///
   /// パッチに含まれるフィールドのみ上書きし、含まれないフィールドは
   /// 現在の値を保持する。空のパッチは何も変更しない。
   pub fn apply(&mut self, patch: &ApplicationPatch) {
      if let Some(company) = patch.company() {
         self.company = company.to_string();
      }
      if let Some(applied_date) = patch.applied_date() {
         self.applied_date = *applied_date;
      }
      if let Some(status) = patch.status() {
         self.status = status.to_string();
      }
   }
}

// =========================================================================
// NewApplication（新規作成の入力）
// =========================================================================

/// 新規作成の入力
///
/// # 不変条件
///
/// - `company` と `status` は空文字列ではない
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
   company:      String,
   applied_date: DateTime<Utc>,
   status:       String,
}

impl NewApplication {
   /// 入力を検証して新規作成用の値を組み立てる
   ///
   /// # エラー
   ///
   /// `company` または `status` が空文字列の場合は
   /// `DomainError::Validation` を返す。
   pub fn new(
      company: impl Into<String>,
      applied_date: DateTime<Utc>,
      status: impl Into<String>,
   ) -> Result<Self, DomainError> {
      let company = company.into();
      let status = status.into();

      if company.is_empty() || status.is_empty() {
         return Err(DomainError::Validation(
            "Company, appliedDate and status are required".to_string(),
         ));
      }

      Ok(Self {
         company,
         applied_date,
         status,
      })
   }

   pub fn company(&self) -> &str {
      &self.company
   }

   pub fn applied_date(&self) -> &DateTime<Utc> {
      &self.applied_date
   }

   pub fn status(&self) -> &str {
      &self.status
   }
}

// =========================================================================
// ApplicationPatch（部分更新の入力）
// =========================================================================

/// 部分更新の入力
///
/// `None` のフィールドは「変更しない」を意味する。
/// 空文字列も「変更しない」に正規化する（クライアントがフィールドを
/// 空にクリアする操作は API 契約上存在しない）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationPatch {
   company:      Option<String>,
   applied_date: Option<DateTime<Utc>>,
   status:       Option<String>,
}

impl ApplicationPatch {
   /// 入力を正規化してパッチを組み立てる
   ///
   /// `company` / `status` の空文字列は `None` に落とす。
   pub fn new(
      company: Option<String>,
      applied_date: Option<DateTime<Utc>>,
      status: Option<String>,
   ) -> Self {
      Self {
         company: company.filter(|v| !v.is_empty()),
         applied_date,
         status: status.filter(|v| !v.is_empty()),
      }
   }

   /// 適用すべきフィールドが 1 つもないかどうか
   pub fn is_empty(&self) -> bool {
      self.company.is_none() && self.applied_date.is_none() && self.status.is_none()
   }

   pub fn company(&self) -> Option<&str> {
      self.company.as_deref()
   }

   pub fn applied_date(&self) -> Option<&DateTime<Utc>> {
      self.applied_date.as_ref()
   }

   pub fn status(&self) -> Option<&str> {
      self.status.as_deref()
   }
}

#[cfg(test)]
mod tests {
   use chrono::TimeZone;
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
      Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
   }

   // ===== applied_date =====

   #[rstest]
   #[case("2024-01-01", utc(2024, 1, 1, 0, 0, 0))]
   #[case("2024-01-01T00:00:00Z", utc(2024, 1, 1, 0, 0, 0))]
   #[case("2024-01-01T09:30:00Z", utc(2024, 1, 1, 9, 30, 0))]
   #[case("2024-01-01T09:30:00+09:00", utc(2024, 1, 1, 0, 30, 0))]
   #[case("2024-01-01T00:00:00.000Z", utc(2024, 1, 1, 0, 0, 0))]
   fn test_applied_dateが日付と日時の両形式を解析できる(
      #[case] input: &str,
      #[case] expected: DateTime<Utc>,
   ) {
      assert_eq!(applied_date::parse(input).unwrap(), expected);
   }

   #[rstest]
   #[case("")]
   #[case("not-a-date")]
   #[case("2024-13-01")]
   #[case("01/01/2024")]
   fn test_applied_dateが不正な入力を拒否する(#[case] input: &str) {
      let err = applied_date::parse(input).unwrap_err();
      assert!(matches!(err, DomainError::Validation(_)));
   }

   #[test]
   fn test_applied_dateの整形はミリ秒精度のutcになる() {
      let value = utc(2024, 1, 1, 0, 0, 0);
      assert_eq!(applied_date::format(&value), "2024-01-01T00:00:00.000Z");
   }

   #[test]
   fn test_applied_dateは解析と整形で往復できる() {
      let value = applied_date::parse("2024-06-15T12:34:56.789Z").unwrap();
      assert_eq!(applied_date::format(&value), "2024-06-15T12:34:56.789Z");
   }

   // ===== NewApplication =====

   #[test]
   fn test_new_applicationが入力値をそのまま保持する() {
      let date = utc(2024, 1, 1, 0, 0, 0);
      let new = NewApplication::new("Acme", date, "applied").unwrap();

      assert_eq!(new.company(), "Acme");
      assert_eq!(*new.applied_date(), date);
      assert_eq!(new.status(), "applied");
   }

   #[rstest]
   #[case("", "applied")]
   #[case("Acme", "")]
   #[case("", "")]
   fn test_new_applicationが空文字列を拒否する(#[case] company: &str, #[case] status: &str) {
      let date = utc(2024, 1, 1, 0, 0, 0);
      let err = NewApplication::new(company, date, status).unwrap_err();
      assert!(matches!(err, DomainError::Validation(_)));
   }

   // ===== ApplicationPatch =====

   #[test]
   fn test_patchは空文字列をnoneに正規化する() {
      let patch = ApplicationPatch::new(Some(String::new()), None, Some(String::new()));
      assert!(patch.is_empty());
   }

   #[test]
   fn test_空のpatchはis_emptyがtrueを返す() {
      assert!(ApplicationPatch::default().is_empty());
   }

   #[test]
   fn test_applyはpatchに含まれるフィールドのみ上書きする() {
      let mut app = Application::new(
         ApplicationId::new("a1"),
         "Acme",
         utc(2024, 1, 1, 0, 0, 0),
         "applied",
      );

      let patch = ApplicationPatch::new(None, None, Some("rejected".to_string()));
      app.apply(&patch);

      assert_eq!(app.company(), "Acme");
      assert_eq!(*app.applied_date(), utc(2024, 1, 1, 0, 0, 0));
      assert_eq!(app.status(), "rejected");
   }

   #[test]
   fn test_applyは空のpatchで何も変更しない() {
      let mut app = Application::new(
         ApplicationId::new("a1"),
         "Acme",
         utc(2024, 1, 1, 0, 0, 0),
         "applied",
      );
      let before = app.clone();

      app.apply(&ApplicationPatch::default());

      assert_eq!(app, before);
   }

   #[test]
   fn test_applyは全フィールドを上書きできる() {
      let mut app = Application::new(
         ApplicationId::new("a1"),
         "Acme",
         utc(2024, 1, 1, 0, 0, 0),
         "applied",
      );

      let patch = ApplicationPatch::new(
         Some("Globex".to_string()),
         Some(utc(2024, 2, 2, 0, 0, 0)),
         Some("interview".to_string()),
      );
      app.apply(&patch);

      assert_eq!(app.company(), "Globex");
      assert_eq!(*app.applied_date(), utc(2024, 2, 2, 0, 0, 0));
      assert_eq!(app.status(), "interview");
   }
}
