//! # テスト用モックリポジトリ
//!
//! ハンドラ・API テストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! careerlog-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
   Arc, Mutex,
   atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use bson::oid::ObjectId;
use careerlog_domain::{Application, ApplicationId, ApplicationPatch, NewApplication};

use crate::{error::InfraError, repository::ApplicationRepository};

/// インメモリ実装の ApplicationRepository
///
/// ID の採番は本実装と同じく ObjectId の 16 進表現で行う。
/// [`set_fail`](Self::set_fail) でストア障害を再現できる。
#[derive(Clone, Default)]
pub struct MockApplicationRepository {
   applications: Arc<Mutex<Vec<Application>>>,
   fail:         Arc<AtomicBool>,
}

impl MockApplicationRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 事前データを投入する
   pub fn add_application(&self, application: Application) {
      self.applications.lock().unwrap().push(application);
   }

   /// 以降の全操作をストア障害として失敗させるかどうかを設定する
   pub fn set_fail(&self, fail: bool) {
      self.fail.store(fail, Ordering::SeqCst);
   }

   fn check_fail(&self) -> Result<(), InfraError> {
      if self.fail.load(Ordering::SeqCst) {
         return Err(InfraError::unexpected("simulated store failure"));
      }
      Ok(())
   }
}

#[async_trait]
impl ApplicationRepository for MockApplicationRepository {
   async fn find_all_sorted(&self) -> Result<Vec<Application>, InfraError> {
      self.check_fail()?;
      let mut applications = self.applications.lock().unwrap().clone();
      applications.sort_by(|a, b| a.applied_date().cmp(b.applied_date()));
      Ok(applications)
   }

   async fn insert(&self, new_application: &NewApplication) -> Result<Application, InfraError> {
      self.check_fail()?;
      let application = Application::new(
         ApplicationId::new(ObjectId::new().to_hex()),
         new_application.company(),
         *new_application.applied_date(),
         new_application.status(),
      );
      self.applications.lock().unwrap().push(application.clone());
      Ok(application)
   }

   async fn update(
      &self,
      id: &ApplicationId,
      patch: &ApplicationPatch,
   ) -> Result<Option<Application>, InfraError> {
      self.check_fail()?;
      let mut applications = self.applications.lock().unwrap();
      let Some(application) = applications.iter_mut().find(|a| a.id() == id) else {
         return Ok(None);
      };
      application.apply(patch);
      Ok(Some(application.clone()))
   }

   async fn delete(&self, id: &ApplicationId) -> Result<(), InfraError> {
      self.check_fail()?;
      self.applications.lock().unwrap().retain(|a| a.id() != id);
      Ok(())
   }
}
