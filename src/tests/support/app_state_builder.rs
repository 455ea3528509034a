use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::application::ports::incoming::use_cases::LoginAdminUseCase;
use crate::modules::content::application::ports::outgoing::NoopQueryCache;
use crate::modules::document_store::adapter::outgoing::InMemoryDocumentStore;
use crate::modules::multimedia::application::domain::UploadPolicy;
use crate::modules::multimedia::application::ports::outgoing::BlobUploader;
use crate::tests::support::stubs::{StubBlobUploader, StubLoginAdminUseCase};
use crate::AppState;

pub struct TestAppStateBuilder {
    store: Arc<InMemoryDocumentStore>,
    offline: bool,
    login_admin: Option<Arc<dyn LoginAdminUseCase + Send + Sync>>,
    blob_uploader: Option<Arc<dyn BlobUploader + Send + Sync>>,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: Arc::new(InMemoryDocumentStore::new()),
            offline: false,
            login_admin: Some(Arc::new(StubLoginAdminUseCase)),
            blob_uploader: Some(Arc::new(StubBlobUploader)),
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    /// Content reads and writes fail as if the store were unreachable.
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Some(Arc::new(uc));
        self
    }

    pub fn with_blob_uploader(
        mut self,
        uploader: impl BlobUploader + Send + Sync + 'static,
    ) -> Self {
        self.blob_uploader = Some(Arc::new(uploader));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        self.store.set_offline(self.offline);
        let content = crate::modules::content::build_use_cases(
            self.store,
            Arc::new(NoopQueryCache),
        );

        web::Data::new(AppState {
            content,
            login_admin_use_case: self.login_admin.unwrap(),
            blob_uploader: self.blob_uploader.unwrap(),
            upload_policy: self.upload_policy,
        })
    }
}
