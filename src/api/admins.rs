use super::{with_body, PropertyApi};
use crate::domain::model::{Admin, DeleteAck};
use crate::domain::ports::Transport;
use crate::domain::request::ApiRequest;
use crate::utils::encoding::encode_segment;
use crate::utils::error::Result;

// Admins are never updated in place; replace with delete + create.
impl<T: Transport> PropertyApi<T> {
    pub async fn get_admins(&self) -> Result<Vec<Admin>> {
        self.fetch(ApiRequest::get("/admins/")).await
    }

    pub async fn get_admin(&self, id: &str) -> Result<Admin> {
        self.fetch(ApiRequest::get(format!("/admins/{}", encode_segment(id))))
            .await
    }

    pub async fn create_admin(&self, admin: &Admin) -> Result<Admin> {
        let request = with_body(ApiRequest::post("/admins/"), admin)?;
        self.fetch(request).await
    }

    pub async fn delete_admin(&self, id: &str) -> Result<DeleteAck> {
        self.fetch(ApiRequest::delete(format!("/admins/{}", encode_segment(id))))
            .await
    }
}
