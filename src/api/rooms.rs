use super::PropertyApi;
use crate::domain::model::Room;
use crate::domain::ports::Transport;
use crate::domain::request::ApiRequest;
use crate::utils::encoding::encode_segment;
use crate::utils::error::Result;

impl<T: Transport> PropertyApi<T> {
    pub async fn get_rooms(&self) -> Result<Vec<Room>> {
        self.fetch(ApiRequest::get("/rooms/")).await
    }

    pub async fn get_room(&self, id: &str) -> Result<Room> {
        self.fetch(ApiRequest::get(format!("/rooms/{}", encode_segment(id))))
            .await
    }
}
