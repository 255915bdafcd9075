use super::PropertyApi;
use crate::domain::model::{CleaningRooms, CleaningTask, Room};
use crate::domain::ports::Transport;
use crate::domain::request::ApiRequest;
use crate::utils::encoding::encode_segment;
use crate::utils::error::Result;

impl<T: Transport> PropertyApi<T> {
    pub async fn get_cleaning_rooms(&self) -> Result<CleaningRooms> {
        self.fetch(ApiRequest::get("/cleaning/rooms")).await
    }

    pub async fn complete_cleaning(&self, room_id: &str) -> Result<Room> {
        self.fetch(ApiRequest::post(format!(
            "/cleaning/complete/{}",
            encode_segment(room_id)
        )))
        .await
    }

    /// Fresh read of rooms and after-checkout notes, folded into per-room
    /// tasks. Nothing is remembered between calls.
    pub async fn get_cleaning_tasks(&self) -> Result<Vec<CleaningTask>> {
        let rooms = self.get_rooms().await?;
        let notes = self.get_after_checkout_notes().await?;
        Ok(CleaningTask::derive(&rooms, &notes.after_checkout_notes))
    }
}
