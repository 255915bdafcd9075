use super::{with_body, PropertyApi};
use crate::domain::model::{AfterCheckoutNotes, AlertSummary, NewRoomNote, RoomNote, UrgentNotes};
use crate::domain::ports::Transport;
use crate::domain::request::ApiRequest;
use crate::utils::encoding::encode_segment;
use crate::utils::error::Result;

impl<T: Transport> PropertyApi<T> {
    /// `progress: None` lists every note. `Some("")` is a real filter: notes
    /// that have no progress yet.
    pub async fn get_room_notes(
        &self,
        room_id: Option<&str>,
        progress: Option<&str>,
    ) -> Result<Vec<RoomNote>> {
        let request = ApiRequest::get("/room-notes/")
            .query_opt("room_id", room_id.filter(|id| !id.is_empty()))
            .query_opt("progress", progress);
        tracing::debug!("Listing room notes with query {:?}", request.query);
        self.fetch(request).await
    }

    pub async fn get_urgent_notes(&self) -> Result<UrgentNotes> {
        self.fetch(ApiRequest::get("/room-notes/urgent")).await
    }

    pub async fn get_after_checkout_notes(&self) -> Result<AfterCheckoutNotes> {
        self.fetch(ApiRequest::get("/room-notes/after-checkout"))
            .await
    }

    pub async fn get_all_alerts(&self) -> Result<AlertSummary> {
        self.fetch(ApiRequest::get("/room-notes/alerts")).await
    }

    pub async fn create_room_note(&self, note: &NewRoomNote) -> Result<RoomNote> {
        let request = with_body(ApiRequest::post("/room-notes/"), note)?;
        self.fetch(request).await
    }

    /// Terminal: a completed note is never reopened from here.
    pub async fn complete_room_note(&self, note_id: &str) -> Result<RoomNote> {
        self.fetch(ApiRequest::post(format!(
            "/room-notes/{}/complete",
            encode_segment(note_id)
        )))
        .await
    }

    /// A missing progress value is sent as the empty string.
    pub async fn update_note_progress(&self, note_id: &str, progress: Option<&str>) -> Result<RoomNote> {
        let request = ApiRequest::put(format!("/room-notes/{}/progress", encode_segment(note_id)))
            .query("progress", progress.unwrap_or_default());
        self.fetch(request).await
    }
}
