use super::{with_body, PropertyApi};
use crate::domain::model::{NewReservation, Reservation, RoomAvailability};
use crate::domain::ports::Transport;
use crate::domain::request::ApiRequest;
use crate::utils::encoding::encode_segment;
use crate::utils::error::Result;

impl<T: Transport> PropertyApi<T> {
    pub async fn get_reservations(&self) -> Result<Vec<Reservation>> {
        self.fetch(ApiRequest::get("/reservations/")).await
    }

    pub async fn get_reservation(&self, id: &str) -> Result<Reservation> {
        self.fetch(ApiRequest::get(format!("/reservations/{}", encode_segment(id))))
            .await
    }

    /// Field checks (including overlapping bookings) are the backend's job;
    /// the body is forwarded untouched.
    pub async fn create_reservation(&self, reservation: &NewReservation) -> Result<Reservation> {
        let request = with_body(ApiRequest::post("/reservations/"), reservation)?;
        self.fetch(request).await
    }

    /// Read-only probe. It holds nothing, so a concurrent booking can still
    /// take the room before `create_reservation` runs.
    pub async fn check_room_availability(
        &self,
        room_id: &str,
        check_in: &str,
        check_out: &str,
    ) -> Result<RoomAvailability> {
        let request = ApiRequest::get(format!(
            "/reservations/room/{}/availability",
            encode_segment(room_id)
        ))
        .query("check_in", check_in)
        .query("check_out", check_out);
        self.fetch(request).await
    }

    pub async fn update_reservation_status(
        &self,
        id: &str,
        status: impl AsRef<str>,
    ) -> Result<Reservation> {
        let request = ApiRequest::put(format!("/reservations/{}/status", encode_segment(id)))
            .query("status", status.as_ref());
        self.fetch(request).await
    }
}
