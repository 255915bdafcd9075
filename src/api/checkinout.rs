use super::PropertyApi;
use crate::domain::model::{Reservation, UpcomingMovements};
use crate::domain::ports::Transport;
use crate::domain::request::ApiRequest;
use crate::utils::encoding::encode_segment;
use crate::utils::error::Result;

pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

impl<T: Transport> PropertyApi<T> {
    /// Not idempotent at this layer: a repeated call is sent again and the
    /// backend decides (it answers 400 "Already checked in").
    pub async fn check_in(&self, reservation_id: &str) -> Result<Reservation> {
        self.fetch(ApiRequest::post(format!(
            "/checkinout/checkin/{}",
            encode_segment(reservation_id)
        )))
        .await
    }

    pub async fn check_out(&self, reservation_id: &str) -> Result<Reservation> {
        self.fetch(ApiRequest::post(format!(
            "/checkinout/checkout/{}",
            encode_segment(reservation_id)
        )))
        .await
    }

    /// Arrivals and departures within the next `days` days; `None` means 7.
    pub async fn get_upcoming_checkins_checkouts(&self, days: Option<u32>) -> Result<UpcomingMovements> {
        let days = days.unwrap_or(DEFAULT_UPCOMING_DAYS);
        self.fetch(ApiRequest::get("/checkinout/upcoming").query("days", days))
            .await
    }
}
