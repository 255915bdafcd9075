use super::PropertyApi;
use crate::domain::model::{MonthReservations, WeekReservations};
use crate::domain::ports::Transport;
use crate::domain::request::ApiRequest;
use crate::utils::error::Result;

// No pagination: the backend decides how many reservations come back.
impl<T: Transport> PropertyApi<T> {
    pub async fn get_month_reservations(&self, year: i32, month: u32) -> Result<MonthReservations> {
        self.fetch(ApiRequest::get(format!("/calendar/month/{}/{}", year, month)))
            .await
    }

    pub async fn get_week_reservations(&self, year: i32, week: u32) -> Result<WeekReservations> {
        self.fetch(ApiRequest::get(format!("/calendar/week/{}/{}", year, week)))
            .await
    }
}
