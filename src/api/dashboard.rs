use super::PropertyApi;
use crate::domain::model::{CheckInOutSummary, DashboardStats};
use crate::domain::ports::Transport;
use crate::domain::request::ApiRequest;
use crate::utils::error::Result;

impl<T: Transport> PropertyApi<T> {
    /// Today's arrivals and departures.
    pub async fn get_check_in_out_summary(&self) -> Result<CheckInOutSummary> {
        self.fetch(ApiRequest::get("/dashboard/checkin-out")).await
    }

    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        self.fetch(ApiRequest::get("/dashboard/stats")).await
    }
}
