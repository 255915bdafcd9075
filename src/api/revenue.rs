use super::PropertyApi;
use crate::domain::model::{DailyRevenueReport, MonthlyRevenueReport, PlatformRevenueReport};
use crate::domain::ports::Transport;
use crate::domain::request::ApiRequest;
use crate::utils::encoding::encode_segment;
use crate::utils::error::Result;

// Aggregations are computed server-side; dates travel as `YYYY-MM-DD`
// path segments exactly as given.
impl<T: Transport> PropertyApi<T> {
    pub async fn get_daily_revenue(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<DailyRevenueReport> {
        self.fetch(ApiRequest::get(format!(
            "/revenue/daily/{}/{}",
            encode_segment(start_date),
            encode_segment(end_date)
        )))
        .await
    }

    pub async fn get_monthly_revenue(&self, year: i32) -> Result<MonthlyRevenueReport> {
        self.fetch(ApiRequest::get(format!("/revenue/monthly/{}", year)))
            .await
    }

    pub async fn get_platform_revenue(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<PlatformRevenueReport> {
        self.fetch(ApiRequest::get(format!(
            "/revenue/platform/{}/{}",
            encode_segment(start_date),
            encode_segment(end_date)
        )))
        .await
    }
}
