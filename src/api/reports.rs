use super::PropertyApi;
use crate::domain::model::Download;
use crate::domain::ports::Transport;
use crate::domain::request::ApiRequest;
use crate::utils::error::Result;

impl<T: Transport> PropertyApi<T> {
    pub async fn export_reservations_excel(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Download> {
        self.download(report_request("/reports/reservations/excel", start_date, end_date))
            .await
    }

    pub async fn export_reservations_csv(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Download> {
        self.download(report_request("/reports/reservations/csv", start_date, end_date))
            .await
    }
}

fn report_request(path: &str, start_date: Option<&str>, end_date: Option<&str>) -> ApiRequest {
    // Blank dates count as absent, like a cleared date picker.
    ApiRequest::get(path)
        .query_opt("start_date", start_date.filter(|d| !d.is_empty()))
        .query_opt("end_date", end_date.filter(|d| !d.is_empty()))
        .binary()
}
