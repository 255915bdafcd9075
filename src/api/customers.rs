use super::{with_body, PropertyApi};
use crate::domain::model::{Customer, CustomerReservations};
use crate::domain::ports::Transport;
use crate::domain::request::ApiRequest;
use crate::utils::encoding::encode_segment;
use crate::utils::error::Result;

impl<T: Transport> PropertyApi<T> {
    pub async fn get_customers(&self) -> Result<Vec<Customer>> {
        self.fetch(ApiRequest::get("/customers/")).await
    }

    pub async fn get_customer(&self, id: &str) -> Result<Customer> {
        self.fetch(ApiRequest::get(format!("/customers/{}", encode_segment(id))))
            .await
    }

    pub async fn get_customer_reservations(&self, customer_id: &str) -> Result<CustomerReservations> {
        self.fetch(ApiRequest::get(format!(
            "/customers/{}/reservations",
            encode_segment(customer_id)
        )))
        .await
    }

    pub async fn create_customer(&self, customer: &Customer) -> Result<Customer> {
        let request = with_body(ApiRequest::post("/customers/"), customer)?;
        self.fetch(request).await
    }
}
