use reqwest::Method;

use crate::api::{ApiClient, ApiError};
use crate::model::EarningsSummary;

pub async fn earnings(api: &ApiClient) -> Result<EarningsSummary, ApiError> {
    let req = api.request(Method::GET, "/owner/earnings");
    api.send(req).await
}
