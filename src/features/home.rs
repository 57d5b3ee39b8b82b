use log::debug;

use crate::core::common::{
    transport::{fetch, ApiError},
    HttpClientFactory, Outcome,
};

pub mod models;


use models::HomeData;

#[derive(Clone)]
pub struct HomeApi {
    factory: HttpClientFactory,
}

impl HomeApi {
    pub fn new(factory: HttpClientFactory) -> Self {
        Self { factory }
    }

    pub async fn get_home_data(&self) -> Result<HomeData, ApiError> {
        debug!("fetching home data");

        fetch(self.factory.get("home").await).await
    }
}

#[derive(Clone)]
pub struct HomeRepository {
    api: HomeApi,
}

impl HomeRepository {
    pub fn new(api: HomeApi) -> Self {
        Self { api }
    }

    pub async fn get_home_data(&self) -> Outcome<HomeData> {
        self.api.get_home_data().await.into()
    }
}
