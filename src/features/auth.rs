use log::debug;

use crate::core::common::{
    transport::{fetch, ApiError},
    HttpClientFactory, Outcome,
};

pub mod models;


use models::{Credentials, LoginResponse};

#[derive(Clone)]
pub struct AuthApi {
    factory: HttpClientFactory,
}

impl AuthApi {
    pub fn new(factory: HttpClientFactory) -> Self {
        Self { factory }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        debug!("logging in as {}", credentials.username);

        let request = self.factory.post("auth/login").await.json(credentials);

        fetch(request).await
    }
}

#[derive(Clone)]
pub struct LoginRepository {
    api: AuthApi,
}

impl LoginRepository {
    pub fn new(api: AuthApi) -> Self {
        Self { api }
    }

    pub async fn login(&self, credentials: Credentials) -> Outcome<LoginResponse> {
        self.api.login(&credentials).await.into()
    }
}
