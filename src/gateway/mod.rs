// ABOUTME: Remote API gateway for the FoodLens backend REST contract
// ABOUTME: Attaches bearer tokens, performs single-attempt calls, and enforces the 401 forced-logout policy

//! # Remote API Gateway
//!
//! A configured HTTP client exposing the fixed set of remote operations:
//! login, registration, category browsing, product and image analysis,
//! profile fetch/update, and recommendations.
//!
//! Every call reads the current token from the [`SessionStore`] and
//! attaches it as an `Authorization: Bearer` header when present; without
//! a token the request goes out unauthenticated and the server rejects it.
//! Calls are single attempts with no retry, backoff, or batching; the
//! caller presents failures to the user. A `401` response anywhere clears
//! the session and returns [`ClientError::Unauthorized`], the one
//! cross-cutting error policy in the client.
//!
//! Malformed or absent response bodies are treated as "no data": list
//! operations yield empty collections and single-object operations yield
//! `None` instead of an error.

use reqwest::{multipart, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::constants::{defaults, prefs, routes};
use crate::errors::{ClientError, ClientResult};
use crate::models::{
    FoodRecommendation, FoodRecommendationsResponse, ImageProductAnalysisResponse, LoginRequest,
    LoginResponse, Product, ProductAnalysis, ProductAnalysisResponse, ProductsResponse,
    RegisterRequest, RegisterResponse, UpdateProfileRequest, UpdateProfileResponse, UserProfile,
    UserProfileResponse,
};
use crate::session::SessionStore;

/// Remote API gateway over the FoodLens REST backend
pub struct ApiGateway {
    http_client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiGateway {
    /// Create a gateway from configuration and a shared session store
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> ClientResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(defaults::USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            session,
        })
    }

    /// Full URL for a route path
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Attach the bearer token when the session holds one
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.current_token() {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Map non-success statuses to errors, enforcing the 401 policy
    async fn check_status(&self, response: Response) -> ClientResult<Response> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("server returned 401, clearing session");
            if let Err(e) = self.session.logout() {
                warn!(error = %e, "failed to clear session after 401");
            }
            return Err(ClientError::Unauthorized);
        }

        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(ClientError::http(status.as_u16(), message));
        }

        Ok(response)
    }

    /// Derive a user-presentable message from an error response body
    async fn error_message(response: Response) -> String {
        let fallback = response
            .status()
            .canonical_reason()
            .unwrap_or("request failed")
            .to_owned();

        match response.text().await {
            Ok(body) if !body.is_empty() => serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("error")
                        .or_else(|| value.get("message"))
                        .and_then(|m| m.as_str().map(ToOwned::to_owned))
                })
                .unwrap_or(body),
            _ => fallback,
        }
    }

    /// Decode a body, falling back to the empty default on malformed data
    async fn decode_or_default<T>(response: Response) -> ClientResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(error = %e, "malformed response body, rendering empty state");
                Ok(T::default())
            }
        }
    }

    /// Decode a body, treating malformed or absent data as `None`
    async fn decode_optional<T>(response: Response) -> ClientResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(error = %e, "malformed response body, rendering empty state");
                Ok(None)
            }
        }
    }

    /// Log in with mobile number and password
    ///
    /// On HTTP success with a non-null token the session transitions to
    /// logged in and the token is durably persisted. A success body
    /// without a token leaves the session untouched; the caller presents
    /// `message`/`error` from the returned body.
    pub async fn login(&self, mobile: &str, password: &str) -> ClientResult<LoginResponse> {
        if mobile.is_empty() || password.is_empty() {
            return Err(ClientError::validation("mobile and password are required"));
        }

        let request_id = Uuid::new_v4();
        debug!(%request_id, "sending login request");

        let response = self
            .http_client
            .post(self.endpoint(routes::USER_LOGIN))
            .json(&LoginRequest {
                mobile: mobile.to_owned(),
                password: password.to_owned(),
            })
            .send()
            .await?;
        let response = self.check_status(response).await?;

        let body: LoginResponse = response.json().await?;
        if let Some(token) = &body.token {
            self.session.persist_login_success(token, mobile)?;
            info!("login successful");
        } else {
            warn!(error = ?body.error, "login response carried no token");
        }

        Ok(body)
    }

    /// Register a new account with the remote backend
    ///
    /// Local validation mirrors the entry screens: every field is
    /// required and the mobile number must be at least 10 digits. No
    /// network call is made when validation fails.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<RegisterResponse> {
        if request.name.is_empty()
            || request.gender.is_empty()
            || request.email.is_empty()
            || request.mobile.is_empty()
            || request.password.is_empty()
        {
            return Err(ClientError::validation("all fields are required"));
        }
        if request.mobile.chars().count() < 10 {
            return Err(ClientError::validation("invalid mobile number"));
        }

        let request_id = Uuid::new_v4();
        debug!(%request_id, "sending registration request");

        let response = self
            .http_client
            .post(self.endpoint(routes::USER_REGISTER))
            .json(request)
            .send()
            .await?;
        let response = self.check_status(response).await?;

        Ok(response.json().await?)
    }

    /// List products within a category
    pub async fn products_by_category(&self, category: &str) -> ClientResult<Vec<Product>> {
        debug!(category, "fetching products by category");

        let response = self
            .authorize(self.http_client.get(self.endpoint(routes::PRODUCT_CATEGORY)))
            .query(&[("categoryName", category)])
            .send()
            .await?;
        let response = self.check_status(response).await?;

        let body: ProductsResponse = Self::decode_or_default(response).await?;
        info!(category, count = body.products.len(), "fetched products");
        Ok(body.products)
    }

    /// Fetch the nutrition analysis for a named product
    pub async fn product_analysis(
        &self,
        product_name: &str,
    ) -> ClientResult<Option<ProductAnalysisResponse>> {
        debug!(product_name, "fetching product analysis");

        let response = self
            .authorize(self.http_client.get(self.endpoint(routes::PRODUCT_ANALYSIS)))
            .query(&[("productName", product_name)])
            .send()
            .await?;
        let response = self.check_status(response).await?;

        Self::decode_optional(response).await
    }

    /// Upload a product photo for analysis
    ///
    /// The image is sent as a single multipart part named `image` with an
    /// `image/jpeg` content type, matching the backend contract.
    pub async fn image_product_analysis(
        &self,
        image: Vec<u8>,
        file_name: &str,
    ) -> ClientResult<Option<ProductAnalysis>> {
        debug!(file_name, bytes = image.len(), "uploading image for analysis");

        let part = multipart::Part::bytes(image)
            .file_name(file_name.to_owned())
            .mime_str("image/jpeg")?;
        let form = multipart::Form::new().part(prefs::IMAGE_PART_NAME, part);

        let response = self
            .authorize(
                self.http_client
                    .post(self.endpoint(routes::IMAGE_PRODUCT_ANALYSIS)),
            )
            .multipart(form)
            .send()
            .await?;
        let response = self.check_status(response).await?;

        let body: Option<ImageProductAnalysisResponse> = Self::decode_optional(response).await?;
        Ok(body.map(|b| b.analysis))
    }

    /// Fetch the authenticated user's profile
    pub async fn user_profile(&self) -> ClientResult<Option<UserProfile>> {
        debug!("fetching user profile");

        let response = self
            .authorize(self.http_client.get(self.endpoint(routes::USER_PROFILE)))
            .send()
            .await?;
        let response = self.check_status(response).await?;

        let body: Option<UserProfileResponse> = Self::decode_optional(response).await?;
        Ok(body.map(|b| b.user))
    }

    /// Partially update the authenticated user's profile
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> ClientResult<Option<UpdateProfileResponse>> {
        debug!("updating user profile");

        let response = self
            .authorize(self.http_client.post(self.endpoint(routes::USER_PROFILE)))
            .json(request)
            .send()
            .await?;
        let response = self.check_status(response).await?;

        Self::decode_optional(response).await
    }

    /// Fetch personalized food recommendations
    pub async fn food_recommendations(&self) -> ClientResult<Vec<FoodRecommendation>> {
        debug!("fetching food recommendations");

        let response = self
            .authorize(self.http_client.get(self.endpoint(routes::PRODUCT_SUGGEST)))
            .send()
            .await?;
        let response = self.check_status(response).await?;

        let body: FoodRecommendationsResponse = Self::decode_or_default(response).await?;
        info!(
            count = body.food_recommendations.len(),
            "fetched recommendations"
        );
        Ok(body.food_recommendations)
    }
}
