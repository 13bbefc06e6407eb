// src/api/client.rs
//! Pure HTTP client wrapper for the Notion API.
//!
//! This module provides a thin wrapper around reqwest for making
//! requests to the Notion API. It handles authentication, URL building and
//! request bodies; turning responses into values is left to `parser`.

use super::parser::parse_api_response;
use super::types::{CreatePageRequest, QueryRequest, QueryResponse, UpdatePageRequest};
use crate::constants::{
    FILTER_PROPERTIES_PARAM, HTTP_REQUEST_TIMEOUT_SECS, NOTION_API_BASE_URL, NOTION_API_VERSION,
    USER_AGENT,
};
use crate::error::AppError;
use crate::model::Page;
use crate::types::{ApiKey, DataSourceId, PageId};
use reqwest::{header, Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        Self::with_base_url(api_key, NOTION_API_BASE_URL)
    }

    /// Creates a client that talks to another base URL, e.g. a local stub.
    pub fn with_base_url(api_key: &ApiKey, base_url: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let mut auth_value = header::HeaderValue::from_str(&format!("Bearer {}", api_key.as_str()))
            .map_err(|e| AppError::RequestConstruction(format!("Invalid API token format: {}", e)))?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_API_VERSION),
        );

        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Builds the full URL for an endpoint path such as `/pages/{id}`.
    pub fn endpoint_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, AppError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| AppError::RequestConstruction(format!("Invalid URL for {}: {}", path, e)))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Sends one request and decodes the JSON response.
    ///
    /// Non-2xx responses become `AppError::NotionApi` carrying the method,
    /// path, status and raw body.
    pub async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path, query)?;
        log::debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| {
                AppError::RequestConstruction(format!("Failed to serialize request body: {}", e))
            })?;
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(bytes);
        }

        let response = request.send().await?;
        log::debug!("{} {} -> {}", method, path, response.status());

        let result = extract_response_text(response).await?;
        parse_api_response(&method, path, result)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn query_data_source(
        &self,
        data_source: &DataSourceId,
        request: &QueryRequest,
    ) -> Result<QueryResponse, AppError> {
        let path = format!("/data_sources/{}/query", data_source.to_dashed());
        let query: Vec<(&str, &str)> = request
            .filter_properties
            .iter()
            .map(|name| (FILTER_PROPERTIES_PARAM, name.as_str()))
            .collect();
        self.send(Method::POST, &path, &query, Some(request)).await
    }

    async fn create_page(&self, request: &CreatePageRequest) -> Result<Page, AppError> {
        self.send(Method::POST, "/pages", &[], Some(request)).await
    }

    async fn update_page(
        &self,
        page: &PageId,
        request: &UpdatePageRequest,
    ) -> Result<Page, AppError> {
        let path = format!("/pages/{}", page.as_str());
        self.send(Method::PATCH, &path, &[], Some(request)).await
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
