use std::future::Future;
use std::sync::Arc;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

use super::error::ApiError;
use super::types::{Genre, Movie, MovieId, NewMovie};

const MOVIE_PATH: &str = "/api/movie";
const GENRE_DETAILS_PATH: &str = "/api/genre/details";
const GENRE_LIST_PATH: &str = "/api/genre/list";

const LIST_MOVIES: &str = "GET /api/movie";
const ADD_MOVIE: &str = "POST /api/movie";
const GENRE_DETAILS: &str = "GET /api/genre/details";
const LIST_GENRES: &str = "GET /api/genre/list";

/// The four backend calls the effect layer needs.
///
/// Implemented over HTTP by [`HttpCatalogApi`]; tests substitute stubs.
pub trait CatalogApi: Send + Sync + 'static {
    /// `GET /api/movie`
    fn list_movies(&self) -> impl Future<Output = Result<Vec<Movie>, ApiError>> + Send;

    /// `POST /api/movie`. The response body is ignored.
    fn add_movie(&self, movie: &NewMovie) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `GET /api/genre/details?id={id}`
    fn genre_details(
        &self,
        id: &MovieId,
    ) -> impl Future<Output = Result<Vec<Genre>, ApiError>> + Send;

    /// `GET /api/genre/list`
    fn list_genres(&self) -> impl Future<Output = Result<Vec<Genre>, ApiError>> + Send;
}

impl<T: CatalogApi> CatalogApi for Arc<T> {
    fn list_movies(&self) -> impl Future<Output = Result<Vec<Movie>, ApiError>> + Send {
        (**self).list_movies()
    }

    fn add_movie(&self, movie: &NewMovie) -> impl Future<Output = Result<(), ApiError>> + Send {
        (**self).add_movie(movie)
    }

    fn genre_details(
        &self,
        id: &MovieId,
    ) -> impl Future<Output = Result<Vec<Genre>, ApiError>> + Send {
        (**self).genre_details(id)
    }

    fn list_genres(&self) -> impl Future<Output = Result<Vec<Genre>, ApiError>> + Send {
        (**self).list_genres()
    }
}

/// reqwest-backed catalog client.
#[derive(Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(connect) = config.connect_timeout() {
            builder = builder.connect_timeout(connect);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, endpoint: &'static str) -> Result<Url, ApiError> {
        Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| ApiError::InvalidUrl {
            endpoint,
            message: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        endpoint: &'static str,
    ) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        check_status(response, endpoint)?
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { endpoint, source })
    }
}

fn check_status(response: Response, endpoint: &'static str) -> Result<Response, ApiError> {
    let status = response.status();
    tracing::trace!(endpoint, status = status.as_u16(), "Response received");
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            endpoint,
            status: status.as_u16(),
        })
    }
}

impl CatalogApi for HttpCatalogApi {
    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        let url = self.url(MOVIE_PATH, LIST_MOVIES)?;
        self.get_json(url, LIST_MOVIES).await
    }

    async fn add_movie(&self, movie: &NewMovie) -> Result<(), ApiError> {
        let url = self.url(MOVIE_PATH, ADD_MOVIE)?;
        tracing::debug!(%url, title = movie.title().unwrap_or_default(), "POST");
        let response = self
            .client
            .post(url)
            .json(movie)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: ADD_MOVIE,
                source,
            })?;

        check_status(response, ADD_MOVIE)?;
        Ok(())
    }

    async fn genre_details(&self, id: &MovieId) -> Result<Vec<Genre>, ApiError> {
        let mut url = self.url(GENRE_DETAILS_PATH, GENRE_DETAILS)?;
        url.query_pairs_mut().append_pair("id", id.as_str());
        self.get_json(url, GENRE_DETAILS).await
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, ApiError> {
        let url = self.url(GENRE_LIST_PATH, LIST_GENRES)?;
        self.get_json(url, LIST_GENRES).await
    }
}
