//! HTTP client for the movie catalog API.
//!
//! One method per endpoint, one round trip per method. Authenticated calls
//! read the session store at call time, so a long-lived client always sends
//! the latest token.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{abortable, AbortHandle, Aborted};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapters::{FileSessionStore, ReqwestHttpClient};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Credentials, Director, Genre, LoginResponse, Movie, MovieId, ProfileUpdate, Registration,
    User,
};
use crate::session::Session;
use crate::traits::{Headers, HttpClient, Response, SessionStore};

/// Longest body excerpt quoted in an invalid-response diagnostic.
const MAX_DIAGNOSTIC_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Percent-encode one path segment (titles and names contain spaces).
fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Client for the movie catalog API.
#[derive(Clone)]
pub struct MovieApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
    session: Arc<dyn SessionStore>,
}

impl fmt::Debug for MovieApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovieApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl MovieApiClient {
    /// Create a client from its collaborators.
    pub fn new(
        base_url: impl Into<String>,
        http: Arc<dyn HttpClient>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            session,
        }
    }

    /// Production client: reqwest transport and the file session store.
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        let store = match &config.session_file {
            Some(path) => FileSessionStore::at(path),
            None => FileSessionStore::new()?,
        };
        Ok(Self::new(
            config.base_url.clone(),
            Arc::new(ReqwestHttpClient::new()),
            Arc::new(store),
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Wrap an operation so it can be aborted from elsewhere.
    ///
    /// Aborting resolves the returned future to [`ApiError::Cancelled`].
    /// Dropping the future cancels the request as well.
    ///
    /// ```ignore
    /// let (movies, handle) = MovieApiClient::cancellable(client.list_movies());
    /// handle.abort();
    /// assert!(matches!(movies.await, Err(ApiError::Cancelled)));
    /// ```
    pub fn cancellable<T, F>(future: F) -> (impl Future<Output = ApiResult<T>>, AbortHandle)
    where
        F: Future<Output = ApiResult<T>>,
    {
        let (future, handle) = abortable(future);
        let future = async move {
            match future.await {
                Ok(result) => result,
                Err(Aborted) => {
                    tracing::debug!("Request aborted by caller");
                    Err(ApiError::Cancelled)
                }
            }
        };
        (future, handle)
    }

    // ------------------------------------------------------------------
    // Anonymous endpoints
    // ------------------------------------------------------------------

    /// Create an account.
    ///
    /// POST /users
    ///
    /// No session is created: the service issues tokens only on login.
    pub async fn register_user(&self, details: &Registration) -> ApiResult<User> {
        let path = "/users".to_string();
        let body = self.encode(Method::Post, &path, details)?;
        let response = self
            .send(Method::Post, &path, Some(body), None)
            .await?;
        self.decode(Method::Post, &path, &response)
    }

    /// Log in and store the issued session.
    ///
    /// POST /login
    pub async fn login_user(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let path = "/login".to_string();
        let body = self.encode(Method::Post, &path, credentials)?;
        let response = self
            .send(Method::Post, &path, Some(body), None)
            .await?;
        let login: LoginResponse = self.decode(Method::Post, &path, &response)?;

        if login.token.is_empty() {
            tracing::error!("POST /login succeeded without a token");
            return Err(ApiError::invalid_response("POST /login", "empty token"));
        }

        self.session
            .save(&Session::new(login.user.username.clone(), login.token.clone()))
            .map_err(|e| {
                tracing::error!("Failed to store session after login: {}", e);
                ApiError::from(e)
            })?;
        tracing::info!("Logged in as {}", login.user.username);

        Ok(login)
    }

    /// Forget the stored session. No request is made.
    pub fn logout(&self) -> ApiResult<()> {
        self.session.clear()?;
        tracing::info!("Session cleared");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    /// GET /movies
    pub async fn list_movies(&self) -> ApiResult<Vec<Movie>> {
        let path = "/movies".to_string();
        let movies: Vec<Movie> = self.get_authenticated(&path).await?;
        for movie in &movies {
            self.check(Method::Get, &path, movie.validate())?;
        }
        Ok(movies)
    }

    /// GET /movies/:title
    pub async fn get_movie(&self, title: &str) -> ApiResult<Movie> {
        let path = format!("/movies/{}", segment(title));
        let movie: Movie = self.get_authenticated(&path).await?;
        self.check(Method::Get, &path, movie.validate())?;
        Ok(movie)
    }

    /// GET /directors/:name
    pub async fn get_director(&self, name: &str) -> ApiResult<Director> {
        let path = format!("/directors/{}", segment(name));
        let director: Director = self.get_authenticated(&path).await?;
        self.check(Method::Get, &path, director.validate())?;
        Ok(director)
    }

    /// GET /genres/:name
    pub async fn get_genre(&self, name: &str) -> ApiResult<Genre> {
        let path = format!("/genres/{}", segment(name));
        let genre: Genre = self.get_authenticated(&path).await?;
        self.check(Method::Get, &path, genre.validate())?;
        Ok(genre)
    }

    // ------------------------------------------------------------------
    // Account
    // ------------------------------------------------------------------

    /// GET /users/:username
    pub async fn get_profile(&self, username: &str) -> ApiResult<User> {
        let path = format!("/users/{}", segment(username));
        self.get_authenticated(&path).await
    }

    /// Profile of the logged-in user.
    ///
    /// GET /users/:username
    pub async fn current_profile(&self) -> ApiResult<User> {
        let session = self.load_session()?;
        let path = format!("/users/{}", segment(&username_of(session.as_ref())));
        let response = self
            .send(Method::Get, &path, None, Some(session.as_ref()))
            .await?;
        self.decode(Method::Get, &path, &response)
    }

    /// Favorites of the logged-in user, as the service lists them.
    ///
    /// GET /users/:username
    pub async fn favorite_movies(&self) -> ApiResult<Vec<MovieId>> {
        Ok(self.current_profile().await?.favorite_movies)
    }

    /// POST /users/:username/favorites/:movieId
    pub async fn add_favorite(&self, movie_id: &str) -> ApiResult<Vec<MovieId>> {
        self.mutate_favorite(Method::Post, movie_id).await
    }

    /// DELETE /users/:username/favorites/:movieId
    pub async fn remove_favorite(&self, movie_id: &str) -> ApiResult<Vec<MovieId>> {
        self.mutate_favorite(Method::Delete, movie_id).await
    }

    /// PUT /users/:username
    ///
    /// The stored session is left alone even if the username changes; the
    /// service decides whether the old token stays valid.
    pub async fn edit_profile(&self, update: &ProfileUpdate) -> ApiResult<User> {
        let session = self.load_session()?;
        let path = format!("/users/{}", segment(&username_of(session.as_ref())));
        let body = self.encode(Method::Put, &path, update)?;
        let response = self
            .send(Method::Put, &path, Some(body), Some(session.as_ref()))
            .await?;
        self.decode(Method::Put, &path, &response)
    }

    /// Delete the account and, on success, the stored session.
    ///
    /// DELETE /users/:username
    ///
    /// Returns the service's confirmation text. Once the service has deleted
    /// the account a failure to clear the stored session is only logged.
    pub async fn delete_profile(&self) -> ApiResult<String> {
        let session = self.load_session()?;
        let path = format!("/users/{}", segment(&username_of(session.as_ref())));
        let response = self
            .send(Method::Delete, &path, None, Some(session.as_ref()))
            .await?;

        match self.session.clear() {
            Ok(()) => tracing::info!("Account deleted, session cleared"),
            Err(e) => tracing::warn!("Account deleted but the session was not cleared: {}", e),
        }

        Ok(response.text_lossy())
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    async fn mutate_favorite(&self, method: Method, movie_id: &str) -> ApiResult<Vec<MovieId>> {
        let session = self.load_session()?;
        let path = format!(
            "/users/{}/favorites/{}",
            segment(&username_of(session.as_ref())),
            segment(movie_id)
        );
        let response = self
            .send(method, &path, None, Some(session.as_ref()))
            .await?;
        let user: User = self.decode(method, &path, &response)?;
        Ok(user.favorite_movies)
    }

    async fn get_authenticated<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let session = self.load_session()?;
        let response = self
            .send(Method::Get, path, None, Some(session.as_ref()))
            .await?;
        self.decode(Method::Get, path, &response)
    }

    fn load_session(&self) -> ApiResult<Option<Session>> {
        self.session.load().map_err(|e| {
            tracing::error!("Failed to read session: {}", e);
            ApiError::from(e)
        })
    }

    /// Issue one request.
    ///
    /// `auth` is `None` for anonymous endpoints and `Some(session)` for
    /// authenticated ones. An authenticated request without a token is sent
    /// anyway, without `Authorization`, and the service's answer decides.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        auth: Option<Option<&Session>>,
    ) -> ApiResult<Response> {
        let endpoint = format!("{} {}", method, path);
        let url = format!("{}{}", self.base_url, path);

        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        let bearer = auth.flatten().and_then(Session::bearer);
        if let Some(token) = bearer {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        } else if auth.is_some() {
            tracing::debug!("{} sent without a bearer token", endpoint);
        }
        tracing::debug!(authenticated = bearer.is_some(), "-> {}", endpoint);

        let result = match method {
            Method::Get => self.http.get(&url, &headers).await,
            Method::Post => self.http.post(&url, body.as_deref(), &headers).await,
            Method::Put => self.http.put(&url, body.as_deref(), &headers).await,
            Method::Delete => self.http.delete(&url, &headers).await,
        };

        let response = result.map_err(|e| {
            tracing::error!("{} failed: {}", endpoint, e);
            ApiError::Network {
                endpoint: endpoint.clone(),
                source: e,
            }
        })?;

        if !response.is_success() {
            let status = response.status;
            let text = response.text_lossy();
            tracing::error!(status, body = %text, "{} failed with HTTP {}", endpoint, status);
            return Err(ApiError::from_status(endpoint, status, &text));
        }

        tracing::debug!(status = response.status, "<- {}", endpoint);
        Ok(response)
    }

    fn encode<B: Serialize>(&self, method: Method, path: &str, body: &B) -> ApiResult<String> {
        serde_json::to_string(body).map_err(|e| {
            tracing::error!("{} {}: cannot encode request body: {}", method, path, e);
            ApiError::invalid_response(format!("{} {}", method, path), e.to_string())
        })
    }

    fn decode<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        response: &Response,
    ) -> ApiResult<T> {
        response.json::<T>().map_err(|e| {
            let text = response.text_lossy();
            let excerpt: String = text.chars().take(MAX_DIAGNOSTIC_LEN).collect();
            let message = format!("{}. Response: {}", e, excerpt);
            tracing::error!("{} {}: invalid response format: {}", method, path, message);
            ApiError::invalid_response(format!("{} {}", method, path), message)
        })
    }

    fn check(&self, method: Method, path: &str, validation: Result<(), String>) -> ApiResult<()> {
        validation.map_err(|message| {
            tracing::error!("{} {}: {}", method, path, message);
            ApiError::invalid_response(format!("{} {}", method, path), message)
        })
    }
}

fn username_of(session: Option<&Session>) -> String {
    session.map(|s| s.username.clone()).unwrap_or_default()
}
