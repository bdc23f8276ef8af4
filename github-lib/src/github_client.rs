use crate::error::GitHubClientError;
use crate::link_urls::LinkUrls;
use crate::logging_middleware::LoggingMiddleware;
use crate::object_model::Repo;
use crate::result::GitHubClientResult;
use anyhow::anyhow;
use futures_util::stream::{self, Stream, TryStreamExt};
use log::{debug, Level};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, IntoUrl, Response, StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://api.github.com/";

const PER_PAGE: &str = "100";

pub struct GitHubClient {
    url: Url,
    token: String,
    user_agent: String,
    client: ClientWithMiddleware,
}

impl GitHubClient {
    pub fn new<U>(url: U, token: &str) -> GitHubClientResult<Self>
    where
        U: IntoUrl,
    {
        let mut url = url.into_url()?;
        // Endpoint paths are joined relative to the base, so a GitHub
        // Enterprise prefix such as /api/v3 must end in a slash to survive.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let client = ClientBuilder::new(Client::builder().build()?)
            .with(LoggingMiddleware::new(Level::Debug))
            .build();

        Ok(Self {
            url,
            token: String::from(token),
            user_agent: String::from("github-client"),
            client,
        })
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = String::from(user_agent);
        self
    }

    /// Repositories the authenticated user has access to, optionally narrowed
    /// by the API's `visibility` and `affiliation` parameters.
    pub fn list_my_repos(
        &self,
        visibility: Option<&str>,
        affiliation: Option<&str>,
    ) -> GitHubClientResult<impl Stream<Item = GitHubClientResult<Repo>> + '_> {
        let mut url = self.endpoint(&["user", "repos"])?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(v) = visibility {
                query.append_pair("visibility", v);
            }
            if let Some(a) = affiliation {
                query.append_pair("affiliation", a);
            }
        }
        Ok(self.get_paged::<Repo>(url))
    }

    /// Public repositories owned by the given user or organization.
    pub fn list_repos_for_owner(
        &self,
        owner: &str,
    ) -> GitHubClientResult<impl Stream<Item = GitHubClientResult<Repo>> + '_> {
        if owner.is_empty() || owner == "." || owner == ".." {
            return Err(GitHubClientError::InvalidOwner(owner.to_string()));
        }
        let url = self.endpoint(&["users", owner, "repos"])?;
        Ok(self.get_paged::<Repo>(url))
    }

    /// Appends `segments` to the base URL, percent-encoding each one so that
    /// caller-supplied names cannot add path, query or fragment parts.
    fn endpoint(&self, segments: &[&str]) -> GitHubClientResult<Url> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("{} cannot be used as a base URL", self.url))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair("per_page", PER_PAGE);
        Ok(url)
    }

    /// Lazily walks the `rel="next"` chain starting at `url`. The next page is
    /// only requested once every item of the current one has been yielded.
    fn get_paged<T>(&self, url: Url) -> impl Stream<Item = GitHubClientResult<T>> + '_
    where
        T: DeserializeOwned + 'static,
    {
        stream::try_unfold(Some(url), move |next| async move {
            let Some(url) = next else {
                return Ok::<_, GitHubClientError>(None);
            };
            let (items, link_urls) = self.get_items::<T>(url).await?;
            Ok::<_, GitHubClientError>(Some((items, link_urls.next_url)))
        })
        .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, GitHubClientError>)))
        .try_flatten()
    }

    async fn get_items<T>(&self, url: Url) -> GitHubClientResult<(Vec<T>, LinkUrls)>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .bearer_auth(&self.token)
            .send()
            .await?;

        let response = error_for_status(response).await?;

        let link_urls = LinkUrls::from_headers(response.headers())?;
        if let Some(last_url) = &link_urls.last_url {
            debug!("last page is {last_url}");
        }

        Ok((response.json::<Vec<T>>().await?, link_urls))
    }
}

#[derive(Deserialize)]
struct ApiErrorPayload {
    message: String,
}

async fn error_for_status(response: Response) -> GitHubClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let rate_limited = header("x-ratelimit-remaining").as_deref() == Some("0");
    let reset = header("x-ratelimit-reset").and_then(|v| v.parse::<i64>().ok());
    let path = response.url().path().to_string();

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorPayload>(&body)
        .map(|p| p.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    Err(match status {
        StatusCode::UNAUTHORIZED => GitHubClientError::Unauthorized,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if rate_limited => {
            GitHubClientError::RateLimited { reset }
        }
        StatusCode::NOT_FOUND => GitHubClientError::NotFound(path),
        _ => GitHubClientError::Api { status, message },
    })
}
