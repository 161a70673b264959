//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{
    AccountProfile, CreditCount, DeleteService, ErrorKind, GatewayError, Keyword,
    KeywordRegistration, SendMessage, SendResult, ServiceId, ValidationError,
};
use crate::transport::FormParams;

const DEFAULT_SEND_ENDPOINT: &str = "http://smsapi.wire2air.com/smsadmin/submitsm.aspx";
const DEFAULT_CREDIT_SUBSCRIBE_ENDPOINT: &str =
    "http://mzone.wire2air.com/mserver/api/subscribekeywords.aspx";
const DEFAULT_CREDIT_BALANCE_ENDPOINT: &str =
    "http://smsapi.wire2air.com/smsadmin/checksmscredits.aspx";
const DEFAULT_KEYWORD_CHECK_ENDPOINT: &str =
    "http://mzone.wire2air.com/shortcodemanager/api/checkkeywordapi.aspx";
const DEFAULT_KEYWORD_REGISTER_ENDPOINT: &str =
    "http://mzone.wire2air.com/shortcodemanager/api/RegisterKeywordAPI.aspx";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: FormParams,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: FormParams,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Wire2AirClient`].
///
/// Use [`Wire2AirError::kind`] to branch on the closed [`ErrorKind`] taxonomy.
pub enum Wire2AirError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway answered, and the body signals a failure or lacks the expected token.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// A value was rejected before any request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl Wire2AirError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::ConnectionError,
            Self::Gateway(err) => err.kind(),
            Self::Validation(_) => ErrorKind::InvalidRequest,
        }
    }

    /// Raw response body, when the gateway produced one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::Gateway(err) => Some(err.raw()),
            Self::Transport(_) | Self::Validation(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Endpoint URLs, one per gateway capability.
///
/// Keyword registration and deletion share `keyword_register`; the `ACTION`
/// field tells them apart.
pub struct Endpoints {
    pub send: String,
    pub credit_subscribe: String,
    pub credit_balance: String,
    pub keyword_check: String,
    pub keyword_register: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            send: DEFAULT_SEND_ENDPOINT.to_owned(),
            credit_subscribe: DEFAULT_CREDIT_SUBSCRIBE_ENDPOINT.to_owned(),
            credit_balance: DEFAULT_CREDIT_BALANCE_ENDPOINT.to_owned(),
            keyword_check: DEFAULT_KEYWORD_CHECK_ENDPOINT.to_owned(),
            keyword_register: DEFAULT_KEYWORD_REGISTER_ENDPOINT.to_owned(),
        }
    }
}

impl Endpoints {
    /// Default endpoint paths served from `base` instead of the gateway hosts.
    ///
    /// Handy for proxies and local stub servers: `http://127.0.0.1:1234` turns the
    /// send endpoint into `http://127.0.0.1:1234/smsadmin/submitsm.aspx`. A path on
    /// `base` is kept as a prefix, so `http://proxy.local/wire2air/` yields
    /// `http://proxy.local/wire2air/smsadmin/submitsm.aspx`. Query and fragment on
    /// `base` are dropped.
    pub fn rebased(base: &str) -> Result<Self, ValidationError> {
        let base = parse_endpoint("base url", base)?;
        let prefix = base.path().trim_end_matches('/').to_owned();
        let rebase = |default: &str| -> Result<String, ValidationError> {
            let path = parse_endpoint("endpoint", default)?.path().to_owned();
            let mut url = base.clone();
            url.set_path(&format!("{prefix}{path}"));
            url.set_query(None);
            url.set_fragment(None);
            Ok(url.into())
        };

        Ok(Self {
            send: rebase(DEFAULT_SEND_ENDPOINT)?,
            credit_subscribe: rebase(DEFAULT_CREDIT_SUBSCRIBE_ENDPOINT)?,
            credit_balance: rebase(DEFAULT_CREDIT_BALANCE_ENDPOINT)?,
            keyword_check: rebase(DEFAULT_KEYWORD_CHECK_ENDPOINT)?,
            keyword_register: rebase(DEFAULT_KEYWORD_REGISTER_ENDPOINT)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        parse_endpoint("send endpoint", &self.send)?;
        parse_endpoint("credit subscribe endpoint", &self.credit_subscribe)?;
        parse_endpoint("credit balance endpoint", &self.credit_balance)?;
        parse_endpoint("keyword check endpoint", &self.keyword_check)?;
        parse_endpoint("keyword register endpoint", &self.keyword_register)?;
        Ok(())
    }
}

fn parse_endpoint(field: &'static str, value: &str) -> Result<url::Url, ValidationError> {
    let invalid = || ValidationError::InvalidUrl {
        field,
        input: value.to_owned(),
    };
    let parsed = url::Url::parse(value).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    Ok(parsed)
}

#[derive(Debug, Clone)]
/// Builder for [`Wire2AirClient`].
///
/// Use this when you need to customize endpoints, timeout, or user-agent.
pub struct Wire2AirClientBuilder {
    profile: AccountProfile,
    endpoints: Endpoints,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl Wire2AirClientBuilder {
    /// Create a builder with the default endpoints and no timeout/user-agent override.
    pub fn new(profile: AccountProfile) -> Self {
        Self {
            profile,
            endpoints: Endpoints::default(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Replace every endpoint at once.
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn send_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoints.send = endpoint.into();
        self
    }

    pub fn credit_subscribe_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoints.credit_subscribe = endpoint.into();
        self
    }

    pub fn credit_balance_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoints.credit_balance = endpoint.into();
        self
    }

    pub fn keyword_check_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoints.keyword_check = endpoint.into();
        self
    }

    /// Override the endpoint shared by keyword registration and service deletion.
    pub fn keyword_register_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoints.keyword_register = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`Wire2AirClient`].
    ///
    /// Fails with [`Wire2AirError::Validation`] if an endpoint is not an absolute
    /// `http`/`https` URL.
    pub fn build(self) -> Result<Wire2AirClient, Wire2AirError> {
        self.endpoints.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| Wire2AirError::Transport(Box::new(err)))?;

        Ok(Wire2AirClient {
            profile: Arc::new(self.profile),
            endpoints: Arc::new(self.endpoints),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level gateway client.
///
/// Every operation is one form POST and one plain-text response; nothing is
/// retried, cached or persisted. The account profile is read-only, so a client
/// (or its clones) can serve concurrent calls.
pub struct Wire2AirClient {
    profile: Arc<AccountProfile>,
    endpoints: Arc<Endpoints>,
    http: Arc<dyn HttpTransport>,
}

impl Wire2AirClient {
    /// Create a client using the default endpoints.
    ///
    /// For more customization, use [`Wire2AirClient::builder`].
    pub fn new(profile: AccountProfile) -> Self {
        Self {
            profile: Arc::new(profile),
            endpoints: Arc::new(Endpoints::default()),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(profile: AccountProfile) -> Wire2AirClientBuilder {
        Wire2AirClientBuilder::new(profile)
    }

    pub fn profile(&self) -> &AccountProfile {
        &self.profile
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Send a message to one number or a batch.
    ///
    /// Returns [`SendResult::Single`] for a single target and [`SendResult::Batch`]
    /// for a batch target.
    ///
    /// Errors:
    /// - [`ErrorKind::AuthenticationFailed`] on `ERR: 301`,
    /// - [`ErrorKind::InsufficientCredits`] on `ERR: 305`,
    /// - [`ErrorKind::MalformedResponse`] when the job/batch id is missing.
    #[tracing::instrument(
        name = "send_message",
        skip_all,
        fields(batch = request.target().is_batch())
    )]
    pub async fn send_message(&self, request: SendMessage) -> Result<SendResult, Wire2AirError> {
        let params = crate::transport::encode_send_message_form(&self.profile, &request);
        let body = self.post(&self.endpoints.send, params).await?;
        decoded(crate::transport::decode_send_message_response(
            request.target(),
            &body,
        ))
    }

    /// Buy keyword credits for the account.
    ///
    /// Any response without a known failure code is taken as success.
    #[tracing::instrument(name = "add_credits", skip_all, fields(count = count.value()))]
    pub async fn add_credits(&self, count: CreditCount) -> Result<(), Wire2AirError> {
        let params = crate::transport::encode_add_credits_form(&self.profile, count);
        let body = self
            .post(&self.endpoints.credit_subscribe, params)
            .await?;
        decoded(crate::transport::decode_add_credits_response(&body))
    }

    /// Number of message credits left on the account.
    #[tracing::instrument(name = "credit_balance", skip_all)]
    pub async fn credit_balance(&self) -> Result<u64, Wire2AirError> {
        let params = crate::transport::encode_credit_balance_form(&self.profile);
        let body = self.post(&self.endpoints.credit_balance, params).await?;
        decoded(crate::transport::decode_credit_balance_response(&body))
    }

    /// Whether `keyword` can still be registered on the profile's short code.
    ///
    /// `ERR: 301` and `Err:300` fail with [`ErrorKind::AuthenticationFailed`].
    /// Any other body that is not the `Err:0` no-error token means "not
    /// available", not an error.
    #[tracing::instrument(name = "is_keyword_available", skip_all, fields(keyword = keyword.as_str()))]
    pub async fn is_keyword_available(&self, keyword: &Keyword) -> Result<bool, Wire2AirError> {
        let params = crate::transport::encode_keyword_check_form(&self.profile, keyword);
        let body = self.post(&self.endpoints.keyword_check, params).await?;
        decoded(crate::transport::decode_keyword_check_response(&body))
    }

    /// Register a keyword service and return the id the gateway assigned to it.
    ///
    /// Keep the id: [`Wire2AirClient::delete_service`] needs it.
    #[tracing::instrument(
        name = "register_keyword",
        skip_all,
        fields(keyword = registration.keyword.as_str())
    )]
    pub async fn register_keyword(
        &self,
        registration: &KeywordRegistration,
    ) -> Result<ServiceId, Wire2AirError> {
        let params = crate::transport::encode_register_keyword_form(&self.profile, registration);
        let body = self
            .post(&self.endpoints.keyword_register, params)
            .await?;
        let service_id = decoded(crate::transport::decode_register_keyword_response(&body))?;
        debug!(service_id = service_id.value(), "keyword registered");
        Ok(service_id)
    }

    /// Delete a service created by [`Wire2AirClient::register_keyword`].
    ///
    /// Errors:
    /// - [`ErrorKind::OperationNotPermitted`] on `Err:712`,
    /// - [`ErrorKind::RemoteRejected`] whenever the body does not echo `SERVICEID`.
    #[tracing::instrument(
        name = "delete_service",
        skip_all,
        fields(service_id = request.service_id.value(), keyword = request.keyword.as_str())
    )]
    pub async fn delete_service(&self, request: &DeleteService) -> Result<(), Wire2AirError> {
        let params = crate::transport::encode_delete_service_form(&self.profile, request);
        let body = self
            .post(&self.endpoints.keyword_register, params)
            .await?;
        decoded(crate::transport::decode_delete_service_response(&body))
    }

    async fn post(&self, url: &str, params: FormParams) -> Result<String, Wire2AirError> {
        debug!(endpoint = url, "posting form");
        let response = self.http.post_form(url, params).await.map_err(|err| {
            warn!(endpoint = url, error = %err, "transport failure");
            Wire2AirError::Transport(err)
        })?;
        debug!(
            status = response.status,
            bytes = response.body.len(),
            "gateway responded"
        );
        Ok(response.body)
    }
}

fn decoded<T>(result: Result<T, GatewayError>) -> Result<T, Wire2AirError> {
    result.map_err(|err| {
        warn!(kind = %err.kind(), code = ?err.code(), "gateway reported failure");
        Wire2AirError::Gateway(err)
    })
}
