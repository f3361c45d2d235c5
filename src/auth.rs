use crate::config::BlockfrostProject;
use crate::errors::SdkError;
use crate::transport::ReqwestTransport;
use http::{HeaderName, HeaderValue, Request};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::task::{Context, Poll};
use tower::Service;

/// Header carrying the project credential.
pub const PROJECT_ID_HEADER: HeaderName = HeaderName::from_static("project_id");

/// Number of earlier construction attempts tolerated before the guard
/// refuses any further one.
const MAX_PRIOR_ATTEMPTS: usize = 1;

static GLOBAL_GUARD: HandlerGuard = HandlerGuard::new();

/// Project API key. Never printed, never logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    fn into_header_value(self) -> Result<HeaderValue, SdkError> {
        if self.0.trim().is_empty() {
            return Err(SdkError::InvalidArgument(
                "project credential must not be empty".to_string(),
            ));
        }

        let mut value = HeaderValue::from_str(&self.0).map_err(|_| {
            SdkError::InvalidArgument("project credential is not a valid header value".to_string())
        })?;
        value.set_sensitive(true);

        Ok(value)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl From<&str> for Credential {
    fn from(api_key: &str) -> Self {
        Credential(api_key.to_string())
    }
}

impl From<String> for Credential {
    fn from(api_key: String) -> Self {
        Credential(api_key)
    }
}

impl From<&BlockfrostProject> for Credential {
    fn from(project: &BlockfrostProject) -> Self {
        Credential(project.api_key.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Fresh,
    Bound,
}

/// Single-assignment guard limiting how many [`AuthDispatchHandler`]s may
/// be built against it.
///
/// Every construction attempt is counted, successful or not, and the count
/// only goes down through [`HandlerGuard::reset`]. A construction fails if
/// the guard is already bound, or if more than one attempt preceded it.
#[derive(Debug, Default)]
pub struct HandlerGuard {
    attempts: AtomicUsize,
    bound: AtomicBool,
}

impl HandlerGuard {
    pub const fn new() -> Self {
        Self {
            attempts: AtomicUsize::new(0),
            bound: AtomicBool::new(false),
        }
    }

    /// The process-wide guard, used when the composition root does not
    /// bring its own.
    pub fn global() -> &'static HandlerGuard {
        &GLOBAL_GUARD
    }

    pub fn state(&self) -> GuardState {
        if self.bound.load(Ordering::SeqCst) {
            GuardState::Bound
        } else {
            GuardState::Fresh
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Back to `Fresh` with no recorded attempts. Meant for tests.
    pub fn reset(&self) {
        self.bound.store(false, Ordering::SeqCst);
        self.attempts.store(0, Ordering::SeqCst);
    }

    fn register_attempt(&self) -> Result<(), SdkError> {
        let prior = self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.bound.load(Ordering::SeqCst) || prior > MAX_PRIOR_ATTEMPTS {
            return Err(reuse_not_permitted());
        }

        Ok(())
    }

    fn bind(&self) -> Result<(), SdkError> {
        self.bound
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map(|_| ())
            .map_err(|_| reuse_not_permitted())
    }
}

fn reuse_not_permitted() -> SdkError {
    SdkError::Configuration("reuse of AuthDispatchHandler is not permitted".to_string())
}

/// Tower service stamping every outbound request with the project
/// credential before handing it to the inner transport.
///
/// A `project_id` header already present on the request wins. Clones share
/// the same credential and do not count as new constructions.
#[derive(Clone)]
pub struct AuthDispatchHandler<S = ReqwestTransport> {
    inner: S,
    credential: HeaderValue,
}

impl AuthDispatchHandler<ReqwestTransport> {
    /// Wraps a default [`ReqwestTransport`].
    pub fn new(guard: &HandlerGuard, credential: impl Into<Credential>) -> Result<Self, SdkError> {
        Self::with_inner(guard, ReqwestTransport::default(), credential)
    }
}

impl<S> AuthDispatchHandler<S> {
    pub fn with_inner(
        guard: &HandlerGuard,
        inner: S,
        credential: impl Into<Credential>,
    ) -> Result<Self, SdkError> {
        guard.register_attempt()?;
        let credential = credential.into().into_header_value()?;
        guard.bind()?;

        Ok(Self { inner, credential })
    }
}

impl<S> fmt::Debug for AuthDispatchHandler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthDispatchHandler")
            .field("credential", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl<S, ReqBody> Service<Request<ReqBody>> for AuthDispatchHandler<S>
where
    S: Service<Request<ReqBody>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        if !req.headers().contains_key(&PROJECT_ID_HEADER) {
            req.headers_mut()
                .insert(PROJECT_ID_HEADER, self.credential.clone());
        }
        self.inner.call(req)
    }
}
