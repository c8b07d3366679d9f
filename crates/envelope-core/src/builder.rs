// Rust guideline compliant 2026-10-18

//! Response builder with one entry point per status class.

use crate::config::EnvelopeConfig;
use crate::envelope::{ResponseEnvelope, ResponseParams};
use crate::hook::{LogHook, Severity, TracingHook};
use crate::status::StatusClass;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Builds response envelopes and reports each one to a log hook.
///
/// Building never fails. The hook runs after the envelope is shaped and any
/// error or panic it raises is discarded.
#[derive(Clone)]
pub struct ResponseBuilder {
    server_name: String,
    hook: Arc<dyn LogHook>,
}

impl fmt::Debug for ResponseBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseBuilder")
            .field("server_name", &self.server_name)
            .finish_non_exhaustive()
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new(&EnvelopeConfig::default())
    }
}

impl ResponseBuilder {
    /// Creates a builder that logs through `tracing`.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration supplying the server name
    #[must_use]
    pub fn new(config: &EnvelopeConfig) -> Self {
        Self::with_hook(config, TracingHook)
    }

    /// Creates a builder with a custom log hook.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration supplying the server name
    /// * `hook` - Receiver of one event per built envelope
    #[must_use]
    pub fn with_hook(config: &EnvelopeConfig, hook: impl LogHook + 'static) -> Self {
        Self {
            server_name: config.server_name.clone(),
            hook: Arc::new(hook),
        }
    }

    /// Returns the server name passed to the log hook.
    #[must_use]
    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// Builds an envelope for any status class.
    ///
    /// # Arguments
    ///
    /// * `class` - Status class of the response
    /// * `params` - Optional message, timing, count, payload and error
    ///
    /// # Returns
    ///
    /// The shaped envelope. The log hook has been called exactly once.
    pub fn build(&self, class: StatusClass, params: ResponseParams) -> ResponseEnvelope {
        let envelope = ResponseEnvelope::shape(class, params);
        self.notify(&envelope);
        envelope
    }

    fn notify(&self, envelope: &ResponseEnvelope) {
        let code = envelope.status.code;
        let severity = Severity::for_code(code);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.hook.log(severity, &self.server_name, code, envelope)
        }));
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(err)) => tracing::debug!(code, error = %err, "log hook failed"),
            Err(_) => tracing::debug!(code, "log hook panicked"),
        }
    }

    // 2xx

    /// 200 OK.
    pub fn ok(&self, params: ResponseParams) -> ResponseEnvelope {
        self.build(StatusClass::Ok, params)
    }

    /// 201 Created.
    pub fn created(&self, params: ResponseParams) -> ResponseEnvelope {
        self.build(StatusClass::Created, params)
    }

    /// 202 Accepted.
    pub fn accepted(&self, params: ResponseParams) -> ResponseEnvelope {
        self.build(StatusClass::Accepted, params)
    }

    /// 204 No Content.
    pub fn no_content(&self, params: ResponseParams) -> ResponseEnvelope {
        self.build(StatusClass::NoContent, params)
    }

    // 3xx

    /// 301 Moved Permanently.
    pub fn moved_permanently(&self, params: ResponseParams) -> ResponseEnvelope {
        self.build(StatusClass::MovedPermanently, params)
    }

    /// 302 Found.
    pub fn found(&self, params: ResponseParams) -> ResponseEnvelope {
        self.build(StatusClass::Found, params)
    }

    /// Alias for [`ResponseBuilder::found`].
    pub fn redirect(&self, params: ResponseParams) -> ResponseEnvelope {
        self.found(params)
    }

    /// 304 Not Modified.
    pub fn not_modified(&self, params: ResponseParams) -> ResponseEnvelope {
        self.build(StatusClass::NotModified, params)
    }

    // 4xx

    /// 400 Bad Request.
    pub fn bad_request(&self, params: ResponseParams) -> ResponseEnvelope {
        self.build(StatusClass::BadRequest, params)
    }

    /// 401 Unauthorized.
    pub fn unauthorized(&self, params: ResponseParams) -> ResponseEnvelope {
        self.build(StatusClass::Unauthorized, params)
    }

    /// Alias for [`ResponseBuilder::unauthorized`].
    pub fn unauth(&self, params: ResponseParams) -> ResponseEnvelope {
        self.unauthorized(params)
    }

    /// 403 Forbidden.
    pub fn forbidden(&self, params: ResponseParams) -> ResponseEnvelope {
        self.build(StatusClass::Forbidden, params)
    }

    /// 404 Not Found.
    pub fn not_found(&self, params: ResponseParams) -> ResponseEnvelope {
        self.build(StatusClass::NotFound, params)
    }

    // 5xx

    /// 500 Internal Server Error.
    pub fn internal_server_error(&self, params: ResponseParams) -> ResponseEnvelope {
        self.build(StatusClass::InternalServerError, params)
    }

    /// Alias for [`ResponseBuilder::internal_server_error`].
    pub fn server_error(&self, params: ResponseParams) -> ResponseEnvelope {
        self.internal_server_error(params)
    }

    /// Alias for [`ResponseBuilder::internal_server_error`].
    pub fn server_err(&self, params: ResponseParams) -> ResponseEnvelope {
        self.internal_server_error(params)
    }
}
