//! The asynchronous request driver.

use crate::base::error::ResolveError;
use crate::base::types::ChainId;
use crate::machine::{self, Context, Effect, Event, ResolveRequest, State};
use crate::resolver::Resolve;
use std::sync::Arc;

/// A long-lived name resolution request machine bound to a resolver.
///
/// `NameRequest` owns one machine instance plus the resolver it calls into.
/// [`dispatch`](NameRequest::dispatch) applies the pure transition and, when
/// the transition asks for one, runs exactly one resolver call to completion
/// before returning. Dispatching takes `&mut self`, so while a call is
/// awaited no other event can reach the machine; one outstanding resolution
/// at a time is a property of the type, not of a scheduler.
pub struct NameRequest {
    state: State,
    context: Context,
    retained: Option<ResolveRequest>,
    resolver: Arc<dyn Resolve>,
}

impl NameRequest {
    /// Creates an idle machine bound to `resolver`.
    pub fn new(resolver: Arc<dyn Resolve>) -> Self {
        Self {
            state: State::default(),
            context: Context::default(),
            retained: None,
            resolver,
        }
    }

    /// Current discrete state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Observable context snapshot.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Applies one event, running any resulting resolver call to completion.
    ///
    /// Returns the post-transition context snapshot. All resolution failures,
    /// local preconditions included, are converted into the error state; this
    /// method never returns an error and never panics.
    pub async fn dispatch(&mut self, event: Event) -> &Context {
        let is_reset = matches!(event, Event::Reset);
        let step = machine::step(self.state, self.context.clone(), self.retained.as_ref(), event);
        self.state = step.state;
        self.context = step.context;

        match step.effect {
            Some(Effect::Resolve(request)) => {
                self.retained = Some(request.clone());
                self.run(request).await;
            }
            Some(Effect::Fail(error)) => self.fail(&error),
            None => {}
        }

        if is_reset {
            // A stale retry must not resurrect a pre-reset lookup.
            self.retained = None;
        }
        &self.context
    }

    /// Convenience wrapper: dispatches RESOLVE_DOMAIN for `domain` on `chain_id`.
    pub async fn resolve(&mut self, domain: impl Into<String>, chain_id: ChainId) -> &Context {
        self.dispatch(Event::ResolveDomain {
            domain: domain.into(),
            chain_id: Some(chain_id),
        })
        .await
    }

    /// Convenience wrapper: dispatches RETRY.
    pub async fn retry(&mut self) -> &Context {
        self.dispatch(Event::Retry).await
    }

    /// Convenience wrapper: dispatches RESET.
    pub async fn reset(&mut self) -> &Context {
        self.dispatch(Event::Reset).await
    }

    async fn run(&mut self, request: ResolveRequest) {
        debug_assert_eq!(self.state, State::LoadingDomain);

        let Some(chain_id) = request.chain_id else {
            self.fail(&ResolveError::ChainIdNotAvailable);
            return;
        };

        tracing::debug!(domain = %request.domain, chain = %chain_id, "starting resolution");
        match self.resolver.resolve(request.domain.clone(), chain_id).await {
            Ok(address) => {
                tracing::debug!(domain = %request.domain, address = %address, "resolution complete");
                let (state, context) = machine::resolved(self.context.clone(), address);
                self.state = state;
                self.context = context;
            }
            Err(error) => self.fail(&error),
        }
    }

    fn fail(&mut self, error: &ResolveError) {
        tracing::debug!(error = %error, "resolution failed");
        let (state, context) = machine::failed(self.context.clone(), error);
        self.state = state;
        self.context = context;
    }
}

impl std::fmt::Debug for NameRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameRequest")
            .field("state", &self.state)
            .field("context", &self.context)
            .field("retained", &self.retained)
            .finish_non_exhaustive()
    }
}
