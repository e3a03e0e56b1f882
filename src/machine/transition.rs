//! The pure transition function.
//!
//! [`step`] maps `(state, context, event)` to the next state, the
//! transformed context, and at most one side effect. It performs no IO; the
//! request driver in [`crate::request`] owns effect execution, including the
//! completion transitions applied through [`resolved`] and [`failed`].

use super::context::Context;
use super::event::Event;
use super::state::State;
use crate::base::error::ResolveError;
use crate::base::types::{Address, ChainId};
use crate::domain::Domain;

/// Parameters of one resolver invocation.
///
/// Retained by the driver across a failure so a retry can re-issue the call
/// even though the observable context drops the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub domain: Domain,
    pub chain_id: Option<ChainId>,
}

/// A side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a resolver call for the given request.
    Resolve(ResolveRequest),
    /// Enter the failure path immediately with a locally synthesized error.
    Fail(ResolveError),
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: State,
    pub context: Context,
    pub effect: Option<Effect>,
}

impl Step {
    fn stay(state: State, context: Context) -> Self {
        Self {
            state,
            context,
            effect: None,
        }
    }
}

/// Applies `event` to the machine.
///
/// `retained` is the request recorded by the last accepted RESOLVE_DOMAIN,
/// used to re-issue the resolver call on a retry. Unhandled `(state, event)`
/// pairs leave both state and context untouched; in particular no
/// resolution-triggering event is handled while a call is outstanding, which
/// is what bounds the machine to a single in-flight request.
pub fn step(state: State, context: Context, retained: Option<&ResolveRequest>, event: Event) -> Step {
    match (state, event) {
        (State::Idle, Event::ResolveDomain { domain, chain_id }) => {
            let domain = match Domain::parse(&domain) {
                Ok(domain) => domain,
                // Guard failed: the event is ignored.
                Err(_) => return Step::stay(State::Idle, context),
            };
            let context = context.record_request(&domain, chain_id);
            Step {
                state: State::LoadingDomain,
                context,
                effect: Some(Effect::Resolve(ResolveRequest { domain, chain_id })),
            }
        }
        (State::Idle, Event::SetDomain {
            domain,
            chain_id,
            address,
        }) => Step::stay(State::Idle, context.with_domain(&domain, chain_id, address)),
        (State::Idle, Event::ToggleDropdown { open }) => {
            Step::stay(State::Idle, context.with_dropdown(open))
        }
        (State::Idle, Event::Reset) => Step::stay(State::Idle, context.reset()),
        (State::ErrorDomain, Event::Retry) => {
            let effect = match retained {
                Some(request) => Effect::Resolve(request.clone()),
                None => Effect::Fail(ResolveError::RequestNotAvailable),
            };
            Step {
                state: State::LoadingDomain,
                context,
                effect: Some(effect),
            }
        }
        (state, _) => Step::stay(state, context),
    }
}

/// Applies a successful resolution: `loadingDomain → idle`.
pub fn resolved(context: Context, address: Address) -> (State, Context) {
    (State::Idle, context.with_address(address))
}

/// Applies a failed resolution: `loadingDomain → errorDomain`.
///
/// The error message is captured verbatim into the context.
pub fn failed(context: Context, error: &ResolveError) -> (State, Context) {
    (State::ErrorDomain, context.with_error(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_event(domain: &str, chain: u64) -> Event {
        Event::ResolveDomain {
            domain: domain.into(),
            chain_id: Some(ChainId::new(chain)),
        }
    }

    #[test]
    fn test_invalid_domain_is_ignored() {
        let step = step(
            State::Idle,
            Context::default(),
            None,
            resolve_event("Not A Domain", 0),
        );

        assert_eq!(step.state, State::Idle);
        assert_eq!(step.context, Context::default());
        assert_eq!(step.effect, None);
    }

    #[test]
    fn test_valid_domain_starts_loading() {
        let step = step(
            State::Idle,
            Context::default(),
            None,
            resolve_event("alice.fuel", 9889),
        );

        assert_eq!(step.state, State::LoadingDomain);
        assert_eq!(step.context.name.as_deref(), Some("alice.fuel"));
        assert_eq!(step.context.chain_id, Some(ChainId::new(9889)));
        match step.effect {
            Some(Effect::Resolve(request)) => {
                assert_eq!(request.domain.as_str(), "alice.fuel");
                assert_eq!(request.chain_id, Some(ChainId::new(9889)));
            }
            other => panic!("Expected Resolve effect, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_ignored_while_loading() {
        let loading = step(
            State::Idle,
            Context::default(),
            None,
            resolve_event("alice.fuel", 0),
        );

        let second = step(
            loading.state,
            loading.context.clone(),
            None,
            resolve_event("bob.fuel", 0),
        );

        assert_eq!(second.state, State::LoadingDomain);
        assert_eq!(second.context, loading.context);
        assert_eq!(second.effect, None);
    }

    #[test]
    fn test_retry_reissues_retained_request() {
        let retained = ResolveRequest {
            domain: Domain::parse("alice.fuel").unwrap(),
            chain_id: Some(ChainId::new(0)),
        };

        let step = step(
            State::ErrorDomain,
            Context::default(),
            Some(&retained),
            Event::Retry,
        );

        assert_eq!(step.state, State::LoadingDomain);
        assert_eq!(step.effect, Some(Effect::Resolve(retained)));
    }

    #[test]
    fn test_retry_without_retained_request_fails() {
        let step = step(State::ErrorDomain, Context::default(), None, Event::Retry);

        assert_eq!(step.state, State::LoadingDomain);
        assert_eq!(
            step.effect,
            Some(Effect::Fail(ResolveError::RequestNotAvailable))
        );
    }

    #[test]
    fn test_retry_ignored_outside_error_state() {
        let step = step(State::Idle, Context::default(), None, Event::Retry);
        assert_eq!(step.state, State::Idle);
        assert_eq!(step.effect, None);
    }

    #[test]
    fn test_completion_transitions() {
        let (state, context) = resolved(Context::default(), Address::new("0xABC"));
        assert_eq!(state, State::Idle);
        assert_eq!(context.address.unwrap().as_str(), "0xABC");

        let (state, context) = failed(
            Context::default(),
            &ResolveError::resolution("not found"),
        );
        assert_eq!(state, State::ErrorDomain);
        assert_eq!(context.error.as_deref(), Some("not found"));
    }
}
