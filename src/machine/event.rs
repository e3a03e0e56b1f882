use crate::base::types::{Address, ChainId};

/// Inbound events accepted by the resolution machine.
///
/// These are the UI layer's only way to drive the machine. Events arriving
/// in a state that has no handler for them are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Requests resolution of `domain` on `chain_id`.
    ///
    /// Only handled while idle, and only when the domain passes the
    /// syntactic validity check. `chain_id` is optional so that a missing
    /// chain id surfaces through the normal failure path instead of being
    /// unrepresentable.
    ResolveDomain {
        domain: String,
        chain_id: Option<ChainId>,
    },

    /// Supplies an already-known name/address pair and opens the dropdown.
    SetDomain {
        domain: String,
        chain_id: ChainId,
        address: Address,
    },

    /// Opens or closes the result dropdown.
    ToggleDropdown { open: bool },

    /// Clears per-request context.
    Reset,

    /// Re-issues the last failed resolution.
    Retry,
}
