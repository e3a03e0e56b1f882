/// The discrete state of a resolution request machine.
///
/// The machine is long-lived for the life of the owning UI widget; there is
/// no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// No resolution in flight; the machine accepts new requests.
    #[default]
    Idle,

    /// A resolver call is outstanding.
    LoadingDomain,

    /// The last resolution failed; only a retry leaves this state.
    ErrorDomain,
}
