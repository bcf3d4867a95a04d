//! Navigation capability injected into the gateway.

/// Capability for sending the user to the login flow.
///
/// The gateway invokes this at most once per call, only when the server
/// answers 401. The call is fire-and-forget: it must not block, and it does
/// not cancel other requests already in flight.
///
/// Hosts embed whatever navigation primitive they have — a webview location
/// change, a TUI screen switch — behind this trait, so the redirect policy
/// stays testable without a real browser.
pub trait Navigator: Send + Sync {
    fn go_to_login(&self);
}
