//! Host authentication-backend contract.
//!
//! The host user-management system talks to authentication providers
//! through this trait: one required login check plus a set of capability
//! flags the host consults when wiring up its own password, signup, and
//! profile flows. The defaults describe an external, license-backed
//! provider: the host keeps no local password hashes and pulls profile
//! fields from the remote service after login.

use async_trait::async_trait;

/// Contract between the host and an authentication provider.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Returns `true` if the identifier and secret belong to a user who may
    /// log in, `false` if they are wrong, unknown, or unverifiable.
    async fn authenticate(&self, identifier: &str, secret: &str) -> bool;

    /// Whether the host may offer a change-password flow for users of this
    /// backend.
    fn allows_password_change(&self) -> bool {
        true
    }

    /// Whether the host may let users of this backend edit their profile.
    fn allows_profile_editing(&self) -> bool {
        true
    }

    /// Whether the host should keep a local password hash for users of
    /// this backend. External backends answer `false`.
    fn stores_passwords_locally(&self) -> bool {
        false
    }

    /// Whether the host should copy profile fields from the remote service
    /// after a successful login.
    fn syncs_profile_from_remote(&self) -> bool {
        true
    }

    /// Whether the host may offer a password-reset flow.
    fn allows_password_reset(&self) -> bool {
        true
    }

    /// Whether users may sign themselves up through this backend.
    fn allows_signup(&self) -> bool {
        false
    }

    /// Whether this backend confirms newly created users.
    fn allows_confirmation(&self) -> bool {
        false
    }

    /// Whether an administrator may assign this backend to a user by hand,
    /// e.g. during bulk imports.
    fn allows_manual_assignment(&self) -> bool {
        false
    }
}
