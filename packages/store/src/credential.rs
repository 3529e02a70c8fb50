/// Name of the single storage slot holding the bearer token.
pub const CREDENTIAL_KEY: &str = "token";

/// A single named slot holding the bearer credential.
///
/// Implementations never surface storage errors: an unreadable slot reads as
/// `None` and a failed write is logged. Callers treat "no credential" as
/// "unauthenticated", so a broken store degrades to a logged-out client.
pub trait CredentialStore {
    /// Read the stored credential, if any.
    fn load(&self) -> Option<String>;

    /// Overwrite the stored credential.
    fn save(&self, credential: &str);

    /// Remove the stored credential.
    fn clear(&self);
}
