//! Credential loading and access tokens for outbound provider calls.

pub mod credentials;
pub mod token;

pub use credentials::{Credential, CredentialError, CredentialProvider};
pub use token::{AccessToken, GoogleTokenProvider, StaticTokenProvider, TokenProvider};
