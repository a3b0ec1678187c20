//! Request payloads submitted by the admin forms.
//!
//! Each payload implements [`Verify`](crate::validator::Verify). Account
//! payloads trim their string fields before the rules run. Error maps use
//! the wire (camelCase) field names.

mod account;
mod author;
mod banner;

pub use account::{
    RenewAccessTokenRequest, ResetPasswordRequest, SignInRequest, UpdateProfileRequest,
};
pub use author::AuthorNameRequest;
pub use banner::{BANNER_ENABLE_VALUES, BANNER_LINK_TYPES, BannerRequest};
