pub mod jwt;

pub use jwt::{AccessTokenClaims, TokenService};
