pub mod cors;
pub mod error;
pub mod graphql;
pub mod info;
