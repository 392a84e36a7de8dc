//! Data Transfer Objects for REST request/response serialization.

pub mod spotify_dto;

pub use spotify_dto::*;
