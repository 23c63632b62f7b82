//! Wire types shared between the NearHear web client and the backend API.

pub mod domain;
pub mod system;
