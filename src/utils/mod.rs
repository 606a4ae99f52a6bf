//! Utility functions shared by the controller and the front end.
//!
//! - [`url_validator`] - Client-side URL validity check

pub mod url_validator;
