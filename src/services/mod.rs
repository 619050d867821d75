pub mod comments;
pub mod navigator;
pub mod validation;
