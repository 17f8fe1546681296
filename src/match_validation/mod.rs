pub mod config;
pub mod http_validator;
pub mod match_status;
pub mod match_validator;
pub mod metrics;
pub mod response;
pub mod verification_result;

#[cfg(test)]
mod test;
