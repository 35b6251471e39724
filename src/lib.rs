//! Client for managing DNS TXT records through the reg.ru zone API, mainly
//! for answering ACME DNS-01 challenges.

pub mod api;
pub mod config;

#[cfg(test)]
mod tests;
