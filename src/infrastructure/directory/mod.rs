//! Country source implementations.
//!
//! - [`RestCountriesRepository`] - remote JSON endpoint over `reqwest`
//! - [`StaticCountryRepository`] - fixed list for tests and embedding

mod rest_countries;
mod static_countries;

pub use rest_countries::{RestCountriesRepository, parse_countries};
pub use static_countries::StaticCountryRepository;
