//! Client for the Namecheap XML API, covering `namecheap.domains.dns.getList`.
//!
//! ```no_run
//! # async fn run() -> Result<(), namecheap_dns::NamecheapError> {
//! use namecheap_dns::{Client, ClientOptions};
//!
//! let client = Client::new(ClientOptions::from_env()?)?;
//! let response = client.domains_dns().get_list("example.com").await?;
//! println!("{}", response.domain_dns_get_list_result);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod credentials;
pub mod domain;
pub mod domains_dns;
pub mod error;
pub mod xml;

pub use client::{Client, ClientOptions, Endpoint, Params, ResponseBody, Transport};
pub use credentials::Credentials;
pub use domain::ParsedDomain;
pub use domains_dns::{DomainDnsGetListResult, DomainsDnsGetListCommandResponse, DomainsDnsService};
pub use error::{ConfigError, DecodeError, DomainError, NamecheapError};
