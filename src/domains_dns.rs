use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::client::{Params, ResponseBody, Transport};
use crate::domain::ParsedDomain;
use crate::error::{DecodeError, NamecheapError, Result};
use crate::xml::decode_body;

pub const COMMAND_GET_LIST: &str = "namecheap.domains.dns.getList";

const ROOT_ELEMENT: &str = "ApiResponse";

#[derive(Debug, Deserialize)]
struct DomainsDnsGetListResponse {
    #[serde(rename = "Errors", default)]
    errors: Option<ApiErrors>,
    #[serde(rename = "CommandResponse", default)]
    command_response: Option<RawCommandResponse>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrors {
    #[serde(rename = "Error", default)]
    entries: Vec<ApiErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEntry {
    #[serde(rename = "$text", default)]
    message: Option<String>,
    #[serde(rename = "@Number", default)]
    number: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCommandResponse {
    #[serde(rename = "DomainDNSGetListResult", default)]
    result: Option<RawDomainDnsGetListResult>,
}

#[derive(Debug, Deserialize)]
struct RawDomainDnsGetListResult {
    #[serde(rename = "@Domain", default)]
    domain: Option<String>,
    #[serde(rename = "@IsUsingOurDNS", default)]
    is_using_our_dns: Option<bool>,
    #[serde(rename = "@IsPremiumDNS", default)]
    is_premium_dns: Option<bool>,
    #[serde(rename = "@IsUsingFreeDNS", default)]
    is_using_free_dns: Option<bool>,
    #[serde(rename = "Nameserver", default)]
    nameservers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainsDnsGetListCommandResponse {
    pub domain_dns_get_list_result: DomainDnsGetListResult,
}

/// Nameserver configuration of a domain as reported by `domains.dns.getList`.
///
/// `nameservers` keeps the server's order and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDnsGetListResult {
    pub domain: String,
    pub is_using_our_dns: bool,
    pub is_premium_dns: bool,
    pub is_using_free_dns: bool,
    pub nameservers: Vec<String>,
}

impl fmt::Display for DomainDnsGetListResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Domain: {}, IsUsingOurDNS: {}, IsPremiumDNS: {}, IsUsingFreeDNS: {}, Nameservers: [{}]}}",
            self.domain,
            self.is_using_our_dns,
            self.is_premium_dns,
            self.is_using_free_dns,
            self.nameservers.join(" ")
        )
    }
}

impl TryFrom<RawDomainDnsGetListResult> for DomainDnsGetListResult {
    type Error = DecodeError;

    fn try_from(raw: RawDomainDnsGetListResult) -> Result<Self, Self::Error> {
        Ok(Self {
            domain: raw.domain.ok_or(DecodeError::MissingField("Domain"))?,
            is_using_our_dns: raw
                .is_using_our_dns
                .ok_or(DecodeError::MissingField("IsUsingOurDNS"))?,
            is_premium_dns: raw
                .is_premium_dns
                .ok_or(DecodeError::MissingField("IsPremiumDNS"))?,
            is_using_free_dns: raw
                .is_using_free_dns
                .ok_or(DecodeError::MissingField("IsUsingFreeDNS"))?,
            nameservers: raw.nameservers,
        })
    }
}

impl From<ApiErrorEntry> for NamecheapError {
    fn from(entry: ApiErrorEntry) -> Self {
        NamecheapError::Api {
            message: entry.message.unwrap_or_default(),
            number: entry.number.unwrap_or_default(),
        }
    }
}

impl DomainsDnsGetListResponse {
    /// Only the first reported error is surfaced; a payload next to an error
    /// is never returned.
    fn into_result(self) -> Result<DomainsDnsGetListCommandResponse> {
        if let Some(entry) = self
            .errors
            .and_then(|errors| errors.entries.into_iter().next())
        {
            return Err(entry.into());
        }

        let command_response = self
            .command_response
            .ok_or(DecodeError::MissingField("CommandResponse"))?;
        let result = command_response
            .result
            .ok_or(DecodeError::MissingField("DomainDNSGetListResult"))?;

        Ok(DomainsDnsGetListCommandResponse {
            domain_dns_get_list_result: result.try_into()?,
        })
    }
}

pub(crate) fn get_list_params(domain: &ParsedDomain) -> Params {
    Params::from([
        ("Command".to_string(), COMMAND_GET_LIST.to_string()),
        ("SLD".to_string(), domain.sld().to_string()),
        ("TLD".to_string(), domain.tld().to_string()),
    ])
}

/// Commands under `namecheap.domains.dns.*`.
#[derive(Debug, Clone, Copy)]
pub struct DomainsDnsService<'a, T> {
    client: &'a T,
}

impl<'a, T: Transport> DomainsDnsService<'a, T> {
    pub fn new(client: &'a T) -> Self {
        Self { client }
    }

    /// Gets the list of DNS servers associated with `domain`.
    ///
    /// Namecheap doc: <https://www.namecheap.com/support/api/methods/domains-dns/get-list/>
    pub async fn get_list(&self, domain: &str) -> Result<DomainsDnsGetListCommandResponse> {
        let parsed = ParsedDomain::parse(domain)?;
        info!(
            "Get nameservers for SLD {:?} and TLD {:?}",
            parsed.sld(),
            parsed.tld()
        );

        let body = {
            let mut body = self.client.send(get_list_params(&parsed)).await?;
            body.read_all().await?
        };
        let response: DomainsDnsGetListResponse = decode_body(&body, ROOT_ELEMENT)?;
        let response = response.into_result()?;

        debug!(
            "Found {} nameserver(s) for {:?}",
            response.domain_dns_get_list_result.nameservers.len(),
            response.domain_dns_get_list_result.domain
        );
        Ok(response)
    }
}
