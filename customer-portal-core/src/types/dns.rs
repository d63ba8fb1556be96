//! DNS record types

use serde::{Deserialize, Serialize};

/// DNS record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Ns,
}

impl DnsRecordType {
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
        }
    }

    pub fn all() -> &'static [DnsRecordType] {
        &[
            Self::A,
            Self::Aaaa,
            Self::Cname,
            Self::Mx,
            Self::Txt,
            Self::Ns,
        ]
    }
}

/// A single DNS record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    /// Host label, `@` for the apex
    pub name: String,
    pub value: String,
    pub ttl: u32,
    /// MX preference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

impl DnsRecord {
    /// Fully qualified name under `domain`
    pub fn fqdn(&self, domain: &str) -> String {
        if self.name == "@" || self.name.is_empty() {
            domain.to_string()
        } else {
            format!("{}.{domain}", self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fqdn_handles_apex() {
        let record = DnsRecord {
            id: "rec_1".to_string(),
            record_type: DnsRecordType::A,
            name: "@".to_string(),
            value: "192.0.2.1".to_string(),
            ttl: 3600,
            priority: None,
        };
        assert_eq!(record.fqdn("example.com"), "example.com");

        let www = DnsRecord {
            name: "www".to_string(),
            ..record
        };
        assert_eq!(www.fqdn("example.com"), "www.example.com");
    }

    #[test]
    fn record_type_uses_wire_names() {
        let json = serde_json::to_string(&DnsRecordType::Aaaa).unwrap_or_default();
        assert_eq!(json, "\"AAAA\"");
        assert_eq!(DnsRecordType::all().len(), 6);
    }
}
