// Copyright 2026 powerdns-client authors
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::PowerDns;
use crate::cryptokeys::Cryptokey;
use crate::errors::Error;
use crate::records::RRset;
use crate::utils::name;

/// Replication kind of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    Native,
    Master,
    Slave,
}

/// Server-side representation of a DNS zone.
///
/// All fields are optional so the same type serves list responses, full
/// fetches and create/change payloads; unset fields stay off the wire.
/// Values returned by a client keep a handle to it, so follow-up calls such
/// as [`Zone::cryptokeys`] need no extra configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Zone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ZoneKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rrsets: Option<Vec<RRset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notified_serial: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnssec: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsec3param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsec3narrow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soa_edit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soa_edit_api: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_rectify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
    #[serde(skip)]
    pub(crate) client: Option<PowerDns>,
}

impl Zone {
    fn handle(&self) -> Result<(&PowerDns, &str), Error> {
        let client = self.client.as_ref().ok_or(Error::Detached)?;
        let name = self.name.as_deref().ok_or(Error::Detached)?;
        Ok((client, name))
    }

    /// Retrieves all signing keys of this zone.
    pub async fn cryptokeys(&self) -> Result<Vec<Cryptokey>, Error> {
        let (client, zone) = self.handle()?;
        client.cryptokeys(zone).await
    }

    /// Retrieves one signing key of this zone.
    pub async fn cryptokey(&self, id: u64) -> Result<Cryptokey, Error> {
        let (client, zone) = self.handle()?;
        client.cryptokey(zone, id).await
    }

    /// Enables or disables a signing key of this zone.
    pub async fn toggle_cryptokey(&self, id: u64) -> Result<(), Error> {
        let (client, zone) = self.handle()?;
        client.toggle_cryptokey(zone, id).await
    }

    /// Removes a signing key of this zone.
    pub async fn delete_cryptokey(&self, id: u64) -> Result<(), Error> {
        let (client, zone) = self.handle()?;
        client.delete_cryptokey(zone, id).await
    }

    fn attach(mut self, client: &PowerDns) -> Zone {
        self.client = Some(client.clone());
        self
    }
}

impl PowerDns {
    /// Retrieves all zones of the configured virtual host.
    pub async fn list_zones(&self) -> Result<Vec<Zone>, Error> {
        let path = format!("servers/{}/zones", self.vhost());
        let zones: Vec<Zone> = self
            .api_request(Method::GET, &path, None, None::<&()>)
            .await?;

        Ok(zones.into_iter().map(|zone| zone.attach(self)).collect())
    }

    /// Retrieves a single zone by name, including its record sets.
    pub async fn get_zone(&self, zone: &str) -> Result<Zone, Error> {
        let path = format!(
            "servers/{}/zones/{}",
            self.vhost(),
            name::trim_trailing_dot(zone)
        );
        let zone: Zone = self
            .api_request(Method::GET, &path, None, None::<&()>)
            .await?;

        Ok(zone.attach(self))
    }

    /// Creates a zone and returns the server-side representation.
    pub async fn create_zone(&self, zone: &Zone) -> Result<Zone, Error> {
        let path = format!("servers/{}/zones", self.vhost());
        let created: Zone = self
            .api_request(Method::POST, &path, None, Some(zone))
            .await?;

        info!("created zone {}", created.name.as_deref().unwrap_or("?"));
        Ok(created.attach(self))
    }

    /// Updates a zone's metadata. The server answers with no body; fetch the
    /// zone again for its new state.
    pub async fn change_zone(&self, zone: &str, payload: &Zone) -> Result<(), Error> {
        let path = format!(
            "servers/{}/zones/{}",
            self.vhost(),
            name::trim_trailing_dot(zone)
        );
        self.api_call(Method::PUT, &path, Some(payload)).await
    }

    /// Removes a zone and all of its records.
    pub async fn delete_zone(&self, zone: &str) -> Result<(), Error> {
        let path = format!(
            "servers/{}/zones/{}",
            self.vhost(),
            name::trim_trailing_dot(zone)
        );
        self.api_call(Method::DELETE, &path, None::<&()>).await?;

        info!("deleted zone {}", zone);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn detached_zone_cannot_reach_the_api() {
        let zone = Zone {
            name: Some("example.com.".to_string()),
            ..Default::default()
        };

        let err = zone.cryptokeys().await.unwrap_err();
        assert!(matches!(err, Error::Detached));
    }

    #[test]
    fn create_payload_skips_unset_fields() {
        let zone = Zone {
            name: Some("example.com.".to_string()),
            kind: Some(ZoneKind::Master),
            masters: Some(vec!["203.0.113.10".to_string()]),
            ..Default::default()
        };

        let value = serde_json::to_value(&zone).unwrap();
        assert_eq!(value["name"], "example.com.");
        assert_eq!(value["kind"], "Master");
        assert_eq!(value["masters"][0], "203.0.113.10");
        assert!(value.get("serial").is_none());
        assert!(value.get("rrsets").is_none());
        assert!(value.get("dnssec").is_none());
    }
}
