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
use serde::Deserialize;
use tracing::info;

use crate::client::PowerDns;
use crate::errors::Error;
use crate::utils::name;

/// A DNSSEC signing key of a zone.
///
/// Keys returned by a client remember their owning zone, so [`toggle`]
/// and [`delete`] can be called on the value itself.
///
/// [`toggle`]: Cryptokey::toggle
/// [`delete`]: Cryptokey::delete
#[derive(Debug, Clone, Deserialize)]
pub struct Cryptokey {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub id: u64,
    pub keytype: Option<String>,
    #[serde(default)]
    pub active: bool,
    pub dnskey: Option<String>,
    pub ds: Option<Vec<String>>,
    pub privatekey: Option<String>,
    pub algorithm: Option<String>,
    pub bits: Option<u32>,
    #[serde(skip)]
    client: Option<PowerDns>,
    #[serde(skip)]
    zone: String,
}

impl Cryptokey {
    fn handle(&self) -> Result<(&PowerDns, &str), Error> {
        let client = self.client.as_ref().ok_or(Error::Detached)?;
        Ok((client, self.zone.as_str()))
    }

    /// Enables or disables this key, delegating to the zone-level call with
    /// the key's own id.
    pub async fn toggle(&self) -> Result<(), Error> {
        let (client, zone) = self.handle()?;
        client.toggle_cryptokey(zone, self.id).await
    }

    /// Removes this key, delegating to the zone-level call with the key's
    /// own id.
    pub async fn delete(&self) -> Result<(), Error> {
        let (client, zone) = self.handle()?;
        client.delete_cryptokey(zone, self.id).await
    }

    fn attach(mut self, client: &PowerDns, zone: &str) -> Cryptokey {
        self.client = Some(client.clone());
        self.zone = zone.to_string();
        self
    }
}

impl PowerDns {
    fn cryptokeys_path(&self, zone: &str) -> String {
        format!(
            "servers/{}/zones/{}/cryptokeys",
            self.vhost(),
            name::trim_trailing_dot(zone)
        )
    }

    /// Retrieves all signing keys of a zone.
    pub async fn cryptokeys(&self, zone: &str) -> Result<Vec<Cryptokey>, Error> {
        let keys: Vec<Cryptokey> = self
            .api_request(Method::GET, &self.cryptokeys_path(zone), None, None::<&()>)
            .await?;

        Ok(keys.into_iter().map(|key| key.attach(self, zone)).collect())
    }

    /// Retrieves one signing key of a zone, including its private key
    /// material.
    pub async fn cryptokey(&self, zone: &str, id: u64) -> Result<Cryptokey, Error> {
        let path = format!("{}/{}", self.cryptokeys_path(zone), id);
        let key: Cryptokey = self
            .api_request(Method::GET, &path, None, None::<&()>)
            .await?;

        Ok(key.attach(self, zone))
    }

    /// Enables or disables a signing key.
    ///
    /// The activation flip happens entirely server-side as the documented
    /// effect of a bare GET on the key's path; the call carries no
    /// parameters and the response body is discarded.
    pub async fn toggle_cryptokey(&self, zone: &str, id: u64) -> Result<(), Error> {
        let path = format!("{}/{}", self.cryptokeys_path(zone), id);
        self.api_call(Method::GET, &path, None::<&()>).await
    }

    /// Removes a signing key.
    pub async fn delete_cryptokey(&self, zone: &str, id: u64) -> Result<(), Error> {
        let path = format!("{}/{}", self.cryptokeys_path(zone), id);
        self.api_call(Method::DELETE, &path, None::<&()>).await?;

        info!("deleted cryptokey {} of zone {}", id, zone);
        Ok(())
    }
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PowerDns {
        let mut headers = HeaderMap::new();
        headers.insert("X-API-Key", HeaderValue::from_static("apipw"));
        PowerDns::new(&server.uri(), "localhost", headers, None).unwrap()
    }

    fn key_list_body() -> serde_json::Value {
        serde_json::json!([
            {
                "type": "Cryptokey",
                "id": 11,
                "keytype": "zsk",
                "active": true,
                "dnskey": "256 3 8 AwEAAbbb...",
                "algorithm": "RSASHA256",
                "bits": 1024
            },
            {
                "type": "Cryptokey",
                "id": 12,
                "keytype": "ksk",
                "active": false,
                "ds": ["1234 8 2 deadbeef"]
            }
        ])
    }

    #[tokio::test]
    async fn cryptokeys_lists_and_attaches_keys() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/servers/localhost/zones/example.com/cryptokeys"))
            .and(header("X-API-Key", "apipw"))
            .respond_with(ResponseTemplate::new(200).set_body_json(key_list_body()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let keys = client.cryptokeys("example.com.").await.unwrap();

        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].id, 11);
        assert_eq!(keys[0].keytype.as_deref(), Some("zsk"));
        assert!(keys[0].active);
        assert_eq!(keys[1].ds.as_ref().unwrap().len(), 1);
        assert!(keys.iter().all(|key| key.client.is_some()));
    }

    #[tokio::test]
    async fn cryptokey_fetches_one_key_by_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/servers/localhost/zones/example.com/cryptokeys/11"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "Cryptokey",
                "id": 11,
                "keytype": "zsk",
                "active": true,
                "privatekey": "Private-key-format: v1.2\\n..."
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let key = client.cryptokey("example.com", 11).await.unwrap();

        assert_eq!(key.id, 11);
        assert!(key.privatekey.is_some());
    }

    #[tokio::test]
    async fn toggle_is_a_bare_get_on_the_key_path() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/servers/localhost/zones/example.com/cryptokeys/11"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "Cryptokey",
                "id": 11,
                "active": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.toggle_cryptokey("example.com", 11).await.unwrap();
    }

    #[tokio::test]
    async fn instance_toggle_issues_the_same_request_as_the_zone_level_call() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/servers/localhost/zones/example.com/cryptokeys"))
            .respond_with(ResponseTemplate::new(200).set_body_json(key_list_body()))
            .mount(&server)
            .await;

        // One GET from the zone-level call, one from the instance projection,
        // both on the same key path.
        Mock::given(method("GET"))
            .and(path("/api/v1/servers/localhost/zones/example.com/cryptokeys/11"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "Cryptokey",
                "id": 11
            })))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let keys = client.cryptokeys("example.com.").await.unwrap();

        client.toggle_cryptokey("example.com.", keys[0].id).await.unwrap();
        keys[0].toggle().await.unwrap();
    }

    #[tokio::test]
    async fn instance_delete_issues_a_delete_on_the_key_path() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/servers/localhost/zones/example.com/cryptokeys"))
            .respond_with(ResponseTemplate::new(200).set_body_json(key_list_body()))
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/api/v1/servers/localhost/zones/example.com/cryptokeys/12"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let keys = client.cryptokeys("example.com").await.unwrap();

        keys[1].delete().await.unwrap();
    }

    #[tokio::test]
    async fn zone_conveniences_reach_the_cryptokey_endpoints() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/servers/localhost/zones/example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "example.com.",
                "name": "example.com.",
                "kind": "Native"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v1/servers/localhost/zones/example.com/cryptokeys"))
            .respond_with(ResponseTemplate::new(200).set_body_json(key_list_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let zone = client.get_zone("example.com").await.unwrap();
        let keys = zone.cryptokeys().await.unwrap();

        assert_eq!(keys.len(), 2);
    }

    #[tokio::test]
    async fn unauthorized_delete_maps_to_an_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/v1/servers/localhost/zones/example.com/cryptokeys/11"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"error": "Unauthorized"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .delete_cryptokey("example.com", 11)
            .await
            .unwrap_err();

        match err {
            Error::Api { status, message } => {
                assert_eq!(status, "401 Unauthorized");
                assert_eq!(message, "Unauthorized");
            }
            other => panic!("expected Error::Api, got {:?}", other),
        }
    }
}
