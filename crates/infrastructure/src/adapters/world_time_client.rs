//! World Time API client.
//!
//! This adapter implements the `TimeService` port using reqwest against the
//! World Time API wire format: `GET <endpoint><zone>` returning a JSON body
//! with an RFC 3339 `datetime`, the zone abbreviation and DST metadata.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use chronodeck_application::ports::{TimeService, TimeServiceError, ZoneTimePayload};
use chronodeck_domain::ZoneId;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

/// Request timeout for one zone fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Time service implementation backed by the World Time API.
pub struct WorldTimeClient {
    client: Client,
    endpoint: Url,
}

/// Wire shape of a World Time API response. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct WorldTimeResponse {
    datetime: String,
    abbreviation: String,
    utc_offset: String,
    dst: bool,
    dst_from: Option<String>,
    dst_until: Option<String>,
    dst_offset: i32,
    raw_offset: i32,
    day_of_week: u8,
    day_of_year: u16,
    week_number: u8,
    unixtime: i64,
}

impl WorldTimeClient {
    /// Creates a client for the given base endpoint.
    ///
    /// The zone identifier is appended to the endpoint verbatim when
    /// fetching, so the endpoint should end with a trailing slash.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: Url) -> Result<Self, TimeServiceError> {
        let client = Client::builder()
            .user_agent(concat!("Chronodeck/", env!("CARGO_PKG_VERSION")))
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| TimeServiceError::Transport(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Creates a client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    fn zone_url(&self, zone: &ZoneId) -> Result<Url, TimeServiceError> {
        let raw = format!("{}{}", self.endpoint, zone.as_str());
        Url::parse(&raw).map_err(|e| TimeServiceError::InvalidUrl(format!("{e}: {raw}")))
    }

    fn decode_payload(body: &[u8]) -> Result<ZoneTimePayload, TimeServiceError> {
        let response: WorldTimeResponse = serde_json::from_slice(body)
            .map_err(|e| TimeServiceError::MalformedPayload(e.to_string()))?;

        let instant = parse_datetime(&response.datetime)?;
        let utc_offset = parse_utc_offset(&response.utc_offset)?;
        let dst_from = response.dst_from.as_deref().map(parse_datetime).transpose()?;
        let dst_until = response.dst_until.as_deref().map(parse_datetime).transpose()?;

        Ok(ZoneTimePayload {
            instant,
            abbreviation: response.abbreviation,
            utc_offset,
            dst: response.dst,
            dst_from,
            dst_until,
            raw_offset: response.raw_offset,
            dst_offset: response.dst_offset,
            day_of_week: response.day_of_week,
            day_of_year: response.day_of_year,
            week_number: response.week_number,
            unix_time: response.unixtime,
        })
    }
}

#[async_trait]
impl TimeService for WorldTimeClient {
    async fn fetch_current_time(&self, zone: &ZoneId) -> Result<ZoneTimePayload, TimeServiceError> {
        let url = self.zone_url(zone)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TimeServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TimeServiceError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TimeServiceError::Transport(e.to_string()))?;

        Self::decode_payload(&body)
    }
}

fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, TimeServiceError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| TimeServiceError::MalformedPayload(format!("unparseable datetime {raw:?}: {e}")))
}

/// Parses the service's `±HH:MM` offset notation.
fn parse_utc_offset(raw: &str) -> Result<FixedOffset, TimeServiceError> {
    let malformed = || TimeServiceError::MalformedPayload(format!("unparseable utc_offset {raw:?}"));

    let (negative, rest) = if let Some(rest) = raw.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = raw.strip_prefix('+') {
        (false, rest)
    } else {
        return Err(malformed());
    };

    let (hours, minutes) = rest.split_once(':').ok_or_else(malformed)?;
    let hours: i32 = hours.parse().map_err(|_| malformed())?;
    let minutes: i32 = minutes.parse().map_err(|_| malformed())?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(malformed());
    }

    let mut seconds = hours * 3600 + minutes * 60;
    if negative {
        seconds = -seconds;
    }
    FixedOffset::east_opt(seconds).ok_or_else(malformed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LONDON_BODY: &str = r#"{
        "abbreviation": "BST",
        "client_ip": "203.0.113.7",
        "datetime": "2024-06-21T10:15:00.123456+01:00",
        "day_of_week": 5,
        "day_of_year": 173,
        "dst": true,
        "dst_from": "2024-03-31T01:00:00+00:00",
        "dst_offset": 3600,
        "dst_until": "2024-10-27T01:00:00+00:00",
        "raw_offset": 0,
        "timezone": "Europe/London",
        "unixtime": 1718961300,
        "utc_datetime": "2024-06-21T09:15:00.123456+00:00",
        "utc_offset": "+01:00",
        "week_number": 25
    }"#;

    #[test]
    fn decodes_a_real_shaped_body() {
        let payload = WorldTimeClient::decode_payload(LONDON_BODY.as_bytes()).unwrap();

        assert_eq!(payload.abbreviation, "BST");
        assert_eq!(
            payload.instant,
            "2024-06-21T09:15:00.123456Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert_eq!(payload.utc_offset, FixedOffset::east_opt(3600).unwrap());
        assert!(payload.dst);
        assert_eq!(payload.dst_offset, 3600);
        assert_eq!(payload.raw_offset, 0);
        assert_eq!(payload.day_of_week, 5);
        assert_eq!(payload.day_of_year, 173);
        assert_eq!(payload.week_number, 25);
        assert_eq!(payload.unix_time, 1_718_961_300);
        assert!(payload.dst_from.is_some());
        assert!(payload.dst_until.is_some());
    }

    #[test]
    fn missing_field_is_a_malformed_payload() {
        let result = WorldTimeClient::decode_payload(br#"{"abbreviation": "BST"}"#);
        assert!(matches!(result, Err(TimeServiceError::MalformedPayload(_))));
    }

    #[test]
    fn non_json_body_is_a_malformed_payload() {
        let result = WorldTimeClient::decode_payload(b"<html>503</html>");
        assert!(matches!(result, Err(TimeServiceError::MalformedPayload(_))));
    }

    #[test]
    fn unparseable_datetime_is_a_malformed_payload() {
        let body = LONDON_BODY.replace("2024-06-21T10:15:00.123456+01:00", "yesterday");
        let result = WorldTimeClient::decode_payload(body.as_bytes());
        assert!(matches!(result, Err(TimeServiceError::MalformedPayload(_))));
    }

    #[test]
    fn parses_offsets_in_both_directions() {
        assert_eq!(
            parse_utc_offset("+09:00").unwrap(),
            FixedOffset::east_opt(9 * 3600).unwrap()
        );
        assert_eq!(
            parse_utc_offset("-05:00").unwrap(),
            FixedOffset::east_opt(-5 * 3600).unwrap()
        );
        assert_eq!(
            parse_utc_offset("+05:45").unwrap(),
            FixedOffset::east_opt(5 * 3600 + 45 * 60).unwrap()
        );
    }

    #[test]
    fn rejects_bad_offsets() {
        assert!(parse_utc_offset("").is_err());
        assert!(parse_utc_offset("09:00").is_err());
        assert!(parse_utc_offset("+9").is_err());
        assert!(parse_utc_offset("+25:00").is_err());
    }

    #[test]
    fn zone_url_appends_the_identifier() {
        let endpoint = Url::parse("https://worldtimeapi.org/api/timezone/").unwrap();
        let client = WorldTimeClient::new(endpoint).unwrap();
        let url = client
            .zone_url(&ZoneId::new("America/New_York").unwrap())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://worldtimeapi.org/api/timezone/America/New_York"
        );
    }
}
