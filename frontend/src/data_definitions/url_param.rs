//! Route segment encoding for structured page state.
//!
//! A value is serialized to CBOR and then to URL-safe base64, so any serde type can
//! travel in a single path segment and survive a reload.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};


/// Route segments need `Display`, `FromStr` and `Default`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> UrlParam<T> {
    pub fn encode(&self) -> Result<String, StateParseError> {
        let mut cbor = Vec::new();
        ciborium::into_writer(&self.0, &mut cbor).map_err(|e| StateParseError::Encode(e.to_string()))?;
        Ok(URL_SAFE.encode(cbor))
    }
}

impl<T: for<'de> Deserialize<'de>> UrlParam<T> {
    pub fn decode(segment: &str) -> Result<Self, StateParseError> {
        let cbor = URL_SAFE.decode(segment.as_bytes()).map_err(StateParseError::Base64)?;
        let value = ciborium::from_reader(cbor.as_slice()).map_err(StateParseError::Cbor)?;
        Ok(UrlParam(value))
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.encode() {
            Ok(segment) => write!(f, "{segment}"),
            // an empty segment parses back to the default state
            Err(e) => {
                dioxus::logger::tracing::warn!("Failed to encode url state: {e}");
                Ok(())
            }
        }
    }
}

#[derive(Debug)]
pub enum StateParseError {
    Encode(String),
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "Failed to serialize: {}", err),
            Self::Base64(err) => write!(f, "Failed to decode base64: {}", err),
            Self::Cbor(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

/// Route parsing never fails: a stale or hand-edited segment opens the page with default state.
impl<T: for<'de> Deserialize<'de> + Default> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::decode(s).unwrap_or_else(|e| {
            dioxus::logger::tracing::warn!("Ignoring undecodable url state {s:?}: {e}");
            UrlParam(T::default())
        }))
    }
}


#[cfg(test)]
mod tests {
    use common::directory_query::{ExpertQuery, PriceRange, SortKey};
    use common::expert::Availability;

    use super::*;

    #[test]
    fn filtered_query_survives_the_url() {
        let mut query = ExpertQuery::from_search_text("design systems".to_string());
        query.toggle_category("Design");
        query.toggle_availability(Availability::ThisWeek);
        query.price_range = PriceRange::new(40.0, 135.0);
        query.sort_key = SortKey::PriceHigh;

        let segment = UrlParam(query.clone()).to_string();
        assert!(!segment.contains('/'));
        let parsed: UrlParam<ExpertQuery> = segment.parse().unwrap();
        assert_eq!(parsed.0, query);
    }

    #[test]
    fn garbage_segment_is_a_base64_error() {
        let decoded = UrlParam::<ExpertQuery>::decode("not base64!");
        assert!(matches!(decoded, Err(StateParseError::Base64(_))));
    }

    #[test]
    fn valid_base64_with_bad_payload_is_a_cbor_error() {
        let segment = URL_SAFE.encode([0xff, 0x00, 0x13]);
        let decoded = UrlParam::<ExpertQuery>::decode(&segment);
        assert!(matches!(decoded, Err(StateParseError::Cbor(_))));
    }

    #[test]
    fn empty_segment_is_a_cbor_error() {
        assert!(matches!(UrlParam::<ExpertQuery>::decode(""), Err(StateParseError::Cbor(_))));
    }

    #[test]
    fn undecodable_segments_parse_to_the_default_query() {
        let truncated = URL_SAFE.encode([0xa1]);
        for segment in ["", "not base64!", "%%%", truncated.as_str()] {
            let parsed: UrlParam<ExpertQuery> = segment.parse().unwrap();
            assert_eq!(parsed.0, ExpertQuery::default(), "segment {segment:?}");
        }
    }
}
