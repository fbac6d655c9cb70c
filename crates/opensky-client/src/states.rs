// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! State-vector parsing for the positionally-encoded API payload.
//!
//! The `states/all` endpoint returns each aircraft as a JSON array rather
//! than an object, so the slots of interest are decoded by index:
//! `[0]` callsign, `[1]` destination field, `[2]` origin field,
//! `[5]` longitude, `[6]` latitude, `[7]` barometric altitude,
//! `[9]` velocity, `[10]` true track. Any slot may be `null`.

use log::warn;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Minimum tuple length covering every slot this library reads.
const MIN_TUPLE_LEN: usize = 11;

/// Errors that can occur while decoding a single state tuple.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("state tuple too short: {0} slots, need {MIN_TUPLE_LEN}")]
    TooShort(usize),

    #[error("slot {slot} holds a {found}, expected {expected}")]
    WrongType {
        slot: usize,
        expected: &'static str,
        found: &'static str,
    },
}

/// One observed aircraft at the response's snapshot time.
///
/// Created fresh on every successful fetch and never mutated; a record
/// lacking either coordinate cannot be rendered and is expected to be
/// filtered by the consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    /// Callsign with provider padding trimmed; `None` when blank or absent.
    pub callsign: Option<String>,
    /// Destination field as reported by the provider.
    pub destination: Option<String>,
    /// Origin field as reported by the provider.
    pub origin: Option<String>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Barometric altitude in feet.
    pub altitude: Option<f64>,
    /// Ground speed in meters per second.
    pub velocity: Option<f64>,
    /// True track in degrees clockwise from north (0-360).
    pub track: Option<f64>,
}

impl StateVector {
    /// Decode one positional tuple.
    pub fn from_tuple(tuple: &[Value]) -> Result<Self, ParseError> {
        if tuple.len() < MIN_TUPLE_LEN {
            return Err(ParseError::TooShort(tuple.len()));
        }

        Ok(Self {
            callsign: string_slot(tuple, 0)?,
            destination: string_slot(tuple, 1)?,
            origin: string_slot(tuple, 2)?,
            longitude: float_slot(tuple, 5)?,
            latitude: float_slot(tuple, 6)?,
            altitude: float_slot(tuple, 7)?,
            velocity: float_slot(tuple, 9)?,
            track: float_slot(tuple, 10)?,
        })
    }

    /// Whether both coordinates are present, i.e. the record is renderable.
    #[must_use]
    pub fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

fn string_slot(tuple: &[Value], slot: usize) -> Result<Option<String>, ParseError> {
    match &tuple[slot] {
        Value::Null => Ok(None),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_owned()))
            }
        }
        other => Err(ParseError::WrongType {
            slot,
            expected: "string",
            found: type_name(other),
        }),
    }
}

fn float_slot(tuple: &[Value], slot: usize) -> Result<Option<f64>, ParseError> {
    match &tuple[slot] {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        other => Err(ParseError::WrongType {
            slot,
            expected: "number",
            found: type_name(other),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Raw shape of the success payload. `states` is `null` when the box holds
/// no aircraft.
#[derive(Debug, Deserialize)]
pub(crate) struct RawStateResponse {
    pub time: i64,
    pub states: Option<Vec<Vec<Value>>>,
}

/// A parsed snapshot of aircraft inside the queried bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct StateResponse {
    /// Provider snapshot time, unix seconds.
    pub time: i64,
    /// All decodable state vectors, in provider order.
    pub states: Vec<StateVector>,
}

impl StateResponse {
    pub(crate) fn from_raw(raw: RawStateResponse) -> Self {
        let states = raw
            .states
            .unwrap_or_default()
            .iter()
            .filter_map(|tuple| match StateVector::from_tuple(tuple) {
                Ok(state) => Some(state),
                Err(e) => {
                    warn!("Skipping undecodable state tuple: {}", e);
                    None
                }
            })
            .collect();

        Self {
            time: raw.time,
            states,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tuple(values: Value) -> Vec<Value> {
        values.as_array().unwrap().clone()
    }

    fn full_tuple() -> Vec<Value> {
        tuple(json!([
            "SWR193H ",
            "LSZH",
            "Switzerland",
            1693000000,
            1693000000,
            8.5492,
            47.4515,
            11887.2,
            false,
            245.5,
            132.4
        ]))
    }

    #[test]
    fn test_parses_full_tuple() {
        let state = StateVector::from_tuple(&full_tuple()).unwrap();

        assert_eq!(state.callsign.as_deref(), Some("SWR193H"));
        assert_eq!(state.destination.as_deref(), Some("LSZH"));
        assert_eq!(state.origin.as_deref(), Some("Switzerland"));
        assert_eq!(state.longitude, Some(8.5492));
        assert_eq!(state.latitude, Some(47.4515));
        assert_eq!(state.altitude, Some(11887.2));
        assert_eq!(state.velocity, Some(245.5));
        assert_eq!(state.track, Some(132.4));
        assert!(state.has_position());
    }

    #[test]
    fn test_null_slots_become_none() {
        let state = StateVector::from_tuple(&tuple(json!([
            null, null, "Germany", null, null, null, 50.03, null, false, null, null
        ])))
        .unwrap();

        assert_eq!(state.callsign, None);
        assert_eq!(state.longitude, None);
        assert_eq!(state.latitude, Some(50.03));
        assert!(!state.has_position());
    }

    #[test]
    fn test_blank_callsign_becomes_none() {
        let mut t = full_tuple();
        t[0] = json!("        ");
        let state = StateVector::from_tuple(&t).unwrap();
        assert_eq!(state.callsign, None);
    }

    #[test]
    fn test_short_tuple_rejected() {
        let err = StateVector::from_tuple(&tuple(json!(["ABC", "X"]))).unwrap_err();
        assert_eq!(err, ParseError::TooShort(2));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let mut t = full_tuple();
        t[6] = json!("not a number");
        let err = StateVector::from_tuple(&t).unwrap_err();
        assert_eq!(
            err,
            ParseError::WrongType {
                slot: 6,
                expected: "number",
                found: "string"
            }
        );
    }

    #[test]
    fn test_response_tolerates_null_states() {
        let raw: RawStateResponse =
            serde_json::from_value(json!({ "time": 1693000000, "states": null })).unwrap();
        let response = StateResponse::from_raw(raw);

        assert_eq!(response.time, 1_693_000_000);
        assert!(response.states.is_empty());
    }

    #[test]
    fn test_response_skips_undecodable_tuples() {
        let raw: RawStateResponse = serde_json::from_value(json!({
            "time": 1693000000,
            "states": [
                full_tuple(),
                ["too", "short"],
            ]
        }))
        .unwrap();
        let response = StateResponse::from_raw(raw);

        assert_eq!(response.states.len(), 1);
    }
}
