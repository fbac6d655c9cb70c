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

//! Client library for the OpenSky Network REST API.
//!
//! This library queries live aircraft state vectors for a geographic bounding
//! box and parses the API's positionally-encoded response into typed records.
//! It is organized in layers that can be used independently:
//!
//! - **Bounds layer**: [`BoundingBox`], a validated south/west/north/east
//!   region in decimal degrees, translated verbatim into query parameters.
//! - **States layer**: [`StateVector`] and [`StateResponse`] parsing of the
//!   raw positional-tuple payload.
//! - **Client layer**: [`OpenSkyClient`], an async HTTP client with optional
//!   basic-auth credentials and a distinguished quota-exhaustion error.
//!
//! # Quick Start
//!
//! ```no_run
//! use opensky_client::{BoundingBox, Credentials, OpenSkyClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenSkyClient::new(Some(Credentials {
//!     username: "user".to_string(),
//!     password: "secret".to_string(),
//! }));
//!
//! let bounds = BoundingBox::new(45.8, 5.9, 47.8, 10.5)?;
//! let response = client.fetch_states(&bounds).await?;
//!
//! for state in &response.states {
//!     if let (Some(lat), Some(lon)) = (state.latitude, state.longitude) {
//!         println!("{}: {:.3}, {:.3}", state.callsign.as_deref().unwrap_or("?"), lat, lon);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The API rate-limits anonymous and credentialed callers alike. A rate-limit
//! response is reported as [`Error::QuotaExceeded`] rather than a generic
//! failure so callers can treat it as an expected, recoverable condition.

pub mod bounds;
pub mod client;
pub mod states;

pub use bounds::{BoundingBox, BoundsError};
pub use client::{Credentials, Error, OpenSkyClient};
pub use states::{StateResponse, StateVector};
