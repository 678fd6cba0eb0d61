use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::iata::normalize_airport_code;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    #[default]
    #[serde(alias = "roundTrip")]
    RoundTrip,
    #[serde(alias = "oneWay")]
    OneWay,
    #[serde(alias = "multiCity")]
    MultiCity,
}

/// Service tier, spelled the way the flight provider expects it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    #[default]
    #[serde(alias = "Economy")]
    Economy,
    #[serde(alias = "Premium Economy", alias = "premiumEconomy")]
    PremiumEconomy,
    #[serde(alias = "Business")]
    Business,
    #[serde(alias = "First")]
    First,
}

impl CabinClass {
    pub const ALL: [CabinClass; 4] = [
        CabinClass::Economy,
        CabinClass::PremiumEconomy,
        CabinClass::Business,
        CabinClass::First,
    ];

    pub fn as_api_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::PremiumEconomy => "premium_economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
            CabinClass::First => "First",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CabinClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "economy" => Ok(CabinClass::Economy),
            "premiumeconomy" => Ok(CabinClass::PremiumEconomy),
            "business" => Ok(CabinClass::Business),
            "first" => Ok(CabinClass::First),
            _ => Err(CoreError::ValidationError(format!("Unknown cabin class: {}", s))),
        }
    }
}

fn default_passengers() -> u32 {
    1
}

/// Search form values as submitted. Everything is optional or raw here;
/// [`SearchParams::validate`] turns it into a [`ValidatedSearch`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    #[serde(default = "default_passengers", alias = "adults")]
    pub passengers: u32,
    #[serde(default)]
    pub cabin_class: CabinClass,
    #[serde(default)]
    pub trip_type: TripType,
}

/// A search that passed validation, with airport codes normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedSearch {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    /// Only set for round trips.
    pub return_date: Option<NaiveDate>,
    pub passengers: u32,
    pub cabin_class: CabinClass,
    pub trip_type: TripType,
}

fn parse_date(field: &str, value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::ValidationError(format!("Invalid {}: {}", field, value)))
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl SearchParams {
    pub fn validate(&self) -> CoreResult<ValidatedSearch> {
        if self.origin.trim().is_empty() {
            return Err(CoreError::ValidationError("Origin airport is required".into()));
        }
        if self.destination.trim().is_empty() {
            return Err(CoreError::ValidationError("Destination airport is required".into()));
        }
        let departure_date = match present(&self.departure_date) {
            Some(raw) => parse_date("departure date", raw)?,
            None => return Err(CoreError::ValidationError("Departure date is required".into())),
        };
        if self.passengers == 0 {
            return Err(CoreError::ValidationError("At least one passenger is required".into()));
        }

        let return_date = match self.trip_type {
            TripType::RoundTrip => {
                let raw = present(&self.return_date).ok_or_else(|| {
                    CoreError::ValidationError("Return date is required for round trips".into())
                })?;
                let date = parse_date("return date", raw)?;
                if date < departure_date {
                    return Err(CoreError::ValidationError(
                        "Return date cannot be before departure date".into(),
                    ));
                }
                Some(date)
            }
            TripType::OneWay | TripType::MultiCity => None,
        };

        Ok(ValidatedSearch {
            origin: normalize_airport_code(&self.origin),
            destination: normalize_airport_code(&self.destination),
            departure_date,
            return_date,
            passengers: self.passengers,
            cabin_class: self.cabin_class,
            trip_type: self.trip_type,
        })
    }
}

/// Query sent to the remote flight-search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightQuery {
    pub origin_sky: String,
    pub destination_sky: String,
    pub adults: u32,
    pub currency: String,
    pub market: String,
    pub cabin: CabinClass,
    pub outbound_date: NaiveDate,
    pub inbound_date: Option<NaiveDate>,
}

impl FlightQuery {
    pub fn new(search: &ValidatedSearch, currency: &str, market: &str) -> Self {
        Self {
            origin_sky: search.origin.clone(),
            destination_sky: search.destination.clone(),
            adults: search.passengers,
            currency: currency.to_string(),
            market: market.to_string(),
            cabin: search.cabin_class,
            outbound_date: search.departure_date,
            inbound_date: search.return_date,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("originSky", self.origin_sky.clone()),
            ("destinationSky", self.destination_sky.clone()),
            ("adults", self.adults.to_string()),
            ("currency", self.currency.clone()),
            ("market", self.market.clone()),
            ("cabin", self.cabin.as_api_str().to_string()),
            ("outboundDate", self.outbound_date.format("%Y-%m-%d").to_string()),
        ];
        if let Some(inbound) = self.inbound_date {
            pairs.push(("inboundDate", inbound.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}
