use std::ops::Range;

use chrono::{Duration, NaiveDate};
use flyeasy_core::iata::airline_logo_url;
use flyeasy_core::{Airline, CabinClass, FlightEndpoint, FlightOffer, OfferSource, Price};
use rand::Rng;
use tracing::debug;

/// Carriers synthetic offers are drawn from: (name, IATA code).
pub const AIRLINES: [(&str, &str); 6] = [
    ("Delta Air Lines", "DL"),
    ("American Airlines", "AA"),
    ("United Airlines", "UA"),
    ("Lufthansa", "LH"),
    ("British Airways", "BA"),
    ("Air France", "AF"),
];

pub const MIN_OFFERS: usize = 5;
pub const MAX_OFFERS: usize = 10;

/// Added once per stop, so a direct flight is never dearer than the same
/// base fare with stops.
pub const STOP_SURCHARGE: u32 = 50;

const DEPARTURE_HOURS: Range<u32> = 6..22;
const DURATION_MINUTES: Range<u32> = 90..480;
const MAX_STOPS: u32 = 2;

/// Base fare band for a cabin, in whole currency units.
pub fn base_fare_range(cabin_class: CabinClass) -> Range<u32> {
    match cabin_class {
        CabinClass::Economy => 200..400,
        CabinClass::PremiumEconomy => 500..800,
        CabinClass::Business => 1200..2200,
        CabinClass::First => 2500..4500,
    }
}

pub fn total_fare(base_fare: u32, stops: u32) -> u32 {
    base_fare + stops * STOP_SURCHARGE
}

fn airport_code(input: &str) -> String {
    input.trim().chars().take(3).collect()
}

/// Placeholder offers served when the flight provider has nothing usable.
///
/// Values are random; only the structure is stable.
#[derive(Debug, Clone, Default)]
pub struct SyntheticOfferGenerator;

impl SyntheticOfferGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(
        &self,
        from_code: &str,
        to_code: &str,
        departure_date: NaiveDate,
        return_date: Option<NaiveDate>,
        cabin_class: CabinClass,
    ) -> Vec<FlightOffer> {
        self.generate_with_rng(
            &mut rand::thread_rng(),
            from_code,
            to_code,
            departure_date,
            return_date,
            cabin_class,
        )
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied rng.
    /// Only the outbound leg is generated; `return_date` is informational.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        from_code: &str,
        to_code: &str,
        departure_date: NaiveDate,
        return_date: Option<NaiveDate>,
        cabin_class: CabinClass,
    ) -> Vec<FlightOffer> {
        let count = rng.gen_range(MIN_OFFERS..=MAX_OFFERS);
        debug!(
            "Generating {} synthetic offers {} -> {} on {} (return {:?})",
            count, from_code, to_code, departure_date, return_date
        );

        let from = airport_code(from_code);
        let to = airport_code(to_code);
        let fares = base_fare_range(cabin_class);

        let mut offers: Vec<FlightOffer> = (0..count)
            .map(|i| {
                let (airline_name, airline_code) = AIRLINES[rng.gen_range(0..AIRLINES.len())];
                let flight_number = format!("{}{}", airline_code, rng.gen_range(1000..2000));

                let hour = rng.gen_range(DEPARTURE_HOURS);
                let minute = rng.gen_range(0..60);
                let duration = rng.gen_range(DURATION_MINUTES);
                let stops = rng.gen_range(0..=MAX_STOPS);
                let base_fare = rng.gen_range(fares.clone());

                let departs = departure_date.and_hms_opt(hour, minute, 0).unwrap_or_default();
                let arrives = departs + Duration::minutes(duration as i64);

                FlightOffer {
                    id: format!("mock-flight-{}", i),
                    departure: FlightEndpoint {
                        airport_code: from.clone(),
                        airport_name: format!("{} International Airport", from),
                        date: departs.format("%Y-%m-%d").to_string(),
                        time: departs.format("%H:%M").to_string(),
                    },
                    arrival: FlightEndpoint {
                        airport_code: to.clone(),
                        airport_name: format!("{} International Airport", to),
                        date: arrives.format("%Y-%m-%d").to_string(),
                        time: arrives.format("%H:%M").to_string(),
                    },
                    duration_minutes: duration,
                    stop_count: stops,
                    airline: Airline {
                        name: airline_name.to_string(),
                        code: airline_code.to_string(),
                        logo_url: Some(airline_logo_url(airline_code)),
                    },
                    flight_number,
                    price: Price {
                        amount: total_fare(base_fare, stops) as f64,
                        currency: "USD".to_string(),
                    },
                    cabin_class,
                    source: OfferSource::Synthetic,
                }
            })
            .collect();

        offers.sort_by(|a, b| a.price.amount.total_cmp(&b.price.amount));
        offers
    }
}
