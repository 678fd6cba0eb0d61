use chrono::NaiveTime;

/// `125` -> `"2h 5m"`.
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

fn currency_symbol(currency: &str) -> Option<(&'static str, usize)> {
    match currency {
        "USD" => Some(("$", 2)),
        "EUR" => Some(("€", 2)),
        "GBP" => Some(("£", 2)),
        "JPY" => Some(("¥", 0)),
        "INR" => Some(("₹", 2)),
        "CAD" => Some(("CA$", 2)),
        "AUD" => Some(("A$", 2)),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// en-US currency rendering: `format_price(1234.5, "EUR")` -> `"€1,234.50"`.
/// Currencies without a known symbol render as `"CHF 12.00"`.
pub fn format_price(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let (prefix, decimals) = match currency_symbol(&code) {
        Some((symbol, decimals)) => (symbol.to_string(), decimals),
        None => (format!("{} ", code), 2),
    };

    let scale = 10u64.pow(decimals as u32);
    let scaled = (amount.abs() * scale as f64).round() as u64;
    let whole = group_thousands(&(scaled / scale).to_string());
    let sign = if amount < 0.0 && scaled > 0 { "-" } else { "" };

    if decimals == 0 {
        format!("{}{}{}", sign, prefix, whole)
    } else {
        format!("{}{}{}.{:0width$}", sign, prefix, whole, scaled % scale, width = decimals)
    }
}

/// `"14:05"` -> `"2:05 PM"`. Anything that is not `HH:MM` comes back as is.
pub fn format_time(hhmm: &str) -> String {
    match NaiveTime::parse_from_str(hhmm.trim(), "%H:%M") {
        Ok(time) => time.format("%-I:%M %p").to_string(),
        Err(_) => hhmm.to_string(),
    }
}

pub fn format_stops(stops: u32) -> String {
    match stops {
        0 => "Nonstop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{} stops", n),
    }
}
