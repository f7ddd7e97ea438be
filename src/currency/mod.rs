//! Currency presentation helpers for the CLI renderer.

pub fn symbol_for(code: &str) -> String {
    match code {
        "BDT" => "৳".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "INR" => "₹".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders an amount with the currency symbol, grouped integer digits, and
/// the currency's minor-unit precision.
pub fn format_amount(code: &str, value: f64) -> String {
    let precision = minor_units_for(code);
    let body = group_digits(&format!("{:.*}", precision as usize, value.abs()));
    let signed = if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    };
    format!("{}{}", symbol_for(code), signed)
}

fn group_digits(body: &str) -> String {
    let (int_part, frac_part) = match body.find('.') {
        Some(pos) => (&body[..pos], &body[pos..]),
        None => (body, ""),
    };
    let mut grouped = String::new();
    let mut count = 0;
    for ch in int_part.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    format!("{}{}", grouped, frac_part)
}
