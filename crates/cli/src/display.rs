//! Terminal rendering of offer cards.

use catalog::{Amount, HotelOffer};
use colored::Colorize;

/// Format an amount the way German-locale price tags do: `1.234,50 €`.
/// Missing or non-finite amounts render as `–`.
pub fn format_eur(amount: Option<Amount>) -> String {
    let Some(amount) = amount.filter(|a| a.is_finite()) else {
        return "–".to_string();
    };

    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped},{fraction:02} €")
}

/// Print one offer as a card
pub fn print_offer(rank: usize, offer: &HotelOffer) {
    let mut title = format!("{}. {}", rank, offer.name.bold());
    if let Some(localized) = &offer.localized_name {
        title.push_str(&format!(" ({localized})"));
    }
    println!("{title}");

    let mut facts = vec![offer.city.clone()];
    if let Some(distance) = &offer.distance_to_landmark {
        facts.push(format!("{distance} to the Haram"));
    }
    if let Some(stars) = &offer.star_rating {
        facts.push(format!("{stars}★"));
    }
    if let Some(rating) = offer.rating {
        facts.push(format!("rated {rating:.1}"));
    }
    println!("   {}", facts.join(" • "));

    let price = offer.price.as_ref();
    let currency = price.map(|p| p.currency.as_str()).unwrap_or("EUR");
    let mut price_line = format!(
        "   {} per night • {}",
        format_eur(price.map(|p| p.per_night)).green().bold(),
        currency
    );
    if let Some(source) = price.map(|p| p.source.as_str()) {
        price_line.push_str(&format!(" via {source}"));
    }
    println!("{price_line}");

    let savings = offer.savings();
    if savings > 0.0 {
        println!("   {} {}", "Save".yellow(), format_eur(Some(savings)).yellow());
    }

    let mut badges = Vec::new();
    if offer.is_halal_certified() {
        badges.push("Halal certified".green().to_string());
    }
    if let Some(features) = &offer.features {
        if features.prayer_facilities == Some(true) {
            badges.push("Prayer facilities".cyan().to_string());
        }
        if features.shuttle_service == Some(true) {
            badges.push("Shuttle".cyan().to_string());
        }
    }
    if !badges.is_empty() {
        println!("   {}", badges.join(" | "));
    }

    if let Some(link) = &offer.booking_link {
        println!("   {}", link.underline());
    }
}
