//! Guest-list CSV importer.
//!
//! Reads an RSVP-service export (one row per invited guest) and inserts each
//! row through the regular guest repository. Usage:
//!
//! ```text
//! import-guests [path/to/guest-list.csv]
//! ```
//!
//! `DATABASE_URL` must be set. Rows without a first name are skipped; rows
//! that fail to insert are logged and do not abort the run.

use anyhow::Context;
use banquet_core::guest::{RSVP_ACCEPTED, RSVP_DECLINED, RSVP_PENDING};
use banquet_db::models::guest::CreateGuest;
use banquet_db::repositories::GuestRepo;
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One row of the RSVP-service export. Column names are taken verbatim from
/// the export format, spaces and all.
#[derive(Debug, Deserialize)]
struct CsvGuest {
    #[serde(rename = "first name")]
    first_name: String,
    #[serde(rename = "last name")]
    last_name: String,
    #[serde(rename = "phone number", default)]
    phone: String,
    #[serde(default)]
    email: String,
    #[serde(rename = "address 1", default)]
    address_1: String,
    #[serde(rename = "address 2", default)]
    address_2: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    state: String,
    #[serde(rename = "postal code", default)]
    postal_code: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    rsvp: String,
    #[serde(rename = "meal / wedding", default)]
    meal: String,
    #[serde(rename = "leave a note!", default)]
    note: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "import_guests=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let csv_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "guest-list.csv".to_string());

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = banquet_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    banquet_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&csv_path)
        .with_context(|| format!("Cannot open CSV file '{csv_path}'"))?;

    let mut imported = 0;
    let mut skipped = 0;
    let mut failed = 0;

    for record in reader.deserialize::<CsvGuest>() {
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed CSV row");
                failed += 1;
                continue;
            }
        };

        if row.first_name.trim().is_empty() {
            skipped += 1;
            continue;
        }

        let input = to_create_guest(&row);
        match GuestRepo::create(&pool, &input).await {
            Ok(guest) => {
                tracing::info!(guest_id = guest.id, name = %guest.full_name(), "Imported guest");
                imported += 1;
            }
            Err(e) => {
                tracing::error!(
                    first_name = %row.first_name,
                    last_name = %row.last_name,
                    error = %e,
                    "Failed to insert guest"
                );
                failed += 1;
            }
        }
    }

    tracing::info!(imported, skipped, failed, "Import complete");
    Ok(())
}

/// Map one CSV row to a guest insert payload.
fn to_create_guest(row: &CsvGuest) -> CreateGuest {
    CreateGuest {
        first_name: row.first_name.trim().to_string(),
        last_name: row.last_name.trim().to_string(),
        email: non_empty(&row.email),
        phone: non_empty(&row.phone),
        address: build_address(row),
        rsvp_status: Some(map_rsvp(&row.rsvp).to_string()),
        dietary_restrictions: map_dietary(&row.meal),
        plus_one: false,
        notes: non_empty(&row.note),
        table_id: None,
    }
}

/// Map the RSVP-service response phrases onto stored statuses. Anything
/// unrecognized (including an empty cell) stays PENDING.
fn map_rsvp(rsvp: &str) -> &'static str {
    match rsvp.trim().to_lowercase().as_str() {
        "joyfully accept" => RSVP_ACCEPTED,
        "regretfully decline" => RSVP_DECLINED,
        _ => RSVP_PENDING,
    }
}

/// Join the address columns into a single line, dropping empty parts.
fn build_address(row: &CsvGuest) -> Option<String> {
    let parts: Vec<&str> = [
        row.address_1.as_str(),
        row.address_2.as_str(),
        row.city.as_str(),
        row.state.as_str(),
        row.postal_code.as_str(),
        row.country.as_str(),
    ]
    .into_iter()
    .map(str::trim)
    .filter(|p| !p.is_empty())
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Derive dietary restrictions from the meal choice. The standard menu
/// entries carry no restriction; the vegan option and free-text entries do.
fn map_dietary(meal: &str) -> Option<String> {
    let meal = meal.trim();
    if meal.is_empty() {
        return None;
    }
    match meal.to_lowercase().as_str() {
        "vegan (chef's choice)" => Some("Vegan".to_string()),
        "steak with red wine sauce" | "seared salmon with avocado salsa" => {
            Some("No restrictions".to_string())
        }
        _ => Some(meal.to_string()),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> CsvGuest {
        CsvGuest {
            first_name: "Ann".into(),
            last_name: "Yu".into(),
            phone: String::new(),
            email: String::new(),
            address_1: String::new(),
            address_2: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: String::new(),
            rsvp: String::new(),
            meal: String::new(),
            note: String::new(),
        }
    }

    #[test]
    fn rsvp_phrases_map_to_statuses() {
        assert_eq!(map_rsvp("Joyfully Accept"), RSVP_ACCEPTED);
        assert_eq!(map_rsvp("regretfully decline"), RSVP_DECLINED);
        assert_eq!(map_rsvp(""), RSVP_PENDING);
        assert_eq!(map_rsvp("maybe later"), RSVP_PENDING);
    }

    #[test]
    fn address_joins_non_empty_parts() {
        let mut r = row();
        r.address_1 = "12 Elm St".into();
        r.city = "Springfield".into();
        r.postal_code = "12345".into();
        assert_eq!(
            build_address(&r).unwrap(),
            "12 Elm St, Springfield, 12345"
        );
    }

    #[test]
    fn address_all_empty_is_none() {
        assert!(build_address(&row()).is_none());
    }

    #[test]
    fn meal_choices_map_to_dietary_restrictions() {
        assert_eq!(map_dietary("Vegan (Chef's Choice)").unwrap(), "Vegan");
        assert_eq!(
            map_dietary("Steak with red wine sauce").unwrap(),
            "No restrictions"
        );
        assert_eq!(map_dietary("gluten free please").unwrap(), "gluten free please");
        assert!(map_dietary("  ").is_none());
    }

    #[test]
    fn empty_optional_fields_become_none() {
        let guest = to_create_guest(&row());
        assert!(guest.email.is_none());
        assert!(guest.phone.is_none());
        assert!(guest.notes.is_none());
        assert_eq!(guest.rsvp_status.as_deref(), Some(RSVP_PENDING));
    }
}
