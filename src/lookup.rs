//! # Nutrition Lookup
//!
//! Resolves a scanned barcode to a prefilled meal draft via the Open Food
//! Facts v0 product endpoint. Nutriment values come back as per-100g floats
//! and are rounded half away from zero to the integers the draft carries.

use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::info;

use crate::{error::Error, models::MealDraft};

const FALLBACK_PRODUCT_NAME: &str = "Unknown product";

pub struct NutritionClient {
    http: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ProductResponse {
    status: i64,
    product: Option<Product>,
}

#[derive(Deserialize)]
struct Product {
    #[serde(default)]
    nutriments: Nutriments,
    product_name: Option<String>,
}

// Open Food Facts omits nutriments it has no data for; absent fields
// decode as zero.
#[derive(Deserialize, Default)]
struct Nutriments {
    #[serde(rename = "energy-kcal_100g", default)]
    energy_kcal: f64,
    #[serde(rename = "carbohydrates_100g", default)]
    carbohydrates: f64,
    #[serde(rename = "proteins_100g", default)]
    proteins: f64,
    #[serde(rename = "fat_100g", default)]
    fat: f64,
}

impl NutritionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolves one barcode to a draft. `status != 1` and a missing product
    /// payload both mean the database does not know this barcode.
    pub async fn lookup(&self, barcode: &str) -> Result<MealDraft, Error> {
        let url = Url::parse(&format!(
            "{}/api/v0/product/{barcode}.json",
            self.base_url
        ))?;

        info!("looking up barcode {barcode}");

        let response = self.http.get(url).send().await?;
        let body = response.text().await?;

        if body.is_empty() {
            return Err(Error::EmptyResponse);
        }

        let decoded: ProductResponse = serde_json::from_str(&body)?;
        draft_from_response(decoded)
    }
}

fn draft_from_response(response: ProductResponse) -> Result<MealDraft, Error> {
    if response.status != 1 {
        return Err(Error::LookupNotFound);
    }

    let Some(product) = response.product else {
        return Err(Error::LookupNotFound);
    };

    let name = match product.product_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => FALLBACK_PRODUCT_NAME.to_string(),
    };

    let nutriments = product.nutriments;

    Ok(MealDraft {
        name,
        calories: round_per_100g(nutriments.energy_kcal),
        carbs: round_per_100g(nutriments.carbohydrates),
        fat: round_per_100g(nutriments.fat),
        protein: round_per_100g(nutriments.proteins),
    })
}

/// Round half away from zero, clamped below at zero.
fn round_per_100g(value: f64) -> String {
    (value.max(0.0).round() as u32).to_string()
}
