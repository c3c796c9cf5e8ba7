// ABOUTME: Wire data models for the FoodLens REST API and the local user record entity
// ABOUTME: Field names mirror the backend contract; localized accessors resolve en/hi pairs

//! # Data Models
//!
//! Request and response structures for every remote operation, plus the
//! locally persisted [`UserRecord`]. Remote payloads are transient,
//! read-only view models with no local persistence; only `UserRecord`
//! lives in the sqlite store.
//!
//! The backend is bilingual: analysis fields come in `*_en`/`*_hi` pairs.
//! The localized accessors take a [`Language`] and pick the matching side
//! so callers never branch on locale themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::locale::Language;

// ── Local entities ──────────────────────────────────────────────────────

/// Locally registered user, stored in the `users` table
///
/// Legacy fallback to the remote identity system. Queried by
/// (`mobile`, `password`) for local login and by `mobile` alone for
/// duplicate-registration checks. `mobile` carries no uniqueness
/// constraint at the storage layer; callers pre-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Auto-generated row id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Mobile number used as the login identifier
    pub mobile: String,
    /// Plaintext password, as the legacy store kept it
    pub password: String,
    /// Insertion timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields for a new local user registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Mobile number
    pub mobile: String,
    /// Plaintext password
    pub password: String,
}

// ── Authentication ──────────────────────────────────────────────────────

/// `POST user/login` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Mobile number
    pub mobile: String,
    /// Password
    pub password: String,
}

/// `POST user/login` response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Human-readable status message
    pub message: Option<String>,
    /// Bearer token; present only on successful login
    pub token: Option<String>,
    /// Error description on failure
    pub error: Option<String>,
}

/// `POST user/register` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Gender
    pub gender: String,
    /// Email address
    pub email: String,
    /// Mobile number
    pub mobile: String,
    /// Password
    pub password: String,
}

/// `POST user/register` response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Human-readable status message
    pub message: Option<String>,
    /// Error description on failure
    pub error: Option<String>,
}

// ── Products and analysis ───────────────────────────────────────────────

/// Product listed under a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product name
    pub name: String,
    /// Product image URL
    pub image_url: String,
    /// Ingredient list text
    pub ingredients: String,
    /// Nutrition facts text
    pub nutritions: String,
}

/// `GET product/category` response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductsResponse {
    /// Products in the requested category
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Per-nutrient rating within an analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientAnalysis {
    /// Nutrient name, English
    pub nutrient_en: String,
    /// Nutrient name, Hindi
    pub nutrient_hi: String,
    /// Rating on a 1-10 scale
    pub rating: f32,
    /// Explanation, English
    pub explanation_en: String,
    /// Explanation, Hindi
    pub explanation_hi: String,
}

impl NutrientAnalysis {
    /// Nutrient name in the given language
    pub fn nutrient(&self, language: Language) -> &str {
        match language {
            Language::English => &self.nutrient_en,
            Language::Hindi => &self.nutrient_hi,
        }
    }

    /// Explanation in the given language
    pub fn explanation(&self, language: Language) -> &str {
        match language {
            Language::English => &self.explanation_en,
            Language::Hindi => &self.explanation_hi,
        }
    }
}

/// Overall product verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallAnalysis {
    /// Rating on a 1-5 scale
    pub rating: f32,
    /// Explanation, English
    pub explanation_en: String,
    /// Explanation, Hindi
    pub explanation_hi: String,
}

impl OverallAnalysis {
    /// Explanation in the given language
    pub fn explanation(&self, language: Language) -> &str {
        match language {
            Language::English => &self.explanation_en,
            Language::Hindi => &self.explanation_hi,
        }
    }
}

/// Healthier alternative suggested alongside an analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedAlternative {
    /// Alternative product name
    pub name: String,
    /// Reason, English
    pub reason_en: String,
    /// Reason, Hindi
    pub reason_hi: String,
}

impl SuggestedAlternative {
    /// Reason in the given language
    pub fn reason(&self, language: Language) -> &str {
        match language {
            Language::English => &self.reason_en,
            Language::Hindi => &self.reason_hi,
        }
    }
}

/// Complete nutrition analysis for one product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAnalysis {
    /// Per-nutrient ratings
    #[serde(default)]
    pub nutrient_analysis: Vec<NutrientAnalysis>,
    /// Overall verdict
    pub overall_analysis: OverallAnalysis,
    /// Suggested healthier alternatives
    #[serde(default)]
    pub suggested_alternatives: Vec<SuggestedAlternative>,
}

/// `GET product/productAnalysis` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAnalysisResponse {
    /// The analysis report
    pub analysis: ProductAnalysis,
    /// Image URL for the analyzed product
    #[serde(rename = "productImage")]
    pub product_image: String,
}

/// `POST product/imageProductAnalysis` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageProductAnalysisResponse {
    /// The analysis report derived from the uploaded photo
    pub analysis: ProductAnalysis,
}

// ── Profile ─────────────────────────────────────────────────────────────

/// Remote user profile as returned by `GET user/profile`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: Option<String>,
    /// Mobile number
    pub mobile: Option<String>,
    /// Gender
    pub gender: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Age in years
    pub age: Option<String>,
    /// Height in centimeters
    pub height: Option<String>,
    /// Weight in kilograms
    pub weight: Option<String>,
    /// Free-text medical history
    #[serde(rename = "medicalHistory")]
    pub medical_history: Option<String>,
    /// Free-text allergy list
    pub allergies: Option<String>,
    /// Blood group
    #[serde(rename = "bloodGroup")]
    pub blood_group: Option<String>,
}

/// `GET user/profile` response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    /// The profile payload
    #[serde(rename = "User")]
    pub user: UserProfile,
}

/// `POST user/profile` partial-update request body
///
/// Absent fields are omitted from the payload and left untouched by the
/// backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Mobile number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    /// Free-text medical history
    #[serde(rename = "medicalHistory", skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    /// Free-text allergy list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    /// Blood group
    #[serde(rename = "bloodGroup", skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
}

/// `POST user/profile` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileResponse {
    /// Human-readable status message
    pub message: String,
    /// The updated profile
    pub user: UserProfile,
}

// ── Recommendations ─────────────────────────────────────────────────────

/// Single food recommendation entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecommendation {
    /// Recommended product name
    #[serde(rename = "productName")]
    pub product_name: String,
    /// Benefit description
    pub benefits: String,
    /// Category the product belongs to
    pub category: String,
}

/// `GET product/productSuggest` response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodRecommendationsResponse {
    /// Personalized recommendations
    #[serde(rename = "foodRecommendations", default)]
    pub food_recommendations: Vec<FoodRecommendation>,
}
