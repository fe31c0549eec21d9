//! FAQ resource endpoints

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{FaqEntry, FaqTranslation, LanguageCode, LocalizedFaq};
use crate::infrastructure::services::{CreateFaqRequest, UpdateFaqRequest};

/// Query parameters for the listing endpoint
///
/// `lang` is optional and defaults to the default language; unknown codes
/// fall back to default-language text rather than erroring.
#[derive(Debug, Clone, Deserialize)]
pub struct ListFaqsQuery {
    pub lang: Option<String>,
}

/// Per-language translation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl From<TranslationPayload> for FaqTranslation {
    fn from(payload: TranslationPayload) -> Self {
        let mut translation = FaqTranslation::new();

        if let Some(question) = payload.question {
            translation = translation.with_question(question);
        }

        if let Some(answer) = payload.answer {
            translation = translation.with_answer(answer);
        }

        translation
    }
}

impl From<&FaqTranslation> for TranslationPayload {
    fn from(translation: &FaqTranslation) -> Self {
        Self {
            question: translation.question().map(String::from),
            answer: translation.answer().map(String::from),
        }
    }
}

/// Request to create a new FAQ entry
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFaqApiRequest {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub translations: BTreeMap<String, TranslationPayload>,
}

/// Request to update an FAQ entry
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFaqApiRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub translations: Option<BTreeMap<String, TranslationPayload>>,
}

/// Full FAQ entry response, including stored translations
#[derive(Debug, Clone, Serialize)]
pub struct FaqResponse {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub translations: BTreeMap<String, TranslationPayload>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&FaqEntry> for FaqResponse {
    fn from(entry: &FaqEntry) -> Self {
        Self {
            id: entry.id().as_str().to_string(),
            question: entry.question().to_string(),
            answer: entry.answer().to_string(),
            translations: entry
                .translations()
                .iter()
                .map(|(language, translation)| (language.clone(), translation.into()))
                .collect(),
            created_at: entry.created_at().to_rfc3339(),
            updated_at: entry.updated_at().to_rfc3339(),
        }
    }
}

/// Localized listing response
#[derive(Debug, Clone, Serialize)]
pub struct ListFaqsResponse {
    pub faqs: Vec<LocalizedFaq>,
    pub total: usize,
}

fn to_domain_translations(
    translations: BTreeMap<String, TranslationPayload>,
) -> BTreeMap<String, FaqTranslation> {
    translations
        .into_iter()
        .map(|(language, payload)| (language, payload.into()))
        .collect()
}

/// GET /api/faqs?lang=<code>
pub async fn list_faqs(
    State(state): State<AppState>,
    Query(query): Query<ListFaqsQuery>,
) -> Result<Json<ListFaqsResponse>, ApiError> {
    let language = LanguageCode::from_optional(query.lang.as_deref());

    debug!(lang = %language, "Listing FAQs");

    let service = state.faq_service.clone();
    let compute_language = language.clone();

    let faqs = state
        .listing_cache
        .list_with_cache(&language, move || async move {
            service.list_localized(&compute_language).await
        })
        .await
        .map_err(ApiError::from)?;

    let total = faqs.len();

    Ok(Json(ListFaqsResponse { faqs, total }))
}

/// POST /api/faqs
pub async fn create_faq(
    State(state): State<AppState>,
    Json(request): Json<CreateFaqApiRequest>,
) -> Result<Json<FaqResponse>, ApiError> {
    debug!("Creating FAQ");

    let create_request = CreateFaqRequest {
        question: request.question,
        answer: request.answer,
        translations: to_domain_translations(request.translations),
    };

    let entry = state
        .faq_service
        .create(create_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(FaqResponse::from(&entry)))
}

/// GET /api/faqs/{faq_id}
pub async fn get_faq(
    State(state): State<AppState>,
    Path(faq_id): Path<String>,
) -> Result<Json<FaqResponse>, ApiError> {
    debug!(faq_id = %faq_id, "Getting FAQ");

    let entry = state
        .faq_service
        .get(&faq_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("FAQ '{}' not found", faq_id)))?;

    Ok(Json(FaqResponse::from(&entry)))
}

/// PUT /api/faqs/{faq_id}
pub async fn update_faq(
    State(state): State<AppState>,
    Path(faq_id): Path<String>,
    Json(request): Json<UpdateFaqApiRequest>,
) -> Result<Json<FaqResponse>, ApiError> {
    debug!(faq_id = %faq_id, "Updating FAQ");

    let update_request = UpdateFaqRequest {
        question: request.question,
        answer: request.answer,
        translations: request.translations.map(to_domain_translations),
    };

    let entry = state
        .faq_service
        .update(&faq_id, update_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(FaqResponse::from(&entry)))
}

/// DELETE /api/faqs/{faq_id}
pub async fn delete_faq(
    State(state): State<AppState>,
    Path(faq_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    debug!(faq_id = %faq_id, "Deleting FAQ");

    state
        .faq_service
        .delete(&faq_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(serde_json::json!({
        "deleted": true,
        "id": faq_id
    })))
}
