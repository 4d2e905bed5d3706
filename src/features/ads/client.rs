//! Client helpers for advertisement endpoints. Listing is scoped by the API to
//! the caller's role (clients see their own ads, agencies see open ones), and
//! the advertisement router wraps payloads in a `data` envelope.

use crate::{
    app_lib::{
        AppError, DataEnvelope, delete_with_auth, get_json, get_json_with_auth,
        post_json_with_auth_response, put_json_with_auth_response,
    },
    features::ads::types::{AdDraft, Advertisement},
};

/// Lists advertisements visible to the signed-in account.
pub async fn list_ads(token: &str) -> Result<Vec<Advertisement>, AppError> {
    let envelope: DataEnvelope<Vec<Advertisement>> =
        get_json_with_auth("/advertisements", token).await?;
    Ok(envelope.data)
}

/// Lists the public teaser ads shown on the landing page.
pub async fn list_public_ads() -> Result<Vec<Advertisement>, AppError> {
    let envelope: DataEnvelope<Vec<Advertisement>> = get_json("/advertisements/public").await?;
    Ok(envelope.data)
}

/// Creates an advertisement owned by the signed-in client.
pub async fn create_ad(draft: &AdDraft, token: &str) -> Result<Advertisement, AppError> {
    let envelope: DataEnvelope<Advertisement> =
        post_json_with_auth_response("/advertisements", draft, token).await?;
    Ok(envelope.data)
}

/// Updates an advertisement and returns the stored record.
pub async fn update_ad(id: &str, draft: &AdDraft, token: &str) -> Result<Advertisement, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Advertisement id is required.".to_string()));
    }
    let envelope: DataEnvelope<Advertisement> =
        put_json_with_auth_response(&format!("/advertisements/{trimmed}"), draft, token).await?;
    Ok(envelope.data)
}

/// Deletes an advertisement.
pub async fn delete_ad(id: &str, token: &str) -> Result<(), AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Advertisement id is required.".to_string()));
    }
    delete_with_auth(&format!("/advertisements/{trimmed}"), token).await
}
