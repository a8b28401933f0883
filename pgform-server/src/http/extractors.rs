//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use std::convert::Infallible;

use pgform_core::FormFields;

/// Submit body normalized from JSON, url-encoded or multipart form.
///
/// Never rejects: an unsupported content type or an unparseable body yields
/// empty fields, which then fail presence validation.
pub struct SubmittedFields(pub FormFields);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Multipart,
    Other,
}

fn body_kind(content_type: Option<&str>) -> BodyKind {
    let Some(content_type) = content_type else {
        return BodyKind::Other;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
    {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else if mime == "multipart/form-data" {
        BodyKind::Multipart
    } else {
        BodyKind::Other
    }
}

impl<S> FromRequest<S> for SubmittedFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());

        let fields = match body_kind(content_type) {
            BodyKind::Json => match Bytes::from_request(req, state).await {
                Ok(bytes) => FormFields::from_json_slice(&bytes),
                Err(rejection) => {
                    tracing::debug!(%rejection, "failed to read JSON body");
                    FormFields::default()
                }
            },
            BodyKind::Form => match Form::<Vec<(String, String)>>::from_request(req, state).await
            {
                Ok(Form(pairs)) => pairs.into_iter().collect(),
                Err(rejection) => {
                    tracing::debug!(%rejection, "failed to decode form body");
                    FormFields::default()
                }
            },
            BodyKind::Multipart => match Multipart::from_request(req, state).await {
                Ok(multipart) => match multipart_text_fields(multipart).await {
                    Ok(pairs) => pairs.into_iter().collect(),
                    Err(e) => {
                        tracing::debug!(error = %e, "failed to read multipart body");
                        FormFields::default()
                    }
                },
                Err(rejection) => {
                    tracing::debug!(%rejection, "failed to decode multipart body");
                    FormFields::default()
                }
            },
            BodyKind::Other => FormFields::default(),
        };

        Ok(Self(fields))
    }
}

/// Named text parts in arrival order; file uploads are skipped
async fn multipart_text_fields(
    mut multipart: Multipart,
) -> Result<Vec<(String, String)>, MultipartError> {
    let mut pairs = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        pairs.push((name, field.text().await?));
    }

    Ok(pairs)
}
