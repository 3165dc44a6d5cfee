use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One issued certificate.
///
/// Dates and durations are display strings and are returned verbatim; nothing
/// here parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    /// Public verification code in UUID form
    #[schema(example = "a1b2c3d4-e5f6-7890-abcd-ef1234567890")]
    pub id: String,
    /// Display name of the certificate holder
    #[schema(example = "Juan Carlos Pérez Rodríguez")]
    pub holder_name: String,
    /// Holder's identification document, as printed on the certificate
    #[schema(example = "1.098.765.432")]
    pub holder_identification: String,
    /// Service line the certificate belongs to (formacion, auditoria, consultoria, ...)
    #[schema(example = "formacion")]
    pub service_category: String,
    #[schema(example = "Auditor Interno ISO 9001:2015")]
    pub course_name: String,
    #[schema(example = "15 de octubre de 2024")]
    pub issue_date: String,
    #[schema(example = "15 de octubre de 2027")]
    pub expiry_date: String,
    #[schema(example = "40 horas")]
    pub duration_label: String,
    #[schema(example = "Ing. María Fernanda López")]
    pub instructor_name: String,
    pub notes: String,
    /// Human-facing code printed on the certificate
    #[schema(example = "CERT-2024-001-AUD")]
    pub certificate_code: String,
}
