//! Built-in certificate set

use crate::record::CertificateRecord;

/// Builds a record from positional fields, in wire order.
#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    holder_name: &str,
    holder_identification: &str,
    service_category: &str,
    course_name: &str,
    issue_date: &str,
    expiry_date: &str,
    duration_label: &str,
    instructor_name: &str,
    notes: &str,
    certificate_code: &str,
) -> CertificateRecord {
    CertificateRecord {
        id: id.to_string(),
        holder_name: holder_name.to_string(),
        holder_identification: holder_identification.to_string(),
        service_category: service_category.to_string(),
        course_name: course_name.to_string(),
        issue_date: issue_date.to_string(),
        expiry_date: expiry_date.to_string(),
        duration_label: duration_label.to_string(),
        instructor_name: instructor_name.to_string(),
        notes: notes.to_string(),
        certificate_code: certificate_code.to_string(),
    }
}

/// Certificates shipped with the site, in publication order.
pub fn seeded_records() -> Vec<CertificateRecord> {
    vec![
        record(
            "a1b2c3d4-e5f6-7890-abcd-ef1234567890",
            "Juan Carlos Pérez Rodríguez",
            "1.098.765.432",
            "formacion",
            "Auditor Interno ISO 9001:2015",
            "15 de octubre de 2024",
            "15 de octubre de 2027",
            "40 horas",
            "Ing. María Fernanda López",
            "Aprobado con excelencia",
            "CERT-2024-001-AUD",
        ),
        record(
            "b2c3d4e5-f6a7-8901-bcde-f12345678901",
            "Ana María Gómez Torres",
            "52.123.456",
            "formacion",
            "Sistema de Gestión de Seguridad y Salud en el Trabajo ISO 45001",
            "20 de septiembre de 2024",
            "20 de septiembre de 2027",
            "32 horas",
            "Ing. Carlos Alberto Ruiz",
            "Certificado con honores",
            "CERT-2024-002-SST",
        ),
        record(
            "c3d4e5f6-a7b8-9012-cdef-123456789012",
            "Pedro Antonio Ramírez Silva",
            "80.234.567",
            "formacion",
            "Conducción Defensiva y Seguridad Vial",
            "5 de agosto de 2024",
            "5 de agosto de 2026",
            "16 horas",
            "Esp. Jorge Luis Mendoza",
            "Aprobado satisfactoriamente",
            "CERT-2024-003-VIAL",
        ),
        record(
            "d4e5f6a7-b8c9-0123-def1-234567890123",
            "Laura Patricia Martínez Díaz",
            "1.123.456.789",
            "auditoria",
            "Auditor Interno Sistema de Gestión Ambiental ISO 14001",
            "12 de julio de 2024",
            "12 de julio de 2027",
            "40 horas",
            "Ing. Diana Carolina Suárez",
            "Certificado con distinción",
            "CERT-2024-004-AMB",
        ),
        record(
            "e5f6a7b8-c9d0-1234-ef12-345678901234",
            "Roberto Carlos Sánchez Vélez",
            "79.876.543",
            "formacion",
            "Gestión de Riesgos y Matrices de Peligros",
            "3 de junio de 2024",
            "3 de junio de 2026",
            "24 horas",
            "Ing. Fernando Andrés Castro",
            "Aprobado",
            "CERT-2024-005-RIESG",
        ),
        record(
            "f6a7b8c9-d0e1-2345-f123-456789012345",
            "Claudia Marcela Ospina Ríos",
            "52.987.654",
            "formacion",
            "Liderazgo y Desarrollo Humano",
            "18 de mayo de 2024",
            "18 de mayo de 2025",
            "20 horas",
            "Psic. Sandra Milena Parra",
            "Participación destacada",
            "CERT-2024-006-LIDER",
        ),
        record(
            "a7b8c9d0-e1f2-3456-1234-567890123456",
            "Diego Fernando Vargas Cruz",
            "1.234.567.890",
            "consultoria",
            "Implementador ISO 27001 - Seguridad de la Información",
            "25 de abril de 2024",
            "25 de abril de 2027",
            "48 horas",
            "Ing. Gustavo Adolfo Ramírez",
            "Excelente desempeño",
            "CERT-2024-007-INFO",
        ),
        record(
            "b8c9d0e1-f2a3-4567-2345-678901234567",
            "Mónica Liliana Rojas Herrera",
            "39.456.789",
            "formacion",
            "Ergonomía y Análisis de Puestos de Trabajo",
            "10 de marzo de 2024",
            "10 de marzo de 2026",
            "16 horas",
            "Fisiot. Andrea Carolina Vega",
            "Aprobado",
            "CERT-2024-008-ERGO",
        ),
    ]
}
