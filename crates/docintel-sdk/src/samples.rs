//! Sample queries and documents offered to a fresh session

use docintel_core::Document;

/// Example queries shown to users before their first submission
pub const SAMPLE_QUERIES: [&str; 3] = [
    "46-year-old male, knee surgery in Pune, 3-month-old insurance policy",
    "Maternity coverage for 28F, delivery in Mumbai, 2-year policy",
    "Cardiac surgery claim, 55M, Chennai hospital, premium policy",
];

/// The two policy documents a fresh session is seeded with
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new(
            "sample-1",
            "Health Insurance Policy.pdf",
            "application/pdf",
            245_760,
        )
        .with_content(
            "Comprehensive health insurance policy covering surgical procedures, hospitalization, and outpatient treatments with specific clauses for age-based coverage and waiting periods.",
        ),
        Document::new(
            "sample-2",
            "Claims Processing Guidelines.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            156_420,
        )
        .with_content(
            "Detailed guidelines for processing insurance claims including approval criteria, documentation requirements, pre-authorization procedures, and payout calculations.",
        ),
    ]
}
