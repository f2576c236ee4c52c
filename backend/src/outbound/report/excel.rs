//! Excel workbook rendering over the repository ports.
//!
//! Produces a two-sheet workbook: "User Registrations" and "Feedback
//! Submissions", both newest-first with styled header rows and column widths
//! fitted to their contents. The workbook is rendered entirely in memory.

use std::sync::Arc;

use async_trait::async_trait;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet, XlsxError};

use crate::domain::ports::{
    FeedbackRepository, RegistrationRepository, ReportError, ReportGenerator,
};
use crate::domain::{Feedback, Registration};

const REGISTRATION_HEADERS: [&str; 9] = [
    "ID",
    "Name",
    "Email",
    "Phone",
    "Gender",
    "Profession",
    "User Type",
    "Submitted At",
    "IP Address",
];

const FEEDBACK_HEADERS: [&str; 22] = [
    "ID",
    "Visual Design",
    "Visual Design Issue",
    "Ease of Navigation",
    "Navigation Issue",
    "Mobile Responsiveness",
    "Mobile Issue",
    "Overall Satisfaction",
    "Satisfaction Issue",
    "Ease of Tasks",
    "Tasks Issue",
    "Quality of Services",
    "Services Issue",
    "Like Most",
    "Improvements",
    "Features",
    "Legal Challenges",
    "Additional Comments",
    "Contact Willing",
    "Contact Email",
    "Submitted At",
    "IP Address",
];

const HEADER_FILL: Color = Color::RGB(0x36_60_92);
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MAX_COLUMN_WIDTH: usize = 50;

/// A single worksheet cell; numbers keep their numeric type in the file.
enum Cell {
    Int(i64),
    Text(String),
}

impl Cell {
    fn display_len(&self) -> usize {
        match self {
            Self::Int(value) => value.to_string().len(),
            Self::Text(text) => text.chars().count(),
        }
    }
}

fn text(value: Option<&str>) -> Cell {
    Cell::Text(value.unwrap_or_default().to_owned())
}

fn rating(value: Option<i32>) -> Cell {
    value.map_or_else(|| Cell::Text(String::new()), |v| Cell::Int(i64::from(v)))
}

fn registration_cells(record: &Registration) -> Vec<Cell> {
    vec![
        Cell::Int(record.id),
        Cell::Text(record.name.clone()),
        Cell::Text(record.email.clone()),
        Cell::Text(record.phone.clone()),
        text(record.gender.as_deref()),
        text(record.profession.as_deref()),
        Cell::Text(record.user_type.as_str().to_owned()),
        Cell::Text(record.submitted_at.format(TIMESTAMP_FORMAT).to_string()),
        text(record.ip_address.as_deref()),
    ]
}

fn feedback_cells(record: &Feedback) -> Vec<Cell> {
    vec![
        Cell::Int(record.id),
        rating(record.visual_design),
        text(record.visual_design_issue.as_deref()),
        rating(record.ease_of_navigation),
        text(record.ease_of_navigation_issue.as_deref()),
        rating(record.mobile_responsiveness),
        text(record.mobile_responsiveness_issue.as_deref()),
        rating(record.overall_satisfaction),
        text(record.overall_satisfaction_issue.as_deref()),
        rating(record.ease_of_tasks),
        text(record.ease_of_tasks_issue.as_deref()),
        rating(record.quality_of_services),
        text(record.quality_of_services_issue.as_deref()),
        text(record.like_most.as_deref()),
        text(record.improvements.as_deref()),
        text(record.features.as_deref()),
        text(record.legal_challenges.as_deref()),
        text(record.additional_comments.as_deref()),
        text(record.contact_willing.as_deref()),
        text(record.contact_email.as_deref()),
        Cell::Text(record.submitted_at.format(TIMESTAMP_FORMAT).to_string()),
        text(record.ip_address.as_deref()),
    ]
}

/// Width for a column holding `max_length` display characters.
fn column_width(max_length: usize) -> f64 {
    let padded = (max_length + 2).min(MAX_COLUMN_WIDTH);
    padded as f64
}

fn write_sheet(
    sheet: &mut Worksheet,
    headers: &[&str],
    rows: &[Vec<Cell>],
    header_format: &Format,
) -> Result<(), XlsxError> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    for (col, header) in (0u16..).zip(headers) {
        sheet.write_string_with_format(0, col, *header, header_format)?;
    }

    for (row_idx, row) in (1u32..).zip(rows) {
        for ((col, cell), width) in (0u16..).zip(row).zip(widths.iter_mut()) {
            *width = (*width).max(cell.display_len());
            match cell {
                Cell::Int(value) => {
                    sheet.write_number(row_idx, col, *value as f64)?;
                }
                Cell::Text(value) => {
                    sheet.write_string(row_idx, col, value)?;
                }
            }
        }
    }

    for (col, width) in (0u16..).zip(widths) {
        sheet.set_column_width(col, column_width(width))?;
    }

    Ok(())
}

/// Render the two-sheet workbook to an in-memory XLSX file.
fn render_workbook(
    registrations: &[Registration],
    feedback: &[Feedback],
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(HEADER_FILL)
        .set_align(FormatAlign::Center);

    let registration_rows: Vec<Vec<Cell>> =
        registrations.iter().map(registration_cells).collect();
    let sheet = workbook.add_worksheet();
    sheet.set_name("User Registrations")?;
    write_sheet(
        sheet,
        &REGISTRATION_HEADERS,
        &registration_rows,
        &header_format,
    )?;

    let feedback_rows: Vec<Vec<Cell>> = feedback.iter().map(feedback_cells).collect();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Feedback Submissions")?;
    write_sheet(sheet, &FEEDBACK_HEADERS, &feedback_rows, &header_format)?;

    workbook.save_to_buffer()
}

/// Report generator that reads both stores and renders an XLSX workbook.
#[derive(Clone)]
pub struct ExcelReportGenerator {
    registrations: Arc<dyn RegistrationRepository>,
    feedback: Arc<dyn FeedbackRepository>,
}

impl ExcelReportGenerator {
    /// Create a generator over the given repository ports.
    #[must_use]
    pub fn new(
        registrations: Arc<dyn RegistrationRepository>,
        feedback: Arc<dyn FeedbackRepository>,
    ) -> Self {
        Self {
            registrations,
            feedback,
        }
    }
}

#[async_trait]
impl ReportGenerator for ExcelReportGenerator {
    async fn generate(&self) -> Result<Vec<u8>, ReportError> {
        let registrations = self.registrations.list_all().await?;
        let feedback = self.feedback.list_all().await?;

        render_workbook(&registrations, &feedback)
            .map_err(|err| ReportError::render(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    use crate::domain::ports::{InMemoryFeedbackRepository, InMemoryRegistrationRepository};
    use crate::domain::{ClientMeta, NewFeedback, NewRegistration, UserType};

    fn registration(id: i64) -> Registration {
        Registration {
            id,
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: "555-0100".to_owned(),
            gender: None,
            profession: Some("Engineer".to_owned()),
            user_type: UserType::Creator,
            submitted_at: Utc::now(),
            ip_address: Some("203.0.113.9".to_owned()),
            user_agent: None,
        }
    }

    /// Count `<row` elements in one worksheet of a rendered workbook.
    fn sheet_row_count(bytes: &[u8], entry: &str) -> usize {
        use std::io::{Cursor, Read as _};

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("zip archive");
        let mut xml = String::new();
        archive
            .by_name(entry)
            .expect("worksheet entry")
            .read_to_string(&mut xml)
            .expect("worksheet xml");
        xml.matches("<row ").count()
    }

    fn sparse_feedback(id: i64) -> Feedback {
        Feedback {
            id,
            visual_design: Some(4),
            ease_of_navigation: None,
            mobile_responsiveness: None,
            overall_satisfaction: None,
            ease_of_tasks: None,
            quality_of_services: None,
            visual_design_issue: None,
            ease_of_navigation_issue: None,
            mobile_responsiveness_issue: None,
            overall_satisfaction_issue: None,
            ease_of_tasks_issue: None,
            quality_of_services_issue: None,
            like_most: None,
            improvements: None,
            features: None,
            legal_challenges: None,
            additional_comments: None,
            contact_willing: None,
            contact_email: None,
            submitted_at: Utc::now(),
            ip_address: None,
            user_agent: None,
        }
    }

    #[rstest]
    fn row_shapes_match_their_headers() {
        assert_eq!(registration_cells(&registration(1)).len(), 9);
        assert_eq!(feedback_cells(&sparse_feedback(1)).len(), 22);
    }

    #[rstest]
    #[case(3, 5.0)]
    #[case(10, 12.0)]
    #[case(80, 50.0)]
    fn column_width_pads_and_caps(#[case] length: usize, #[case] expected: f64) {
        assert!((column_width(length) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn unanswered_ratings_render_as_blank_cells() {
        assert_eq!(rating(None).display_len(), 0);
        assert_eq!(rating(Some(4)).display_len(), 1);
    }

    #[rstest]
    fn empty_stores_still_produce_a_workbook() {
        let bytes = render_workbook(&[], &[]).expect("render");
        assert_eq!(&bytes[..2], b"PK");
    }

    #[rstest]
    fn each_sheet_holds_a_header_row_plus_one_row_per_record() {
        let bytes =
            render_workbook(&[registration(1)], &[sparse_feedback(1)]).expect("render");

        assert_eq!(sheet_row_count(&bytes, "xl/worksheets/sheet1.xml"), 2);
        assert_eq!(sheet_row_count(&bytes, "xl/worksheets/sheet2.xml"), 2);
    }

    #[rstest]
    fn empty_sheets_hold_only_the_header_row() {
        let bytes = render_workbook(&[], &[]).expect("render");

        assert_eq!(sheet_row_count(&bytes, "xl/worksheets/sheet1.xml"), 1);
        assert_eq!(sheet_row_count(&bytes, "xl/worksheets/sheet2.xml"), 1);
    }

    #[rstest]
    fn populated_workbook_is_larger_than_an_empty_one() {
        let empty = render_workbook(&[], &[]).expect("render");
        let populated =
            render_workbook(&[registration(1), registration(2)], &[]).expect("render");
        assert!(populated.len() > empty.len());
    }

    #[tokio::test]
    async fn generate_reads_both_repositories() {
        let registrations = Arc::new(InMemoryRegistrationRepository::new());
        let feedback = Arc::new(InMemoryFeedbackRepository::new());

        registrations
            .insert(NewRegistration {
                name: "Grace Hopper".to_owned(),
                email: "grace@example.com".to_owned(),
                phone: "555-0101".to_owned(),
                gender: None,
                profession: None,
                user_type: UserType::User,
                client: ClientMeta::empty(),
            })
            .await
            .expect("insert registration");

        feedback
            .insert(NewFeedback {
                overall_satisfaction: Some(5),
                like_most: Some("Fast responses".to_owned()),
                ..NewFeedback::default()
            })
            .await
            .expect("insert feedback");

        let generator = ExcelReportGenerator::new(registrations, feedback);
        let bytes = generator.generate().await.expect("generate");
        assert_eq!(&bytes[..2], b"PK");
    }
}
