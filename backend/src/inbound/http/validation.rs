//! Pure validation for the feedback survey.
//!
//! The contract is an ordered list of human-readable error strings, empty
//! when the submission is valid. Check order is fixed: every rating
//! range/parse check in field order, then every conditional-issue check in
//! the same order, then the contact email check.

use super::feedback::{FeedbackRequest, ParsedRating, RatingValue};

/// Ratings below this threshold require an explanation.
const ISSUE_THRESHOLD: i64 = 3;

/// Trim an optional text field, dropping blank submissions.
pub(crate) fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

/// The six rating questions with their transport names and paired issue
/// fields, in canonical order.
fn rating_pairs(
    request: &FeedbackRequest,
) -> [(&'static str, Option<&RatingValue>, Option<&str>); 6] {
    [
        (
            "visualDesign",
            request.visual_design.as_ref(),
            request.visual_design_issue.as_deref(),
        ),
        (
            "easeOfNavigation",
            request.ease_of_navigation.as_ref(),
            request.ease_of_navigation_issue.as_deref(),
        ),
        (
            "mobileResponsiveness",
            request.mobile_responsiveness.as_ref(),
            request.mobile_responsiveness_issue.as_deref(),
        ),
        (
            "overallSatisfaction",
            request.overall_satisfaction.as_ref(),
            request.overall_satisfaction_issue.as_deref(),
        ),
        (
            "easeOfTasks",
            request.ease_of_tasks.as_ref(),
            request.ease_of_tasks_issue.as_deref(),
        ),
        (
            "qualityOfServices",
            request.quality_of_services.as_ref(),
            request.quality_of_services_issue.as_deref(),
        ),
    ]
}

fn is_blank(text: Option<&str>) -> bool {
    text.is_none_or(|s| s.trim().is_empty())
}

/// Validate a feedback submission, returning the ordered error list.
///
/// A rating submitted as `0` is present and out of range; it is reported,
/// not silently skipped.
pub(crate) fn validate_feedback(request: &FeedbackRequest) -> Vec<String> {
    let pairs = rating_pairs(request);
    let mut errors = Vec::new();

    for (field, rating, _) in &pairs {
        match rating.map(RatingValue::parse) {
            Some(ParsedRating::Invalid) => {
                errors.push(format!("{field} must be a valid number"));
            }
            Some(ParsedRating::Value(value)) if !(1..=5).contains(&value) => {
                errors.push(format!("{field} must be between 1 and 5"));
            }
            _ => {}
        }
    }

    for (field, rating, issue) in &pairs {
        if let Some(ParsedRating::Value(value)) = rating.map(RatingValue::parse)
            && (1..ISSUE_THRESHOLD).contains(&value)
            && is_blank(*issue)
        {
            errors.push(format!(
                "Please explain what you didn't like for {field} (rating below 3)"
            ));
        }
    }

    if request.contact_willing.as_deref().map(str::trim) == Some("yes") {
        let email = request.contact_email.as_deref().map(str::trim);
        match email {
            None | Some("") => {
                errors.push("Email is required when willing to be contacted".to_owned());
            }
            Some(address) if !address.contains('@') || !address.contains('.') => {
                errors.push("Please provide a valid email address".to_owned());
            }
            Some(_) => {}
        }
    }

    errors
}
