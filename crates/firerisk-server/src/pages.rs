//! HTML pages for the prediction form

use firerisk_core::{RiskPrediction, FEATURE_NAMES};

/// Message shown when the artifacts were not loaded at startup
pub const MODEL_NOT_LOADED: &str = "Model not loaded. Please check the logs for more details.";

/// What the form page shows below the inputs
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// Fresh form, nothing submitted
    Empty,
    /// Successful prediction
    Prediction(RiskPrediction),
    /// User-visible error text
    Message(String),
}

/// Landing page
pub fn render_index() -> String {
    layout(
        "Fire Risk Prediction",
        "<h1>Fire Risk Prediction</h1>\n\
         <p>Estimate fire risk from today's weather readings and fire weather indices.</p>\n\
         <p><a href=\"/predictdata\">Open the prediction form</a></p>",
    )
}

/// Prediction form, with the outcome of the last submission if any
pub fn render_home(outcome: &FormOutcome) -> String {
    let mut body = String::from("<h1>Predict Fire Risk</h1>\n<form action=\"/predictdata\" method=\"post\">\n");
    for name in FEATURE_NAMES {
        body.push_str(&format!(
            "  <label for=\"{name}\">{name}</label>\n  <input type=\"text\" id=\"{name}\" name=\"{name}\" required>\n"
        ));
    }
    body.push_str("  <button type=\"submit\">Predict</button>\n</form>\n");

    match outcome {
        FormOutcome::Empty => {}
        FormOutcome::Prediction(p) => {
            body.push_str(&format!(
                "<h2 class=\"result\">Predicted fire risk: {}</h2>\n",
                format_percentage(p.percentage)
            ));
        }
        FormOutcome::Message(msg) => {
            body.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(msg)));
        }
    }

    layout("Predict Fire Risk", &body)
}

/// Render a percentage with two decimals
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

/// Escape text for inclusion in HTML element content
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_has_every_field() {
        let html = render_home(&FormOutcome::Empty);
        for name in FEATURE_NAMES {
            assert!(html.contains(&format!("name=\"{name}\"")));
        }
        assert!(!html.contains("class=\"result\""));
    }

    #[test]
    fn test_home_shows_prediction() {
        let html = render_home(&FormOutcome::Prediction(RiskPrediction {
            raw: 0.4567,
            percentage: 45.67,
        }));
        assert!(html.contains("45.67%"));
    }

    #[test]
    fn test_message_is_escaped() {
        let html = render_home(&FormOutcome::Message("<script>x</script>".to_string()));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(300.0), "300.00%");
        assert_eq!(format_percentage(-12.5), "-12.50%");
    }
}
