use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_clean: bool,
    pub violations: Vec<String>,
}

struct Rule {
    label: &'static str,
    patterns: Vec<Regex>,
    gate: Option<fn(&str) -> bool>,
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("content rule pattern compiles")
}

fn has_location_context(text: &str) -> bool {
    static CONTEXT: Lazy<Regex> =
        Lazy::new(|| re(r"(?i)\b(?:city|state|lives|located|residing|resident)\b"));
    CONTEXT.is_match(text)
}

// Evaluation order is the reporting order. Within a category the first
// matching pattern wins; each category contributes at most one label.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule {
            label: "Phone number detected",
            patterns: vec![
                re(r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b"),
                re(r"\(\d{3}\)\s?\d{3}[-.\s]?\d{4}\b"),
                re(r"\b\d{10}\b"),
                re(r"\+\d{1,3}[-.\s]?\(?\d{1,4}\)?[-.\s]?\d{1,4}[-.\s]?\d{1,9}"),
            ],
            gate: None,
        },
        Rule {
            label: "Email address detected",
            patterns: vec![re(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")],
            gate: None,
        },
        Rule {
            // The dashed form, or a bare run of exactly nine digits.
            label: "Social Security Number or similar ID detected",
            patterns: vec![re(r"\b\d{3}-\d{2}-\d{4}\b"), re(r"\b\d{9}\b")],
            gate: None,
        },
        Rule {
            label: "Credit card number detected",
            patterns: vec![re(r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b")],
            gate: None,
        },
        Rule {
            label: "Physical address detected",
            patterns: vec![
                re(r"\b\d{1,5}\s+(?:[A-Z][a-z]+\s+){1,3}(?i:Street|St|Avenue|Ave|Road|Rd|Drive|Dr|Lane|Ln|Boulevard|Blvd|Court|Ct|Way|Place|Pl|Circle|Cir)\b"),
                re(r"(?i)\b(?:P\.?\s?O\.?\s?Box|PO Box)\s+\d+\b"),
            ],
            gate: None,
        },
        Rule {
            // Gated on location context so ordinary five-digit numbers
            // (order ids, vote counts) pass.
            label: "Location information detected",
            patterns: vec![re(r"\b\d{5}(?:-\d{4})?\b")],
            gate: Some(has_location_context),
        },
        Rule {
            label: "IP address detected",
            patterns: vec![
                re(r"\b(?:\d{1,3}\.){3}\d{1,3}\b"),
                re(r"\b(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}\b"),
            ],
            gate: None,
        },
        Rule {
            label: "Suspicious URL detected",
            patterns: vec![re(r"(?i)\b(?:dox|doxx|leak|dump|paste|bin)\w*\.(?:com|org|net|io)")],
            gate: None,
        },
    ]
});

const SUSPICIOUS_PHRASES: [&str; 10] = [
    "lives at",
    "home address",
    "phone number is",
    "real name is",
    "social security",
    "credit card",
    "bank account",
    "license plate",
    "drivers license",
    "passport number",
];

/// Checks a string for PII and doxxing-adjacent content.
///
/// Pure and total: every input yields a verdict, the empty string is clean.
pub fn check(text: &str) -> Verdict {
    let mut violations = Vec::new();
    let lower = text.to_lowercase();

    for rule in RULES.iter() {
        if let Some(gate) = rule.gate {
            if !gate(text) {
                continue;
            }
        }
        if rule.patterns.iter().any(|p| p.is_match(text)) {
            violations.push(rule.label.to_string());
        }
    }

    if let Some(phrase) = SUSPICIOUS_PHRASES.iter().find(|p| lower.contains(*p)) {
        violations.push(format!("Suspicious phrase: \"{}\"", phrase));
    }

    Verdict {
        is_clean: violations.is_empty(),
        violations,
    }
}

/// Case-insensitive substring check used for policy-configured phrases.
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    text.to_lowercase().contains(&phrase.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{check, contains_phrase};

    #[test]
    fn empty_input_is_clean() {
        let v = check("");
        assert!(v.is_clean);
        assert!(v.violations.is_empty());
    }

    #[test]
    fn check_is_deterministic() {
        let text = "call 555-123-4567 or mail a@b.com";
        assert_eq!(check(text), check(text));
    }

    #[test]
    fn detects_dashed_phone_number() {
        let v = check("Call me at 555-123-4567");
        assert!(!v.is_clean);
        assert!(v.violations.contains(&"Phone number detected".to_string()));
    }

    #[test]
    fn detects_parenthesized_and_bare_phone_forms() {
        assert!(!check("(555) 123-4567").is_clean);
        assert!(!check("my cell 5551234567 ok").is_clean);
        assert!(!check("+1 555 123 4567").is_clean);
    }

    #[test]
    fn detects_email_address() {
        let v = check("reach me at a@b.com");
        assert!(v
            .violations
            .contains(&"Email address detected".to_string()));
    }

    #[test]
    fn detects_dashed_ssn_and_bare_nine_digit_run() {
        let label = "Social Security Number or similar ID detected".to_string();
        assert!(check("ssn 123-45-6789").violations.contains(&label));
        assert!(check("id 123456789 here").violations.contains(&label));
    }

    #[test]
    fn ten_digit_run_is_phone_not_ssn() {
        let v = check("5551234567");
        assert!(v.violations.contains(&"Phone number detected".to_string()));
        assert!(!v
            .violations
            .contains(&"Social Security Number or similar ID detected".to_string()));
    }

    #[test]
    fn detects_credit_card_groups() {
        let v = check("4111-1111-1111-1111");
        assert!(v
            .violations
            .contains(&"Credit card number detected".to_string()));
    }

    #[test]
    fn detects_street_address_and_po_box() {
        let label = "Physical address detected".to_string();
        assert!(check("he works at 123 Main Street").violations.contains(&label));
        assert!(check("456 Oak Ave apt 2").violations.contains(&label));
        assert!(check("send it to PO Box 789").violations.contains(&label));
    }

    #[test]
    fn zip_requires_location_context() {
        let label = "Location information detected".to_string();
        assert!(!check("my zip is 90210").violations.contains(&label));
        assert!(!check("order number 90210").violations.contains(&label));
        assert!(check("I live at zip 90210, resident here")
            .violations
            .contains(&label));
        assert!(check("the city office, 90210-1234")
            .violations
            .contains(&label));
    }

    #[test]
    fn detects_ip_addresses() {
        let label = "IP address detected".to_string();
        assert!(check("connects from 192.168.1.100").violations.contains(&label));
        assert!(check("2001:0db8:85a3:0000:0000:8a2e:0370:7334")
            .violations
            .contains(&label));
    }

    #[test]
    fn detects_doxxing_adjacent_domains() {
        let v = check("posted on doxbin.com yesterday");
        assert!(v
            .violations
            .contains(&"Suspicious URL detected".to_string()));
    }

    #[test]
    fn reports_first_suspicious_phrase_only() {
        let v = check("his real name is Bob and he lives at the corner");
        let phrase_labels: Vec<_> = v
            .violations
            .iter()
            .filter(|l| l.starts_with("Suspicious phrase"))
            .collect();
        // "lives at" precedes "real name is" in the fixed list.
        assert_eq!(phrase_labels, vec!["Suspicious phrase: \"lives at\""]);
    }

    #[test]
    fn aggregates_categories_in_table_order() {
        let v = check("call 555-123-4567 or write a@b.com");
        assert_eq!(
            v.violations,
            vec![
                "Phone number detected".to_string(),
                "Email address detected".to_string(),
            ]
        );
    }

    #[test]
    fn ordinary_speech_is_clean() {
        assert!(check("Great point, I completely agree with this!").is_clean);
        assert!(check("They took $2.3 million from defense contractors.").is_clean);
    }

    #[test]
    fn phrase_matching_is_case_insensitive() {
        assert!(!check("her HOME ADDRESS is known").is_clean);
        assert!(contains_phrase("Some TEXT here", "text"));
        assert!(!contains_phrase("something", "nothing"));
    }
}
