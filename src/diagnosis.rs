//! Diagnosis engine — matches a symptom selection against the fixed
//! rule table and produces a triage verdict.
//!
//! The engine is a pure function over the selection: no I/O, no state,
//! no failure modes. Matching is substring containment of each rule's
//! trigger phrases in the lowercased, comma-joined selection text, with
//! a first-full-match-wins scan in declaration order. When nothing fully
//! matches, an urgent-keyword override and a small fallback ladder
//! decide the message.

/// One entry of the fixed rule table.
///
/// A rule fully matches when every trigger phrase appears somewhere in
/// the combined selection text; it partially matches when at least one
/// (but not all) of them do.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosisRule {
    /// Lowercase phrases that must all be present for a full match.
    pub triggers: &'static [&'static str],
    /// Multi-line verdict: a "Possible diagnosis" line and a
    /// "Recommendation" line.
    pub verdict: &'static str,
}

/// The rule table. Declaration order is scan order, which keeps
/// first-full-match-wins deterministic; more specific trigger sets are
/// listed before their subsets.
pub const RULES: &[DiagnosisRule] = &[
    DiagnosisRule {
        triggers: &["fever", "cough", "shortness of breath"],
        verdict: "Possible diagnosis: COVID-19 or Pneumonia.\nRecommendation: Isolate, monitor oxygen, seek medical attention if symptoms worsen.",
    },
    DiagnosisRule {
        triggers: &["fever", "cough"],
        verdict: "Possible diagnosis: Flu or Common Cold.\nRecommendation: Rest, hydration, and consult a doctor if severe.",
    },
    DiagnosisRule {
        triggers: &["headache", "nausea"],
        verdict: "Possible diagnosis: Migraine.\nRecommendation: Avoid light/noise, rest, and use migraine-specific medication.",
    },
    DiagnosisRule {
        triggers: &["chest pain", "shortness of breath"],
        verdict: "Possible diagnosis: Heart condition or Asthma attack.\nRecommendation: Seek immediate medical attention.",
    },
    DiagnosisRule {
        triggers: &["chest pain"],
        verdict: "Possible diagnosis: Heart condition.\nRecommendation: Seek immediate medical attention.",
    },
    DiagnosisRule {
        triggers: &["sore throat", "cough"],
        verdict: "Possible diagnosis: Throat infection or Allergy.\nRecommendation: Gargle, avoid irritants, consult a doctor if persistent.",
    },
    DiagnosisRule {
        triggers: &["fatigue", "pale skin"],
        verdict: "Possible diagnosis: Anemia.\nRecommendation: Get a blood test and consult a healthcare provider.",
    },
    DiagnosisRule {
        triggers: &["nausea", "vomiting", "diarrhea"],
        verdict: "Possible diagnosis: Food poisoning or Gastroenteritis.\nRecommendation: Hydrate, rest, seek care if severe.",
    },
    DiagnosisRule {
        triggers: &["runny nose", "sneezing", "itchy eyes"],
        verdict: "Possible diagnosis: Allergic Rhinitis.\nRecommendation: Avoid allergens, consider antihistamines.",
    },
    DiagnosisRule {
        triggers: &["shortness of breath"],
        verdict: "Possible diagnosis: Asthma or Respiratory issue.\nRecommendation: Use inhaler if prescribed, seek urgent care if severe.",
    },
    DiagnosisRule {
        triggers: &["fatigue"],
        verdict: "Possible diagnosis: Fatigue (non-specific).\nRecommendation: Rest, hydrate, and monitor for other symptoms.",
    },
];

/// Keywords that trigger the urgent override when no rule fully matches.
const URGENT_KEYWORDS: &[&str] = &["chest pain", "shortness of breath"];

const URGENT_WARNING: &str = "Warning: Severe symptoms detected (chest pain or shortness of breath).\nRecommendation: Seek immediate medical attention.";

const NO_SYMPTOMS: &str = "No symptoms provided.\nRecommendation: Please select at least one symptom to get a diagnosis.";

const SINGLE_SYMPTOM: &str = "Only one symptom provided.\nRecommendation: More symptoms may help provide a more accurate diagnosis. Please consult a healthcare provider.";

const NO_MATCH: &str = "Symptoms do not match known patterns.\nRecommendation: Please consult a healthcare provider for a thorough evaluation.";

/// The combined-text haystack: lowercase, comma-space-joined selection.
fn combined_text(selection: &[String]) -> String {
    selection.join(", ").to_lowercase()
}

/// The leading portion of a verdict used when listing partial matches:
/// everything before the first period-newline, period excluded.
fn verdict_head(verdict: &'static str) -> &'static str {
    match verdict.split_once(".\n") {
        Some((head, _)) => head,
        None => verdict,
    }
}

/// Derives a triage verdict from the selected symptom labels.
///
/// Total over every input, including the empty selection; always returns
/// non-empty text and never touches any external state.
pub fn diagnose(selection: &[String]) -> String {
    let combined = combined_text(selection);

    // First full match wins. Partial matches are collected in scan order
    // for the fallback listing, duplicates and all.
    let mut possible_conditions = String::new();
    for rule in RULES {
        let hits = rule
            .triggers
            .iter()
            .filter(|phrase| combined.contains(**phrase))
            .count();
        if hits == rule.triggers.len() {
            return rule.verdict.to_string();
        }
        if hits > 0 {
            possible_conditions.push_str("- ");
            possible_conditions.push_str(verdict_head(rule.verdict));
            possible_conditions.push('\n');
        }
    }

    // Urgent keywords override every fallback, but never a full match.
    if URGENT_KEYWORDS.iter().any(|kw| combined.contains(kw)) {
        return URGENT_WARNING.to_string();
    }

    if selection.is_empty() {
        NO_SYMPTOMS.to_string()
    } else if selection.len() == 1 {
        SINGLE_SYMPTOM.to_string()
    } else if !possible_conditions.is_empty() {
        format!(
            "Possible conditions based on your symptoms:\n{possible_conditions}Recommendation: For a precise diagnosis, consult a healthcare provider."
        )
    } else {
        NO_MATCH.to_string()
    }
}
