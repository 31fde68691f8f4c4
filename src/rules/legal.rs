//! Legal-compliance phrasing rules
//!
//! Patterns for marketing and UI copy that makes prohibited financial
//! claims. Guaranteed-profit and principal-protection claims are critical;
//! softer assured-profit phrasing needs legal review. Korean patterns cover
//! the localized product copy.

use crate::rules::{Rule, Severity, PROSE_EXTENSIONS};

pub const LEGAL_RULES: &[Rule] = &[
    Rule::new(
        "guaranteed-returns",
        Severity::Critical,
        r"guaranteed\s+(returns?|profits?|yields?)",
        "Guaranteed-profit claim is prohibited",
        PROSE_EXTENSIONS,
    ),
    Rule::new(
        "risk-free-claim",
        Severity::High,
        r"risk[\s-]?free\s+(profits?|returns?|investments?|trading)",
        "Risk-free claim requires legal review",
        PROSE_EXTENSIONS,
    ),
    Rule::new(
        "hundred-percent-claim",
        Severity::High,
        r"100%\s*(profits?|returns?|수익|안전)",
        "Absolute performance claim requires legal review",
        PROSE_EXTENSIONS,
    ),
    Rule::new(
        "profit-guarantee-ko",
        Severity::Critical,
        r"수익\s*을?\s*보장",
        "Guaranteed-profit claim (Korean) is prohibited",
        PROSE_EXTENSIONS,
    ),
    Rule::new(
        "principal-guarantee-ko",
        Severity::Critical,
        r"원금\s*보장",
        "Principal-protection claim is prohibited",
        PROSE_EXTENSIONS,
    ),
    Rule::new(
        "sure-profit-ko",
        Severity::High,
        r"확실한\s*수익",
        "Assured-profit phrasing requires legal review",
        PROSE_EXTENSIONS,
    ),
];
