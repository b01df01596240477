//! Lexical pattern library for React / React Native component sources.
//!
//! Every pattern runs against the whole file text. Nothing here understands
//! syntax: a match inside a comment or string literal counts the same as a
//! match in code, and aliased imports are invisible.

use once_cell::sync::Lazy;
use regex::Regex;

// Feature predicates (case-insensitive)

pub(crate) static PROPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\(\s*\{[^}]*\}\s*(?::\s*[\w.<>\[\]]+)?\s*\)\s*(?:=>|\{)|\(\s*props\b|\b(?:interface|type)\s+\w*props\b|\bFC\s*<\s*\w*props",
    )
    .unwrap()
});

pub(crate) static STATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\buse(?:State|Reducer)\s*[<(]|\bthis\.(?:state|setState)\b").unwrap()
});

pub(crate) static EFFECTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\buse(?:Effect|LayoutEffect|FocusEffect)\s*\(|\bcomponentDid(?:Mount|Update)\b")
        .unwrap()
});

pub(crate) static ASYNC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\basync\b|\bawait\b|\.then\s*\(|\bfetch\s*\(|\baxios\b|\buse(?:Query|Mutation|SWR)\s*\(",
    )
    .unwrap()
});

pub(crate) static INTERACTIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bon(?:Press|LongPress|Click|Submit|Change|ChangeText|Focus|Blur)\s*=").unwrap()
});

pub(crate) static NAVIGATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\buse(?:Navigation|Router|Route)\s*\(|\bnavigation\.(?:navigate|goBack|push|replace|reset)\s*\(|\brouter\.(?:push|replace|back)\s*\(",
    )
    .unwrap()
});

pub(crate) static FORMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(?:TextInput|input|textarea|form)\b|\buse(?:Form|Formik)\s*\(").unwrap()
});

pub(crate) static TEXT_INPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<(?:TextInput|input|textarea)\b").unwrap());

pub(crate) static LISTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(?:FlatList|SectionList|VirtualizedList|FlashList)\b").unwrap()
});

pub(crate) static MODALS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)<(?:Modal|Dialog|BottomSheet|ActionSheet)\b|\b(?:accessibilityRole|role)\s*=\s*\{?\s*["']dialog["']"#,
    )
    .unwrap()
});

// Accessibility

pub(crate) static ROLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b(?:accessibilityRole|role)\s*=\s*\{?\s*["'](button|heading|link|checkbox|switch|alert|dialog)["']"#,
    )
    .unwrap()
});

pub(crate) static LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:accessibilityLabel|aria-label|label)\s*=").unwrap());

/// `on<Capitalized>` identifiers assigned as a JSX prop. Case-sensitive.
pub(crate) static EVENT_HANDLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\b(on[A-Z][A-Za-z0-9]*)\s*=\s*[{"']"#).unwrap());

// Complexity signals (case-sensitive, these are keywords)

pub(crate) static BRANCH_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:if|else|case)\b|&&|\|\||\s\?\s").unwrap());

pub(crate) static ASYNC_USAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\basync\b|\bawait\b|\.then\s*\(|\bPromise\b").unwrap());

pub(crate) static STATE_HOOK_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\buse(?:State|Reducer)\s*[<(]").unwrap());

pub(crate) static EFFECT_HOOK_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\buse(?:Effect|LayoutEffect|Memo|Callback)\s*[<(]").unwrap());
