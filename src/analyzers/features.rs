//! Component feature detection.
//!
//! Each predicate is an independent lexical test over the entire source text,
//! so the predicates are not mutually exclusive and the result only depends on
//! the text itself.

use super::patterns::*;
use serde::Serialize;
use std::collections::HashSet;

/// Accessible roles recognised in `role` / `accessibilityRole` attributes,
/// in reporting order.
pub const ROLE_VOCABULARY: [&str; 7] = [
    "button", "heading", "link", "checkbox", "switch", "alert", "dialog",
];

/// Pseudo-role appended when a label attribute is present.
pub const LABELED_ROLE: &str = "labeled";
/// Pseudo-role appended when a text-input construct is present.
pub const TEXTBOX_ROLE: &str = "textbox";

/// Summary of a component's detected characteristics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    pub has_props: bool,
    pub has_state: bool,
    pub has_effects: bool,
    pub has_async: bool,
    pub has_interactions: bool,
    pub has_navigation: bool,
    pub has_forms: bool,
    pub has_lists: bool,
    pub has_modals: bool,
    /// Detected roles in vocabulary order, followed by `labeled` / `textbox`
    pub accessibility_roles: Vec<String>,
    /// `on<Name>` props, deduplicated, first-seen order
    pub event_handlers: Vec<String>,
}

impl FeatureVector {
    /// Names of the predicates that fired, for logging.
    pub fn detected(&self) -> Vec<&'static str> {
        [
            (self.has_props, "props"),
            (self.has_state, "state"),
            (self.has_effects, "effects"),
            (self.has_async, "async"),
            (self.has_interactions, "interactions"),
            (self.has_navigation, "navigation"),
            (self.has_forms, "forms"),
            (self.has_lists, "lists"),
            (self.has_modals, "modals"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }

    pub fn has_handler(&self, name: &str) -> bool {
        self.event_handlers.iter().any(|h| h == name)
    }
}

/// Detect the feature vector of one component source file.
pub fn detect_features(source: &str) -> FeatureVector {
    FeatureVector {
        has_props: PROPS.is_match(source),
        has_state: STATE.is_match(source),
        has_effects: EFFECTS.is_match(source),
        has_async: ASYNC.is_match(source),
        has_interactions: INTERACTIONS.is_match(source),
        has_navigation: NAVIGATION.is_match(source),
        has_forms: FORMS.is_match(source),
        has_lists: LISTS.is_match(source),
        has_modals: MODALS.is_match(source),
        accessibility_roles: extract_accessibility_roles(source),
        event_handlers: extract_event_handlers(source),
    }
}

/// Roles from the fixed vocabulary, then `labeled`, then `textbox`.
pub fn extract_accessibility_roles(source: &str) -> Vec<String> {
    let found: HashSet<String> = ROLE
        .captures_iter(source)
        .map(|caps| caps[1].to_ascii_lowercase())
        .collect();

    let mut roles: Vec<String> = ROLE_VOCABULARY
        .iter()
        .filter(|role| found.contains(**role))
        .map(|role| role.to_string())
        .collect();

    if LABEL.is_match(source) {
        roles.push(LABELED_ROLE.to_string());
    }
    if TEXT_INPUT.is_match(source) {
        roles.push(TEXTBOX_ROLE.to_string());
    }
    roles
}

/// `on<Capitalized>` prop names in first-seen order without duplicates.
pub fn extract_event_handlers(source: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    EVENT_HANDLER
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_yields_empty_vector() {
        let features = detect_features("export const VERSION = '1.0.0';\n");
        assert_eq!(features, FeatureVector::default());
        assert!(features.detected().is_empty());
    }

    #[test]
    fn test_predicates_are_independent() {
        let source = r#"
            const Screen = ({ items }: ScreenProps) => {
              const navigation = useNavigation();
              return (
                <Modal visible>
                  <FlatList data={items} />
                  <TextInput onChangeText={noop} />
                </Modal>
              );
            };
        "#;
        let features = detect_features(source);
        assert!(features.has_props);
        assert!(features.has_navigation);
        assert!(features.has_modals);
        assert!(features.has_lists);
        assert!(features.has_forms);
        assert!(features.has_interactions);
        assert!(!features.has_state);
        assert!(!features.has_async);
    }

    #[test]
    fn test_roles_follow_vocabulary_order() {
        let source = r#"
            <Switch accessibilityRole="switch" />
            <Text accessibilityRole="heading" accessibilityLabel="Title" />
            <Pressable role='button' />
            <TextInput />
        "#;
        assert_eq!(
            extract_accessibility_roles(source),
            vec!["button", "heading", "switch", "labeled", "textbox"]
        );
    }

    #[test]
    fn test_unknown_roles_are_ignored() {
        assert!(extract_accessibility_roles(r#"<View role="grid" />"#).is_empty());
    }

    #[test]
    fn test_event_handlers_dedup_first_seen() {
        let source = r#"
            <Button onPress={a} />
            <Input onChangeText={b} onBlur={c} />
            <Button onPress={d} />
        "#;
        assert_eq!(
            extract_event_handlers(source),
            vec!["onPress", "onChangeText", "onBlur"]
        );
    }

    #[test]
    fn test_comments_still_count() {
        let features = detect_features("// TODO: call useEffect( later");
        assert!(features.has_effects);
    }

    #[test]
    fn test_dialog_role_marks_modal() {
        let features = detect_features(r#"<View accessibilityRole="dialog">"#);
        assert!(features.has_modals);
        assert_eq!(features.accessibility_roles, vec!["dialog"]);
    }
}
