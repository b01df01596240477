use covermap::analyzers::detect_features;
use covermap::complexity::score_source;
use covermap::risk::CoverageMap;
use covermap::scaffold::{synthesize, ScaffoldOptions};
use covermap::{classify_priority, ComplexityLevel, CoverageMetrics, FileRecord, FileType, Priority};
use proptest::prelude::*;
use std::path::PathBuf;

const FRAGMENTS: [&str; 12] = [
    "const [a, setA] = useState(0);",
    "useEffect(() => { load(); }, []);",
    "const data = await fetch(url);",
    "<Pressable onPress={go} />",
    "<TextInput onChangeText={set} />",
    "<FlatList data={items} />",
    "<Modal visible />",
    "const nav = useNavigation();",
    "if (ready) { show(); } else { hide(); }",
    "function Card({ title }: CardProps) {",
    "<View accessibilityRole=\"button\" accessibilityLabel=\"Go\" />",
    "// plain comment",
];

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS.to_vec()), 0..20)
        .prop_map(|lines| lines.join("\n"))
}

fn file_type_strategy() -> impl Strategy<Value = FileType> {
    prop::sample::select(FileType::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_detection_is_deterministic(source in source_strategy()) {
        prop_assert_eq!(detect_features(&source), detect_features(&source));
    }

    #[test]
    fn prop_detection_never_panics_on_arbitrary_text(source in ".{0,400}") {
        let _ = detect_features(&source);
        let _ = score_source(&source);
    }

    #[test]
    fn prop_synthesis_is_deterministic(source in source_strategy(), msw in any::<bool>()) {
        let features = detect_features(&source);
        let options = ScaffoldOptions::default().with_mock_integration(msw);
        prop_assert_eq!(
            synthesize(&features, "Widget", &options).render(),
            synthesize(&features, "Widget", &options).render()
        );
    }

    #[test]
    fn prop_rendered_brackets_balance(source in source_strategy()) {
        let text = synthesize(&detect_features(&source), "Widget", &ScaffoldOptions::default()).render();
        prop_assert_eq!(text.matches('{').count(), text.matches('}').count());
        prop_assert_eq!(text.matches('(').count(), text.matches(')').count());
    }

    #[test]
    fn prop_score_monotonic_in_line_count(source in source_strategy(), extra in 0usize..300) {
        let padded = format!("{}{}", source, "\n// filler".repeat(extra));
        prop_assert!(score_source(&padded).total() >= score_source(&source).total());
    }

    #[test]
    fn prop_untested_high_complexity_is_critical(
        file_type in file_type_strategy(),
        lines in proptest::option::of(0.0f64..=100.0),
        threshold in 0.0f64..=100.0,
    ) {
        let record = FileRecord::new("src/x.tsx", PathBuf::from("/p/src/x.tsx"), file_type)
            .with_complexity(ComplexityLevel::High)
            .with_coverage(lines.map(|lines| CoverageMetrics { lines, ..Default::default() }));
        prop_assert_eq!(classify_priority(&record, threshold), Priority::Critical);
    }

    #[test]
    fn prop_exact_key_always_joins(
        segments in prop::collection::vec("[a-z]{1,8}", 1..4),
        other in prop::collection::vec("[a-z]{1,8}", 1..4),
        pct in 0.0f64..=100.0,
    ) {
        let path = format!("src/{}.tsx", segments.join("/"));
        let decoy = format!("lib/{}.ts", other.join("/"));
        let json = format!(
            r#"{{"total": {{"lines": {{"pct": 50}}}}, "{decoy}": {{"lines": {{"pct": 1}}}}, "{path}": {{"lines": {{"pct": {pct}}}}}}}"#
        );
        let map = CoverageMap::from_json_str(&json).unwrap();
        prop_assert!(map.find(&path).is_some());
    }
}
