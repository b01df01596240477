mod common;

use common::{TestProject, PLAIN_COMPONENT, PLAIN_TEST};
use covermap::inventory::Inventory;
use covermap::FileType;

fn sample_project() -> TestProject {
    TestProject::new("inventory-app")
        .with_file("src/components/Button.tsx", PLAIN_COMPONENT)
        .with_file("src/components/Button.test.tsx", PLAIN_TEST)
        .with_file("src/components/Card/index.tsx", PLAIN_COMPONENT)
        .with_file("src/components/Card/__tests__/index.test.tsx", PLAIN_TEST)
        .with_file("src/hooks/useAuth.ts", "export const useAuth = () => null;\n")
        .with_file("src/screens/Home.tsx", PLAIN_COMPONENT)
        .with_file("src/utils/format.ts", "export const id = (x) => x;\n")
        .with_file("src/api/client.js", "export default {};\n")
        .with_file("src/providers/Theme.tsx", PLAIN_COMPONENT)
        .with_file("src/App.tsx", PLAIN_COMPONENT)
        .with_file("src/types.d.ts", "declare const x: number;\n")
        .with_file("src/Button.stories.tsx", PLAIN_COMPONENT)
        .with_file("src/__mocks__/client.js", "export default {};\n")
        .with_file("node_modules/react/index.js", "module.exports = {};\n")
        .with_file("README.md", "# app\n")
}

#[test]
fn test_inventory_excludes_tests_mocks_and_declarations() {
    let project = sample_project();
    let inventory = Inventory::collect(project.root(), &[]).unwrap();
    let mut paths: Vec<String> = inventory.records().into_iter().map(|r| r.path).collect();
    paths.sort();

    assert_eq!(
        paths,
        vec![
            "src/App.tsx",
            "src/api/client.js",
            "src/components/Button.tsx",
            "src/components/Card/index.tsx",
            "src/hooks/useAuth.ts",
            "src/providers/Theme.tsx",
            "src/screens/Home.tsx",
            "src/utils/format.ts",
        ]
    );
    assert_eq!(inventory.tests.len(), 2);
}

#[test]
fn test_records_carry_type_and_matched_test() {
    let project = sample_project();
    let records = Inventory::collect(project.root(), &[]).unwrap().records();
    let find = |path: &str| records.iter().find(|r| r.path == path).unwrap();

    let button = find("src/components/Button.tsx");
    assert_eq!(button.file_type, FileType::Components);
    assert!(button.has_test);
    assert_eq!(
        button.test_file.as_deref(),
        Some("src/components/Button.test.tsx")
    );

    let card = find("src/components/Card/index.tsx");
    assert_eq!(
        card.test_file.as_deref(),
        Some("src/components/Card/__tests__/index.test.tsx")
    );

    assert_eq!(find("src/hooks/useAuth.ts").file_type, FileType::Hooks);
    assert_eq!(find("src/screens/Home.tsx").file_type, FileType::Screens);
    assert_eq!(find("src/utils/format.ts").file_type, FileType::Utils);
    assert_eq!(find("src/api/client.js").file_type, FileType::Services);
    assert_eq!(find("src/providers/Theme.tsx").file_type, FileType::Contexts);
    assert_eq!(find("src/App.tsx").file_type, FileType::Other);
    assert!(!find("src/App.tsx").has_test);
}

#[test]
fn test_ignore_patterns_apply_to_relative_paths() {
    let project = sample_project().with_file("src/generated/schema.ts", "export {};\n");
    let ignore = vec!["src/generated/**".to_string(), "**/api/**".to_string()];
    let records = Inventory::collect(project.root(), &ignore).unwrap().records();

    assert!(records.iter().all(|r| !r.path.starts_with("src/generated/")));
    assert!(records.iter().all(|r| r.path != "src/api/client.js"));
    assert_eq!(records.len(), 7);
}

#[test]
fn test_hook_named_file_outside_hooks_dir() {
    let project = TestProject::new("app").with_file("src/state/useCart.ts", "export {};\n");
    let records = Inventory::collect(project.root(), &[]).unwrap().records();
    assert_eq!(records[0].file_type, FileType::Hooks);
}
