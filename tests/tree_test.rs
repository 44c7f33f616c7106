//! Integration tests for TeamTree: insert/set_root/render contract

use orgtree::domain::{Side, TeamTree, TreeError, NO_STRUCTURE_MSG};
use orgtree::util::testing;
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// ============================================================
// Empty Tree Tests
// ============================================================

#[rstest]
#[case("Alice", "Bob", Side::Left)]
#[case("", "", Side::Right)]
#[case("Nobody", "X", Side::Left)]
fn given_empty_tree_when_inserting_then_fails_with_no_root(
    #[case] manager: &str,
    #[case] employee: &str,
    #[case] side: Side,
) {
    let mut tree = TeamTree::new();
    assert_eq!(tree.insert(manager, employee, side), Err(TreeError::NoRoot));
    assert!(tree.is_empty());
}

#[test]
fn given_empty_tree_when_rendering_then_returns_no_structure_message() {
    let tree = TeamTree::new();
    let rendering = tree.render();
    assert_eq!(rendering, NO_STRUCTURE_MSG);
    assert!(!rendering.is_empty(), "render must never be an empty string");
}

// ============================================================
// Root Lifecycle Tests
// ============================================================

#[test]
fn given_empty_tree_when_setting_root_then_tree_has_one_node() {
    let mut tree = TeamTree::new();
    tree.set_root("Alice").unwrap();
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.render(), "- Alice");
}

#[test]
fn given_existing_root_when_setting_root_again_then_fails_and_keeps_state() {
    let mut tree = TeamTree::new();
    tree.set_root("Alice").unwrap();
    let before = tree.render();

    assert_eq!(tree.set_root("Mallory"), Err(TreeError::RootAlreadyExists));
    assert_eq!(tree.render(), before);
}

// ============================================================
// Insert Error Tests
// ============================================================

#[test]
fn given_absent_manager_when_inserting_then_fails_and_tree_unchanged() {
    let mut tree = TeamTree::new();
    tree.set_root("Alice").unwrap();
    tree.insert("Alice", "Bob", Side::Left).unwrap();
    let before = tree.render();

    let result = tree.insert("Nobody", "X", Side::Left);
    assert_eq!(result, Err(TreeError::ManagerNotFound("Nobody".to_string())));
    assert_eq!(tree.render(), before);
}

#[test]
fn given_occupied_slot_when_inserting_again_then_fails_and_tree_unchanged() {
    let mut tree = TeamTree::new();
    tree.set_root("Alice").unwrap();
    tree.insert("Alice", "Bob", Side::Left).unwrap();
    let after_first = tree.render();

    let result = tree.insert("Alice", "Carol", Side::Left);
    assert_eq!(
        result,
        Err(TreeError::SlotTaken {
            manager: "Alice".to_string(),
            side: Side::Left,
        })
    );
    // Idempotent on failure: state equals the state after the first insert
    assert_eq!(tree.render(), after_first);
    assert_eq!(tree.node_count(), 2);
}

// ============================================================
// Pre-order Search Tests
// ============================================================

#[test]
fn given_duplicate_manager_names_when_inserting_then_first_preorder_match_is_used() {
    //      Root
    //      /  \
    //    Sam  Sam     <- same name on both sides
    let mut tree = TeamTree::new();
    tree.set_root("Root").unwrap();
    tree.insert("Root", "Sam", Side::Left).unwrap();
    tree.insert("Root", "Sam", Side::Right).unwrap();

    tree.insert("Sam", "Kim", Side::Right).unwrap();

    // Pre-order: Root, left Sam, right Sam -> Kim hangs off the left Sam
    let expected = "\
- Root
    - Sam
        - Kim
    - Sam";
    assert_eq!(tree.render(), expected);
}

#[test]
fn given_duplicate_manager_with_full_slot_when_inserting_then_stops_without_trying_sibling() {
    let mut tree = TeamTree::new();
    tree.set_root("Root").unwrap();
    tree.insert("Root", "Sam", Side::Left).unwrap();
    tree.insert("Root", "Sam", Side::Right).unwrap();
    tree.insert("Sam", "Kim", Side::Left).unwrap();
    let before = tree.render();

    // The first Sam's left is taken; the second Sam's left is free, but the
    // search must not fall through to it.
    let result = tree.insert("Sam", "Lee", Side::Left);
    assert!(matches!(result, Err(TreeError::SlotTaken { .. })));
    assert_eq!(tree.render(), before);
}

#[test]
fn given_deep_tree_when_inserting_under_leaf_then_attaches_at_depth() {
    let mut tree = TeamTree::new();
    tree.set_root("L0").unwrap();
    for i in 1..=10 {
        tree.insert(&format!("L{}", i - 1), &format!("L{}", i), Side::Right)
            .unwrap();
    }
    assert_eq!(tree.depth(), 11);
    assert_eq!(tree.node_count(), 11);
}

// ============================================================
// Render Shape Tests
// ============================================================

#[test]
fn given_any_tree_when_rendering_then_line_count_equals_node_count() {
    let mut tree = TeamTree::new();
    tree.set_root("Alice").unwrap();
    tree.insert("Alice", "Bob", Side::Left).unwrap();
    tree.insert("Alice", "Carol", Side::Right).unwrap();
    tree.insert("Carol", "Dana", Side::Right).unwrap();
    tree.insert("Dana", "Eve", Side::Left).unwrap();

    let rendering = tree.render();
    assert_eq!(rendering.lines().count(), tree.node_count());
}

#[test]
fn given_root_to_leaf_chain_when_rendering_then_indent_increases_one_level_per_depth() {
    let mut tree = TeamTree::new();
    tree.set_root("A").unwrap();
    tree.insert("A", "B", Side::Left).unwrap();
    tree.insert("B", "C", Side::Left).unwrap();

    for (depth, line) in tree.render().lines().enumerate() {
        let leading = line.len() - line.trim_start().len();
        assert_eq!(leading, depth * 4, "line {:?} at depth {}", line, depth);
        assert!(line.trim_start().starts_with("- "));
    }
}

// ============================================================
// Full Scenario (session walkthrough)
// ============================================================

#[test]
fn given_session_scenario_when_building_team_then_renders_expected_preorder() {
    let mut tree = TeamTree::new();

    tree.set_root("Alice").unwrap();
    assert_eq!(tree.render(), "- Alice");

    tree.insert("Alice", "Bob", Side::Left).unwrap();
    assert_eq!(tree.render(), "- Alice\n    - Bob");

    assert_eq!(
        tree.insert("Alice", "Carol", Side::Left),
        Err(TreeError::SlotTaken {
            manager: "Alice".to_string(),
            side: Side::Left,
        })
    );
    assert_eq!(tree.render(), "- Alice\n    - Bob");

    tree.insert("Alice", "Carol", Side::Right).unwrap();
    assert_eq!(tree.render(), "- Alice\n    - Bob\n    - Carol");

    tree.insert("Bob", "Dana", Side::Left).unwrap();
    // Pre-order: Alice, Bob, Dana, Carol
    assert_eq!(
        tree.render(),
        "- Alice\n    - Bob\n        - Dana\n    - Carol"
    );

    assert_eq!(
        tree.insert("Nobody", "X", Side::Left),
        Err(TreeError::ManagerNotFound("Nobody".to_string()))
    );
    assert_eq!(
        tree.render(),
        "- Alice\n    - Bob\n        - Dana\n    - Carol"
    );
}
