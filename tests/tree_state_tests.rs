//! Properties of the expansion/selection controller and its projection.

use modnav::models::{FolderColor, ModuleNode};
use modnav::tree::{detail_panel, find_node, path_to, preorder, DetailPanel, ToggleGlyph, TreeController};
use proptest::prelude::*;

mod fixtures;
use fixtures::sample_forest;

/// Forest shape without ids; ids are assigned in pre-order so they are unique.
#[derive(Debug, Clone)]
struct Shape(Vec<Shape>);

fn shape() -> impl Strategy<Value = Shape> {
    Just(Shape(Vec::new())).prop_recursive(4, 40, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Shape)
    })
}

fn build(shape: &Shape, next: &mut usize) -> ModuleNode {
    let id = format!("m{next}");
    *next += 1;
    let children = shape.0.iter().map(|child| build(child, next)).collect();
    ModuleNode::branch(id.clone(), format!("Module {id}"), FolderColor::Yellow, children)
}

fn forest() -> impl Strategy<Value = Vec<ModuleNode>> {
    prop::collection::vec(shape(), 0..5).prop_map(|shapes| {
        let mut next = 0;
        shapes.iter().map(|s| build(s, &mut next)).collect()
    })
}

fn all_ids(forest: &[ModuleNode]) -> Vec<String> {
    preorder(forest).map(|(_, node)| node.id.clone()).collect()
}

/// Forest plus a sequence of toggles by pre-order index.
fn forest_and_toggles() -> impl Strategy<Value = (Vec<ModuleNode>, Vec<usize>)> {
    (forest(), prop::collection::vec(0usize..64, 0..24))
}

proptest! {
    #[test]
    fn find_node_returns_matching_id(forest in forest()) {
        for id in all_ids(&forest) {
            let found = find_node(&forest, Some(&id));
            prop_assert_eq!(found.map(|n| n.id.as_str()), Some(id.as_str()));
        }
        prop_assert!(find_node(&forest, None).is_none());
        prop_assert!(find_node(&forest, Some("")).is_none());
    }

    #[test]
    fn initialize_expands_exactly_the_roots(forest in forest()) {
        let tree = TreeController::initialize(&forest);
        prop_assert_eq!(tree.expansion().len(), forest.len());
        for root in &forest {
            prop_assert!(tree.is_expanded(&root.id));
        }
        prop_assert!(tree.selected_id().is_none());
    }

    #[test]
    fn double_toggle_is_identity((forest, toggles) in forest_and_toggles(), probe in 0usize..64) {
        let ids = all_ids(&forest);
        let mut tree = TreeController::initialize(&forest);
        for index in &toggles {
            if !ids.is_empty() {
                tree.toggle_expansion(&ids[index % ids.len()]);
            }
        }

        let id = if ids.is_empty() { "ghost".to_string() } else { ids[probe % ids.len()].clone() };
        let before = tree.clone();
        tree.toggle_expansion(&id);
        tree.toggle_expansion(&id);
        prop_assert_eq!(tree, before);
    }

    #[test]
    fn projection_hides_rows_under_collapsed_ancestors((forest, toggles) in forest_and_toggles()) {
        let ids = all_ids(&forest);
        let mut tree = TreeController::initialize(&forest);
        for index in &toggles {
            if !ids.is_empty() {
                tree.toggle_expansion(&ids[index % ids.len()]);
            }
        }

        for row in tree.rows(&forest) {
            let path = path_to(&forest, row.id()).expect("row must exist in forest");
            prop_assert_eq!(row.depth, path.len() - 1);
            for ancestor in &path[..path.len() - 1] {
                prop_assert!(tree.is_expanded(&ancestor.id));
            }
            let expected = match (row.node.has_children(), tree.is_expanded(row.id())) {
                (false, _) => ToggleGlyph::None,
                (true, false) => ToggleGlyph::Collapsed,
                (true, true) => ToggleGlyph::Expanded,
            };
            prop_assert_eq!(row.toggle, expected);
        }
    }

    #[test]
    fn gestures_are_independent((forest, toggles) in forest_and_toggles(), pick in 0usize..64) {
        let ids = all_ids(&forest);
        prop_assume!(!ids.is_empty());
        let mut tree = TreeController::initialize(&forest);

        tree.select(ids[pick % ids.len()].clone());
        let selection = tree.selection().clone();
        for index in &toggles {
            tree.toggle_expansion(&ids[index % ids.len()]);
            prop_assert_eq!(tree.selection(), &selection);
        }

        let expansion = tree.expansion().clone();
        for index in &toggles {
            tree.select(ids[index % ids.len()].clone());
            prop_assert_eq!(tree.expansion(), &expansion);
        }
    }

    #[test]
    fn reveal_makes_node_visible(forest in forest(), pick in 0usize..64) {
        let ids = all_ids(&forest);
        prop_assume!(!ids.is_empty());
        let id = &ids[pick % ids.len()];

        let mut tree = TreeController::initialize(&forest);
        tree.collapse_all();
        prop_assert!(tree.reveal(&forest, id));
        prop_assert!(tree.rows(&forest).iter().any(|row| row.id() == id));
    }
}

#[test]
fn test_single_branch_scenario() {
    let forest = vec![ModuleNode::branch(
        "a",
        "A",
        FolderColor::Yellow,
        vec![ModuleNode::leaf("a1", "A1", FolderColor::Blue)],
    )];
    let mut tree = TreeController::initialize(&forest);

    let ids: Vec<&str> = tree.rows(&forest).iter().map(|r| r.node.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "a1"]);

    tree.toggle_expansion("a");
    let ids: Vec<&str> = tree.rows(&forest).iter().map(|r| r.node.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
}

#[test]
fn test_select_existing_module() {
    let forest = sample_forest();
    let mut tree = TreeController::initialize(&forest);
    tree.select("a1");

    assert_eq!(
        tree.selected_node(&forest).map(|n| n.label.as_str()),
        Some("Alpha One")
    );
    assert!(!tree.is_selected("a"));
    match detail_panel(&forest, &tree) {
        DetailPanel::Module(node) => assert_eq!(node.id, "a1"),
        DetailPanel::Placeholder => panic!("expected module panel"),
    }
}

#[test]
fn test_select_unknown_module_shows_placeholder() {
    let forest = sample_forest();
    let mut tree = TreeController::initialize(&forest);
    tree.select("nonexistent");

    assert!(tree.selected_node(&forest).is_none());
    assert_eq!(detail_panel(&forest, &tree), DetailPanel::Placeholder);
    assert!(tree.rows(&forest).iter().all(|row| !row.selected));
}

#[test]
fn test_reveal_unknown_is_noop() {
    let forest = sample_forest();
    let mut tree = TreeController::initialize(&forest);
    let before = tree.clone();
    assert!(!tree.reveal(&forest, "ghost"));
    assert_eq!(tree, before);
}

#[test]
fn test_empty_forest() {
    let forest: Vec<ModuleNode> = Vec::new();
    let tree = TreeController::initialize(&forest);
    assert!(tree.rows(&forest).is_empty());
    assert_eq!(detail_panel(&forest, &tree), DetailPanel::Placeholder);
}
