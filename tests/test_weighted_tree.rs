use rand::{Rng, SeedableRng, XorShiftRng};
use weighted_bst::weighted_tree::{Node, WeightedTree};

const NUM_OF_OPERATIONS: usize = 10_000;

// Checks the size of every node and that every node lies within `[low, high]`.
fn check_node(node: Option<&Node>, low: i32, high: i32) -> usize {
    match node {
        Some(node) => {
            assert!(low <= node.weight() && node.weight() <= high);
            let left = check_node(node.left(), low, node.weight());
            let right = check_node(node.right(), node.weight(), high);
            assert_eq!(node.size(), 1 + left + right);
            node.size()
        },
        None => 0,
    }
}

fn in_order(node: Option<&Node>, weights: &mut Vec<i32>) {
    if let Some(node) = node {
        in_order(node.left(), weights);
        weights.push(node.weight());
        in_order(node.right(), weights);
    }
}

fn check_tree<R>(tree: &WeightedTree<R>, expected: &[i32]) {
    assert_eq!(check_node(tree.root(), i32::min_value(), i32::max_value()), expected.len());
    assert_eq!(tree.len(), expected.len());
    assert_eq!(
        tree.total_weight(),
        expected.iter().map(|weight| i64::from(*weight)).sum::<i64>(),
    );

    let mut sorted = expected.to_vec();
    sorted.sort();
    let mut actual = Vec::new();
    in_order(tree.root(), &mut actual);
    assert_eq!(actual, sorted);
}

#[test]
fn int_test_insert() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = WeightedTree::new();
    let mut expected = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let weight = rng.gen_range(-1000, 1000);
        tree.insert(weight);
        expected.push(weight);
    }

    check_tree(&tree, &expected);
    for weight in &expected {
        assert_eq!(tree.find(*weight).map(Node::weight), Some(*weight));
    }
    assert!(tree.find(1000).is_none());
}

#[test]
fn int_test_random_insert() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = WeightedTree::with_seed([2, 2, 2, 2]);
    let mut expected = Vec::new();

    for i in 0..NUM_OF_OPERATIONS {
        let weight = rng.gen::<i32>();
        tree.random_insert(weight);
        expected.push(weight);

        if i % 1000 == 0 {
            check_tree(&tree, &expected);
        }
    }

    check_tree(&tree, &expected);
}

#[test]
fn int_test_mixed_insert() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = WeightedTree::with_seed([3, 3, 3, 3]);
    let mut expected = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let weight = rng.gen_range(-100, 100);
        match rng.gen_range(0, 3) {
            0 => tree.insert(weight),
            1 => tree.random_insert(weight),
            _ => tree.insert_root(weight),
        }
        expected.push(weight);
    }

    check_tree(&tree, &expected);
}

#[test]
fn int_test_count_preservation() {
    let mut ordered = WeightedTree::new();
    let mut randomized = WeightedTree::with_seed([1, 1, 1, 1]);
    for weight in 0..1000 {
        ordered.insert(weight);
        randomized.random_insert(weight);
    }
    assert_eq!(ordered.len(), 1000);
    assert_eq!(randomized.len(), 1000);
}

#[test]
fn int_test_expected_height() {
    const NUM_OF_WEIGHTS: i32 = 1000;
    const NUM_OF_TRIALS: u32 = 21;

    let mut ordered = WeightedTree::new();
    for weight in 0..NUM_OF_WEIGHTS {
        ordered.insert(weight);
    }
    assert_eq!(ordered.height(), NUM_OF_WEIGHTS as usize);

    let mut heights = Vec::new();
    for trial in 1..=NUM_OF_TRIALS {
        let mut tree = WeightedTree::with_seed([trial, trial, trial, trial]);
        for weight in 0..NUM_OF_WEIGHTS {
            tree.random_insert(weight);
        }
        heights.push(tree.height());
    }
    heights.sort();

    let log_n = (f64::from(NUM_OF_WEIGHTS)).log2();
    let median = heights[heights.len() / 2] as f64;
    assert!(median >= log_n);
    assert!(median <= 4.0 * log_n);
}

#[test]
fn int_test_largest_child_subtree() {
    let mut tree = WeightedTree::with_seed([1, 1, 1, 1]);
    tree.insert(0);
    for weight in 1..4095 {
        tree.random_insert(weight);
    }

    let root = tree.root().expect("Expected non-empty tree.");
    let left = subtree_weight(root.left());
    let right = subtree_weight(root.right());
    let largest = tree.largest_child_subtree();
    if left > right {
        assert_eq!(largest.map(Node::weight), root.left().map(Node::weight));
    } else {
        assert_eq!(largest.map(Node::weight), root.right().map(Node::weight));
    }
    assert_eq!(tree.total_weight(), 4094 * 4095 / 2);
}

fn subtree_weight(node: Option<&Node>) -> i64 {
    let mut weights = Vec::new();
    in_order(node, &mut weights);
    weights.into_iter().map(i64::from).sum()
}
