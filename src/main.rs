use clap::Parser;
use log::info;
use rand::{Rng, SeedableRng, XorShiftRng};
use weighted_bst::weighted_tree::WeightedTree;

/// Builds a weighted tree from the weights `0..count` and reports some queries on it.
#[derive(Debug, Parser)]
#[command(name = "weighted-bst", version)]
struct Options {
    /// Number of weights to insert, starting from 0.
    #[arg(long, default_value_t = 4095)]
    count: i32,

    /// Seed for randomized insertion. Uses a fixed unseeded generator when absent.
    #[arg(long)]
    seed: Option<u32>,

    /// Weight to look up once the tree is built.
    #[arg(long, default_value_t = 16)]
    find: i32,

    /// Use ordered insertion instead of randomized insertion.
    #[arg(long)]
    ordered: bool,
}

fn run<R: Rng>(mut tree: WeightedTree<R>, options: &Options) {
    tree.insert(0);
    for weight in 1..options.count {
        if options.ordered {
            tree.insert(weight);
        } else {
            tree.random_insert(weight);
        }
    }
    info!("Inserted {} weights, height is {}.", tree.len(), tree.height());

    println!("size: {}", tree.len());
    println!("height: {}", tree.height());
    println!("total weight: {}", tree.total_weight());
    match tree.largest_child_subtree() {
        Some(node) => println!(
            "largest child subtree: root {}, size {}",
            node.weight(),
            node.size(),
        ),
        None => println!("largest child subtree: none"),
    }
    match tree.find(options.find) {
        Some(node) => println!("found {} with subtree size {}", node.weight(), node.size()),
        None => println!("{} not found", options.find),
    }
}

fn main() {
    env_logger::init();
    let options = Options::parse();
    info!("Running with {:?}.", options);

    match options.seed {
        Some(seed) => {
            let rng: XorShiftRng = SeedableRng::from_seed([seed, 1, 1, 1]);
            run(WeightedTree::with_rng(rng), &options);
        },
        None => run(WeightedTree::new(), &options),
    }
}
