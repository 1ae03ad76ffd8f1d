//! Drives a [`BalancedTree`] through a scripted sequence of operations,
//! printing the tree shape and traversals to stdout.
//!
//! Log output is written to stderr, filtered by the level named in the
//! `BALTREE_LOG` environment variable (default `warn`).

use std::{
    error::Error,
    fmt::{self, Display},
};

use baltree::BalancedTree;
use log::{debug, info};
use log::ParseLevelError;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const LOG_ENV: &str = "BALTREE_LOG";

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logging()?;

    let mut tree = BalancedTree::new();

    println!("Inserting 10, 20, 30, 40, 50, 25");
    insert_all(&mut tree, [10, 20, 30, 40, 50, 25]);
    print_tree(&tree);

    for v in [30, 35] {
        let answer = if tree.contains(&v) { "yes" } else { "no" };
        println!("Contains {v}: {answer}");
    }
    println!();

    println!("Removing 30");
    let removed = tree.remove(&30);
    debug!("remove(30) found value: {removed}");
    print_tree(&tree);

    println!("In-order traversal: {}", join(tree.in_order()));
    println!();

    println!("Inserting 15, 5, 35");
    insert_all(&mut tree, [15, 5, 35]);
    print_tree(&tree);

    println!("Pre-order traversal: {}", join(tree.pre_order()));

    info!("finished with {} values, height {}", tree.len(), tree.height());
    Ok(())
}

fn initialize_logging() -> Result<(), Box<dyn Error>> {
    let level = parse_level(std::env::var(LOG_ENV).ok().as_deref())?;

    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    Ok(())
}

/// The value of [`LOG_ENV`] does not name a log level.
struct InvalidLogLevel {
    value: String,
    source: ParseLevelError,
}

impl Display for InvalidLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{LOG_ENV}={:?} is not a log level (expected one of off, error, warn, info, debug, trace)",
            self.value
        )
    }
}

// main() reports errors with their Debug representation.
impl fmt::Debug for InvalidLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Error for InvalidLogLevel {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Resolve the log level filter from the value of [`LOG_ENV`], if set.
fn parse_level(value: Option<&str>) -> Result<LevelFilter, InvalidLogLevel> {
    let Some(value) = value else {
        return Ok(LevelFilter::Warn);
    };

    value.parse().map_err(|source| InvalidLogLevel {
        value: value.to_string(),
        source,
    })
}

fn insert_all(tree: &mut BalancedTree<i32>, values: impl IntoIterator<Item = i32>) {
    for v in values {
        if !tree.insert(v) {
            debug!("{v} already present");
        }
    }
}

fn print_tree(tree: &BalancedTree<i32>) {
    if tree.is_empty() {
        println!("tree is empty");
    } else {
        println!("AVL tree (h - height, b - balance factor):");
        print!("{}", tree.render());
    }
    println!();
}

fn join<T: Display>(values: impl Iterator<Item = T>) -> String {
    values
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
