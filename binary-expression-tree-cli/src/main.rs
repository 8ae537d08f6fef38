use anyhow::Result;
use binary_expression_tree::interpreter::syntax::expression_tree::Validation;
use binary_expression_tree::interpreter::{
    build_tree_with, evaluate, infix_from_tree, postfix_from_infix,
};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{info, LevelFilter};

/// Converts a fully parenthesized expression to postfix, builds its expression tree,
/// and evaluates it
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to convert and evaluate
    #[clap(default_value = "((40-5)*(9/(2+1)))")]
    expression: String,

    /// Discard operands that are left over instead of rejecting the expression
    #[clap(long)]
    lenient: bool,

    /// Also draw the expression tree
    #[clap(long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(
            args.verbose
                .log_level()
                .map_or(LevelFilter::Off, |level| level.to_level_filter()),
        )
        .init();

    let validation = if args.lenient {
        Validation::Lenient
    } else {
        Validation::Strict
    };
    info!("Using {:?} validation", validation);

    println!("{0}", args.expression);
    println!("{0}", postfix_from_infix(&args.expression)?);

    let tree = build_tree_with(&args.expression, validation)?;
    println!("{0}", infix_from_tree(&tree)?);
    println!("{0}", evaluate(&tree)?);

    if args.tree {
        print!("{}", tree);
    }

    Ok(())
}
