use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use env_logger::Env;
use exprdiff::{Arity, Expr, Notation, ParseError, Parser, Variable};

#[derive(ClapParser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Notation of the input expression: infix (x y +), prefix ((+ x y)) or postfix ((x y +))
    #[arg(short, long, global = true, default_value_t = Notation::Prefix)]
    notation: Notation,

    /// Maximum bracket nesting accepted by the parser
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression at a point
    Eval {
        /// The expression to evaluate
        expression: String,
        #[arg(short = 'x', long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,
        #[arg(short = 'y', long, default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,
        #[arg(short = 'z', long, default_value_t = 0.0, allow_negative_numbers = true)]
        z: f64,
    },
    /// Differentiate an expression and print the derivative
    Diff {
        /// The expression to differentiate
        expression: String,
        /// Variable to differentiate with respect to
        #[arg(long = "wrt", default_value = "x")]
        variable: Variable,
        /// Notation of the printed derivative (defaults to the input notation)
        #[arg(short, long)]
        output: Option<Notation>,
    },
    /// Re-render an expression in another notation
    Render {
        /// The expression to render
        expression: String,
        /// Target notation
        #[arg(short, long)]
        to: Notation,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();
}

fn parse_input(cli: &Cli, expression: &str) -> Result<Expr> {
    let parser = Parser::new(cli.notation).max_depth(cli.max_depth);
    parser
        .parse(expression)
        .map_err(|err| report(&err))
        .with_context(|| format!("failed to parse {} expression", parser.notation()))
}

/// Attach the caret pointer to a parse error
fn report(err: &ParseError) -> anyhow::Error {
    anyhow::anyhow!("{}: {}\n{}", err.kind(), err, err.pointer())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Eval {
            expression,
            x,
            y,
            z,
        } => {
            let expr = parse_input(&cli, expression)?;
            let value = expr.evaluate(&[*x, *y, *z]);
            log::info!("{} at ({}, {}, {})", expr, x, y, z);
            println!("{value}");
        }
        Commands::Diff {
            expression,
            variable,
            output,
        } => {
            let expr = parse_input(&cli, expression)?;
            let notation = output.unwrap_or(cli.notation);
            println!("{}", expr.differentiate(variable.name()).render(notation));
        }
        Commands::Render { expression, to } => {
            let expr = parse_input(&cli, expression)?;
            let notation = *to;
            if notation == Notation::Infix && has_inner_variadic(&expr) {
                log::warn!("implicit postfix cannot delimit nested variadic operands; output may not parse back");
            }
            println!("{}", expr.render(notation));
        }
    }

    Ok(())
}

/// True when a variadic operation sits below the root
fn has_inner_variadic(expr: &Expr) -> bool {
    expr.operands().iter().any(|arg| {
        arg.operation()
            .is_some_and(|op| op.arity == Arity::Variadic || has_inner_variadic(arg))
    })
}
