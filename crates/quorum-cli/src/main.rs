use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use quorum_parse::parse_expr;
use quorum_policy::{
    LoadBalancingPolicyResolver, ReconnectionPolicyResolver, RetryPolicyResolver,
};

#[derive(Parser, Debug)]
#[command(name = "quorum")]
#[command(about = "Resolve driver policy configuration expressions into policy objects")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve an expression and print the constructed policy
    Resolve {
        /// Policy expression, e.g. TokenAwarePolicy(RoundRobinPolicy())
        expr: String,

        /// Policy family the expression belongs to
        #[arg(long, value_enum, default_value_t = Family::LoadBalancing)]
        family: Family,
    },

    /// Parse an expression and dump the call tree without constructing
    Parse {
        /// Policy expression
        expr: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Debug)]
enum Family {
    LoadBalancing,
    Reconnection,
    Retry,
}

#[derive(ValueEnum, Clone, Debug)]
enum Format {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { expr, family } => cmd_resolve(&expr, family),
        Commands::Parse { expr, format } => cmd_parse(&expr, format),
    }
}

fn cmd_resolve(expr: &str, family: Family) -> Result<()> {
    match family {
        Family::LoadBalancing => {
            let policy = LoadBalancingPolicyResolver::new().resolve(expr)?;
            println!("{policy:#?}");
        }
        Family::Reconnection => {
            let policy = ReconnectionPolicyResolver::new().resolve(expr)?;
            println!("{policy:#?}");
        }
        Family::Retry => {
            let policy = RetryPolicyResolver::new().resolve(expr)?;
            println!("{policy:#?}");
        }
    }
    Ok(())
}

fn cmd_parse(expr: &str, format: Format) -> Result<()> {
    let tree = parse_expr(expr)?;
    match format {
        Format::Pretty => println!("{:#?}", tree),
        Format::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
    }
    Ok(())
}
