use clap::Parser;
use passmint::{CharGroup, OsRandomSource, PasswordBuilder, PasswordConfig};
use passmint_cli::{Error, composition_groups, length_spec};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "passmint")]
#[command(about = "Generate random passwords that satisfy composition rules")]
struct Args {
    /// Exact password length (cannot be combined with the range flags)
    #[arg(short, long)]
    length: Option<usize>,

    /// Minimum password length (default: 8)
    #[arg(long)]
    min_length: Option<usize>,

    /// Maximum password length (default: 12)
    #[arg(long)]
    max_length: Option<usize>,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value = "1")]
    count: usize,

    /// Character group that must contribute at least one character (repeatable)
    #[arg(short, long)]
    group: Vec<String>,

    /// Character group the first character is drawn from
    #[arg(long)]
    first_char: Option<String>,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = PasswordConfig {
        length: length_spec(args.length, args.min_length, args.max_length)?,
        groups: composition_groups(&args.group)?,
        first_char_group: args.first_char.as_deref().map(CharGroup::new).transpose()?,
        count: args.count,
    };

    // Passwords go to stdout, one per line; diagnostics stay on stderr and
    // never include generated material.
    debug!(
        count = config.count,
        groups = config.groups.len(),
        first_char = config.first_char_group.is_some(),
        "generating batch"
    );

    for password in PasswordBuilder::new(OsRandomSource).generate_batch(&config)? {
        println!("{password}");
    }

    Ok(())
}
