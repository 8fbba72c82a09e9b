use alias::{render_json, render_text, run_until_fault, select, OutputFormat, DEMOS};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(version, about = "Value and reference semantics, one demo at a time", long_about = None)]
struct Cli {
    /// Run only these demos, in the order given (repeatable)
    #[arg(short, long = "demo", value_name = "NAME")]
    demos: Vec<String>,

    /// List the demos and exit
    #[arg(short, long)]
    list: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).into_diagnostic()?;

    if cli.list {
        for demo in DEMOS {
            let mark = if demo.in_tour { ' ' } else { '*' };
            println!("{} {:<20} {}", mark, demo.name, demo.about);
        }
        println!();
        println!("* not part of the default run");
        return Ok(());
    }

    let demos = select(&cli.demos)?;
    // a faulting demo still reports the lines it printed before the fault
    let (reports, fault) = run_until_fault(&demos);
    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&reports)),
        OutputFormat::Json => println!("{}", render_json(&reports)?),
    }
    if let Some(e) = fault {
        return Err(e.into());
    }
    Ok(())
}
