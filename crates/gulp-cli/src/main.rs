mod samples;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use gulp_solver::Status;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "gulp")]
#[command(about = "Solve linear programs with the Big-M simplex method", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in sample programs
    List,
    /// Solve a built-in sample program and print the result
    Solve {
        /// The sample to solve
        sample: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
        /// Print the program in standard form before solving
        #[arg(short = 'p', long)]
        show_program: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pretty,
    Json,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose > 0 {
        let level = match cli.verbose {
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to set tracing subscriber: {}", e);
            std::process::exit(1);
        }
    }

    match cli.command {
        Commands::List => {
            for sample in samples::SAMPLES {
                println!("{:12} {}", sample.name, sample.description);
            }
        }
        Commands::Solve { sample, format, show_program } => {
            let Some(sample) = samples::find(&sample) else {
                eprintln!("Unknown sample: {} (try `gulp list`)", sample);
                std::process::exit(1);
            };

            let mut lp = match sample.build() {
                Ok(lp) => lp,
                Err(e) => {
                    eprintln!("Build error: {}", e);
                    std::process::exit(1);
                }
            };

            if show_program {
                println!("{}", lp);
                println!();
            }

            if let Err(e) = lp.solve() {
                eprintln!("Solve error: {}", e);
                std::process::exit(1);
            }

            match format {
                Format::Json => match serde_json::to_string_pretty(lp.solution()) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error serializing solution: {}", e);
                        std::process::exit(1);
                    }
                },
                Format::Pretty => print_solution(&lp),
            }

            if lp.status() != Status::Optimal {
                std::process::exit(1);
            }
        }
    }
}

fn print_solution(lp: &gulp_solver::LinearProgram) {
    println!("Status: {}", lp.status());
    println!("Iterations: {}", lp.iterations());
    match lp.status() {
        Status::Optimal => {
            if let Some(value) = lp.optimal_value() {
                println!("Optimal value: {}", value);
            }
            println!();
            println!("Variables:");
            for (name, value) in lp.values() {
                println!("  {:20} {:10.4}", name, value);
            }
        }
        Status::Infeasible => println!("No solution exists that satisfies all constraints."),
        Status::Unbounded => println!("The problem has no finite optimal solution."),
        Status::Undefined => println!("The iteration limit was reached before a solution was found."),
        Status::NotSolved => println!("The program has not been solved."),
    }
}
