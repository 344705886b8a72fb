use std::{
    fs::read_to_string,
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use clap::Parser as ClapParser;
use precedence::{
    lexer::lexer::tokenize,
    parser::parser::{parse, Action},
    render_error,
};

/// Checks candidate programs, one per line, with a simple-precedence parser.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File with one candidate program per line
    #[arg(default_value = "samples/programs.txt")]
    input: PathBuf,
    /// Wait for Enter between programs
    #[arg(short, long)]
    pause: bool,
    /// Print every shift and reduce
    #[arg(short, long)]
    trace: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let contents = match read_to_string(&args.input) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", args.input.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let file_name = args
        .input
        .file_name()
        .map_or_else(|| String::from("shell"), |name| name.to_string_lossy().into_owned());

    let programs: Vec<&str> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let stdin = io::stdin();
    let mut accepted = 0;
    let start = Instant::now();

    for (i, program) in programs.iter().enumerate() {
        println!("{}", "-".repeat(80));

        if check(program, &file_name, args.trace) {
            accepted += 1;
        }
        println!("{}", program);
        println!("{}", "-".repeat(80));

        if args.pause && i + 1 < programs.len() {
            let mut line = String::new();
            if let Err(error) = stdin.lock().read_line(&mut line) {
                eprintln!("Failed to read from stdin: {}", error);
                return ExitCode::FAILURE;
            }
        }
    }

    println!(
        "{} of {} programs accepted in {:?}",
        accepted,
        programs.len(),
        start.elapsed()
    );
    ExitCode::SUCCESS
}

/// Runs one program through the lexer and parser, printing the verdict.
fn check(program: &str, file_name: &str, trace: bool) -> bool {
    let tokens = match tokenize(program.to_string(), Some(file_name.to_string())) {
        Ok(tokens) => tokens,
        Err(error) => {
            print!("{}", render_error(&error, program));
            return false;
        }
    };

    let (parser, result) = parse(tokens, Rc::new(file_name.to_string()));

    if trace {
        for action in parser.trace() {
            print_action(action);
        }
    }

    match result {
        Ok(()) => {
            println!("accepted");
            true
        }
        Err(error) => {
            print!("{}", render_error(&error, program));
            false
        }
    }
}

fn print_action(action: &Action) {
    match action {
        Action::Shift { symbol, relation } => println!("  shift  {} ({})", symbol, relation),
        Action::Reduce {
            handle,
            into,
            lookahead,
        } => {
            let handle: Vec<String> = handle.iter().map(|symbol| symbol.to_string()).collect();
            println!("  reduce {} -> {} before {}", handle.join(" "), into, lookahead);
        }
        Action::Accept => println!("  accept"),
    }
}
