// minipy: parser front end with a terminal explorer

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use minipy::parser::lexer::Lexer;
use minipy::parser::{ParseOutcome, Parser};
use minipy::ui::App;
use minipy::visitor::{print_program, NodeStats};

/// Token listings longer than this are summarized by their count only
const MAX_LISTED_TOKENS: usize = 20;

struct Options {
    file: Option<String>,
    tui: bool,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--tui] [FILE]", program_name);
    eprintln!();
    eprintln!("Without FILE, source is read from stdin until an empty line.");
    eprintln!("  --tui    open the source/AST/diagnostics explorer after parsing");
}

fn parse_args(args: &[String]) -> Options {
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("minipy");
    let mut options = Options {
        file: None,
        tui: false,
    };

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--tui" => options.tui = true,
            "-h" | "--help" => {
                print_usage(program_name);
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", flag);
                print_usage(program_name);
                std::process::exit(1);
            }
            file if options.file.is_none() => options.file = Some(file.to_string()),
            extra => {
                eprintln!("Error: Unexpected argument '{}'", extra);
                print_usage(program_name);
                std::process::exit(1);
            }
        }
    }

    options
}

/// Read lines from stdin until a blank line or end of input
fn read_interactive() -> io::Result<String> {
    println!("minipy parser - interactive mode");
    println!("Enter your code (end with empty line):");
    println!("{}", "-".repeat(40));

    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

fn report(outcome: &ParseOutcome) {
    if outcome.had_errors() {
        for diagnostic in &outcome.diagnostics {
            eprintln!("{}", diagnostic);
        }
        eprintln!(
            "\nParsing completed with {} error(s)",
            outcome.diagnostics.len()
        );
        return;
    }

    let stats = NodeStats::collect(&outcome.program);

    println!("\nParsing successful");
    println!("AST contains {} statements", outcome.program.statements.len());
    println!("AST contains {} nodes", stats.total());

    println!("\n{}", "-".repeat(40));
    println!("AST STRUCTURE:");
    println!("{}", "-".repeat(40));
    print!("{}", print_program(&outcome.program));
}

fn run_explorer(source: String, outcome: ParseOutcome) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, outcome);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    let source = match &options.file {
        Some(file) => {
            if !Path::new(file).exists() {
                eprintln!("Error: File '{}' not found", file);
                print_usage(args.first().map(|s| s.as_str()).unwrap_or("minipy"));
                std::process::exit(1);
            }
            fs::read_to_string(file)?
        }
        None => read_interactive()?,
    };

    if source.trim().is_empty() {
        println!("No input provided");
        return Ok(());
    }

    println!("\n{}", "=".repeat(60));
    println!("PARSING RESULT:");
    println!("{}", "=".repeat(60));

    let tokens = match Lexer::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("\nTokens generated: {}", tokens.len());
    if tokens.len() <= MAX_LISTED_TOKENS {
        for token in &tokens {
            println!("  {}", token);
        }
    }

    let outcome = Parser::from_tokens(tokens).with_source(&source).parse();
    let had_errors = outcome.had_errors();

    if options.tui {
        run_explorer(source, outcome)?;
    } else {
        report(&outcome);
        println!("\n{}", "=".repeat(60));
    }

    if had_errors {
        std::process::exit(1);
    }

    Ok(())
}
