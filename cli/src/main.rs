mod highlighter;
mod validator;

use bumpalo::Bump;
use clap::Parser;
use exprs::{Context, ContextOptions, EvalFlags, render_error};
use exprs_core::parser::{self, DEFAULT_MAX_DEPTH};
use miette::{IntoDiagnostic, Result, miette};
use reedline::{
    DefaultPrompt, DefaultPromptSegment, EditCommand, Emacs, FileBackedHistory, KeyCode,
    KeyModifiers, Keybindings, Reedline, ReedlineEvent, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;

use highlighter::Highlighter;
use validator::ParenValidator;

const HISTORY_SIZE: usize = 1000;

/// exprs - evaluate arithmetic, bitwise, logical and string expressions
#[derive(Parser, Debug)]
#[command(name = "exprs")]
#[command(about = "Evaluate expressions", long_about = None)]
struct Args {
    /// Print the parsed syntax tree before evaluating
    #[arg(long)]
    debug_parse: bool,

    /// Raise the trace level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Reject floating-point literals
    #[arg(long)]
    integer_only: bool,

    /// Reject string literals
    #[arg(long)]
    no_strings: bool,

    /// Maximum nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Cap on bytes allocated for one expression's syntax tree
    #[arg(long)]
    memory_limit: Option<usize>,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn flags(&self) -> EvalFlags {
        let mut flags = EvalFlags::empty();
        flags.set(EvalFlags::INTEGER_ONLY, self.integer_only);
        flags.set(EvalFlags::NO_STRINGS, self.no_strings);
        flags
    }

    fn context_options(&self) -> ContextOptions {
        ContextOptions {
            memory_limit: self.memory_limit,
            max_depth: self.max_depth,
            verbose: self.verbose,
            ..ContextOptions::default()
        }
    }
}

fn add_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn history_path() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("exprs");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("history.txt"))
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let mut keybindings = default_emacs_keybindings();
    add_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_validator(Box::new(ParenValidator))
        .with_edit_mode(edit_mode);

    // Without a writable data directory the REPL still works, just forgetfully.
    match history_path().map(|path| FileBackedHistory::with_file(HISTORY_SIZE, path)) {
        Some(Ok(history)) => line_editor = line_editor.with_history(Box::new(history)),
        Some(Err(e)) => tracing::warn!("history disabled: {e}"),
        None => {}
    }

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("exprs".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

fn print_syntax_tree(input: &str, max_depth: usize) {
    let arena = Bump::new();
    // Parse errors are reported by the evaluation that follows.
    if let Ok(parsed) = parser::parse_with_max_depth(&arena, input, max_depth) {
        println!("=== Parsed AST ===");
        println!("{:#?}", parsed.expr);
        println!("{}", parsed.expr);
        println!();
    }
}

/// Evaluate one input, printing the result or rendering the error.
/// Returns false if evaluation failed.
fn interpret_input(context: &mut Context, input: &str, args: &Args) -> bool {
    if args.debug_parse {
        print_syntax_tree(input, args.max_depth);
    }

    match context.evaluate(input, args.flags()) {
        Ok(term) => {
            println!("{}: {}", term.term_type(), term.to_literal());
            true
        }
        Err(e) => {
            render_error(&e);
            false
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // EXPRS_LOG or RUST_LOG wins; otherwise -v lowers the threshold so
    // context traces show.
    let default_level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("EXPRS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut context =
        Context::new(args.context_options()).map_err(|e| miette!("cannot create context: {e}"))?;

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        if !interpret_input(&mut context, expr, &args) {
            std::process::exit(context.last_error().as_i32());
        }
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        let (mut line_editor, prompt) = setup_reedline();

        println!("exprs REPL - Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");

        loop {
            let sig = line_editor.read_line(&prompt).into_diagnostic()?;

            match sig {
                Signal::Success(buffer) => {
                    if buffer.trim().is_empty() {
                        continue;
                    }
                    interpret_input(&mut context, &buffer, &args);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode: one expression per line
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());
        let mut failed = false;

        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            if line.trim().is_empty() {
                continue;
            }
            failed |= !interpret_input(&mut context, &line, &args);
        }

        if failed {
            std::process::exit(1);
        }
    }

    Ok(())
}
