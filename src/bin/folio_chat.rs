use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use std::env;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use folio::chat::responder::ResponseEngine;
use folio::chat::{ChatSession, WELCOME_MESSAGE};
use folio::config::{self, AppConfig};
use folio::locale::{FileLocaleStore, Locale, LocaleContext};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();
    let args = CliArgs::parse_from(env::args().skip(1))?;
    if args.help {
        print_usage();
        return Ok(());
    }
    let config = config::load_or_default()?;
    let mut locale = LocaleContext::load(FileLocaleStore::in_workspace()?);

    if let Some(requested) = args.locale {
        locale.set_locale(requested)?;
        println!(
            "{}",
            locale_notice(locale.locale(), locale.store().path(), args.json)?
        );
        if args.questions.is_empty() {
            return Ok(());
        }
    }

    let engine = ResponseEngine::builtin();
    if !args.questions.is_empty() {
        for question in &args.questions {
            print_reply(&engine, question, args.json)?;
        }
        return Ok(());
    }

    let delay = if args.no_delay {
        Duration::ZERO
    } else {
        Duration::from_millis(config.chat.typing_delay_ms)
    };
    run_interactive(engine, &config, locale.locale(), delay)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_reply(engine: &ResponseEngine<'_>, question: &str, as_json: bool) -> Result<()> {
    let reply = engine.reply(question);
    if as_json {
        let line = json!({
            "question": question,
            "topic": reply.topic,
            "reply": reply.text,
        });
        println!("{}", serde_json::to_string(&line)?);
    } else {
        println!("{}\n", reply.text);
    }
    Ok(())
}

/// Confirmation for `--locale`. In JSON mode it is a JSON line so stdout
/// stays machine-readable alongside `--ask` answers.
fn locale_notice(locale: Locale, path: &Path, as_json: bool) -> Result<String> {
    if as_json {
        let line = json!({
            "locale": locale.as_str(),
            "preferences": path.display().to_string(),
        });
        Ok(serde_json::to_string(&line)?)
    } else {
        Ok(format!("Locale set to {} ({})", locale, path.display()))
    }
}

fn run_interactive(
    engine: ResponseEngine<'static>,
    config: &AppConfig,
    locale: Locale,
    delay: Duration,
) -> Result<()> {
    let mut session = ChatSession::new(engine);
    println!("Portfolio Assistant [{locale}]");
    println!("{WELCOME_MESSAGE}\n");
    if config.chat.show_suggestions {
        for (index, question) in session.suggested_questions().iter().enumerate() {
            println!("  {}. {}", index + 1, question);
        }
        println!();
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input == "/quit" {
            break;
        }

        let reply = match suggestion_index(input, &session, config) {
            Some(index) => session.select_suggestion(index),
            None => session.send(input),
        };
        let Some(reply) = reply else {
            continue;
        };
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        println!("{}\n", reply.content);
    }
    Ok(())
}

/// Maps `1`..=`n` to a suggestion while suggestions are still on offer.
fn suggestion_index(input: &str, session: &ChatSession<'_>, config: &AppConfig) -> Option<usize> {
    if !config.chat.show_suggestions {
        return None;
    }
    let number: usize = input.parse().ok()?;
    let count = session.suggested_questions().len();
    (1..=count).contains(&number).then(|| number - 1)
}

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    questions: Vec<String>,
    locale: Option<Locale>,
    json: bool,
    no_delay: bool,
    help: bool,
}

impl CliArgs {
    fn parse_from(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut questions = Vec::new();
        let mut locale = None;
        let mut json = false;
        let mut no_delay = false;
        let mut help = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--ask" | "-a" => {
                    let value = args.next().context("Expected a question after --ask")?;
                    questions.push(value);
                }
                "--locale" => {
                    let value = args
                        .next()
                        .context("Expected 'en' or 'ko' after --locale")?;
                    locale = Some(value.parse::<Locale>()?);
                }
                "--json" => json = true,
                "--no-delay" => no_delay = true,
                "--help" | "-h" => help = true,
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self {
            questions,
            locale,
            json,
            no_delay,
            help,
        })
    }
}

fn print_usage() {
    println!("Folio portfolio assistant");
    println!("Answers questions about the portfolio owner from a fixed dataset.");
    println!("Usage: cargo run --bin folio_chat -- [options]");
    println!("Options:");
    println!("  --ask, -a <question>   Answer one question and exit (repeatable)");
    println!("  --json                 Print --ask answers as JSON lines");
    println!("  --locale <en|ko>       Persist the display locale preference");
    println!("  --no-delay             Skip the simulated typing pause");
    println!("Without --ask, reads questions from stdin until EOF or /quit.");
}
