//! Interactive terminal practice loop.
//! Handles topic selection and the show/answer/hint cycle for one session.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use memory_game::models::PracticeSession;
use memory_game::oracle::GradingOracle;
use memory_game::store::list_topics;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Runs one interactive practice session against a topic in `topics_dir`.
///
/// Commands at the answer prompt: `hint` asks the oracle for a hint,
/// `next` skips to another question, `quit` ends the session. Anything
/// else is submitted as an answer for grading.
pub fn run(topics_dir: &Path, oracle: &dyn GradingOracle) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let topic_path = pick_topic(topics_dir, &mut lines)?;
    let mut session = PracticeSession::open(&topic_path, oracle)
        .with_context(|| format!("failed to load topic {}", topic_path.display()))?;

    println!("Loaded {} cards. Type 'hint', 'next' or 'quit'.\n", session.card_count());

    loop {
        let Some(card) = session.next_question(Utc::now()) else {
            println!("No new questions available.");
            return Ok(());
        };
        let question = card.question.clone();

        println!("Question: {question}");

        loop {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            let input = line?.trim().to_string();

            match input.as_str() {
                "" => continue,
                "quit" => return Ok(()),
                "next" => break,
                "hint" => match session.hint(&question) {
                    Ok(hint) => println!("Hint: {hint}\n"),
                    Err(e) => println!("Hint failed: {e}\n"),
                },
                answer => {
                    // A failed grading attempt leaves the card untouched, so
                    // the learner can simply try again.
                    match session.grade_answer(&question, answer, Utc::now()) {
                        Ok(feedback) => {
                            println!("\n{feedback}\n");
                            break;
                        }
                        Err(e) => println!("Grading failed: {e}\n"),
                    }
                }
            }
        }
    }
}

/// Lists the topics in `topics_dir` and reads the learner's choice.
fn pick_topic(
    topics_dir: &Path,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<std::path::PathBuf> {
    let topics = list_topics(topics_dir)
        .with_context(|| format!("failed to list topics in {}", topics_dir.display()))?;

    if topics.is_empty() {
        bail!("no topic files (*.json) found in {}", topics_dir.display());
    }

    println!("Choose a topic:");
    for (i, path) in topics.iter().enumerate() {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        println!("  {}. {name}", i + 1);
    }

    loop {
        print!("topic> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("no topic selected");
        };

        match line?.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= topics.len() => return Ok(topics[n - 1].clone()),
            _ => println!("Enter a number between 1 and {}.", topics.len()),
        }
    }
}
