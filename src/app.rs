//! Interactive menu driver and session state.
//! Owns the loaded collections for the lifetime of the process and writes
//! them back after every finished quiz.

use crate::config::Config;
use crate::content;
use crate::error::{Result, VocabError};
use crate::models::{
    AttemptOutcome, LearningLog, QuizMode, QuizSession, ReviewSchedule, Statistics, Vocabulary,
    VocabularyEntry, WrongAnswerList,
};
use crate::storage::DataStore;
use chrono::NaiveDate;
use log::{error, info};
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

/// Whether the caller should keep prompting or shut down (end of input).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Study session state, generic over its input and output streams.
pub struct App<R, W> {
    input: R,
    output: W,
    store: DataStore,
    config: Config,
    schedule: ReviewSchedule,
    vocabulary: Vocabulary,
    wrong_answers: WrongAnswerList,
    learning_log: LearningLog,
    rng: StdRng,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Opens the data directory and loads all three records.
    pub fn new(config: Config, input: R, output: W, today: NaiveDate, rng: StdRng) -> Result<Self> {
        let schedule = config.schedule()?;
        let store = DataStore::open(config.data_dir.clone())?;
        let vocabulary = store.load_vocabulary()?;
        let wrong_answers = store.load_wrong_answers();
        let learning_log = store.load_learning_log();

        info!(
            "Loaded {} entries, {} wrong answers from {}",
            vocabulary.len(),
            wrong_answers.len(),
            store.data_dir().display()
        );

        Ok(Self {
            input,
            output,
            store,
            config,
            schedule,
            vocabulary,
            wrong_answers,
            learning_log,
            rng,
            today,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn wrong_answers(&self) -> &WrongAnswerList {
        &self.wrong_answers
    }

    pub fn learning_log(&self) -> &LearningLog {
        &self.learning_log
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one trimmed line. None on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn pause(&mut self) -> Result<Flow> {
        match self.prompt("\nPress Enter to continue...")? {
            Some(_) => Ok(Flow::Continue),
            None => Ok(Flow::Quit),
        }
    }

    fn heading(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(60);
        writeln!(self.output, "\n{}\n{}\n{}", rule, title, rule)?;
        Ok(())
    }

    fn end_of_input(&mut self) -> Result<()> {
        writeln!(self.output, "\n\nEnd of input, exiting.")?;
        Ok(())
    }

    /// Top-level menu loop. Returns when the learner exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", content::BANNER)?;
        writeln!(self.output, "{}", content::WELCOME)?;
        if self.prompt("Press Enter to open the main menu...")?.is_none() {
            return self.end_of_input();
        }
        loop {
            writeln!(self.output, "{}", content::MAIN_MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return self.end_of_input();
            };

            let flow = match choice.as_str() {
                "1" => self.run_vocabulary_menu()?,
                "2" => {
                    self.show_reading_overview()?;
                    self.pause()?
                }
                "3" => {
                    self.show_statistics()?;
                    self.pause()?
                }
                "4" => {
                    self.show_help()?;
                    self.pause()?
                }
                "0" => {
                    writeln!(self.output, "\nGoodbye and good luck with your exam!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "\n[!] Invalid choice, enter a number from 0 to 4")?;
                    self.pause()?
                }
            };

            if flow == Flow::Quit {
                return self.end_of_input();
            }
        }
    }

    /// Entry point that skips the main menu.
    pub fn run_vocabulary(&mut self) -> Result<()> {
        writeln!(self.output, "{}", content::BANNER)?;
        if self.run_vocabulary_menu()? == Flow::Quit {
            return self.end_of_input();
        }
        Ok(())
    }

    /// Vocabulary tool loop. Returns to the caller on "0".
    pub fn run_vocabulary_menu(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.output, "{}", content::VOCABULARY_MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(Flow::Quit);
            };

            let flow = match choice.as_str() {
                "1" => self.start_quiz(QuizMode::Random)?,
                "2" => self.start_quiz(QuizMode::Review)?,
                "3" => self.start_quiz(QuizMode::WrongAnswers)?,
                "4" => self.search()?,
                "5" => {
                    self.show_statistics()?;
                    Flow::Continue
                }
                "6" => self.add_entry()?,
                "7" => self.clear_wrong_answers()?,
                "0" => return Ok(Flow::Continue),
                _ => {
                    writeln!(self.output, "\n[!] Invalid choice, please try again")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit || self.pause()? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn quiz_batch(&mut self, mode: QuizMode) -> Vec<VocabularyEntry> {
        match mode {
            QuizMode::Random => self.vocabulary.sample(&mut self.rng, self.config.quiz_size),
            QuizMode::Review => self
                .schedule
                .due_for_review(&self.vocabulary.entries, self.today)
                .into_iter()
                .cloned()
                .collect(),
            QuizMode::WrongAnswers => self.wrong_answers.head(self.config.quiz_size).to_vec(),
        }
    }

    /// Runs one quiz and saves everything once it is finished.
    pub fn start_quiz(&mut self, mode: QuizMode) -> Result<Flow> {
        self.heading(mode.label())?;

        let batch = self.quiz_batch(mode);
        let mut session = match QuizSession::new(mode, batch, self.today) {
            Ok(session) => session,
            Err(VocabError::EmptyBatch) => {
                let message = match mode {
                    QuizMode::Review => "[i] Nothing is due for review today.",
                    QuizMode::WrongAnswers => "[i] The wrong-answer list is empty. Nice work!",
                    QuizMode::Random => "[i] The vocabulary is empty. Add some entries first.",
                };
                writeln!(self.output, "{}", message)?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e),
        };

        match mode {
            QuizMode::Review => writeln!(
                self.output,
                "{} entries are due for review today",
                session.total_count()
            )?,
            _ => writeln!(self.output, "{} entries selected", session.total_count())?,
        }

        while let Some(entry) = session.current_entry() {
            let term = entry.term.clone();
            writeln!(self.output, "\n{}", session.phase_message())?;
            writeln!(self.output, "Term: {}", term)?;

            let Some(answer) = self.prompt("Definition: ")? else {
                return Ok(Flow::Quit);
            };
            let Some(feedback) =
                session.answer_current(&answer, &mut self.vocabulary, &mut self.wrong_answers)
            else {
                break;
            };

            match feedback.outcome {
                AttemptOutcome::Correct => writeln!(self.output, "[v] Correct!")?,
                AttemptOutcome::Incorrect => writeln!(
                    self.output,
                    "[x] Wrong! Correct answer: {}",
                    feedback.expected
                )?,
            }
        }

        let score = session.finish(&mut self.learning_log);
        self.heading("Results")?;
        writeln!(self.output, "Questions: {}", score.total)?;
        writeln!(self.output, "Correct: {}", score.correct)?;
        writeln!(self.output, "Wrong: {}", score.wrong())?;
        writeln!(self.output, "Accuracy: {:.1}%", score.accuracy())?;

        self.save_session()?;
        Ok(Flow::Continue)
    }

    fn save_session(&mut self) -> Result<()> {
        let saved = self
            .store
            .save_all(&self.vocabulary, &self.wrong_answers, &self.learning_log);
        let message = match saved {
            Ok(()) => "\nData saved.".to_string(),
            Err(e) => {
                error!("Saving study data failed: {}", e);
                format!("\n[!] Could not save data: {}", e)
            }
        };
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn search(&mut self) -> Result<Flow> {
        let Some(keyword) = self.prompt("\nSearch keyword: ")? else {
            return Ok(Flow::Quit);
        };
        if keyword.is_empty() {
            return Ok(Flow::Continue);
        }

        self.heading(&format!("Search: '{}'", keyword))?;
        let results = self.vocabulary.search(&keyword);
        if results.is_empty() {
            writeln!(self.output, "[i] No matching entries")?;
            return Ok(Flow::Continue);
        }
        for entry in results {
            writeln!(self.output, "  {} - {}", entry.term, entry.definition)?;
            if let Some(learned) = entry.learned_date {
                writeln!(
                    self.output,
                    "    learned {}, reviewed {} times",
                    learned, entry.review_count
                )?;
            }
        }
        Ok(Flow::Continue)
    }

    pub fn show_statistics(&mut self) -> Result<()> {
        let stats = Statistics::collect(
            &self.vocabulary,
            &self.wrong_answers,
            &self.learning_log,
            &self.schedule,
            self.today,
        );

        self.heading("Study statistics")?;
        writeln!(self.output, "Vocabulary size: {}", stats.vocabulary_size)?;
        writeln!(self.output, "Learned: {}", stats.learned)?;
        writeln!(self.output, "Progress: {:.1}%", stats.progress)?;
        writeln!(self.output, "Total attempts: {}", stats.total_attempts)?;
        writeln!(self.output, "Overall accuracy: {:.1}%", stats.overall_accuracy)?;
        writeln!(self.output, "Due today: {}", stats.due_today)?;
        writeln!(self.output, "Wrong-answer list: {}", stats.wrong_answers)?;
        match (stats.last_study_date, stats.days_since_study) {
            (Some(date), Some(days)) => {
                writeln!(self.output, "Last study: {} ({} days ago)", date, days)?
            }
            _ => writeln!(self.output, "Last study: not started yet")?,
        }
        Ok(())
    }

    /// Prompts for a new entry. Bad input aborts without changing anything.
    pub fn add_entry(&mut self) -> Result<Flow> {
        self.heading("Add entry")?;

        let Some(term) = self.prompt("Term: ")? else {
            return Ok(Flow::Quit);
        };
        if let Err(e) = self.vocabulary.check_new_term(&term) {
            writeln!(self.output, "[!] {}", e)?;
            return Ok(Flow::Continue);
        }

        let Some(definition) = self.prompt("Definition: ")? else {
            return Ok(Flow::Quit);
        };
        let added = match self.vocabulary.add_entry(&term, &definition) {
            Ok(entry) => format!("{} - {}", entry.term, entry.definition),
            Err(e) => {
                writeln!(self.output, "[!] {}", e)?;
                return Ok(Flow::Continue);
            }
        };

        match self.store.save_vocabulary(&self.vocabulary) {
            Ok(()) => writeln!(self.output, "\n[v] Added: {}", added)?,
            Err(e) => {
                error!("Saving vocabulary failed: {}", e);
                writeln!(self.output, "\n[!] Added {} but could not save: {}", added, e)?;
            }
        }
        Ok(Flow::Continue)
    }

    pub fn clear_wrong_answers(&mut self) -> Result<Flow> {
        if self.wrong_answers.is_empty() {
            writeln!(self.output, "[i] The wrong-answer list is already empty.")?;
            return Ok(Flow::Continue);
        }

        let question = format!(
            "Clear all {} entries from the wrong-answer list? [y/N] ",
            self.wrong_answers.len()
        );
        let Some(answer) = self.prompt(&question)? else {
            return Ok(Flow::Quit);
        };
        if !answer.eq_ignore_ascii_case("y") {
            writeln!(self.output, "Kept the wrong-answer list.")?;
            return Ok(Flow::Continue);
        }

        self.wrong_answers.clear();
        match self.store.save_wrong_answers(&self.wrong_answers) {
            Ok(()) => writeln!(self.output, "[v] Wrong-answer list cleared.")?,
            Err(e) => {
                error!("Saving wrong-answer list failed: {}", e);
                writeln!(self.output, "[!] Cleared, but could not save: {}", e)?;
            }
        }
        Ok(Flow::Continue)
    }

    pub fn show_reading_overview(&mut self) -> Result<()> {
        writeln!(self.output, "{}", content::READING_OVERVIEW)?;
        Ok(())
    }

    pub fn show_help(&mut self) -> Result<()> {
        writeln!(self.output, "{}", content::HELP)?;
        Ok(())
    }
}
