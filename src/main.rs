use clap::Parser;
use std::{error::Error, path::PathBuf};
use vocab_quiz::{
    config::{Config, ConfigStore, FileConfigStore},
    MultipleChoiceQuestion, PoolError, QuestionDirection, QuizGenConfig, QuizGenerator,
    RandomShuffle, Shuffle, WordPool,
};

/// multiple-choice vocabulary quizzes with plausible distractors
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Builds multiple-choice vocabulary questions. Wrong options are picked to be plausible: same part of speech and similar length first, falling back to any other word when the list is small."
)]
pub struct Cli {
    /// built-in word pool to quiz on (see --list-pools)
    #[clap(short = 'p', long)]
    pool: Option<String>,

    /// word list file to quiz on (.json or .csv), overrides --pool
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// which side of each word is asked
    #[clap(short = 'd', long, value_enum)]
    direction: Option<QuestionDirection>,

    /// number of wrong options per question
    #[clap(short = 'o', long)]
    options: Option<usize>,

    /// number of questions to generate
    #[clap(short = 'n', long)]
    questions: Option<usize>,

    /// ask about every word in the pool
    #[clap(long, conflicts_with = "questions")]
    all: bool,

    /// ask a single question about the word with this id
    #[clap(short = 'w', long)]
    word: Option<String>,

    /// seed for reproducible quizzes
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// pick wrong options at random instead of by part of speech and length
    #[clap(long)]
    random_distractors: bool,

    /// print questions as json
    #[clap(long)]
    json: bool,

    /// mark the correct option in text output
    #[clap(long)]
    answers: bool,

    /// list built-in word pools and exit
    #[clap(long)]
    list_pools: bool,

    /// path of the config file to read and write
    #[clap(long)]
    config: Option<PathBuf>,

    /// persist the effective settings to the config file
    #[clap(long)]
    save_config: bool,

    /// log selection details
    #[clap(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    /// Flags take precedence over stored settings
    fn apply_to(&self, mut cfg: Config) -> Config {
        if let Some(ref pool) = self.pool {
            cfg.pool.clone_from(pool);
        }
        if let Some(direction) = self.direction {
            cfg.direction = direction;
        }
        if let Some(options) = self.options {
            cfg.max_options = options;
        }
        if self.all {
            cfg.question_count = None;
        } else if let Some(questions) = self.questions {
            cfg.question_count = Some(questions);
        }
        if self.random_distractors {
            cfg.random_distractors = true;
        }
        cfg
    }

    fn config_store(&self) -> FileConfigStore {
        match self.config {
            Some(ref path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    fn load_pool(&self, cfg: &Config) -> Result<WordPool, PoolError> {
        match self.file {
            Some(ref path) => WordPool::load(path),
            None => WordPool::embedded(&cfg.pool),
        }
    }

    fn shuffle(&self) -> Box<dyn Shuffle> {
        match self.seed {
            Some(seed) => Box::new(RandomShuffle::seeded(seed)),
            None => Box::new(RandomShuffle::new()),
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Option labels `a)`, `b)`, ... falling back to numbers past `z`
fn option_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'a' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}

fn render_text(questions: &[MultipleChoiceQuestion], show_answers: bool) -> String {
    let mut out = String::new();
    for (n, question) in questions.iter().enumerate() {
        let pos = question
            .part_of_speech
            .as_deref()
            .map(|p| format!(" ({p}.)"))
            .unwrap_or_default();
        out.push_str(&format!("{}. {}{}\n", n + 1, question.prompt, pos));
        for (i, option) in question.options.iter().enumerate() {
            let marker = if show_answers && *option == question.correct_answer {
                "*"
            } else {
                " "
            };
            out.push_str(&format!("  {marker} {}) {option}\n", option_label(i)));
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_pools {
        for name in WordPool::embedded_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let store = cli.config_store();
    let cfg = cli.apply_to(store.load());
    if cli.save_config {
        store.save(&cfg)?;
        log::info!("saved settings to {}", store.path().display());
    }

    let pool = cli.load_pool(&cfg)?;
    log::info!("loaded {} words from '{}'", pool.len(), pool.name);

    let generator = QuizGenerator::new(QuizGenConfig::from(&cfg));
    let mut shuffle = cli.shuffle();

    let questions = match cli.word {
        Some(ref id) => {
            let word = pool
                .find(id)
                .ok_or_else(|| format!("no word with id '{id}' in '{}'", pool.name))?;
            vec![generator.question_for(word, &pool.words, shuffle.as_mut())]
        }
        None => generator.generate(&pool.words, shuffle.as_mut()),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
    } else {
        print!("{}", render_text(&questions, cli.answers));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_quiz::{IdentityShuffle, TieredSelector, Word};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vocab-quiz").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&[
            "--pool",
            "kitchen",
            "--direction",
            "target-to-source",
            "--options",
            "2",
            "--questions",
            "4",
            "--random-distractors",
        ]);
        let cfg = cli.apply_to(Config::default());

        assert_eq!(cfg.pool, "kitchen");
        assert_eq!(cfg.direction, QuestionDirection::TargetToSource);
        assert_eq!(cfg.max_options, 2);
        assert_eq!(cfg.question_count, Some(4));
        assert!(cfg.random_distractors);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let stored = Config {
            max_options: 5,
            random_distractors: true,
            ..Default::default()
        };
        let cfg = parse(&[]).apply_to(stored.clone());
        assert_eq!(cfg, stored);
    }

    #[test]
    fn test_all_clears_question_count() {
        let cfg = parse(&["--all"]).apply_to(Config::default());
        assert_eq!(cfg.question_count, None);
    }

    #[test]
    fn test_all_conflicts_with_questions() {
        let result = Cli::try_parse_from(["vocab-quiz", "--all", "--questions", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_embedded_pool() {
        let cli = parse(&[]);
        let pool = cli.load_pool(&Config::default()).unwrap();
        assert_eq!(pool.name, "basics");
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(option_label(0), "a");
        assert_eq!(option_label(3), "d");
        assert_eq!(option_label(25), "z");
        assert_eq!(option_label(26), "27");
    }

    fn apple_question() -> MultipleChoiceQuestion {
        let pool = vec![
            Word::new("1", "apple", "elma").with_part_of_speech("n"),
            Word::new("2", "pear", "armut").with_part_of_speech("n"),
        ];
        MultipleChoiceQuestion::build(
            &pool[0],
            &pool,
            QuestionDirection::SourceToTarget,
            3,
            &TieredSelector,
            &mut IdentityShuffle,
        )
    }

    #[test]
    fn test_render_text_marks_correct_answer() {
        let text = render_text(&[apple_question()], true);
        assert_eq!(text, "1. apple (n.)\n  * a) elma\n    b) armut\n\n");
    }

    #[test]
    fn test_render_text_hides_answers_by_default() {
        let cli = parse(&[]);
        assert!(!cli.answers);

        let text = render_text(&[apple_question()], cli.answers);
        assert_eq!(text, "1. apple (n.)\n    a) elma\n    b) armut\n\n");
        assert!(!text.contains('*'));
    }
}
