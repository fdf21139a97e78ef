use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::{
    config::Config,
    models::{question::Question, quiz_result::Completion, student::Student},
    quiz::{
        session::{QuizSession, TickOutcome},
        timer::{Countdown, QuestionTimer},
    },
    source::QuestionSource,
    storage::KeyValueStore,
    utils::credentials::CredentialVerifier,
    views::panel::{Panel, PanelRouter},
};

pub type SharedUi = Arc<Mutex<Ui>>;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub ui: SharedUi,
    pub store: Arc<dyn KeyValueStore>,
    pub source: Arc<dyn QuestionSource>,
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        source: Arc<dyn QuestionSource>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            config,
            ui: Arc::new(Mutex::new(Ui::default())),
            store,
            source,
            verifier,
        }
    }
}

/// Everything the single user's browser is looking at.
#[derive(Debug, Default)]
pub struct Ui {
    pub router: PanelRouter,
    pub student: Option<Student>,
    pub session: Option<QuizSession>,
    pub completion: Option<Completion>,
    pub timer: QuestionTimer,
    /// Shown once on the next render, then cleared.
    pub alert: Option<String>,
    /// The leaderboard panel is asking for reset confirmation.
    pub confirm_reset: bool,
}

impl Ui {
    /// Replaces any previous attempt with a fresh session on its first question.
    /// The caller starts the countdown.
    pub fn begin_quiz(&mut self, student: Student, questions: Vec<Question>, config: &Config) {
        let mut session = QuizSession::new(questions, config.question_seconds, config.reveal_on_timeout);
        session.enter_question();

        self.student = Some(student);
        self.session = Some(session);
        self.completion = None;
        self.alert = None;
        self.router.show(Panel::Quiz);
    }

    /// Starts the countdown for the current question, cancelling any other.
    pub fn start_countdown(&mut self, shared: SharedUi) {
        if let Some(index) = self.session.as_ref().map(QuizSession::index) {
            self.timer.start(shared, index, Duration::from_secs(1));
        }
    }

    pub fn quiz_in_progress(&self) -> bool {
        self.session.is_some()
    }
}

impl Countdown for Ui {
    fn on_tick(&mut self, index: usize) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        match session.tick(index) {
            TickOutcome::Running(_) => true,
            TickOutcome::Expired => {
                tracing::info!("Question {} timed out", index + 1);
                false
            }
            TickOutcome::Ignored => false,
        }
    }
}
