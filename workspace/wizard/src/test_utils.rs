//! Fixtures shared by the unit tests: a scripted prompter, an in-memory store,
//! predictable ids and a migrated SQLite database.

use async_trait::async_trait;
use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use model::entities::{branch, class, role, user};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, DbErr, Set};
use std::collections::{BTreeSet, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::draft::UserDraft;
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::prompt::Prompter;
use crate::store::{BranchRecord, BranchStore, NewUser, RoleStore, UserStore};

/// One prepared answer of a [`ScriptedPrompter`].
#[derive(Clone, Debug)]
pub enum Scripted {
    /// Answer to a text prompt.
    Text(String),
    /// Accept the prompt's default.
    Default,
    /// Answer to a multi select.
    Picks(Vec<usize>),
    /// Answer to a single select.
    Pick(usize),
    Yes,
    No,
    /// Type `query` into a search prompt and pick the candidate at `pick`.
    Search { query: String, pick: usize },
    /// Return this label from a search prompt without looking at candidates.
    Typed(String),
}

impl Scripted {
    pub fn text(text: &str) -> Self {
        Scripted::Text(text.to_string())
    }

    pub fn search(query: &str, pick: usize) -> Self {
        Scripted::Search {
            query: query.to_string(),
            pick,
        }
    }
}

/// [`Prompter`] answering from a fixed script and recording what was shown.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Scripted>,
    asked: Vec<String>,
    choices: Vec<(String, Vec<String>)>,
    searches: Vec<(String, Vec<String>)>,
    headings: Vec<String>,
    fields: Vec<(String, String)>,
    messages: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Scripted>) -> Self {
        Self {
            answers: answers.into(),
            ..Default::default()
        }
    }

    fn next(&mut self, message: &str) -> Scripted {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("script exhausted at {:?}", message))
    }

    /// Prompt messages in the order they were asked.
    pub fn asked(&self) -> Vec<&str> {
        self.asked.iter().map(String::as_str).collect()
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    /// Choices offered by the last select prompt with this message.
    pub fn choices_for(&self, message: &str) -> Option<Vec<String>> {
        self.choices
            .iter()
            .rev()
            .find(|(m, _)| m == message)
            .map(|(_, items)| items.clone())
    }

    /// Every search query with the candidates it produced.
    pub fn searches(&self) -> Vec<(String, Vec<String>)> {
        self.searches.clone()
    }

    pub fn headings(&self) -> Vec<String> {
        self.headings.clone()
    }

    pub fn fields(&self) -> Vec<(String, String)> {
        self.fields.clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        match self.next(message) {
            Scripted::Text(text) => Ok(text),
            Scripted::Default => Ok(default.unwrap_or_default().to_string()),
            other => panic!("{:?} is not an answer to input {:?}", other, message),
        }
    }

    fn multi_select(&mut self, message: &str, items: &[String]) -> Result<Vec<usize>> {
        self.choices.push((message.to_string(), items.to_vec()));
        match self.next(message) {
            Scripted::Picks(picks) => Ok(picks),
            other => panic!("{:?} is not an answer to multi select {:?}", other, message),
        }
    }

    fn select(&mut self, message: &str, items: &[String]) -> Result<usize> {
        self.choices.push((message.to_string(), items.to_vec()));
        match self.next(message) {
            Scripted::Pick(index) => Ok(index),
            other => panic!("{:?} is not an answer to select {:?}", other, message),
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        match self.next(message) {
            Scripted::Yes => Ok(true),
            Scripted::No => Ok(false),
            Scripted::Default => Ok(default),
            other => panic!("{:?} is not an answer to confirm {:?}", other, message),
        }
    }

    fn autocomplete(
        &mut self,
        message: &str,
        source: &dyn Fn(&str) -> Vec<String>,
    ) -> Result<String> {
        match self.next(message) {
            Scripted::Search { query, pick } => {
                let candidates = source(&query);
                self.searches.push((query.clone(), candidates.clone()));
                Ok(candidates
                    .get(pick)
                    .cloned()
                    .unwrap_or_else(|| panic!("no candidate {} for {:?}", pick, query)))
            }
            Scripted::Typed(label) => Ok(label),
            other => panic!("{:?} is not an answer to search {:?}", other, message),
        }
    }

    fn heading(&mut self, text: &str) -> Result<()> {
        self.headings.push(text.to_string());
        Ok(())
    }

    fn field(&mut self, label: &str, value: &str) -> Result<()> {
        self.fields.push((label.to_string(), value.to_string()));
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<()> {
        self.messages.push(text.to_string());
        Ok(())
    }
}

/// In-memory role, branch and user store.
pub struct FakeStore {
    roles: Vec<role::Model>,
    branches: Vec<BranchRecord>,
    fail_reads: bool,
    fail_writes: bool,
    created: Mutex<Vec<NewUser>>,
    create_calls: AtomicUsize,
}

impl FakeStore {
    /// Store holding [`roles`] and [`branch_records`].
    pub fn new() -> Self {
        Self {
            roles: roles(),
            branches: branch_records(),
            fail_reads: false,
            fail_writes: false,
            created: Mutex::new(Vec::new()),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_branches(mut self, branches: Vec<BranchRecord>) -> Self {
        self.branches = branches;
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn roles(&self) -> Vec<role::Model> {
        self.roles.clone()
    }

    /// Users written successfully.
    pub fn created(&self) -> Vec<NewUser> {
        self.created.lock().unwrap().clone()
    }

    /// Number of `create_user` calls, failed ones included.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoleStore for FakeStore {
    async fn list_roles(&self) -> std::result::Result<Vec<role::Model>, DbErr> {
        if self.fail_reads {
            return Err(DbErr::Custom("connection refused".to_string()));
        }
        Ok(self.roles.clone())
    }
}

#[async_trait]
impl BranchStore for FakeStore {
    async fn list_branches(&self) -> std::result::Result<Vec<BranchRecord>, DbErr> {
        if self.fail_reads {
            return Err(DbErr::Custom("connection refused".to_string()));
        }
        Ok(self.branches.clone())
    }
}

#[async_trait]
impl UserStore for FakeStore {
    async fn create_user(&self, new_user: NewUser) -> std::result::Result<user::Model, DbErr> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(DbErr::Custom("FOREIGN KEY constraint failed".to_string()));
        }
        let created = new_user.user.clone();
        self.created.lock().unwrap().push(new_user);
        Ok(created)
    }
}

/// Hands out `U1`, `U2`, ...
#[derive(Default)]
pub struct SequentialIds {
    issued: AtomicUsize,
}

impl SequentialIds {
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

impl IdGenerator for SequentialIds {
    fn new_id(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        format!("U{}", n)
    }
}

pub fn roles() -> Vec<role::Model> {
    vec![
        role::Model {
            role_id: "R1".to_string(),
            role_name: "Instructor".to_string(),
            status: "Active".to_string(),
        },
        role::Model {
            role_id: "R2".to_string(),
            role_name: "Student".to_string(),
            status: "Active".to_string(),
        },
    ]
}

fn branch_record(id: &str, name: &str, classes: &[(&str, &str)]) -> BranchRecord {
    BranchRecord {
        branch: branch::Model {
            branch_id: id.to_string(),
            branch_name: name.to_string(),
        },
        classes: classes
            .iter()
            .map(|(class_id, class_name)| class::Model {
                class_id: class_id.to_string(),
                class_name: class_name.to_string(),
                branch_id: id.to_string(),
            })
            .collect(),
    }
}

/// `B1 "North - Annex"`, `B2 "North"` and `B3 "South"` with their classes.
pub fn branch_records() -> Vec<BranchRecord> {
    vec![
        branch_record("B1", "North - Annex", &[("C1", "Math")]),
        branch_record("B2", "North", &[("C2", "Art")]),
        branch_record("B3", "South", &[("C3", "Science"), ("C4", "Music")]),
    ]
}

pub fn ann_lee_draft() -> UserDraft {
    UserDraft {
        name: "Ann Lee".to_string(),
        phone_no: "0123456789".to_string(),
        email: "ann@example.com".to_string(),
        role_ids: BTreeSet::from(["R1".to_string()]),
        ic_no: "900101-01-1234".to_string(),
        gender: user::Gender::Female,
        dob: "1990-01-01".to_string(),
        address: "1 Jalan Satu".to_string(),
        city: "Kuala Lumpur".to_string(),
        zip_code: "50000".to_string(),
        state: "WP".to_string(),
        country: "Malaysia".to_string(),
        is_teacher: false,
    }
}

pub fn new_user(user_id: &str, full_name: &str, branch_id: Option<&str>) -> user::Model {
    user::Model {
        user_id: user_id.to_string(),
        full_name: full_name.to_string(),
        mobile_number: "0123456789".to_string(),
        email_address: "ann@example.com".to_string(),
        ic_no: "900101-01-1234".to_string(),
        gender: user::Gender::Female,
        dob: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        address1: String::new(),
        city: String::new(),
        zip_code: String::new(),
        state: String::new(),
        status: String::new(),
        vehicle_info: String::new(),
        branch_id: branch_id.map(|b| b.to_string()),
    }
}

/// Create a migrated in-memory SQLite database with foreign keys enforced
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    db.execute_unprepared("PRAGMA foreign_keys = ON;")
        .await
        .expect("Failed to enable foreign keys");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Insert [`roles`] and [`branch_records`] into `db`.
pub async fn seed_catalog(db: &DatabaseConnection) {
    for role in roles() {
        role::ActiveModel {
            role_id: Set(role.role_id),
            role_name: Set(role.role_name),
            status: Set(role.status),
        }
        .insert(db)
        .await
        .expect("Failed to insert role");
    }

    for record in branch_records() {
        branch::ActiveModel {
            branch_id: Set(record.branch.branch_id),
            branch_name: Set(record.branch.branch_name),
        }
        .insert(db)
        .await
        .expect("Failed to insert branch");

        for class in record.classes {
            class::ActiveModel {
                class_id: Set(class.class_id),
                class_name: Set(class.class_name),
                branch_id: Set(class.branch_id),
            }
            .insert(db)
            .await
            .expect("Failed to insert class");
        }
    }
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is taken from RUST_LOG and defaults to WARN. The returned
/// guard removes the subscriber when dropped.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}
