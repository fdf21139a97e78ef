// src/views/render.rs

//! Markup for each panel. Every function here is pure: state in, HTML out.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::{
    models::quiz_result::{Completion, QuizResult},
    quiz::session::{OptionMark, QuestionPhase, QuizSession},
};

use super::panel::Panel;

pub const CATEGORIES: [&str; 5] = [
    "General Knowledge",
    "Science",
    "History",
    "Sports",
    "Entertainment",
];
pub const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

const STYLE: &str = "body{font-family:Arial,sans-serif;background:#f4f6f8;margin:0;padding:20px}\
.panel{max-width:720px;margin:0 auto;background:#fff;padding:20px;border-radius:8px}\
.alert{background:#fdecea;color:#611a15;padding:10px;margin-bottom:10px;border-radius:4px}\
.option{display:block;width:100%;text-align:left;margin:6px 0;padding:8px}\
.correct{background:#c8e6c9}.wrong{background:#ffcdd2}\
.review-item{border-bottom:1px solid #ddd;padding:6px 0}\
#timerBox{font-weight:bold;margin:10px 0}";

/// Wraps one panel in the page shell. Only `panel` is rendered, so only one
/// panel can ever be visible.
pub fn render_page(panel: Panel, body: Markup, alert: Option<&str>, auto_refresh: bool) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                @if auto_refresh {
                    meta http-equiv="refresh" content="1;url=/";
                }
                title { "Quiz - " (panel.title()) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                section.panel id=(panel.id()) data-panel=(panel.id()) style="display:block" {
                    @if let Some(message) = alert {
                        div.alert role="alert" { (message) }
                    }
                    (body)
                }
            }
        }
    }
}

pub fn render_login() -> Markup {
    html! {
        h2 { "Student Login" }
        form id="studentForm" method="post" action="/login" {
            label { "Name " input id="sname" name="name" type="text"; }
            br;
            label { "Roll # " input id="sroll" name="roll" type="text"; }
            br;
            label {
                "Category "
                select id="scategory" name="category" {
                    @for category in CATEGORIES {
                        option value=(category) { (category) }
                    }
                }
            }
            br;
            label {
                "Difficulty "
                select id="sdifficulty" name="difficulty" {
                    @for difficulty in DIFFICULTIES {
                        option value=(difficulty) { (difficulty) }
                    }
                }
            }
            br;
            button type="submit" { "Start Quiz" }
        }
        form method="get" action="/leaderboard" {
            button id="leaderboardBtn" { "View Leaderboard" }
        }
        h3 { "Admin" }
        form id="adminForm" method="post" action="/admin/login" {
            input id="adminUser" name="username" type="text" placeholder="Username";
            input id="adminPass" name="password" type="password" placeholder="Password";
            button type="submit" { "Login" }
        }
    }
}

fn option_class(mark: Option<&OptionMark>) -> &'static str {
    match mark {
        Some(OptionMark::Correct) => "option correct",
        Some(OptionMark::Wrong) => "option wrong",
        _ => "option",
    }
}

pub fn render_quiz(session: &QuizSession) -> Markup {
    let locked = session.inputs_locked();
    html! {
        div id="timerBox" { "Time Left: " (session.time_left()) "s" }
        @if let Some(question) = session.current_question() {
            div id="question" {
                h3 { "Q" (session.index() + 1) ": " (question.text) }
            }
            div id="options" {
                @for (i, option) in question.options.iter().enumerate() {
                    form method="post" action="/quiz/answer" {
                        input type="hidden" name="option" value=(i);
                        button class=(option_class(session.marks().get(i))) disabled[locked] { (option) }
                    }
                }
            }
            form method="post" action="/quiz/next" {
                button id="nextBtn" disabled[!session.next_enabled()] { "Next" }
            }
        } @else if session.phase() == QuestionPhase::Finished {
            // Reached only when saving the result failed; submitting again retries it.
            p { "Quiz finished. Your result has not been saved yet." }
            form method="post" action="/quiz/next" {
                button id="submitBtn" { "Submit" }
            }
        } @else {
            p { "Loading..." }
        }
    }
}

pub fn render_result(completion: &Completion) -> Markup {
    let result = &completion.result;
    let student = &result.student;
    html! {
        div id="resultSummary" {
            h3 { "Result Summary" }
            p { strong { "Name:" } " " (student.name) }
            p { strong { "Roll #:" } " " (student.roll) }
            p { strong { "Category:" } " " (student.category) }
            p { strong { "Difficulty:" } " " (student.difficulty) }
            p { strong { "Score:" } " " (result.score) "%" }
            p { strong { "Date:" } " " (result.date) }
        }
        a id="downloadBtn" href="/certificate.png" download="certificate.png" { "Download Certificate" }
        form method="get" action="/leaderboard" {
            button id="leaderboardBtn" { "View Leaderboard" }
        }
        form method="get" action="/home" {
            button { "New Quiz" }
        }
    }
}

/// `ranked` must already be sorted by score, highest first.
pub fn render_leaderboard(ranked: &[QuizResult], confirm_reset: bool) -> Markup {
    html! {
        h2 { "Leaderboard" }
        div id="leaderboardList" {
            @if ranked.is_empty() {
                p { "No records yet." }
            }
            @for (i, result) in ranked.iter().enumerate() {
                div.review-item {
                    strong { (i + 1) ". " (result.student.name) }
                    " (Roll: " (result.student.roll) ") - Score: " (result.score) "% - "
                    (result.student.category) "/" (result.student.difficulty)
                    br;
                    small { (result.date) }
                }
            }
        }
        @if confirm_reset {
            div.confirm {
                p { "Are you sure you want to reset the leaderboard?" }
                form method="post" action="/leaderboard/reset" {
                    input type="hidden" name="confirm" value="yes";
                    button { "Yes, reset" }
                }
                form method="get" action="/leaderboard" {
                    button { "Cancel" }
                }
            }
        } @else {
            form method="post" action="/leaderboard/reset" {
                button id="resetBtn" { "Reset Leaderboard" }
            }
        }
        form method="get" action="/home" {
            button { "Back" }
        }
    }
}

/// Records in insertion order, unranked.
pub fn render_admin(records: &[QuizResult]) -> Markup {
    html! {
        h2 { "All Records" }
        div id="adminRecords" {
            @if records.is_empty() {
                p { "No records available" }
            }
            @for (i, result) in records.iter().enumerate() {
                div.review-item {
                    (i + 1) ". " (result.student.name) " (Roll: " (result.student.roll) ") - "
                    (result.score) "% - " (result.date)
                }
            }
        }
        form method="get" action="/home" {
            button { "Logout" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{question::Question, student::Student};

    fn result(name: &str, score: u32) -> QuizResult {
        QuizResult {
            student: Student {
                name: name.to_string(),
                roll: "3".to_string(),
                category: "Sports".to_string(),
                difficulty: "hard".to_string(),
                date: "2026-10-18".to_string(),
            },
            score,
            date: "2026-10-18".to_string(),
        }
    }

    fn session() -> QuizSession {
        let question = Question {
            text: "Largest<ocean>".to_string(),
            options: vec!["Atlantic".to_string(), "Pacific".to_string()],
            answer: "Pacific".to_string(),
        };
        let mut s = QuizSession::new(vec![question], 30, false);
        s.enter_question();
        s
    }

    #[test]
    fn page_contains_exactly_one_panel() {
        let html = render_page(Panel::Leaderboard, html! { p { "x" } }, None, false).into_string();
        assert_eq!(html.matches("class=\"panel\"").count(), 1);
        assert!(html.contains("id=\"leaderboard\""));
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn alert_is_escaped() {
        let html = render_page(Panel::Login, html! {}, Some("<b>bad</b>"), false).into_string();
        assert!(html.contains("class=\"alert\""));
        assert!(!html.contains("<b>bad</b>"));
    }

    #[test]
    fn quiz_before_answer_has_enabled_options_and_disabled_next() {
        let html = render_quiz(&session()).into_string();
        assert!(html.contains("Time Left: 30s"));
        assert!(html.contains("Q1: "));
        assert!(!html.contains("<ocean>"));
        assert!(html.contains("<button id=\"nextBtn\" disabled>"));
        assert_eq!(html.matches(" disabled>").count(), 1);
    }

    #[test]
    fn quiz_after_wrong_answer_marks_both_options() {
        let mut s = session();
        s.select(0);
        let html = render_quiz(&s).into_string();
        assert!(html.contains("class=\"option wrong\""));
        assert!(html.contains("class=\"option correct\""));
        assert!(html.contains("<button id=\"nextBtn\">"));
    }

    #[test]
    fn finished_session_offers_submit() {
        let mut s = session();
        s.select(1);
        s.next();
        let html = render_quiz(&s).into_string();
        assert!(html.contains("id=\"submitBtn\""));
        assert!(!html.contains("nextBtn"));
    }

    #[test]
    fn leaderboard_lists_in_given_order() {
        let html = render_leaderboard(&[result("Bea", 95), result("Al", 80), result("Cy", 60)], false).into_string();
        let first = html.find("1. Bea").unwrap();
        let second = html.find("2. Al").unwrap();
        let third = html.find("3. Cy").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn empty_views_show_placeholders() {
        assert!(render_leaderboard(&[], false).into_string().contains("No records yet."));
        assert!(render_admin(&[]).into_string().contains("No records available"));
    }

    #[test]
    fn reset_prompt_appears_only_when_confirming() {
        assert!(!render_leaderboard(&[], false).into_string().contains("Are you sure"));
        assert!(render_leaderboard(&[], true).into_string().contains("Are you sure you want to reset the leaderboard?"));
    }
}
